use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, convert_ops};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kanatool", about = "Romaji and kana selection conversion tool")]
struct Cli {
    /// Custom romaji TOML table to use instead of the built-in one
    #[arg(long, global = true)]
    romaji: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (reads stdin when no text is given)
    Convert {
        /// Target: kana, hiragana, katakana or romaji
        to: String,
        /// Text to convert
        text: Option<String>,
    },
    /// Show how a hotkey string is parsed
    Hotkey {
        /// Shortcut such as Ctrl+Shift+K
        combo: String,
    },
    /// List the conversion commands and their hotkeys
    Commands {
        /// Settings file (default: ~/.config/kana/settings.json)
        #[arg(long)]
        file: Option<String>,
    },
    /// Inspect or edit the settings file
    Settings {
        /// Settings file (default: ~/.config/kana/settings.json)
        #[arg(long)]
        file: Option<String>,
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Export default romaji mappings as TOML
    RomajiExport,
    /// Validate a custom romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings (defaults merged in)
    Show,
    /// Print the settings file location
    Path,
    /// Export default settings as JSON
    Export,
    /// Validate a settings JSON file
    Validate {
        /// Path to the JSON file
        file: String,
    },
    /// Change one hotkey and save
    Set {
        /// Conversion: kana, hiragana, katakana or romaji
        conversion: String,
        /// Shortcut such as Alt+H; an empty string clears it
        combo: String,
    },
}

fn settings_file(file: Option<String>) -> PathBuf {
    PathBuf::from(file.unwrap_or_else(config_ops::default_settings_path))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Some(file) = &cli.romaji {
        config_ops::romaji_install(file);
    }

    match cli.command {
        Command::Convert { to, text } => convert_ops::convert_cmd(&to, text.as_deref()),
        Command::Hotkey { combo } => convert_ops::hotkey_cmd(&combo),
        Command::Commands { file } => convert_ops::commands_cmd(&settings_file(file)).await,
        Command::Settings { file, action } => {
            let path = settings_file(file);
            match action {
                SettingsAction::Show => config_ops::settings_show(&path).await,
                SettingsAction::Path => config_ops::settings_path(&path),
                SettingsAction::Export => config_ops::settings_export(),
                SettingsAction::Validate { file } => config_ops::settings_validate(&file),
                SettingsAction::Set { conversion, combo } => {
                    config_ops::settings_set(&path, &conversion, &combo).await
                }
            }
        }
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
    }
}
