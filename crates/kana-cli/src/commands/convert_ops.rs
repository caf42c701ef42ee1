use std::io;
use std::path::Path;

use kana_core::{convert, parse_hotkey, ConversionType};
use kana_plugin::{JsonFileStore, KanaPlugin};

/// Convert `text`, or all of stdin when `text` is `None`.
pub fn convert_cmd(to: &str, text: Option<&str>) {
    let conversion = die!(to.parse::<ConversionType>(), "Error: {}");
    let input = match text {
        Some(text) => text.to_string(),
        None => {
            let raw = die!(io::read_to_string(io::stdin()), "Error reading stdin: {}");
            raw.trim_end_matches(['\n', '\r']).to_string()
        }
    };
    println!("{}", convert(&input, conversion));
}

pub fn hotkey_cmd(combo: &str) {
    let parsed = parse_hotkey(Some(combo));
    let Some(hotkey) = parsed.first() else {
        println!("(no binding would be registered)");
        return;
    };
    let modifiers = if hotkey.modifiers.is_empty() {
        "(none)".to_string()
    } else {
        hotkey.modifiers.join(", ")
    };
    println!("modifiers: {modifiers}");
    println!("key:       {}", hotkey.key);
}

/// Print the command table built from the settings in `path`.
pub async fn commands_cmd(path: &Path) {
    let store = JsonFileStore::new(path);
    let plugin = die!(KanaPlugin::load(&store).await, "Error loading settings: {}");
    for command in plugin.commands() {
        let hotkey = match command.hotkeys.first() {
            Some(hotkey) => hotkey.to_string(),
            None => "-".to_string(),
        };
        println!("{:<18} {:<14} {}", command.id, hotkey, command.name);
    }
}
