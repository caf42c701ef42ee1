use std::fs;
use std::path::Path;

use kana_core::romaji::{default_toml, parse_romaji_toml, RomajiTrie};
use kana_core::settings::{default_json, parse_settings_json};
use kana_core::ConversionType;
use kana_plugin::{JsonFileStore, KanaPlugin};

pub fn default_settings_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    format!("{home}/.config/kana/settings.json")
}

pub fn romaji_export() {
    print!("{}", default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_romaji_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

/// Install a custom romaji table for this run. Must precede any conversion.
pub fn romaji_install(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(RomajiTrie::init_custom(content), "Error in {file}: {}");
}

/// Print the settings in `path` merged onto the defaults.
pub async fn settings_show(path: &Path) {
    let store = JsonFileStore::new(path);
    let plugin = die!(KanaPlugin::load(&store).await, "Error loading settings: {}");
    let json = die!(plugin.settings().to_json_pretty(), "Error: {}");
    println!("{json}");
}

pub fn settings_path(path: &Path) {
    let state = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{state}", path.display());
}

pub fn settings_export() {
    print!("{}", default_json());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_json(&content), "Error: {}");
    for conversion in ConversionType::ALL {
        let hotkey = s.hotkeys.get(conversion);
        let shown = if hotkey.is_empty() { "(none)" } else { hotkey };
        println!("{conversion:<8} = {shown}");
    }
    println!("OK");
}

pub async fn settings_set(path: &Path, conversion: &str, hotkey: &str) {
    let conversion = die!(conversion.parse::<ConversionType>(), "Error: {}");
    let store = JsonFileStore::new(path);
    let mut plugin = die!(KanaPlugin::load(&store).await, "Error loading settings: {}");
    plugin.set_hotkey(conversion, hotkey);
    die!(plugin.save(&store).await, "Error saving settings: {}");
    println!("{} = {hotkey}", conversion.command_id());
}
