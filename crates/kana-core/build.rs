fn main() {
    // Validate embedded defaults at compile time.
    validate_json(
        "src/default_settings.json",
        include_str!("src/default_settings.json"),
    );
    validate_toml(
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    );
}

fn validate_json(path: &str, content: &str) {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => panic!("{path} contains invalid JSON"),
    };
    for key in ["kana", "hiragana", "katakana", "romaji"] {
        if !value["hotkeys"][key].is_string() {
            panic!("{path} is missing string hotkeys.{key}");
        }
    }
}

fn validate_toml(path: &str, content: &str) {
    if toml::from_str::<toml::Table>(content).is_err() {
        panic!("{path} contains invalid TOML");
    }
}
