pub(super) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded default romaji table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
