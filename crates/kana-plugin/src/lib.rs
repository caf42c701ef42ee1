//! Host-side glue for the kana conversion commands.
//!
//! [`KanaPlugin`] loads settings through a [`SettingsStore`], exposes the
//! four conversion commands with their parsed hotkeys, and converts the
//! selection of an [`Editor`] when a command runs.

mod command;
mod editor;
mod plugin;
mod store;

#[cfg(test)]
mod tests;

pub use command::{build_commands, ConversionCommand};
pub use editor::{Editor, TextBuffer};
pub use plugin::KanaPlugin;
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};
