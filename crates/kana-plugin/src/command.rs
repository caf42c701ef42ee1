use tracing::warn_span;

use kana_core::{parse_hotkey, ConversionType, HotkeySettings, ParsedHotkey};

/// A conversion command as registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionCommand {
    pub id: String,
    pub name: &'static str,
    pub conversion: ConversionType,
    /// Empty when no shortcut is configured; the command stays reachable
    /// from the command palette.
    pub hotkeys: Vec<ParsedHotkey>,
}

/// Build the four conversion commands, parsing each configured hotkey.
pub fn build_commands(hotkeys: &HotkeySettings) -> Vec<ConversionCommand> {
    ConversionType::ALL
        .iter()
        .map(|&conversion| {
            let id = conversion.command_id();
            let _span = warn_span!("register_command", id = %id).entered();
            ConversionCommand {
                hotkeys: parse_hotkey(Some(hotkeys.get(conversion))),
                name: conversion.command_name(),
                conversion,
                id,
            }
        })
        .collect()
}
