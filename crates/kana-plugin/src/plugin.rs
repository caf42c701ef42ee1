use tracing::{debug_span, info, warn};

use kana_core::{
    BuiltinTransliterator, ConversionDispatcher, ConversionType, PluginSettings, Transliterator,
};

use crate::command::{build_commands, ConversionCommand};
use crate::editor::Editor;
use crate::store::{SettingsStore, StoreError};

/// Selection conversion plugin: owns the settings record and runs
/// conversion commands against an editor.
pub struct KanaPlugin<T = BuiltinTransliterator> {
    settings: PluginSettings,
    dispatcher: ConversionDispatcher<T>,
}

impl KanaPlugin<BuiltinTransliterator> {
    pub fn new(settings: PluginSettings) -> Self {
        Self::with_transliterator(settings, BuiltinTransliterator)
    }

    /// Load persisted settings from `store` and merge them onto the defaults.
    pub async fn load<S: SettingsStore>(store: &S) -> Result<Self, StoreError> {
        Self::load_with(store, BuiltinTransliterator).await
    }
}

impl<T: Transliterator> KanaPlugin<T> {
    pub fn with_transliterator(settings: PluginSettings, transliterator: T) -> Self {
        Self {
            settings,
            dispatcher: ConversionDispatcher::new(transliterator),
        }
    }

    pub async fn load_with<S: SettingsStore>(store: &S, transliterator: T) -> Result<Self, StoreError> {
        let persisted = store.load().await?;
        let settings = PluginSettings::from_persisted(persisted)?;
        info!(hotkeys = ?settings.hotkeys, "settings loaded");
        Ok(Self::with_transliterator(settings, transliterator))
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn dispatcher(&self) -> &ConversionDispatcher<T> {
        &self.dispatcher
    }

    /// The command table, rebuilt from the current hotkeys.
    pub fn commands(&self) -> Vec<ConversionCommand> {
        build_commands(&self.settings.hotkeys)
    }

    /// Replace the editor's selection with its conversion.
    pub fn run<E: Editor + ?Sized>(&self, conversion: ConversionType, editor: &mut E) {
        let _span = debug_span!("run", %conversion).entered();
        let selection = editor.selection();
        let converted = self.dispatcher.convert(&selection, conversion);
        editor.replace_selection(&converted);
    }

    /// Run a command by its host id. Returns false for an unknown id.
    pub fn run_command<E: Editor + ?Sized>(&self, id: &str, editor: &mut E) -> bool {
        match ConversionType::from_command_id(id) {
            Some(conversion) => {
                self.run(conversion, editor);
                true
            }
            None => {
                warn!(id, "unknown command");
                false
            }
        }
    }

    /// Change one hotkey in memory; call [`KanaPlugin::save`] to persist it.
    pub fn set_hotkey(&mut self, conversion: ConversionType, hotkey: impl Into<String>) {
        self.settings.hotkeys.set(conversion, hotkey);
    }

    pub async fn save<S: SettingsStore>(&self, store: &S) -> Result<(), StoreError> {
        store.save(&self.settings).await
    }
}
