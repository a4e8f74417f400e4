use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::service::{Error, Result};

/// Global settings, plus the overrides of each loaded language
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    global: HashMap<String, Value>,
    languages: HashMap<String, HashMap<String, Value>>,
}

impl Settings {
    pub fn new(global: HashMap<String, Value>) -> Self {
        Self {
            global,
            languages: HashMap::new(),
        }
    }

    /// Returns the most specific value of a setting: the language override if there is one,
    /// the global value otherwise. Fails for a language that isn't loaded.
    pub fn get(&self, setting: &str, lang: Option<&str>) -> Result<Option<&Value>> {
        let Some(code) = lang else {
            return Ok(self.get_global(setting));
        };

        let overrides = self
            .languages
            .get(code)
            .ok_or_else(|| Error::LanguageNotLoaded(code.to_owned()))?;
        Ok(overrides
            .get(setting)
            .or_else(|| self.get_global(setting)))
    }

    pub fn get_global(&self, setting: &str) -> Option<&Value> {
        self.global.get(setting)
    }

    /// Writes a setting globally if no language is given. A language scope can only be
    /// written for a loaded language, and only for settings that language defines already.
    pub fn set(&mut self, setting: &str, value: Value, lang: Option<&str>) -> Result<()> {
        let Some(code) = lang else {
            self.set_global(setting, value);
            return Ok(());
        };

        let overrides = self
            .languages
            .get_mut(code)
            .ok_or_else(|| Error::LanguageNotLoaded(code.to_owned()))?;
        match overrides.get_mut(setting) {
            Some(current) => {
                *current = value;
                Ok(())
            }
            None => Err(Error::SettingNotFound(setting.to_owned())),
        }
    }

    /// Writes a setting globally, adding it if it doesn't exist yet
    pub fn set_global(&mut self, setting: &str, value: Value) {
        self.global.insert(setting.to_owned(), value);
    }

    /// Adds the scope of a language with its default overrides, replacing an existing one
    pub fn add_language(&mut self, code: &str, defaults: Map<String, Value>) {
        self.languages
            .insert(code.to_owned(), defaults.into_iter().collect());
    }

    pub fn remove_language(&mut self, code: &str) {
        self.languages.remove(code);
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }
}
