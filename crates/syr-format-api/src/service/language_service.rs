use super::{Error, Result};
use crate::{
    Config,
    constants::{CONFIG_FILE_NAME, PACK_FILE_NAME, SUBTAG_SEPARATORS},
    settings::Settings,
};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use syr_format_core::{LanguagePack, SYRIAC_CODE, ServiceTraitBounds, Validate};

#[cfg(test)]
use mockall::automock;

#[cfg(test)]
impl ServiceTraitBounds for MockLanguageServiceApi {}

/// Reduces a language code to its lower case primary subtag, e.g. "syr-SY" becomes "syr"
pub fn primary_code(code: &str) -> String {
    code.trim()
        .split(SUBTAG_SEPARATORS)
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Keeps track of the loaded languages, the default language and their settings
#[cfg_attr(test, automock)]
pub trait LanguageServiceApi: ServiceTraitBounds {
    /// Loads a supported language and returns its primary code. Loading a language twice is
    /// a no-op.
    fn load_language(&self, code: &str) -> Result<String>;

    /// Unloads a language. If it was the default language, the first remaining language
    /// becomes the default.
    fn unload_language(&self, code: &str) -> Result<()>;

    /// The primary codes of all loaded languages, sorted
    fn active_languages(&self) -> Vec<String>;

    fn default_language(&self) -> String;

    /// Makes a supported language the default, loading it if necessary
    fn set_default_language(&self, code: &str) -> Result<()>;

    /// Resolves a language code to its pack
    fn pack(&self, code: &str) -> Result<Arc<LanguagePack>>;

    fn default_pack(&self) -> Result<Arc<LanguagePack>>;

    /// Returns the language override of a setting, or its global value. Fails for a language
    /// that isn't loaded.
    fn get_setting(&self, setting: &str, code: &str) -> Result<Option<Value>>;

    fn get_global_setting(&self, setting: &str) -> Option<Value>;

    /// Overwrites a setting defined in the scope of a loaded language
    fn set_setting(&self, setting: &str, value: Value, code: &str) -> Result<()>;

    fn set_global_setting(&self, setting: &str, value: Value);
}

#[derive(Debug)]
struct Registry {
    packs: HashMap<String, Arc<LanguagePack>>,
    default_lang: String,
    settings: Settings,
}

/// The language registry. The built-in Syriac pack is always supported, other languages are
/// supported if `<lang_dir>/<code>/pack.json` exists.
#[derive(Debug)]
pub struct LanguageService {
    config: Config,
    registry: RwLock<Registry>,
}

impl LanguageService {
    /// Creates the registry and loads the configured default language
    pub fn new(config: Config) -> Result<Self> {
        let default_lang = primary_code(&config.default_lang);
        let service = Self {
            config,
            registry: RwLock::new(Registry {
                packs: HashMap::new(),
                default_lang: default_lang.clone(),
                settings: Settings::default(),
            }),
        };
        service.load_language(&default_lang)?;
        Ok(service)
    }

    /// Creates the registry from the config set with [crate::init]
    pub fn from_global_config() -> Result<Self> {
        Self::new(crate::get_config().clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        // packs are never mutated in place, a poisoned lock still holds consistent data
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lang_file(&self, code: &str, file_name: &str) -> Option<PathBuf> {
        self.config
            .lang_dir
            .as_ref()
            .map(|dir| dir.join(code).join(file_name))
    }

    fn is_supported(&self, code: &str) -> bool {
        code == SYRIAC_CODE
            || self
                .lang_file(code, PACK_FILE_NAME)
                .is_some_and(|path| path.is_file())
    }

    fn read_pack(&self, code: &str) -> Result<LanguagePack> {
        let pack = match self.lang_file(code, PACK_FILE_NAME) {
            Some(path) if path.is_file() => {
                debug!("Reading language pack from {}", path.display());
                let mut pack: LanguagePack = serde_json::from_str(&fs::read_to_string(&path)?)?;
                pack.code = code.to_owned();
                pack
            }
            _ if code == SYRIAC_CODE => LanguagePack::syriac(),
            _ => return Err(Error::UnsupportedLanguage(code.to_owned())),
        };
        pack.validate()?;
        Ok(pack)
    }

    fn read_default_settings(&self, code: &str) -> Result<Map<String, Value>> {
        match self.lang_file(code, CONFIG_FILE_NAME) {
            Some(path) if path.is_file() => {
                debug!("Reading language settings from {}", path.display());
                Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
            }
            _ => Ok(Map::new()),
        }
    }
}

impl ServiceTraitBounds for LanguageService {}

impl LanguageServiceApi for LanguageService {
    fn load_language(&self, code: &str) -> Result<String> {
        let code = primary_code(code);
        if self.read().packs.contains_key(&code) {
            return Ok(code);
        }
        if !self.is_supported(&code) {
            warn!("Can't load unsupported language {code}");
            return Err(Error::UnsupportedLanguage(code));
        }

        let pack = self.read_pack(&code)?;
        let defaults = self.read_default_settings(&code)?;

        let mut registry = self.write();
        registry.settings.add_language(&code, defaults);
        registry.packs.insert(code.clone(), Arc::new(pack));
        info!("Loaded language {code}");
        Ok(code)
    }

    fn unload_language(&self, code: &str) -> Result<()> {
        let code = primary_code(code);
        let mut registry = self.write();
        if registry.packs.remove(&code).is_none() {
            return Err(Error::LanguageNotLoaded(code));
        }
        registry.settings.remove_language(&code);
        info!("Unloaded language {code}");

        if registry.default_lang == code {
            let mut remaining: Vec<&String> = registry.packs.keys().collect();
            remaining.sort();
            if let Some(next) = remaining.first().map(|c| c.to_string()) {
                info!("Default language changed from {code} to {next}");
                registry.default_lang = next;
            } else {
                warn!("Unloaded the default language {code}, no language is left");
            }
        }
        Ok(())
    }

    fn active_languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.read().packs.keys().cloned().collect();
        codes.sort();
        codes
    }

    fn default_language(&self) -> String {
        self.read().default_lang.clone()
    }

    fn set_default_language(&self, code: &str) -> Result<()> {
        let code = self.load_language(code)?;
        let mut registry = self.write();
        if registry.default_lang != code {
            info!(
                "Default language changed from {} to {code}",
                registry.default_lang
            );
            registry.default_lang = code;
        }
        Ok(())
    }

    fn pack(&self, code: &str) -> Result<Arc<LanguagePack>> {
        let code = primary_code(code);
        debug!("Resolving language pack for {code}");
        if let Some(pack) = self.read().packs.get(&code) {
            return Ok(pack.clone());
        }

        if !self.is_supported(&code) {
            warn!("Unsupported language {code}");
            return Err(Error::UnsupportedLanguage(code));
        }
        if !self.config.load_langs_on_demand {
            return Err(Error::LanguageNotLoaded(code));
        }

        let code = self.load_language(&code)?;
        self.read()
            .packs
            .get(&code)
            .cloned()
            .ok_or(Error::LanguageNotLoaded(code))
    }

    fn default_pack(&self) -> Result<Arc<LanguagePack>> {
        self.pack(&self.default_language())
    }

    fn get_setting(&self, setting: &str, code: &str) -> Result<Option<Value>> {
        let code = primary_code(code);
        Ok(self.read().settings.get(setting, Some(&code))?.cloned())
    }

    fn get_global_setting(&self, setting: &str) -> Option<Value> {
        self.read().settings.get_global(setting).cloned()
    }

    fn set_setting(&self, setting: &str, value: Value, code: &str) -> Result<()> {
        let code = primary_code(code);
        self.write().settings.set(setting, value, Some(&code))
    }

    fn set_global_setting(&self, setting: &str, value: Value) {
        self.write().settings.set_global(setting, value);
    }
}
