use anyhow::{Result, anyhow};
use std::path::PathBuf;
use std::sync::OnceLock;

pub mod constants;
pub mod service;
pub mod settings;
#[cfg(test)]
mod tests;

pub use service::Error;
pub use service::format_service::{FormatService, FormatServiceApi};
pub use service::language_service::{LanguageService, LanguageServiceApi};
pub use settings::Settings;

#[derive(Debug, Clone)]
pub struct Config {
    /// Language used when a call doesn't name one, e.g. "syr"
    pub default_lang: String,
    /// Load supported languages on their first use, instead of failing with LanguageNotLoaded
    pub load_langs_on_demand: bool,
    /// Directory with one sub directory per language code, holding `pack.json` and
    /// `config.json`
    pub lang_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lang: constants::DEFAULT_LANG.to_owned(),
            load_langs_on_demand: false,
            lang_dir: None,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init(conf: Config) -> Result<()> {
    CONFIG
        .set(conf)
        .map_err(|e| anyhow!("Could not initialize format API: {e:?}"))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("format API is not initialized")
}
