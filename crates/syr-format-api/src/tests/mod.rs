#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::{CONFIG, Config, constants::CONFIG_FILE_NAME, constants::PACK_FILE_NAME};
    use serde_json::Value;
    use std::{
        fs,
        path::{Path, PathBuf},
    };
    use syr_format_core::LanguagePack;

    pub fn test_config(lang_dir: Option<PathBuf>) -> Config {
        Config {
            default_lang: "syr".to_string(),
            load_langs_on_demand: false,
            lang_dir,
        }
    }

    pub fn init_test_cfg() {
        match CONFIG.get() {
            Some(_) => (),
            None => {
                // another test may have won the race
                let _ = crate::init(test_config(None));
            }
        }
    }

    /// A language directory below the temp dir, removed again on drop
    pub struct TestLangDir {
        path: PathBuf,
    }

    impl TestLangDir {
        pub fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "syr-format-api-{}-{}",
                name,
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&path);
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub fn path(&self) -> PathBuf {
            self.path.clone()
        }

        fn lang_path(&self, code: &str) -> PathBuf {
            let path = self.path.join(code);
            fs::create_dir_all(&path).unwrap();
            path
        }

        /// Adds a copy of the Syriac pack under another code, with optional default settings
        pub fn add_language(&self, code: &str, settings: Option<Value>) {
            let mut pack = LanguagePack::syriac();
            pack.code = code.to_string();
            self.add_raw_pack(code, &serde_json::to_string_pretty(&pack).unwrap());
            if let Some(settings) = settings {
                write(
                    &self.lang_path(code).join(CONFIG_FILE_NAME),
                    &settings.to_string(),
                );
            }
        }

        pub fn add_raw_pack(&self, code: &str, content: &str) {
            write(&self.lang_path(code).join(PACK_FILE_NAME), content);
        }
    }

    impl Drop for TestLangDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_init_and_get_config() {
        init_test_cfg();
        assert_eq!(crate::get_config().default_lang, "syr");
        assert!(crate::init(test_config(None)).is_err());
    }
}
