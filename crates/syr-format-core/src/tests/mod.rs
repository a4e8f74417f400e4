#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use std::sync::OnceLock;

    use crate::LanguagePack;

    static SYRIAC: OnceLock<LanguagePack> = OnceLock::new();

    pub fn syr() -> &'static LanguagePack {
        SYRIAC.get_or_init(LanguagePack::syriac)
    }
}
