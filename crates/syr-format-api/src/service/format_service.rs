use super::Result;
use super::language_service::LanguageServiceApi;
use chrono::NaiveTime;
use std::sync::Arc;
use syr_format_core::{
    Formatter, LanguagePack, NumberOptions, ServiceTraitBounds, TimeOptions, plural,
    util::date::DateTimeUtc,
};

/// Renders numbers, times and plural forms in a loaded language. Every call takes an optional
/// language code, `None` means the default language.
pub trait FormatServiceApi: ServiceTraitBounds {
    /// Spoken form of a number, e.g. "ܬܠܬܐ ܘܬܪܝܢ ܥܣܪܐ" for 3.2 with `places` 1
    fn pronounce_number(
        &self,
        number: f64,
        options: &NumberOptions,
        lang: Option<&str>,
    ) -> Result<String>;

    /// A number as a mixed fraction, spoken or displayed. An empty denominator set means
    /// 1..=20.
    fn nice_number(
        &self,
        number: f64,
        speech: bool,
        denominators: &[u64],
        lang: Option<&str>,
    ) -> Result<String>;

    fn nice_time(
        &self,
        time: &NaiveTime,
        options: &TimeOptions,
        lang: Option<&str>,
    ) -> Result<String>;

    /// Rough distance from `relative_to` (default: now) to `when`
    fn nice_relative_time(
        &self,
        when: &DateTimeUtc,
        relative_to: Option<DateTimeUtc>,
        lang: Option<&str>,
    ) -> Result<String>;

    fn get_plural_form(&self, word: &str, amount: f64, lang: Option<&str>) -> Result<String>;

    fn pluralize(&self, word: &str, lang: Option<&str>) -> Result<String>;

    /// Strips plural marks, which doesn't depend on the language
    fn singularize(&self, word: &str) -> String;
}

#[derive(Clone)]
pub struct FormatService {
    language_service: Arc<dyn LanguageServiceApi>,
}

impl FormatService {
    pub fn new(language_service: Arc<dyn LanguageServiceApi>) -> Self {
        Self { language_service }
    }

    fn pack(&self, lang: Option<&str>) -> Result<Arc<LanguagePack>> {
        match lang {
            Some(code) => self.language_service.pack(code),
            None => self.language_service.default_pack(),
        }
    }
}

impl ServiceTraitBounds for FormatService {}

impl FormatServiceApi for FormatService {
    fn pronounce_number(
        &self,
        number: f64,
        options: &NumberOptions,
        lang: Option<&str>,
    ) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).pronounce_number(number, options)?)
    }

    fn nice_number(
        &self,
        number: f64,
        speech: bool,
        denominators: &[u64],
        lang: Option<&str>,
    ) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).nice_number(number, speech, denominators)?)
    }

    fn nice_time(
        &self,
        time: &NaiveTime,
        options: &TimeOptions,
        lang: Option<&str>,
    ) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).nice_time(time, options)?)
    }

    fn nice_relative_time(
        &self,
        when: &DateTimeUtc,
        relative_to: Option<DateTimeUtc>,
        lang: Option<&str>,
    ) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).nice_relative_time(when, relative_to.as_ref()))
    }

    fn get_plural_form(&self, word: &str, amount: f64, lang: Option<&str>) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).get_plural_form(word, amount))
    }

    fn pluralize(&self, word: &str, lang: Option<&str>) -> Result<String> {
        let pack = self.pack(lang)?;
        Ok(Formatter::new(&pack).pluralize(word))
    }

    fn singularize(&self, word: &str) -> String {
        plural::singularize(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        service::language_service::{LanguageService, MockLanguageServiceApi},
        tests::tests::test_config,
    };
    use chrono::{TimeDelta, TimeZone, Utc};
    use rstest::rstest;
    use syr_format_core::FormatError;

    fn get_service(language_service: MockLanguageServiceApi) -> FormatService {
        FormatService::new(Arc::new(language_service))
    }

    fn syriac_registry() -> MockLanguageServiceApi {
        let mut language_service = MockLanguageServiceApi::new();
        let pack = Arc::new(LanguagePack::syriac());
        let default_pack = pack.clone();
        language_service
            .expect_pack()
            .returning(move |_| Ok(pack.clone()));
        language_service
            .expect_default_pack()
            .returning(move || Ok(default_pack.clone()));
        language_service
    }

    #[rstest]
    #[case::whole(21.0, NumberOptions::default(), "ܥܣܪܝܢ ܘܚܕ")]
    #[case::ordinal(4.0, NumberOptions::ordinals(), "ܪܒܝܥܝܐ")]
    #[case::negative(-3.0, NumberOptions::default(), "ܣܚܘܦܐ ܬܠܬܐ")]
    #[case::half(0.5, NumberOptions::default(), "ܦܠܓܐ")]
    fn pronounce_number_baseline(
        #[case] number: f64,
        #[case] options: NumberOptions,
        #[case] expected: &str,
    ) {
        let service = get_service(syriac_registry());
        assert_eq!(
            service.pronounce_number(number, &options, None).unwrap(),
            expected
        );
    }

    #[test]
    fn pronounce_number_propagates_format_error() {
        let service = get_service(syriac_registry());
        let result = service.pronounce_number(f64::NAN, &NumberOptions::default(), Some("syr"));
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::NotANumber))
        ));
    }

    #[test]
    fn unsupported_language_is_propagated() {
        let mut language_service = MockLanguageServiceApi::new();
        language_service
            .expect_pack()
            .returning(|code| Err(Error::UnsupportedLanguage(code.to_string())));
        let service = get_service(language_service);

        let result = service.nice_number(4.5, true, &[], Some("en"));
        assert!(matches!(result, Err(Error::UnsupportedLanguage(code)) if code == "en"));
        assert!(service.pluralize("ܟܣܐ", Some("en")).is_err());
    }

    #[test]
    fn language_code_is_passed_to_registry() {
        let mut language_service = MockLanguageServiceApi::new();
        let pack = Arc::new(LanguagePack::syriac());
        language_service
            .expect_pack()
            .withf(|code| code == "syr-SY")
            .times(1)
            .returning(move |_| Ok(pack.clone()));
        let service = get_service(language_service);
        assert_eq!(
            service.nice_number(4.5, false, &[], Some("syr-SY")).unwrap(),
            "4 1/2"
        );
    }

    #[test]
    fn nice_number_speech() {
        let service = get_service(syriac_registry());
        assert_eq!(service.nice_number(4.5, true, &[], None).unwrap(), "4 ܘܦܠܓܐ");
    }

    #[test]
    fn nice_time_baseline() {
        let service = get_service(syriac_registry());
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(
            service
                .nice_time(&time, &TimeOptions::default(), None)
                .unwrap(),
            "ܛܗܪܐ"
        );
    }

    #[test]
    fn nice_relative_time_baseline() {
        let service = get_service(syriac_registry());
        let relative_to = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let when = relative_to + TimeDelta::days(7);
        assert_eq!(
            service
                .nice_relative_time(&when, Some(relative_to), None)
                .unwrap(),
            "7 ܝܘܡܢ̈ܐ"
        );
    }

    #[test]
    fn plural_forms() {
        let service = get_service(syriac_registry());
        assert_eq!(service.get_plural_form("ܟܣܐ", 2.0, None).unwrap(), "ܟ̈ܣܐ");
        assert_eq!(service.get_plural_form("ܟ̈ܣܐ", 1.0, None).unwrap(), "ܟܣܐ");
        assert_eq!(service.pluralize("ܪܦܦܐ", None).unwrap(), "ܪ̈ܦܦܐ");
        assert_eq!(service.singularize("ܪ̈ܦܦܐ"), "ܪܦܦܐ");
    }

    #[test]
    fn works_with_real_registry() {
        let registry = LanguageService::new(test_config(None)).unwrap();
        let service = FormatService::new(Arc::new(registry));
        assert_eq!(
            service
                .pronounce_number(1000.0, &NumberOptions::default(), Some("SYR"))
                .unwrap(),
            "ܐܠܦܐ"
        );
    }
}
