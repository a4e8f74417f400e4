use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Field, FormatError, Table, Validate, ValidationError,
    constants::{FRACTION_GROUP_DIGITS, THOUSAND_GROUP},
};

mod syriac;

pub use syriac::CODE as SYRIAC_CODE;

/// The immutable word tables and connective tokens of one language.
/// Created once when the language is registered and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    /// Primary language code, e.g. "syr"
    pub code: String,
    pub tables: WordTables,
    pub tokens: Tokens,
    pub plural: PluralMarks,
}

impl LanguagePack {
    /// The built-in Syriac pack
    pub fn syriac() -> Self {
        syriac::pack()
    }
}

impl Validate for LanguagePack {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::FieldEmpty(Field::Code));
        }
        self.tables.validate()?;
        self.tokens.validate()?;
        Ok(())
    }
}

/// Word tables, indexed by magnitude class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTables {
    /// 0 - 19
    pub ones: Vec<String>,
    /// indexed by the tens digit, 10 - 90
    pub tens: Vec<String>,
    /// indexed by the hundreds digit, 100 - 900
    pub hundreds: Vec<String>,
    /// One name per power of one thousand, starting with an empty name for the units group
    pub large: Vec<String>,
    /// Ordinal forms, keyed by the exact value they name
    pub ordinal_base: BTreeMap<u64, String>,
    /// tenths, hundredths - indexed by precision % 3
    pub fraction: Vec<String>,
    /// thousandths, millionths - indexed by precision / 3
    pub fraction_big: Vec<String>,
}

impl WordTables {
    pub fn one(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.ones, Table::Ones, index)
    }

    pub fn ten(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.tens, Table::Tens, index)
    }

    pub fn hundred(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.hundreds, Table::Hundreds, index)
    }

    pub fn large_unit(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.large, Table::Large, index)
    }

    pub fn ordinal(&self, number: u64) -> Result<&str, FormatError> {
        self.ordinal_base
            .get(&number)
            .map(String::as_str)
            .ok_or(FormatError::WordNotFound {
                table: Table::OrdinalBase,
                index: number,
            })
    }

    pub fn fraction_scale(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.fraction, Table::Fraction, index)
    }

    pub fn fraction_big_scale(&self, index: u64) -> Result<&str, FormatError> {
        lookup(&self.fraction_big, Table::FractionBig, index)
    }

    /// The most decimal places the fraction scales can name
    pub fn max_places(&self) -> u32 {
        let digits = FRACTION_GROUP_DIGITS as usize;
        let places = self.fraction_big.len().saturating_mul(digits).saturating_sub(1);
        u32::try_from(places).unwrap_or(u32::MAX)
    }
}

fn lookup(words: &[String], table: Table, index: u64) -> Result<&str, FormatError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| words.get(i))
        .map(String::as_str)
        .ok_or(FormatError::WordNotFound { table, index })
}

fn check_len(words: &[String], table: Table, expected: usize) -> Result<(), ValidationError> {
    if words.len() < expected {
        return Err(ValidationError::TableTooShort {
            table,
            expected,
            actual: words.len(),
        });
    }
    Ok(())
}

impl Validate for WordTables {
    fn validate(&self) -> Result<(), ValidationError> {
        check_len(&self.ones, Table::Ones, 20)?;
        check_len(&self.tens, Table::Tens, 10)?;
        check_len(&self.hundreds, Table::Hundreds, 10)?;
        check_len(&self.large, Table::Large, THOUSAND_GROUP + 1)?;
        check_len(&self.fraction, Table::Fraction, FRACTION_GROUP_DIGITS as usize)?;
        check_len(&self.fraction_big, Table::FractionBig, 1)?;
        Ok(())
    }
}

/// Fixed connective tokens and idioms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    /// placed between a number and its fraction scale
    pub separator: String,
    /// placed between adjacent word groups, roughly "and"
    pub conjoiner: String,
    pub negative: String,
    pub zero: String,
    pub infinity: String,
    pub half: String,
    /// "<numerator> of <denominator>"
    pub fraction_of: String,
    /// "times ten to the power of", directly followed by the exponent
    pub power_of_ten: String,
    pub quarter: String,
    /// "quarter to <hour>"
    pub quarter_to: String,
    pub midnight: String,
    pub noon: String,
    pub before_noon: String,
    pub after_noon: String,
    pub now: String,
    pub seconds: UnitNames,
    pub minutes: UnitNames,
    pub hours: UnitNames,
    pub days: UnitNames,
}

impl Validate for Tokens {
    fn validate(&self) -> Result<(), ValidationError> {
        // the separator is allowed to be plain whitespace
        if self.separator.is_empty() {
            return Err(ValidationError::FieldEmpty(Field::Separator));
        }
        let required = [
            (&self.conjoiner, Field::Conjoiner),
            (&self.negative, Field::Negative),
            (&self.zero, Field::Zero),
            (&self.infinity, Field::Infinity),
            (&self.half, Field::Half),
            (&self.fraction_of, Field::FractionOf),
            (&self.power_of_ten, Field::PowerOfTen),
            (&self.quarter, Field::Quarter),
            (&self.quarter_to, Field::QuarterTo),
            (&self.midnight, Field::Midnight),
            (&self.noon, Field::Noon),
            (&self.before_noon, Field::BeforeNoon),
            (&self.after_noon, Field::AfterNoon),
            (&self.now, Field::Now),
        ];
        if let Some((_, field)) = required
            .iter()
            .find(|(value, _)| value.trim().is_empty())
        {
            return Err(ValidationError::FieldEmpty(field.clone()));
        }

        let units = [
            (&self.seconds, Field::Seconds),
            (&self.minutes, Field::Minutes),
            (&self.hours, Field::Hours),
            (&self.days, Field::Days),
        ];
        if let Some((_, field)) = units.iter().find(|(unit, _)| !unit.is_set()) {
            return Err(ValidationError::FieldEmpty(field.clone()));
        }
        Ok(())
    }
}

/// Singular phrase ("a second") and plural noun ("seconds") of a time unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitNames {
    pub one: String,
    pub many: String,
}

impl UnitNames {
    fn is_set(&self) -> bool {
        !self.one.trim().is_empty() && !self.many.trim().is_empty()
    }
}

/// How plurality is marked in writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralMarks {
    /// The mark goes above the last occurrence of this consonant, if the word has one
    pub consonant: char,
    /// The combining mark itself
    pub diacritic: char,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_builtin_pack_is_valid() {
        assert_eq!(LanguagePack::syriac().validate(), Ok(()));
    }

    #[test]
    fn test_lookup_outside_of_coverage() {
        let pack = LanguagePack::syriac();
        assert_eq!(
            pack.tables.ten(10),
            Err(FormatError::WordNotFound {
                table: Table::Tens,
                index: 10
            })
        );
        assert_eq!(
            pack.tables.ordinal(21),
            Err(FormatError::WordNotFound {
                table: Table::OrdinalBase,
                index: 21
            })
        );
        assert_eq!(pack.tables.one(3), Ok("ܬܠܬܐ"));
        assert_eq!(pack.tables.ordinal(1), Ok("ܩܕܡܝܐ"));
    }

    #[rstest]
    #[case::short_ones(LanguagePack { tables: WordTables { ones: vec!["".into(); 19], ..LanguagePack::syriac().tables }, ..LanguagePack::syriac() }, ValidationError::TableTooShort { table: Table::Ones, expected: 20, actual: 19 })]
    #[case::no_thousand(LanguagePack { tables: WordTables { large: vec!["".into()], ..LanguagePack::syriac().tables }, ..LanguagePack::syriac() }, ValidationError::TableTooShort { table: Table::Large, expected: 2, actual: 1 })]
    #[case::short_fraction(LanguagePack { tables: WordTables { fraction: vec![], ..LanguagePack::syriac().tables }, ..LanguagePack::syriac() }, ValidationError::TableTooShort { table: Table::Fraction, expected: 3, actual: 0 })]
    #[case::blank_code(LanguagePack { code: " ".into(), ..LanguagePack::syriac() }, ValidationError::FieldEmpty(Field::Code))]
    #[case::empty_separator(LanguagePack { tokens: Tokens { separator: "".into(), ..LanguagePack::syriac().tokens }, ..LanguagePack::syriac() }, ValidationError::FieldEmpty(Field::Separator))]
    #[case::blank_zero(LanguagePack { tokens: Tokens { zero: " ".into(), ..LanguagePack::syriac().tokens }, ..LanguagePack::syriac() }, ValidationError::FieldEmpty(Field::Zero))]
    #[case::blank_hours(LanguagePack { tokens: Tokens { hours: UnitNames { one: "".into(), many: "x".into() }, ..LanguagePack::syriac().tokens }, ..LanguagePack::syriac() }, ValidationError::FieldEmpty(Field::Hours))]
    fn test_validate_pack_errors(#[case] pack: LanguagePack, #[case] expected: ValidationError) {
        assert_eq!(pack.validate(), Err(expected));
    }

    #[test]
    fn test_serialization() {
        let pack = LanguagePack::syriac();
        let json = serde_json::to_string(&pack).unwrap();
        let deserialized: LanguagePack = serde_json::from_str(&json).unwrap();
        assert_eq!(pack, deserialized);
        assert_eq!(deserialized.plural.diacritic, '\u{0308}');
    }
}
