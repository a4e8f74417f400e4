use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use std::fmt;
use thiserror::Error;

pub mod constants;
pub mod number;
pub mod pack;
pub mod plural;
pub mod relative;
#[cfg(test)]
mod tests;
pub mod time;
pub mod util;

pub use number::NumberOptions;
pub use number::fraction::Numeral;
pub use number::mixed::MixedFraction;
pub use pack::{LanguagePack, PluralMarks, SYRIAC_CODE, Tokens, UnitNames, WordTables};
pub use time::TimeOptions;

/// This is needed, so services can be shared between threads, while packs stay immutable
/// after registration.
pub trait ServiceTraitBounds: Send + Sync {}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// The token fields of a language pack
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Field {
    Code,
    Separator,
    Conjoiner,
    Negative,
    Zero,
    Infinity,
    Half,
    FractionOf,
    PowerOfTen,
    Quarter,
    QuarterTo,
    Midnight,
    Noon,
    BeforeNoon,
    AfterNoon,
    Now,
    Seconds,
    Minutes,
    Hours,
    Days,
}

/// The word tables of a language pack
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Table {
    Ones,
    Tens,
    Hundreds,
    Large,
    OrdinalBase,
    Fraction,
    FractionBig,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Ones => "ones",
            Table::Tens => "tens",
            Table::Hundreds => "hundreds",
            Table::Large => "large",
            Table::OrdinalBase => "ordinal base",
            Table::Fraction => "fraction",
            Table::FractionBig => "big fraction",
        };
        f.write_str(name)
    }
}

/// Generic validation error type
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// error returned if a token of a language pack is empty
    #[error("Field {0:?} can't be empty")]
    FieldEmpty(Field),

    /// error returned if a word table doesn't cover the indices the renderer needs
    #[error("the {table} table needs {expected} entries, but has {actual}")]
    TableTooShort {
        table: Table,
        expected: usize,
        actual: usize,
    },

    /// error returned if a zero denominator is handed to the fraction approximation
    #[error("denominators must not be zero")]
    InvalidDenominator,
}

/// Errors returned while rendering a phrase
#[derive(Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    /// error returned if a magnitude is looked up outside of a table's coverage
    #[error("no word for {index} in the {table} table")]
    WordNotFound { table: Table, index: u64 },

    /// error returned for NaN input, which has no spoken form
    #[error("not a number")]
    NotANumber,

    /// errors that stem from invalid input or pack data
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),
}

/// Renders numbers, times and durations with the word tables of a single language pack.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    pack: &'a LanguagePack,
}

impl<'a> Formatter<'a> {
    pub fn new(pack: &'a LanguagePack) -> Self {
        Self { pack }
    }

    pub fn pack(&self) -> &'a LanguagePack {
        self.pack
    }

    /// Convert a number to its spoken equivalent, e.g. 5.2 becomes "five point two"
    pub fn pronounce_number(
        &self,
        number: f64,
        options: &NumberOptions,
    ) -> Result<String, FormatError> {
        number::pronounce_number(self.pack, number, options)
    }

    /// Format a number as a mixed fraction, e.g. 4.5 becomes "4 and a half" for speech and
    /// "4 1/2" for display. An empty denominator set means the default 1..=20.
    pub fn nice_number(
        &self,
        number: f64,
        speech: bool,
        denominators: &[u64],
    ) -> Result<String, FormatError> {
        number::mixed::nice_number(self.pack, number, speech, denominators)
    }

    pub fn nice_time<T: Timelike>(
        &self,
        time: &T,
        options: &TimeOptions,
    ) -> Result<String, FormatError> {
        time::nice_time(self.pack, time, options)
    }

    /// Roughly describe the time between `relative_to` (default: now) and `when`
    pub fn nice_relative_time<Tz: TimeZone>(
        &self,
        when: &DateTime<Tz>,
        relative_to: Option<&DateTime<Tz>>,
    ) -> String {
        relative::nice_relative_time(self.pack, when, relative_to)
    }

    pub fn nice_duration(&self, delta: TimeDelta) -> String {
        relative::nice_duration(self.pack, delta)
    }

    pub fn singularize(&self, word: &str) -> String {
        plural::singularize(word)
    }

    pub fn pluralize(&self, word: &str) -> String {
        plural::pluralize(word, &self.pack.plural)
    }

    pub fn get_plural_form(&self, word: &str, amount: f64) -> String {
        plural::get_plural_form(self.pack, word, amount)
    }
}
