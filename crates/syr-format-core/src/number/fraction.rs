use crate::{
    FormatError, LanguagePack,
    constants::{FRACTION_GROUP_DIGITS, MAX_PLACES, ROUNDING_TOLERANCE},
    number::whole::whole_number,
};

/// A non-negative number, split into its whole part and the digits after the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    pub whole: u64,
    /// The digits after the decimal point, without trailing zeros
    pub fractional: u64,
    /// How many digits `fractional` spans after the decimal point
    pub precision: u32,
}

impl Numeral {
    /// Breaks a non-negative number into its parts, keeping at most `places` digits.
    ///
    /// Digits beyond `places` are floored, unless the scaled value is within
    /// ROUNDING_TOLERANCE of an integer, so 1.239999999 becomes 1.24 and not 1.23.
    pub fn new(value: f64, places: u32) -> Self {
        let places = places.min(MAX_PLACES);
        let scale = 10u64.pow(places);

        let mut whole = value.trunc() as u64;
        let post = (value - whole as f64).abs() * scale as f64;
        let mut fractional = if (post.round() - post).abs() < ROUNDING_TOLERANCE {
            post.round() as u64
        } else {
            post.floor() as u64
        };
        // 0.99999 with two places rounds up into the next whole number
        if fractional >= scale {
            whole = whole.saturating_add(1);
            fractional = 0;
        }

        let mut precision = places;
        while fractional != 0 && fractional % 10 == 0 {
            fractional /= 10;
            precision -= 1;
        }

        Self {
            whole,
            fractional,
            precision,
        }
    }

    pub fn is_half(&self) -> bool {
        self.precision > 0 && self.fractional.saturating_mul(2) == 10u64.pow(self.precision)
    }
}

/// Renders the part after the decimal point, followed by its scale, e.g. "twenty five
/// hundredths". The scale is picked like large units are, in steps of three digits.
pub fn fractional_number(pack: &LanguagePack, numeral: &Numeral) -> Result<String, FormatError> {
    if numeral.is_half() {
        return Ok(pack.tokens.half.clone());
    }

    let words = whole_number(pack, numeral.fractional, false)?;
    let quotient = numeral.precision / FRACTION_GROUP_DIGITS;
    let remainder = numeral.precision % FRACTION_GROUP_DIGITS;

    Ok(format!(
        "{}{}{}{}",
        words,
        pack.tokens.separator,
        pack.tables.fraction_scale(remainder as u64)?,
        pack.tables.fraction_big_scale(quotient as u64)?
    ))
}
