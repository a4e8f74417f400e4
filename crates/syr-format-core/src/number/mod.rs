use crate::{FormatError, LanguagePack, constants::DEFAULT_PLACES};

pub mod fraction;
pub mod mixed;
pub mod whole;

use fraction::{Numeral, fractional_number};
use whole::whole_number;

/// How a number is pronounced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberOptions {
    /// Maximum decimal places to speak. Capped by what the pack's fraction scales can name,
    /// 11 for the built-in pack.
    pub places: u32,
    /// Pronounce in scientific notation
    pub scientific: bool,
    /// Pronounce in ordinal form, "first" instead of "one"
    pub ordinals: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            places: DEFAULT_PLACES,
            scientific: false,
            ordinals: false,
        }
    }
}

impl NumberOptions {
    pub fn ordinals() -> Self {
        Self {
            ordinals: true,
            ..Default::default()
        }
    }

    pub fn scientific() -> Self {
        Self {
            scientific: true,
            ..Default::default()
        }
    }
}

/// Converts a number to its spoken form
pub fn pronounce_number(
    pack: &LanguagePack,
    number: f64,
    options: &NumberOptions,
) -> Result<String, FormatError> {
    let tokens = &pack.tokens;
    if number.is_nan() {
        return Err(FormatError::NotANumber);
    }
    if number == f64::INFINITY {
        return Ok(tokens.infinity.clone());
    }
    if number == f64::NEG_INFINITY {
        return Ok(format!("{} {}", tokens.negative, tokens.infinity));
    }

    if options.scientific {
        if number == 0.0 {
            return Ok(tokens.zero.clone());
        }
        let (mantissa, exponent) = scientific_parts(number)?;
        if exponent != 0 {
            let plain = NumberOptions {
                places: options.places,
                ..Default::default()
            };
            let mut result = String::new();
            if mantissa < 0.0 {
                result.push_str(&tokens.negative);
                result.push(' ');
            }
            result.push_str(&pronounce_number(pack, mantissa.abs(), &plain)?);
            result.push(' ');
            result.push_str(&tokens.power_of_ten);
            if exponent < 0 {
                result.push_str(&tokens.negative);
                result.push(' ');
            }
            result.push_str(&pronounce_number(
                pack,
                f64::from(exponent.unsigned_abs()),
                &plain,
            )?);
            return Ok(result);
        }
    }

    numbers_string(pack, number, options.places, options.ordinals)
}

/// Splits a number into the mantissa and exponent of its scientific notation, with the
/// mantissa rounded to six decimals
fn scientific_parts(number: f64) -> Result<(f64, i32), FormatError> {
    let formatted = format!("{number:.6E}");
    let (mantissa, exponent) = formatted
        .split_once('E')
        .ok_or(FormatError::NotANumber)?;
    let mantissa = mantissa
        .parse::<f64>()
        .map_err(|_| FormatError::NotANumber)?;
    let exponent = exponent
        .parse::<i32>()
        .map_err(|_| FormatError::NotANumber)?;
    Ok((mantissa, exponent))
}

fn numbers_string(
    pack: &LanguagePack,
    number: f64,
    places: u32,
    ordinals: bool,
) -> Result<String, FormatError> {
    let tokens = &pack.tokens;
    if number < 0.0 {
        return Ok(format!(
            "{} {}",
            tokens.negative,
            numbers_string(pack, -number, places, ordinals)?
        ));
    }
    if number == 0.0 {
        return Ok(tokens.zero.clone());
    }

    let numeral = Numeral::new(number, places.min(pack.tables.max_places()));
    match (numeral.whole, numeral.fractional) {
        // everything is below the spoken precision
        (0, 0) => Ok(tokens.zero.clone()),
        (whole, 0) => whole_number(pack, whole, ordinals),
        (0, _) => fractional_number(pack, &numeral),
        (whole, _) => Ok(format!(
            "{}{}{}",
            whole_number(pack, whole, false)?,
            tokens.conjoiner,
            fractional_number(pack, &numeral)?
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tests::syr;
    use rstest::rstest;

    fn pronounce(number: f64) -> String {
        pronounce_number(syr(), number, &NumberOptions::default()).unwrap()
    }

    #[rstest]
    #[case::zero(0.0, "ܣܝܦܪ")]
    #[case::one(1.0, "ܚܕ")]
    #[case::twenty_two(22.0, "ܥܣܪܝܢ ܘܬܪܝܢ")]
    #[case::two_hundred(200.0, "ܬܪܝܢܡܐܐ")]
    #[case::a_thousand_and_five_hundred(1500.0, "ܐܠܦܐ ܘܚܡܫܡܐܐ")]
    #[case::negative(-3.0, "ܣܚܘܦܐ ܬܠܬܐ")]
    #[case::half(0.5, "ܦܠܓܐ")]
    #[case::one_and_a_half(1.5, "ܚܕ ܘܦܠܓܐ")]
    #[case::tenths(0.2, "ܬܪܝܢ ܥܣܪܐ")]
    #[case::whole_and_hundredths(3.25, "ܬܠܬܐ ܘܥܣܪܝܢ ܘܚܡܫܐ ܡܐܐ")]
    #[case::below_precision(0.001, "ܣܝܦܪ")]
    #[case::infinity(f64::INFINITY, "ܠܐ ܡܬܚܡܐ")]
    #[case::negative_infinity(f64::NEG_INFINITY, "ܣܚܘܦܐ ܠܐ ܡܬܚܡܐ")]
    fn test_pronounce_number(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(pronounce(number), expected);
    }

    #[test]
    fn test_trailing_zeros_are_not_spoken() {
        let two_places = pronounce_number(
            syr(),
            1.50,
            &NumberOptions {
                places: 2,
                ..Default::default()
            },
        )
        .unwrap();
        let one_place = pronounce_number(
            syr(),
            1.5,
            &NumberOptions {
                places: 1,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(two_places, one_place);
    }

    #[test]
    fn test_places_limit_precision() {
        let options = NumberOptions {
            places: 3,
            ..Default::default()
        };
        assert_eq!(
            pronounce_number(syr(), 0.125, &options).unwrap(),
            "ܡܐܐ ܘܥܣܪܝܢ ܘܚܡܫܐ ܐܠܦܐ"
        );
        assert_eq!(pronounce(0.125), "ܬܪܥܣܪ ܡܐܐ");
    }

    #[rstest]
    #[case::within_scales(11)]
    #[case::past_scales(12)]
    #[case::past_f64_digits(15)]
    #[case::unbounded(u32::MAX)]
    fn test_places_capped_by_fraction_scales(#[case] places: u32) {
        let options = NumberOptions {
            places,
            ..Default::default()
        };
        assert_eq!(
            pronounce_number(syr(), 2.3, &options).unwrap(),
            "ܬܪܝܢ ܘܬܠܬܐ ܥܣܪܐ"
        );
        assert!(pronounce_number(syr(), 0.123456789012345, &options).is_ok());
    }

    #[rstest]
    #[case::first(1.0, "ܩܕܡܝܐ")]
    #[case::fourth(4.0, "ܪܒܝܥܝܐ")]
    #[case::thousandth(1000.0, "ܐܠܦܝܐ")]
    #[case::zero(0.0, "ܣܝܦܪ")]
    #[case::negative(-2.0, "ܣܚܘܦܐ ܬܪܝܢܐ")]
    #[case::fraction_stays_cardinal(2.5, "ܬܪܝܢ ܘܦܠܓܐ")]
    fn test_pronounce_ordinals(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(
            pronounce_number(syr(), number, &NumberOptions::ordinals()).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case::zero(0.0, "ܣܝܦܪ")]
    #[case::no_exponent(5.0, "ܚܡܫܐ")]
    #[case::thousands(1500.0, "ܚܕ ܘܦܠܓܐ ܥܦܝܦ ܥܣܪܐ ܒܚܝܠܐ ܕܬܠܬܐ")]
    #[case::negative_exponent(0.002, "ܬܪܝܢ ܥܦܝܦ ܥܣܪܐ ܒܚܝܠܐ ܕܣܚܘܦܐ ܬܠܬܐ")]
    #[case::negative_mantissa(-20.0, "ܣܚܘܦܐ ܬܪܝܢ ܥܦܝܦ ܥܣܪܐ ܒܚܝܠܐ ܕܚܕ")]
    fn test_pronounce_scientific(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(
            pronounce_number(syr(), number, &NumberOptions::scientific()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_scientific_parts() {
        assert_eq!(scientific_parts(1500.0).unwrap(), (1.5, 3));
        assert_eq!(scientific_parts(-0.00025).unwrap(), (-2.5, -4));
        assert_eq!(scientific_parts(7.0).unwrap(), (7.0, 0));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            pronounce_number(syr(), f64::NAN, &NumberOptions::default()),
            Err(FormatError::NotANumber)
        );
    }
}
