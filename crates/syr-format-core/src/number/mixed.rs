use log::debug;

use crate::{
    FormatError, LanguagePack, ValidationError,
    constants::{DEFAULT_DENOMINATORS, FALLBACK_DECIMALS, ROUNDING_TOLERANCE},
    number::whole::lookup_word,
};

/// A number approximated as `whole + numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
    pub whole: i64,
    pub numerator: u64,
    pub denominator: u64,
}

impl MixedFraction {
    /// Approximates the number with the first of the given denominators, in the order given,
    /// that gets within ROUNDING_TOLERANCE. An empty set means the default 1..=20.
    ///
    /// Returns None, if none of the denominators is close enough.
    pub fn approximate(number: f64, denominators: &[u64]) -> Result<Option<Self>, FormatError> {
        if number.is_nan() {
            return Err(FormatError::NotANumber);
        }
        if denominators.contains(&0) {
            return Err(ValidationError::InvalidDenominator.into());
        }
        // past i64 the whole part saturates, the decimal display takes over
        if number.is_infinite() || number.abs() >= i64::MAX as f64 {
            return Ok(None);
        }

        let whole = number.trunc() as i64;
        if whole as f64 == number {
            return Ok(Some(Self {
                whole,
                numerator: 0,
                denominator: 1,
            }));
        }

        let fraction = (number - whole as f64).abs();
        let candidates: Vec<u64> = if denominators.is_empty() {
            DEFAULT_DENOMINATORS.collect()
        } else {
            denominators.to_vec()
        };

        let found = candidates.into_iter().find_map(|denominator| {
            let numerator = fraction * denominator as f64;
            ((numerator - numerator.round()).abs() < ROUNDING_TOLERANCE)
                .then(|| (numerator.round() as u64, denominator))
        });

        Ok(found.and_then(|(numerator, denominator)| {
            // the fraction rounded up to a full one, e.g. 0.999 over 1
            if numerator >= denominator {
                Some(Self {
                    whole: whole.checked_add(number.signum() as i64)?,
                    numerator: 0,
                    denominator: 1,
                })
            } else {
                Some(Self {
                    whole,
                    numerator,
                    denominator,
                })
            }
        }))
    }
}

/// Formats a number as a mixed fraction, e.g. 4.5 becomes "4 and a half" for speech and "4 1/2"
/// for display. The whole part stays in digits in both modes.
///
/// If no denominator approximates the number, it's shown as a decimal with three places.
pub fn nice_number(
    pack: &LanguagePack,
    number: f64,
    speech: bool,
    denominators: &[u64],
) -> Result<String, FormatError> {
    let Some(MixedFraction {
        whole,
        numerator,
        denominator,
    }) = MixedFraction::approximate(number, denominators)?
    else {
        debug!("No denominator approximates {number}, falling back to decimal display");
        return Ok(round_to_decimals(number, FALLBACK_DECIMALS).to_string());
    };

    if numerator == 0 {
        return Ok(whole.to_string());
    }

    if !speech {
        return Ok(format!("{whole} {numerator}/{denominator}"));
    }

    let tokens = &pack.tokens;
    let is_half = numerator == 1 && denominator == 2;
    let result = match (whole, is_half) {
        (0, true) => tokens.half.clone(),
        (0, false) => format!(
            "{} {} {}",
            lookup_word(pack, numerator, false)?,
            tokens.fraction_of,
            lookup_word(pack, denominator, false)?
        ),
        (_, true) => format!("{}{}{}", whole, tokens.conjoiner, tokens.half),
        (_, false) => format!(
            "{}{}{} {} {}",
            whole,
            tokens.conjoiner,
            lookup_word(pack, numerator, false)?,
            tokens.fraction_of,
            lookup_word(pack, denominator, false)?
        ),
    };
    Ok(result)
}

fn round_to_decimals(number: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (number * scale).round() / scale
}
