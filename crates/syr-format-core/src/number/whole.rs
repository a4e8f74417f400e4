use log::warn;

use crate::{
    FormatError, LanguagePack,
    constants::{GROUP_SIZE, THOUSAND_GROUP},
};

/// The magnitude band a single lookup falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    /// 0 - 19
    Units(u64),
    /// 20 - 99
    Tens { quotient: u64, remainder: u64 },
    /// 100 - 999
    Hundreds { quotient: u64, remainder: u64 },
    /// 1000 and above, only reached by ordinals, which aren't rendered per group
    Large { quotient: u64, remainder: u64 },
}

impl Band {
    fn of(number: u64) -> Self {
        match number {
            0..=19 => Band::Units(number),
            20..=99 => Band::Tens {
                quotient: number / 10,
                remainder: number % 10,
            },
            100..=999 => Band::Hundreds {
                quotient: number / 100,
                remainder: number % 100,
            },
            _ => Band::Large {
                quotient: number / GROUP_SIZE,
                remainder: number % GROUP_SIZE,
            },
        }
    }
}

/// Looks up the words for a number, creating a phrase based on its band.
pub(crate) fn lookup_word(
    pack: &LanguagePack,
    number: u64,
    ordinals: bool,
) -> Result<String, FormatError> {
    let tables = &pack.tables;
    let conjoiner = &pack.tokens.conjoiner;

    let word = match Band::of(number) {
        Band::Units(n) if ordinals => tables.ordinal(n)?.to_owned(),
        Band::Units(n) => tables.one(n)?.to_owned(),
        Band::Tens {
            quotient,
            remainder: 0,
        } => {
            if ordinals {
                tables.ordinal(number)?.to_owned()
            } else {
                tables.ten(quotient)?.to_owned()
            }
        }
        Band::Tens {
            quotient,
            remainder,
        } => {
            let last = if ordinals {
                tables.ordinal(remainder)?
            } else {
                tables.one(remainder)?
            };
            format!("{}{}{}", tables.ten(quotient)?, conjoiner, last)
        }
        Band::Hundreds {
            quotient,
            remainder: 0,
        } => {
            if ordinals {
                tables.ordinal(number)?.to_owned()
            } else {
                tables.hundred(quotient)?.to_owned()
            }
        }
        // only the leading hundred takes part in an ordinal, the rest stays cardinal
        Band::Hundreds {
            quotient,
            remainder,
        } => format!(
            "{}{}{}",
            tables.hundred(quotient)?,
            conjoiner,
            lookup_word(pack, remainder, false)?
        ),
        Band::Large { .. } if !ordinals => whole_number(pack, number, false)?,
        Band::Large {
            remainder: 0,
            ..
        } => tables.ordinal(number)?.to_owned(),
        Band::Large {
            quotient,
            remainder,
        } => format!(
            "{}{}{}",
            tables.large_unit(quotient)?,
            conjoiner,
            tables.ordinal(remainder)?
        ),
    };
    Ok(word)
}

/// Renders an integer by peeling off groups of one thousand, from least to most significant,
/// naming each group with the next large unit. Empty groups are skipped.
///
/// Ordinals aren't rendered per group: the whole value goes through a single lookup.
pub fn whole_number(
    pack: &LanguagePack,
    number: u64,
    ordinals: bool,
) -> Result<String, FormatError> {
    if ordinals {
        if number == 0 {
            return Ok(String::new());
        }
        return lookup_word(pack, number, true);
    }

    let mut rest = number;
    let mut groups: Vec<String> = Vec::new();
    for (index, unit) in pack.tables.large.iter().enumerate() {
        let remainder = rest % GROUP_SIZE;
        rest /= GROUP_SIZE;
        if remainder == 0 {
            continue;
        }

        // "a thousand", not "one thousand"
        let text = if remainder == 1 && index == THOUSAND_GROUP {
            unit.to_owned()
        } else if unit.is_empty() {
            lookup_word(pack, remainder, false)?
        } else {
            format!("{} {}", lookup_word(pack, remainder, false)?, unit)
        };
        groups.push(text);
    }

    if rest != 0 {
        warn!(
            "{number} exceeds the large units of language {}, dropping the leading digits",
            pack.code
        );
    }

    groups.reverse();
    Ok(groups.join(&pack.tokens.conjoiner))
}
