use chrono::Timelike;

use crate::{
    FormatError, LanguagePack,
    number::{NumberOptions, pronounce_number},
};

/// How a time of day is formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOptions {
    /// Format for speech (true) or display (false)
    pub speech: bool,
    /// 24-hour/military or 12-hour format
    pub use_24hour: bool,
    /// Include the am/pm part for the 12-hour format
    pub use_ampm: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            speech: true,
            use_24hour: false,
            use_ampm: false,
        }
    }
}

/// Formats a time of day, e.g. "five thirty" for speech or "5:30" for display.
/// The time is expected to be in the local timezone already.
pub fn nice_time<T: Timelike>(
    pack: &LanguagePack,
    time: &T,
    options: &TimeOptions,
) -> Result<String, FormatError> {
    if !options.speech {
        return Ok(display_time(time, options));
    }

    let hour = time.hour();
    let minute = time.minute();
    let tokens = &pack.tokens;
    let say = |n: u32| pronounce_number(pack, f64::from(n), &NumberOptions::default());
    let say_minutes = |n: u32| -> Result<String, FormatError> {
        Ok(format!("{} {}", say(n)?, tokens.minutes.many))
    };

    if options.use_24hour {
        let mut speak = say(hour)?;
        if minute != 0 {
            speak.push_str(&tokens.conjoiner);
            speak.push_str(&say_minutes(minute)?);
        }
        return Ok(speak);
    }

    match (hour, minute) {
        (0, 0) => return Ok(tokens.midnight.clone()),
        (12, 0) => return Ok(tokens.noon.clone()),
        _ => {}
    }

    let (_, hour12) = time.hour12();
    let mut speak = match minute {
        15 => format!("{}{}{}", say(hour12)?, tokens.conjoiner, tokens.quarter),
        30 => format!("{}{}{}", say(hour12)?, tokens.conjoiner, tokens.half),
        45 => {
            let next_hour = (hour + 1) % 12;
            let next_hour = if next_hour == 0 { 12 } else { next_hour };
            format!("{} {} {}", tokens.quarter, tokens.quarter_to, say(next_hour)?)
        }
        0 if !options.use_ampm => return say(hour12),
        0 => say(hour12)?,
        _ => format!(
            "{}{}{}",
            say(hour12)?,
            tokens.conjoiner,
            say_minutes(minute)?
        ),
    };

    if options.use_ampm {
        let marker = if hour > 11 {
            &tokens.after_noon
        } else {
            &tokens.before_noon
        };
        speak.push(' ');
        speak.push_str(marker);
    }
    Ok(speak)
}

/// e.g. "03:01" or "14:22" for 24 hours, "3:01 AM" or "2:22" for 12 hours
fn display_time<T: Timelike>(time: &T, options: &TimeOptions) -> String {
    let minute = time.minute();
    if options.use_24hour {
        return format!("{:02}:{:02}", time.hour(), minute);
    }

    let (is_pm, hour12) = time.hour12();
    if options.use_ampm {
        let marker = if is_pm { "PM" } else { "AM" };
        format!("{hour12}:{minute:02} {marker}")
    } else {
        format!("{hour12}:{minute:02}")
    }
}
