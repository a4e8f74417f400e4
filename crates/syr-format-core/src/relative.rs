use chrono::{DateTime, TimeDelta, TimeZone};

use crate::{
    LanguagePack, UnitNames,
    constants::{MAX_HOURS, MAX_MINUTES, MAX_SECONDS},
    util::date::now,
};

/// Creates a phrase roughly describing how far `when` is from `relative_to`, e.g. "25 seconds"
/// or "7 days". Without `relative_to`, the current time is used.
pub fn nice_relative_time<Tz: TimeZone>(
    pack: &LanguagePack,
    when: &DateTime<Tz>,
    relative_to: Option<&DateTime<Tz>>,
) -> String {
    let delta = match relative_to {
        Some(reference) => when.clone() - reference.clone(),
        None => when.clone() - now().with_timezone(&when.timezone()),
    };
    nice_duration(pack, delta)
}

/// Describes a duration with the coarsest unit that keeps it readable. Every step rounds to
/// the next unit by adding half of it before dividing. There are no weeks, months or years.
pub fn nice_duration(pack: &LanguagePack, delta: TimeDelta) -> String {
    let tokens = &pack.tokens;
    let seconds = delta.num_milliseconds() as f64 / 1000.0;

    if seconds < 1.0 {
        return tokens.now.clone();
    }
    if seconds < MAX_SECONDS {
        return count(seconds.trunc() as u64, &tokens.seconds);
    }

    let minutes = ((seconds + 30.0) / 60.0).floor() as u64;
    if minutes < MAX_MINUTES {
        return count(minutes, &tokens.minutes);
    }

    let hours = (minutes + 30) / 60;
    if hours < MAX_HOURS {
        return count(hours, &tokens.hours);
    }

    let days = (hours + 12) / 24;
    count(days, &tokens.days)
}

fn count(amount: u64, unit: &UnitNames) -> String {
    if amount == 1 {
        unit.one.clone()
    } else {
        format!("{} {}", amount, unit.many)
    }
}
