// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-relative durations ("about 3 hours", "2 days", "over 1 year").
//!
//! Up to two months the wording follows elapsed minutes. Beyond that the
//! month and year wording counts whole calendar months between the instants.

use chrono::{DateTime, Datelike, Months, Utc};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

/// Describes the distance between two instants, regardless of their order.
pub fn distance(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds();
    let minutes = (seconds as f64 / 60.0).round();

    if minutes < 1.0 {
        return "less than a minute".to_string();
    }
    if minutes < 45.0 {
        return plural(minutes as u64, "minute");
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / MINUTES_IN_HOUR).round() as u64;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2520.0 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round() as u64;
        return plural(days, "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        return format!("about {}", plural(months, "month"));
    }

    let months = months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes / MINUTES_IN_MONTH).round() as u64;
        return plural(nearest, "month");
    }

    let years = u64::from(months / 12);
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

/// Whole calendar months from `earlier` to `later`.
///
/// A month counts once `later` reaches the same day and time of day, with
/// shorter months clamped to their last day. A single month that runs to
/// the last day of `later`'s month is full.
pub fn months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> u32 {
    let calendar = (later.year() - earlier.year()) * 12 + later.month0() as i32
        - earlier.month0() as i32;
    if calendar < 1 {
        return 0;
    }
    let calendar = calendar.unsigned_abs();
    let short = later
        .checked_sub_months(Months::new(calendar))
        .is_some_and(|shifted| shifted < earlier);
    let month_end = calendar == 1 && is_last_day_of_month(later) && later > earlier;
    if short && !month_end {
        calendar - 1
    } else {
        calendar
    }
}

fn is_last_day_of_month(t: DateTime<Utc>) -> bool {
    t.date_naive()
        .succ_opt()
        .is_some_and(|next| next.month() != t.month())
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

#[cfg(test)]
#[path = "humanize_tests.rs"]
mod tests;
