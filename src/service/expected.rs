use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::service::periods::WorkingPeriod;

/// Weekday codes excluded from every reported expected-workday set.
pub const WEEKEND_CODES: [u8; 2] = [6, 7];

/// Expected working days inside one period: which weekday codes actually
/// occur, and how many working days that amounts to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedWorkdays {
    pub days_of_week: BTreeSet<u8>,
    pub count: i64,
}

/// Day-of-week code of `date`, 1 = Sunday .. 7 = Saturday, matching the
/// attendance store's DAYOFWEEK() numbering.
pub fn weekday_code(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8 + 1
}

/// Counts how many days in `[from, to]` (inclusive, day granularity) fall on
/// one of `days_of_week`, and which of those codes occur at all.
///
/// Complete weeks contribute every code in the set without iteration; only
/// the trailing partial week ending at `to` is walked day by day. A
/// degenerate range counts as nothing expected.
pub fn count_days_of_week_between(
    days_of_week: &BTreeSet<u8>,
    from: NaiveDate,
    to: NaiveDate,
) -> ExpectedWorkdays {
    let mut result = ExpectedWorkdays::default();

    if days_of_week.is_empty() {
        return result;
    }

    let days_between = (to - from).num_days() + 1;

    if days_between < 1 {
        return result;
    }

    if days_between >= 7 {
        // At least one whole week, so every allowed code occurs.
        result.days_of_week = days_of_week.clone();
    }

    let remainder = days_between % 7;

    for offset in 0..remainder {
        let code = weekday_code(to - Duration::days(offset));

        if days_of_week.contains(&code) {
            result.count += 1;
            result.days_of_week.insert(code);
        }
    }

    result.count += (days_between / 7) * days_of_week.len() as i64;

    result
}

/// Expected workdays for a period. The count keeps whatever the raw pattern
/// produced; the reported set, which drives attendance-record matching,
/// never contains weekend codes.
pub fn expected_workdays_for_period(period: &WorkingPeriod) -> ExpectedWorkdays {
    let raw = count_days_of_week_between(&period.days_of_week, period.from, period.to);

    ExpectedWorkdays {
        days_of_week: raw
            .days_of_week
            .into_iter()
            .filter(|code| !WEEKEND_CODES.contains(code))
            .collect(),
        count: raw.count,
    }
}
