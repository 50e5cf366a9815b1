use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::service::expected::{ExpectedWorkdays, weekday_code};

/// Per-calendar-day work map, keyed by UTC-midnight epoch milliseconds.
pub type WorkStates = BTreeMap<i64, bool>;

/// Marks every day in `[from, to]` (inclusive) as a work day or not,
/// according to the expected weekday set.
pub fn expand_work_states(
    from: NaiveDate,
    to: NaiveDate,
    expected: &ExpectedWorkdays,
) -> WorkStates {
    from.iter_days()
        .take_while(|day| *day <= to)
        .map(|day| {
            (
                day.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
                expected.days_of_week.contains(&weekday_code(day)),
            )
        })
        .collect()
}
