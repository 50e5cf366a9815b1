use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::employee::Employee;
use crate::model::workday::WorkdayRecord;

/// A maximal contiguous date interval during which one weekly pattern was in
/// effect. Per-employee lists are chronologically ascending and
/// non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkingPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days_of_week: BTreeSet<u8>,
}

/// Derives the working-period list from schedule history ordered newest
/// first.
///
/// Walking newest to oldest, each record opens `[record day, previous upper
/// bound]` and moves the bound to the day before the record. The oldest
/// period starts at the employee's start date rather than the raw effective
/// date; a leaving date clips the whole list. No records, or no start date,
/// yields no periods.
pub fn build_periods(
    records: &[WorkdayRecord],
    employee: &Employee,
    today: NaiveDate,
) -> Vec<WorkingPeriod> {
    let Some(start_date) = employee.start_date else {
        return Vec::new();
    };

    let mut periods = Vec::with_capacity(records.len());
    let mut upper_bound = today;

    for record in records {
        let effective = record.created_at.date();

        periods.push(WorkingPeriod {
            from: effective,
            to: upper_bound,
            days_of_week: record.active_days(),
        });

        upper_bound = effective.pred_opt().unwrap_or(NaiveDate::MIN);
    }

    if let Some(oldest) = periods.last_mut() {
        oldest.from = start_date;
    }

    periods.reverse();

    match employee.leaving_date {
        Some(leaving) => clip_periods(&periods, Some(start_date), Some(leaving)),
        None => periods,
    }
}

/// Intersects `periods` with `[from, to]` at day granularity. Periods wholly
/// outside the range are dropped, boundary periods are truncated, and a
/// `None` bound is unbounded.
pub fn clip_periods(
    periods: &[WorkingPeriod],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<WorkingPeriod> {
    periods
        .iter()
        .filter(|period| {
            from.map_or(true, |from| from <= period.to) && to.map_or(true, |to| to >= period.from)
        })
        .map(|period| {
            let mut clipped = period.clone();

            if let Some(from) = from {
                if from > clipped.from {
                    clipped.from = from;
                }
            }

            if let Some(to) = to {
                if to < clipped.to {
                    clipped.to = to;
                }
            }

            clipped
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn pattern_record(effective: NaiveDate, active: &[u8]) -> WorkdayRecord {
        WorkdayRecord {
            id: 0,
            employee_id: 1,
            created_at: NaiveDateTime::new(
                effective,
                chrono::NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
            ),
            sunday: active.contains(&1),
            monday: active.contains(&2),
            tuesday: active.contains(&3),
            wednesday: active.contains(&4),
            thursday: active.contains(&5),
            friday: active.contains(&6),
            saturday: active.contains(&7),
        }
    }

    fn employee(start_date: Option<NaiveDate>, leaving_date: Option<NaiveDate>) -> Employee {
        Employee {
            employee_id: 1,
            employee_code: "EMP-001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            start_date,
            leaving_date,
            status: "active".to_string(),
        }
    }

    fn period(from: NaiveDate, to: NaiveDate, days: &[u8]) -> WorkingPeriod {
        WorkingPeriod {
            from,
            to,
            days_of_week: days.iter().copied().collect(),
        }
    }

    #[test]
    fn test_build_periods_walks_history_newest_first() {
        // Newest first, as the store returns them.
        let records = vec![
            pattern_record(d(2024, 3, 10), &[3, 4]),
            pattern_record(d(2024, 1, 5), &[2, 3, 4, 5, 6]),
        ];
        let emp = employee(Some(d(2023, 12, 1)), None);

        let periods = build_periods(&records, &emp, d(2024, 6, 1));

        assert_eq!(
            periods,
            vec![
                period(d(2023, 12, 1), d(2024, 3, 9), &[2, 3, 4, 5, 6]),
                period(d(2024, 3, 10), d(2024, 6, 1), &[3, 4]),
            ]
        );
    }

    #[test]
    fn test_build_periods_clamps_oldest_from_to_start_date() {
        // The schedule was recorded two days before employment began.
        let records = vec![pattern_record(d(2024, 1, 1), &[2, 3, 4, 5, 6])];
        let emp = employee(Some(d(2024, 1, 3)), None);

        let periods = build_periods(&records, &emp, d(2024, 2, 1));

        assert_eq!(periods[0].from, d(2024, 1, 3));
    }

    #[test]
    fn test_build_periods_clips_to_leaving_date() {
        let records = vec![
            pattern_record(d(2024, 5, 10), &[3]),
            pattern_record(d(2024, 1, 1), &[2]),
        ];
        let emp = employee(Some(d(2024, 1, 1)), Some(d(2024, 4, 30)));

        let periods = build_periods(&records, &emp, d(2024, 6, 1));

        // The pattern that took effect after leaving is gone entirely.
        assert_eq!(periods, vec![period(d(2024, 1, 1), d(2024, 4, 30), &[2])]);
    }

    #[test]
    fn test_build_periods_without_records_is_empty() {
        let emp = employee(Some(d(2024, 1, 1)), None);
        assert!(build_periods(&[], &emp, d(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_build_periods_without_start_date_is_empty() {
        let records = vec![pattern_record(d(2024, 1, 1), &[2])];
        let emp = employee(None, None);

        assert!(build_periods(&records, &emp, d(2024, 6, 1)).is_empty());
    }

    #[test]
    fn test_clip_drops_periods_outside_range() {
        let periods = vec![
            period(d(2024, 1, 1), d(2024, 1, 31), &[2]),
            period(d(2024, 2, 1), d(2024, 2, 29), &[3]),
            period(d(2024, 3, 1), d(2024, 3, 31), &[4]),
        ];

        let clipped = clip_periods(&periods, Some(d(2024, 2, 5)), Some(d(2024, 2, 20)));

        assert_eq!(clipped, vec![period(d(2024, 2, 5), d(2024, 2, 20), &[3])]);
    }

    #[test]
    fn test_clip_keeps_interior_periods_untouched() {
        let periods = vec![period(d(2024, 2, 1), d(2024, 2, 29), &[3])];

        let clipped = clip_periods(&periods, Some(d(2024, 1, 1)), Some(d(2024, 12, 31)));

        assert_eq!(clipped, periods);
    }

    #[test]
    fn test_clip_treats_missing_bounds_as_unbounded() {
        let periods = vec![
            period(d(2024, 1, 1), d(2024, 1, 31), &[2]),
            period(d(2024, 2, 1), d(2024, 2, 29), &[3]),
        ];

        let clipped = clip_periods(&periods, Some(d(2024, 1, 20)), None);

        assert_eq!(
            clipped,
            vec![
                period(d(2024, 1, 20), d(2024, 1, 31), &[2]),
                period(d(2024, 2, 1), d(2024, 2, 29), &[3]),
            ]
        );
    }

    #[test]
    fn test_clip_is_idempotent() {
        let periods = vec![
            period(d(2024, 1, 1), d(2024, 1, 31), &[2]),
            period(d(2024, 2, 1), d(2024, 2, 29), &[3]),
        ];
        let from = Some(d(2024, 1, 15));
        let to = Some(d(2024, 2, 15));

        let once = clip_periods(&periods, from, to);
        let twice = clip_periods(&once, from, to);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_working_period_serializes_with_plain_dates() {
        let json = serde_json::to_value(period(d(2024, 1, 1), d(2024, 1, 31), &[2, 3])).unwrap();

        assert_eq!(json["from"], "2024-01-01");
        assert_eq!(json["to"], "2024-01-31");
        assert_eq!(json["days_of_week"], serde_json::json!([2, 3]));
    }
}
