use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::model::workday::WorkdayRecord;

pub mod mysql;

pub use mysql::MySqlHrStore;

/// Versioned weekly-pattern history for an employee.
#[async_trait]
pub trait ScheduleHistoryStore: Send + Sync {
    /// Schedule-change records ordered by effective time, newest first, with
    /// same-day edits already reduced to the latest one per calendar day.
    async fn fetch_schedule_history(&self, employee_id: u64) -> Result<Vec<WorkdayRecord>>;
}

/// Recorded attendance, reduced to the counts the engine needs.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Number of records in `[from, to]` (inclusive) whose day-of-week code
    /// is in `weekday_codes` and which carry any recorded activity.
    async fn count_attendance_records(
        &self,
        employee_id: u64,
        from: NaiveDate,
        to: NaiveDate,
        weekday_codes: &[u8],
    ) -> Result<i64>;
}
