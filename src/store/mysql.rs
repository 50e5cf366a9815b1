use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;
use tracing::error;

use crate::model::workday::WorkdayRecord;
use crate::store::{AttendanceStore, ScheduleHistoryStore};

/// MySQL-backed store over the `workdays` and `attendance` tables.
#[derive(Clone)]
pub struct MySqlHrStore {
    pool: MySqlPool,
}

impl MySqlHrStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleHistoryStore for MySqlHrStore {
    async fn fetch_schedule_history(&self, employee_id: u64) -> Result<Vec<WorkdayRecord>> {
        // Same-day edits collapse to the latest row per calendar day.
        let records = sqlx::query_as::<_, WorkdayRecord>(
            r#"
            SELECT *
            FROM workdays
            WHERE employee_id = ?
              AND created_at IN (
                SELECT MAX(created_at)
                FROM workdays
                WHERE employee_id = ?
                GROUP BY DATE(created_at)
              )
            ORDER BY created_at DESC
            "#,
        )
        .bind(employee_id)
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to fetch schedule history");
            e
        })?;

        Ok(records)
    }
}

#[async_trait]
impl AttendanceStore for MySqlHrStore {
    async fn count_attendance_records(
        &self,
        employee_id: u64,
        from: NaiveDate,
        to: NaiveDate,
        weekday_codes: &[u8],
    ) -> Result<i64> {
        // An empty IN list is invalid SQL; nothing can match anyway.
        if weekday_codes.is_empty() {
            return Ok(0);
        }

        let codes = weekday_codes
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        // Codes are numeric, so interpolating the IN list is safe.
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM attendance
            WHERE employee_id = ?
              AND date >= ?
              AND date <= ?
              AND DAYOFWEEK(date) IN ({codes})
              AND (
                checked_in = TRUE
                OR regular_hours > 0
                OR overtime_hours > 0
                OR sick_hours > 0
                OR holiday_hours > 0
                OR unpaid_hours > 0
                OR other_hours > 0
                OR regular_hours_override > 0
                OR overtime_hours_override > 0
                OR sick_hours_override > 0
                OR holiday_hours_override > 0
                OR unpaid_hours_override > 0
              )
            "#
        );

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(employee_id)
            .bind(from)
            .bind(to)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, employee_id, "Failed to count attendance records");
                e
            })?;

        Ok(count)
    }
}
