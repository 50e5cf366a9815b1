use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use moka::future::Cache;
use tracing::debug;

use crate::config::Config;
use crate::error::ProcessingError;
use crate::model::employee::Employee;
use crate::service::expected::expected_workdays_for_period;
use crate::service::periods::{WorkingPeriod, build_periods, clip_periods};
use crate::service::work_states::{WorkStates, expand_work_states};
use crate::store::{AttendanceStore, ScheduleHistoryStore};

/// The attendance-processing engine: derives working periods from an
/// employee's schedule history and reconciles them with recorded attendance.
///
/// Period lists are cached per employee for the lifetime of the process;
/// schedule changes made after the first request for an employee are not
/// picked up until restart. Concurrent first requests may derive the same
/// list twice; the cache write is idempotent so no guard is taken.
pub struct AttendanceProcessingService<S, A> {
    schedule_history: S,
    attendance: A,
    periods_cache: Cache<u64, Arc<Vec<WorkingPeriod>>>,
}

impl<S, A> AttendanceProcessingService<S, A>
where
    S: ScheduleHistoryStore,
    A: AttendanceStore,
{
    pub fn new(schedule_history: S, attendance: A, config: &Config) -> Self {
        Self {
            schedule_history,
            attendance,
            periods_cache: Cache::builder()
                .max_capacity(config.period_cache_capacity)
                .build(),
        }
    }

    /// True when attendance is fully recorded over every working period
    /// intersecting `[from, to]`. A range with no working periods is
    /// trivially processed.
    pub async fn is_user_processed(
        &self,
        employee: &Employee,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<bool, ProcessingError> {
        let periods = self.employee_workdays_periods(employee).await?;

        for period in clip_periods(&periods, Some(from), Some(to)) {
            if !self
                .is_employee_processed_in_period(employee, &period)
                .await?
            {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True when the employee has at least one expected working day in the
    /// range.
    pub async fn should_employee_work_between(
        &self,
        employee: &Employee,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<bool, ProcessingError> {
        let periods = self.employee_workdays_periods(employee).await?;

        Ok(clip_periods(&periods, Some(from), Some(to))
            .iter()
            .any(|period| expected_workdays_for_period(period).count > 0))
    }

    /// Per-day work map across the range, one entry per calendar day covered
    /// by a working period.
    pub async fn generate_employee_work_states(
        &self,
        employee: &Employee,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<WorkStates, ProcessingError> {
        let periods = self.employee_workdays_periods(employee).await?;
        let mut result = WorkStates::new();

        for period in clip_periods(&periods, Some(from), Some(to)) {
            let expected = expected_workdays_for_period(&period);

            result.extend(expand_work_states(period.from, period.to, &expected));
        }

        Ok(result)
    }

    /// Evaluates `is_user_processed` for a batch of employees concurrently
    /// and ANDs the results.
    pub async fn all_processed(
        &self,
        employees: &[Employee],
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<bool, ProcessingError> {
        let checks = employees
            .iter()
            .map(|employee| self.is_user_processed(employee, from, to));

        Ok(futures::future::try_join_all(checks)
            .await?
            .into_iter()
            .all(|processed| processed))
    }

    /// Compares recorded attendance against the expected workday count for
    /// one period. Nothing expected means trivially processed, without a
    /// store round-trip. The comparison is by cardinality only; a duplicate
    /// record on one day can stand in for a missing day on another.
    pub async fn is_employee_processed_in_period(
        &self,
        employee: &Employee,
        period: &WorkingPeriod,
    ) -> Result<bool, ProcessingError> {
        let expected = expected_workdays_for_period(period);

        if expected.count == 0 {
            return Ok(true);
        }

        let codes: Vec<u8> = expected.days_of_week.iter().copied().collect();

        let recorded = self
            .attendance
            .count_attendance_records(employee.employee_id, period.from, period.to, &codes)
            .await
            .map_err(|source| ProcessingError::AttendanceCount {
                employee_id: employee.employee_id,
                source,
            })?;

        Ok(expected.count <= recorded)
    }

    /// Cached working periods for an employee, derived on first use. The
    /// cache is written only after a successful fetch, so a store failure is
    /// retried on the next call.
    pub async fn employee_workdays_periods(
        &self,
        employee: &Employee,
    ) -> Result<Arc<Vec<WorkingPeriod>>, ProcessingError> {
        if let Some(periods) = self.periods_cache.get(&employee.employee_id).await {
            return Ok(periods);
        }

        let records = self
            .schedule_history
            .fetch_schedule_history(employee.employee_id)
            .await
            .map_err(|source| ProcessingError::ScheduleHistory {
                employee_id: employee.employee_id,
                source,
            })?;

        let periods = Arc::new(build_periods(&records, employee, Utc::now().date_naive()));

        debug!(
            employee_id = employee.employee_id,
            periods = periods.len(),
            "derived workdays periods"
        );

        self.periods_cache
            .insert(employee.employee_id, periods.clone())
            .await;

        Ok(periods)
    }
}
