use thiserror::Error;

/// Failures surfaced by the processing engine. Both variants wrap an
/// upstream store error unchanged; nothing is retried here.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to fetch schedule history for employee {employee_id}")]
    ScheduleHistory {
        employee_id: u64,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to count attendance records for employee {employee_id}")]
    AttendanceCount {
        employee_id: u64,
        #[source]
        source: anyhow::Error,
    },
}
