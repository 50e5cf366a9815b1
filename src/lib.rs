//! Attendance-processing engine: reconciles an employee's versioned weekly
//! schedule history against recorded attendance over arbitrary date ranges.
//!
//! The engine derives non-overlapping working periods from schedule-change
//! history, clips them to a query range, counts the working days each period
//! expects, and decides whether attendance has been fully recorded. It is a
//! library; HTTP routing and report assembly live in the consuming service.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::ProcessingError;
pub use service::attendance_processing::AttendanceProcessingService;
pub use service::expected::{
    ExpectedWorkdays, WEEKEND_CODES, count_days_of_week_between, expected_workdays_for_period,
    weekday_code,
};
pub use service::periods::{WorkingPeriod, clip_periods};
pub use service::work_states::{WorkStates, expand_work_states};
