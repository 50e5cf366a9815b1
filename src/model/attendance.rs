use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: u64,
    pub employee_id: u64,
    pub date: NaiveDate,

    pub checked_in: bool,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub sick_hours: f64,
    pub holiday_hours: f64,
    pub unpaid_hours: f64,
    pub other_hours: f64,

    /// Manager corrections; a day can carry an override without the original
    /// category being set.
    pub regular_hours_override: f64,
    pub overtime_hours_override: f64,
    pub sick_hours_override: f64,
    pub holiday_hours_override: f64,
    pub unpaid_hours_override: f64,
}

impl AttendanceRecord {
    /// A record counts towards processing when anything at all was recorded
    /// on it: a check-in, or any hour category above zero. Mirrors the
    /// predicate the MySQL store applies when counting.
    pub fn has_recorded_activity(&self) -> bool {
        self.checked_in
            || self.regular_hours > 0.0
            || self.overtime_hours > 0.0
            || self.sick_hours > 0.0
            || self.holiday_hours > 0.0
            || self.unpaid_hours > 0.0
            || self.other_hours > 0.0
            || self.regular_hours_override > 0.0
            || self.overtime_hours_override > 0.0
            || self.sick_hours_override > 0.0
            || self.holiday_hours_override > 0.0
            || self.unpaid_hours_override > 0.0
    }
}
