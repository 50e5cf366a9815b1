use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub employee_id: u64,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,

    /// Employment begins here; an employee without a start date has no valid
    /// working periods.
    pub start_date: Option<NaiveDate>,
    pub leaving_date: Option<NaiveDate>,

    pub status: String,
}
