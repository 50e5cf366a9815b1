use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the workdays history: the weekly pattern that took effect at
/// `created_at`. Rows are append-only; editing a schedule inserts a new row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkdayRecord {
    pub id: u64,
    pub employee_id: u64,
    pub created_at: NaiveDateTime,

    pub sunday: bool,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
}

impl WorkdayRecord {
    /// Weekday codes (1 = Sunday .. 7 = Saturday) flagged active in this
    /// pattern. Inactive slots are simply absent from the set.
    pub fn active_days(&self) -> BTreeSet<u8> {
        [
            self.sunday,
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
        ]
        .iter()
        .enumerate()
        .filter(|(_, active)| **active)
        .map(|(slot, _)| slot as u8 + 1)
        .collect()
    }
}
