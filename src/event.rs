use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generic calendar event spanning one or more days. Both endpoints are
/// inclusive. Events are display data only; they do not affect attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub color: String,
}

impl Event {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start_date,
            end_date,
            attendees: Vec::new(),
            color: color.into(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}
