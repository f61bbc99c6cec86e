//! Records exchanged with the class API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A physical room that classes can be scheduled into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub name: String,
    pub capacity: i64,
    pub equipment: String,
}

/// One scheduled occurrence of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Server-assigned row id, used for deletion
    pub id: i64,
    /// Course code, e.g. "CS101"
    pub class_id: String,
    pub name: String,
    pub teacher: String,
    /// Name of the classroom; not checked against the classroom list
    pub room_name: String,
    /// Weekday name as stored by the backend ("Monday".."Friday")
    pub day: String,
    /// "HH:MM"
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Aggregate counters from `/dashboard-stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalClasses")]
    pub total_classes: i64,

    #[serde(rename = "totalClassrooms")]
    pub total_classrooms: i64,
}

/// Raw field/value pairs of a submitted form, forwarded as a flat JSON object.
pub type FormFields = BTreeMap<String, String>;

/// The teaching days shown on the timetable and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days in column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// The day name exactly as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Three-letter label used under the report bars.
    pub fn short(&self) -> &'static str {
        &self.as_str()[..3]
    }

    /// Returns true if `day` names this weekday (exact, case-sensitive).
    pub fn matches(&self, day: &str) -> bool {
        self.as_str() == day
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClassSession {
    /// The hour a session starts in, taken from the digits before the first ':'.
    ///
    /// Leading whitespace is skipped and anything after the first non-digit is
    /// ignored, so "09:00", "9:30" and "14" all parse. Returns `None` when the
    /// start time has no leading digits.
    pub fn start_hour(&self) -> Option<u32> {
        let head = self.start_time.split(':').next().unwrap_or("");
        let digits: String = head
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}
