use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::calendar_type::{CalendarId, PaletteColor};

/// Stable event identifier, assigned by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Wall-clock start and end on the same day. `start < end` is expected
    /// but not enforced here; resize gestures can legitimately pass through
    /// inverted states.
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// 1-based grid column, Monday = 1. Tracked independently of `date`:
    /// drag gestures move the column without touching the literal date, and
    /// a drag that leaves the grid can push this outside 1..=7.
    pub day: i32,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub organizer: String,
    /// Weak lookup key into the calendar registry. Deleting the calendar
    /// orphans the event rather than removing it.
    pub calendar_id: CalendarId,
    /// Copied from the calendar at assignment; corrected in bulk when the
    /// calendar is recolored.
    pub color: PaletteColor,
}

impl Event {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn overlaps(&self, other: &Event) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// Placeholder materialized while a create-gesture is in flight. Lives inside
/// the gesture value, outside the event map, until the store promotes it with
/// a permanent id on release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEvent {
    pub title: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub day: i32,
    pub date: NaiveDate,
    pub calendar_id: CalendarId,
    pub color: PaletteColor,
}

/// Partial update for [`Event`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub day: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub attendees: Option<Vec<String>>,
    pub organizer: Option<String>,
    pub calendar_id: Option<CalendarId>,
    pub color: Option<PaletteColor>,
}

impl EventPatch {
    pub fn times(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }
}
