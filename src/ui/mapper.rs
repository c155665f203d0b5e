//! Conversions between wall-clock time and grid pixels.
//!
//! The grid geometry is fixed: the day column starts at 08:00, one hour is
//! 80 px tall, and the week is 7 equal columns. Every pointer-derived time
//! snaps to 15-minute increments.

use chrono::{NaiveTime, Timelike};

pub const DAY_START_HOUR: i64 = 8;
pub const PX_PER_HOUR: f32 = 80.0;
pub const SNAP_MINUTES: i64 = 15;
pub const DAYS_PER_WEEK: i32 = 7;

const DAY_START_MINUTES: i64 = DAY_START_HOUR * 60;
const LAST_SLOT_MINUTES: i64 = 24 * 60 - SNAP_MINUTES;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLayout {
    pub top: f32,
    pub height: f32,
}

pub fn minutes_of(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Vertical offset of a time from the top of the grid. Times before the day
/// start map to negative offsets; nothing clamps them.
pub fn time_to_offset(time: NaiveTime) -> f32 {
    (minutes_of(time) - DAY_START_MINUTES) as f32 / 60.0 * PX_PER_HOUR
}

/// Inverse of [`time_to_offset`]: pixel delta below `grid_top` becomes
/// minutes past the day start, snapped to the nearest 15-minute slot.
/// The snapped total is clamped into one day, since a `NaiveTime` cannot
/// express anything outside 00:00..=23:45.
pub fn offset_to_time(y: f32, grid_top: f32) -> NaiveTime {
    let delta_minutes = (y - grid_top) / PX_PER_HOUR * 60.0;
    let raw = DAY_START_MINUTES as f32 + delta_minutes;
    let snapped = (raw / SNAP_MINUTES as f32).round() as i64 * SNAP_MINUTES;
    let clamped = snapped.clamp(0, LAST_SLOT_MINUTES);
    NaiveTime::from_hms_opt((clamped / 60) as u32, (clamped % 60) as u32, 0)
        .expect("clamped minutes are always a valid time")
}

/// 1-based day column under a pointer X position. The grid is 7 equal
/// columns; there is deliberately no bounds clamp, so a pointer that leaves
/// the grid horizontally yields an index outside 1..=7.
pub fn offset_to_day(x: f32, grid_left: f32, grid_width: f32) -> i32 {
    let column_width = grid_width / DAYS_PER_WEEK as f32;
    ((x - grid_left) / column_width).floor() as i32 + 1
}

/// Pixel placement of an event block. The height comes straight from the
/// minute difference, so an inverted range yields a negative height.
pub fn event_layout(start: NaiveTime, end: NaiveTime) -> EventLayout {
    EventLayout {
        top: time_to_offset(start),
        height: (minutes_of(end) - minutes_of(start)) as f32 / 60.0 * PX_PER_HOUR,
    }
}
