use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{DraftEvent, EventId};

/// Which edge of an event block a resize gesture grabbed. The top handle
/// always edits the start time and the bottom handle the end time, even when
/// the resulting range comes out inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    Top,
    Bottom,
}

/// One continuous pointer interaction. Exactly one gesture can be in flight,
/// enforced by this being a single value owned by the app state rather than
/// anything global.
///
/// `grab_start` / `grab_day` hold the event's start time and column as they
/// were when the gesture began; they are carried for a future undo path and
/// are not used for rollback today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    Idle,
    Move {
        event_id: EventId,
        grab_start: NaiveTime,
        grab_day: i32,
        /// Captured once at pointer-down; every subsequent move re-derives
        /// the end time from this, so moving never changes the duration.
        duration_minutes: i64,
    },
    Resize {
        event_id: EventId,
        edge: ResizeEdge,
        grab_start: NaiveTime,
        grab_day: i32,
    },
    Create {
        draft: DraftEvent,
        anchor_day: i32,
        anchor_start: NaiveTime,
    },
}

impl Gesture {
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    /// The event a move/resize gesture is writing to, if any.
    pub fn target(&self) -> Option<EventId> {
        match self {
            Gesture::Move { event_id, .. } | Gesture::Resize { event_id, .. } => Some(*event_id),
            Gesture::Idle | Gesture::Create { .. } => None,
        }
    }

    pub fn draft(&self) -> Option<&DraftEvent> {
        match self {
            Gesture::Create { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Gesture::Idle
    }
}
