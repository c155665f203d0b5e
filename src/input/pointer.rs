//! Pointer gesture handling over the time grid.
//!
//! The shell forwards raw pointer events together with the grid's screen
//! geometry; everything else (hit-testing, snapping, store writes) happens
//! here. Handlers are synchronous and run on the UI thread, so gestures are
//! naturally serialized; a second pointer-down while a gesture is in flight
//! is ignored. There is no cancel path: pointer-up is the only way back to
//! idle.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::app::AppState;
use crate::calendar::{EventId, EventPatch};
use crate::input::gesture::{Gesture, ResizeEdge};
use crate::ui::mapper::{event_layout, offset_to_day, offset_to_time};
use crate::ui::week_view::week_of_date;

/// Height of the grab strip at the top and bottom of an event block.
pub const RESIZE_STRIP_PX: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPoint {
    pub x: f32,
    pub y: f32,
}

/// Screen-space placement of the time grid, reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    EventBody(EventId),
    ResizeHandle(EventId, ResizeEdge),
    EmptySlot { day: i32, time: NaiveTime },
}

/// Resolve a pointer position against the visible blocks of the pointed
/// column. Later-starting events sit on top and win ties.
pub fn hit_test(state: &AppState, point: PointerPoint, metrics: GridMetrics) -> HitTarget {
    let day = offset_to_day(point.x, metrics.left, metrics.width);
    let y = point.y - metrics.top;

    let events = state.store.visible_events_for_day(&state.registry, day);
    for event in events.iter().rev() {
        let layout = event_layout(event.start, event.end);
        let top = layout.top;
        let bottom = layout.top + layout.height;
        if y < top || y > bottom {
            continue;
        }
        if y <= top + RESIZE_STRIP_PX {
            return HitTarget::ResizeHandle(event.id, ResizeEdge::Top);
        }
        if y >= bottom - RESIZE_STRIP_PX {
            return HitTarget::ResizeHandle(event.id, ResizeEdge::Bottom);
        }
        return HitTarget::EventBody(event.id);
    }

    HitTarget::EmptySlot {
        day,
        time: offset_to_time(point.y, metrics.top),
    }
}

/// Date of a grid column within the week currently on screen.
fn date_for_column(selected_date: NaiveDate, day: i32) -> NaiveDate {
    week_of_date(selected_date) + Duration::days(i64::from(day) - 1)
}

/// Begin a gesture. No-op while another gesture is active; if a context menu
/// or color picker is open the click only dismisses it.
pub fn on_pointer_down(state: &mut AppState, point: PointerPoint, metrics: GridMetrics) {
    if state.gesture.is_active() {
        return;
    }
    if state.context_menu.is_some() || state.color_picker.is_some() {
        state.close_popovers();
        return;
    }

    match hit_test(state, point, metrics) {
        HitTarget::EventBody(id) => {
            let Some(event) = state.store.get(id) else { return };
            tracing::debug!("Move gesture started on event {}", id);
            state.selected_event = Some(id);
            state.gesture = Gesture::Move {
                event_id: id,
                grab_start: event.start,
                grab_day: event.day,
                duration_minutes: event.duration_minutes(),
            };
        }
        HitTarget::ResizeHandle(id, edge) => {
            let Some(event) = state.store.get(id) else { return };
            tracing::debug!("Resize gesture started on event {} ({:?} edge)", id, edge);
            state.selected_event = Some(id);
            state.gesture = Gesture::Resize {
                event_id: id,
                edge,
                grab_start: event.start,
                grab_day: event.day,
            };
        }
        HitTarget::EmptySlot { day, time } => {
            let date = date_for_column(state.selected_date, day);
            let end = time + Duration::minutes(crate::ui::mapper::SNAP_MINUTES);
            let draft = state.store.new_draft(day, date, time, end);
            tracing::debug!("Create gesture started at day {} {}", day, time);
            state.gesture = Gesture::Create {
                draft,
                anchor_day: day,
                anchor_start: time,
            };
        }
    }
}

/// Advance the active gesture to a new pointer position, writing the
/// affected fields through the store (or into the draft).
pub fn on_pointer_move(state: &mut AppState, point: PointerPoint, metrics: GridMetrics) {
    match state.gesture.clone() {
        Gesture::Idle => {}
        Gesture::Move {
            event_id,
            duration_minutes,
            ..
        } => {
            let new_start = offset_to_time(point.y, metrics.top);
            let new_end = new_start + Duration::minutes(duration_minutes);
            let new_day = offset_to_day(point.x, metrics.left, metrics.width);
            state.store.update(
                event_id,
                EventPatch {
                    start: Some(new_start),
                    end: Some(new_end),
                    day: Some(new_day),
                    ..EventPatch::default()
                },
            );
        }
        Gesture::Resize { event_id, edge, .. } => {
            let time = offset_to_time(point.y, metrics.top);
            let patch = match edge {
                ResizeEdge::Top => EventPatch {
                    start: Some(time),
                    ..EventPatch::default()
                },
                ResizeEdge::Bottom => EventPatch {
                    end: Some(time),
                    ..EventPatch::default()
                },
            };
            state.store.update(event_id, patch);
        }
        Gesture::Create { anchor_start, .. } => {
            let pointed = offset_to_time(point.y, metrics.top);
            let end = if pointed > anchor_start {
                pointed
            } else {
                anchor_start + Duration::minutes(crate::ui::mapper::SNAP_MINUTES)
            };
            if let Gesture::Create { draft, .. } = &mut state.gesture {
                draft.end = end;
            }
        }
    }
}

/// Release the active gesture. A create-gesture commits its draft with a
/// permanent id and opens the detail view for it; every other gesture just
/// returns to idle without further writes.
pub fn on_pointer_up(state: &mut AppState) -> Option<EventId> {
    match std::mem::take(&mut state.gesture) {
        Gesture::Create { draft, .. } => {
            let id = state.store.commit_draft(draft);
            state.selected_event = Some(id);
            state.detail_event = Some(id);
            Some(id)
        }
        _ => None,
    }
}
