//! Right-click menu over event blocks. Opening and closing is independent of
//! the drag state machine; actions either mutate the app state directly or
//! bubble a request up to the dashboard shell.

use crate::app::AppState;
use crate::calendar::EventId;
use crate::input::pointer::{hit_test, GridMetrics, HitTarget, PointerPoint};

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub event_id: EventId,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuAction {
    Edit,
    Duplicate,
    Delete,
    Email,
    Print,
}

/// Work the engine cannot do itself; the shell owns mail and printing.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellRequest {
    EmailGuests(EventId),
    Print(EventId),
}

/// Right-click: open the menu when the pointer is over an event block (body
/// or handle), otherwise close whatever menu is showing.
pub fn on_secondary_click(state: &mut AppState, point: PointerPoint, metrics: GridMetrics) {
    match hit_test(state, point, metrics) {
        HitTarget::EventBody(id) | HitTarget::ResizeHandle(id, _) => {
            state.context_menu = Some(ContextMenu {
                event_id: id,
                x: point.x,
                y: point.y,
            });
        }
        HitTarget::EmptySlot { .. } => {
            state.context_menu = None;
        }
    }
}

/// Run a menu entry against the menu's target event and close the menu.
/// Email/Print are returned to the shell instead of handled here.
pub fn apply_context_action(
    state: &mut AppState,
    action: ContextMenuAction,
) -> Option<ShellRequest> {
    let menu = state.context_menu.take()?;
    let id = menu.event_id;

    match action {
        ContextMenuAction::Edit => {
            state.detail_event = Some(id);
            None
        }
        ContextMenuAction::Duplicate => {
            state.duplicate_event(id);
            None
        }
        ContextMenuAction::Delete => {
            state.delete_event(id);
            None
        }
        ContextMenuAction::Email => Some(ShellRequest::EmailGuests(id)),
        ContextMenuAction::Print => Some(ShellRequest::Print(id)),
    }
}
