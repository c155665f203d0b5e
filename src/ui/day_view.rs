use chrono::NaiveDate;

use crate::app::{weekday_column, AppState};
use crate::ui::mapper::event_layout;
use crate::ui::week_view::EventBlock;

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    /// Grid column the date falls on, Monday = 1.
    pub day: i32,
    pub is_today: bool,
    pub blocks: Vec<EventBlock>,
}

/// Single-column layout for the selected date. Like the week view, events
/// are picked by their `day` index.
pub fn calculate_layout(state: &AppState) -> DayLayout {
    let date = state.selected_date;
    let day = weekday_column(date);
    let today = chrono::Local::now().date_naive();

    let mut blocks: Vec<EventBlock> = state
        .store
        .visible_events_for_day(&state.registry, day)
        .into_iter()
        .map(|event| {
            let layout = event_layout(event.start, event.end);
            EventBlock {
                event_id: Some(event.id),
                title: event.title.clone(),
                top: layout.top,
                height: layout.height,
                color: event.color,
                calendar_id: event.calendar_id.clone(),
                is_draft: false,
            }
        })
        .collect();

    if let Some(draft) = state.gesture.draft() {
        if draft.day == day {
            let layout = event_layout(draft.start, draft.end);
            blocks.push(EventBlock {
                event_id: None,
                title: draft.title.clone(),
                top: layout.top,
                height: layout.height,
                color: draft.color,
                calendar_id: draft.calendar_id.clone(),
                is_draft: true,
            });
        }
    }

    DayLayout {
        date,
        day,
        is_today: date == today,
        blocks,
    }
}
