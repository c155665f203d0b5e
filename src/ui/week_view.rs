use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::calendar::{CalendarId, PaletteColor};
use crate::ui::mapper::{event_layout, DAYS_PER_WEEK};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    /// 1-based grid column, Monday = 1.
    pub day: i32,
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub blocks: Vec<EventBlock>,
}

/// A positioned block ready for painting. The create-gesture draft shows up
/// with `event_id: None` so the user gets live feedback before commit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event_id: Option<crate::calendar::EventId>,
    pub title: String,
    pub top: f32,
    pub height: f32,
    pub color: PaletteColor,
    pub calendar_id: CalendarId,
    pub is_draft: bool,
}

/// Monday of the week containing `date`.
pub fn week_of_date(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(chrono::Days::new(days_from_monday))
        .unwrap_or(date)
}

/// Seven columns, Monday first. Events land in a column by their `day`
/// index alone; the literal date is not consulted here.
pub fn calculate_layout(state: &AppState) -> WeekLayout {
    let week_start = week_of_date(state.selected_date);
    let today = chrono::Local::now().date_naive();

    let mut days = Vec::new();
    for day in 1..=DAYS_PER_WEEK {
        let Some(date) = week_start.checked_add_days(chrono::Days::new(day as u64 - 1)) else {
            continue;
        };

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

        days.push(DayColumn {
            day,
            date,
            is_selected: date == state.selected_date,
            is_today: date == today,
            blocks,
        });
    }

    WeekLayout { week_start, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use pretty_assertions::assert_eq;
    use crate::calendar::PaletteColor;
    use crate::input::gesture::Gesture;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn base_state() -> AppState {
        let mut state = AppState::new();
        state.registry.create("personal", "My Calendar");
        state
            .store
            .set_default_calendar("personal".to_string(), PaletteColor::Sky);
        state.selected_date = date(2025, 3, 12);
        state
    }

    #[test]
    fn week_of_date_returns_monday() {
        let wednesday = date(2025, 3, 12);
        let monday = week_of_date(wednesday);

        assert_eq!(monday, date(2025, 3, 10));
        assert_eq!(monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn week_of_date_for_monday_returns_same_date() {
        let monday = date(2025, 3, 10);

        assert_eq!(week_of_date(monday), monday);
    }

    #[test]
    fn week_layout_has_seven_monday_first_columns() {
        let state = base_state();

        let layout = calculate_layout(&state);

        assert_eq!(layout.days.len(), 7);
        assert_eq!(layout.days[0].date.weekday(), Weekday::Mon);
        assert_eq!(layout.days[6].date.weekday(), Weekday::Sun);
        let columns: Vec<i32> = layout.days.iter().map(|d| d.day).collect();
        assert_eq!(columns, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn selected_date_is_marked_once() {
        let state = base_state();

        let layout = calculate_layout(&state);

        let selected: Vec<&DayColumn> = layout.days.iter().filter(|d| d.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2025, 3, 12));
    }

    #[test]
    fn events_are_placed_by_column_not_by_date() {
        let mut state = base_state();
        // Literal date is a week later; the day index still says Tuesday.
        state
            .store
            .create(2, date(2025, 3, 18), time(9, 0), time(10, 0));

        let layout = calculate_layout(&state);

        assert_eq!(layout.days[1].blocks.len(), 1);
    }

    #[test]
    fn blocks_carry_mapper_geometry() {
        let mut state = base_state();
        state
            .store
            .create(3, date(2025, 3, 12), time(9, 30), time(11, 0));

        let layout = calculate_layout(&state);

        let block = &layout.days[2].blocks[0];
        assert_eq!(block.top, 120.0);
        assert_eq!(block.height, 120.0);
        assert!(!block.is_draft);
    }

    #[test]
    fn hidden_calendar_events_are_not_laid_out() {
        let mut state = base_state();
        state
            .store
            .create(3, date(2025, 3, 12), time(9, 0), time(10, 0));
        state.registry.toggle_visibility("personal");

        let layout = calculate_layout(&state);

        assert!(layout.days.iter().all(|d| d.blocks.is_empty()));
    }

    #[test]
    fn an_active_draft_appears_in_its_column() {
        let mut state = base_state();
        let draft = state
            .store
            .new_draft(4, date(2025, 3, 13), time(13, 0), time(14, 0));
        state.gesture = Gesture::Create {
            draft,
            anchor_day: 4,
            anchor_start: time(13, 0),
        };

        let layout = calculate_layout(&state);

        let blocks = &layout.days[3].blocks;
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_draft);
        assert_eq!(blocks[0].event_id, None);
        assert_eq!(blocks[0].top, 400.0);
    }

    #[test]
    fn blocks_within_a_column_are_ordered_by_start() {
        let mut state = base_state();
        state
            .store
            .create(2, date(2025, 3, 11), time(14, 0), time(15, 0));
        state
            .store
            .create(2, date(2025, 3, 11), time(9, 0), time(10, 0));

        let layout = calculate_layout(&state);

        let tops: Vec<f32> = layout.days[1].blocks.iter().map(|b| b.top).collect();
        assert_eq!(tops, vec![80.0, 480.0]);
    }
}
