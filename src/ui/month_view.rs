use chrono::{Datelike, NaiveDate};

use crate::app::AppState;
use crate::calendar::{EventId, PaletteColor};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_current_month: bool,
    pub events: Vec<MonthEntry>,
}

/// Compact per-cell entry; the month grid has no room for time geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthEntry {
    pub event_id: EventId,
    pub title: String,
    pub color: PaletteColor,
}

/// Monday-first month grid. Unlike the time grid, cells are keyed by the
/// literal `date` field of each event.
pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let year = state.selected_date.year();
    let month = state.selected_date.month();
    let today = chrono::Local::now().date_naive();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout {
            year,
            month,
            weeks: Vec::new(),
        };
    };

    let leading = first_day.weekday().num_days_from_monday() as u64;
    let Some(grid_start) = first_day.checked_sub_days(chrono::Days::new(leading)) else {
        return MonthLayout {
            year,
            month,
            weeks: Vec::new(),
        };
    };

    let mut weeks = Vec::new();
    let mut cursor = grid_start;
    loop {
        let mut days = Vec::new();
        for _ in 0..7 {
            let events = state
                .store
                .visible_events_on_date(&state.registry, cursor)
                .into_iter()
                .map(|event| MonthEntry {
                    event_id: event.id,
                    title: event.title.clone(),
                    color: event.color,
                })
                .collect();

            days.push(DayCell {
                date: cursor,
                is_selected: cursor == state.selected_date,
                is_today: cursor == today,
                is_current_month: cursor.month() == month,
                events,
            });

            let Some(next) = cursor.checked_add_days(chrono::Days::new(1)) else {
                return MonthLayout { year, month, weeks };
            };
            cursor = next;
        }
        weeks.push(Week { days });

        if cursor.month() != month || cursor.year() != year {
            break;
        }
    }

    MonthLayout { year, month, weeks }
}
