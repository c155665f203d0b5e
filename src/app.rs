use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{
    Calendar, CalendarId, CalendarRegistry, Event, EventId, EventStore, PaletteColor,
};
use crate::input::context_menu::ContextMenu;
use crate::input::gesture::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Week,
    Day,
}

/// The production the dashboard currently has open. Read-only here: the
/// calendar ids it declares only drive display ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub calendars: Vec<CalendarId>,
}

/// 1-based grid column for a date, Monday = 1.
pub fn weekday_column(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_monday() as i32 + 1
}

pub struct AppState {
    pub view: ViewType,
    pub selected_date: NaiveDate,
    pub store: EventStore,
    pub registry: CalendarRegistry,
    pub gesture: Gesture,
    pub selected_event: Option<EventId>,
    /// Event whose detail panel is open; set automatically when a
    /// create-gesture commits.
    pub detail_event: Option<EventId>,
    pub context_menu: Option<ContextMenu>,
    /// Calendar whose color picker popover is open.
    pub color_picker: Option<CalendarId>,
    pub project: Option<Project>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: ViewType::Week,
            selected_date: Local::now().date_naive(),
            store: EventStore::new(),
            registry: CalendarRegistry::new(),
            gesture: Gesture::Idle,
            selected_event: None,
            detail_event: None,
            context_menu: None,
            color_picker: None,
            project: None,
        }
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    /// Toolbar "new event": a default one-hour slot on the selected date's
    /// column, filed under the default calendar.
    pub fn create_event(&mut self) -> EventId {
        let day = weekday_column(self.selected_date);
        let start = NaiveTime::from_hms_opt(9, 0, 0).expect("valid default start");
        let end = NaiveTime::from_hms_opt(10, 0, 0).expect("valid default end");
        let id = self.store.create(day, self.selected_date, start, end);
        self.selected_event = Some(id);
        id
    }

    /// Delete an event and drop every piece of UI state still pointing at it.
    pub fn delete_event(&mut self, id: EventId) {
        self.store.remove(id);
        if self.selected_event == Some(id) {
            self.selected_event = None;
        }
        if self.detail_event == Some(id) {
            self.detail_event = None;
        }
        if self.context_menu.as_ref().is_some_and(|m| m.event_id == id) {
            self.context_menu = None;
        }
    }

    pub fn duplicate_event(&mut self, id: EventId) -> Option<EventId> {
        self.store.duplicate(id)
    }

    pub fn toggle_calendar(&mut self, id: &str) -> Option<bool> {
        self.registry.toggle_visibility(id)
    }

    pub fn rename_calendar(&mut self, id: &str, name: impl Into<String>) {
        self.registry.rename(id, name);
    }

    /// Recolor a calendar and correct the color copied onto its events.
    pub fn recolor_calendar(&mut self, id: &str, color: PaletteColor) {
        self.registry.set_color(id, color);
        self.store.recolor_events(id, color);
        self.color_picker = None;
    }

    pub fn create_calendar(&mut self, id: impl Into<CalendarId>, name: impl Into<String>) -> CalendarId {
        self.registry.create(id, name)
    }

    pub fn visible_events(&self) -> Vec<&Event> {
        self.store.visible_events(&self.registry)
    }

    /// Calendars in display order: the current project's first, then the
    /// rest. With no project open, registry order is kept as-is.
    pub fn partitioned_calendars(&self) -> Vec<&Calendar> {
        match &self.project {
            Some(project) => {
                let (mut first, rest) = self.registry.partition_for_project(&project.calendars);
                first.extend(rest);
                first
            }
            None => self.registry.iter().collect(),
        }
    }

    pub fn close_popovers(&mut self) {
        self.context_menu = None;
        self.color_picker = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
