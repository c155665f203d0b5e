use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::calendar_type::{Calendar, CalendarId, PaletteColor};

/// Named, colored, independently toggle-able calendars. Display order is
/// insertion order; project partitioning is computed on top of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarRegistry {
    calendars: Vec<Calendar>,
    /// Count of calendars ever created here, for palette assignment.
    /// Removals do not decrement it.
    created: usize,
}

impl CalendarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a calendar with explicit attributes (sample data, shell setup).
    pub fn insert(&mut self, calendar: Calendar) {
        self.created += 1;
        self.calendars.push(calendar);
    }

    /// Create a user calendar, picking the next palette color by creation
    /// count modulo palette size.
    pub fn create(&mut self, id: impl Into<CalendarId>, name: impl Into<String>) -> CalendarId {
        let id = id.into();
        let calendar = Calendar {
            id: id.clone(),
            name: name.into(),
            color: PaletteColor::by_index(self.created),
            visible: true,
            editable: true,
        };
        self.insert(calendar);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Calendar> {
        self.calendars.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Calendar> {
        self.calendars.iter_mut().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Calendar> {
        self.calendars.iter()
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    /// Flip visibility; returns the new flag, or `None` for an unknown id.
    pub fn toggle_visibility(&mut self, id: &str) -> Option<bool> {
        let calendar = self.get_mut(id)?;
        calendar.visible = !calendar.visible;
        Some(calendar.visible)
    }

    pub fn rename(&mut self, id: &str, name: impl Into<String>) {
        if let Some(calendar) = self.get_mut(id) {
            calendar.name = name.into();
        }
    }

    /// Change the calendar's own color. Events that copied the old color are
    /// corrected by the caller through the event store.
    pub fn set_color(&mut self, id: &str, color: PaletteColor) {
        if let Some(calendar) = self.get_mut(id) {
            calendar.color = color;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.calendars.retain(|c| c.id != id);
    }

    pub fn visible_ids(&self) -> HashSet<CalendarId> {
        self.calendars
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.id.clone())
            .collect()
    }

    /// Partition for display: calendars declared by the current project come
    /// first (in registry order), everything else after.
    pub fn partition_for_project(
        &self,
        project_calendar_ids: &[CalendarId],
    ) -> (Vec<&Calendar>, Vec<&Calendar>) {
        self.calendars
            .iter()
            .partition(|c| project_calendar_ids.contains(&c.id))
    }
}
