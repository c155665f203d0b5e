use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use super::calendar_type::{CalendarId, PaletteColor};
use super::event::{DraftEvent, Event, EventId, EventPatch};
use super::registry::CalendarRegistry;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("unknown event id {0}")]
    UnknownEvent(EventId),
    #[error("event would end at or before it starts ({start}..{end})")]
    InvertedRange { start: NaiveTime, end: NaiveTime },
}

/// The scheduled-event collection. Owns every event exclusively; calendars
/// are referenced by id only. Identifiers come from a monotonic counter, so
/// an id is never reused after deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStore {
    events: HashMap<EventId, Event>,
    next_id: u64,
    default_calendar: CalendarId,
    default_color: PaletteColor,
    organizer: String,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
            next_id: 1,
            default_calendar: "personal".to_string(),
            default_color: PaletteColor::Sky,
            organizer: String::new(),
        }
    }

    /// Calendar newly created events are filed under, with the color copied
    /// onto them.
    pub fn set_default_calendar(&mut self, id: CalendarId, color: PaletteColor) {
        self.default_calendar = id;
        self.default_color = color;
    }

    pub fn set_organizer(&mut self, organizer: impl Into<String>) {
        self.organizer = organizer.into();
    }

    fn allocate_id(&mut self) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn create(&mut self, day: i32, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> EventId {
        let id = self.allocate_id();
        let event = Event {
            id,
            title: "New Event".to_string(),
            start,
            end,
            day,
            date,
            description: None,
            location: None,
            attendees: vec![],
            organizer: self.organizer.clone(),
            calendar_id: self.default_calendar.clone(),
            color: self.default_color,
        };
        tracing::info!("Creating event {}: {}", id, event.title);
        self.events.insert(id, event);
        id
    }

    /// Insert a fully-formed event, bumping the counter past its id.
    /// Used by sample data and by shells that restore a session.
    pub fn insert(&mut self, event: Event) {
        self.next_id = self.next_id.max(event.id.0 + 1);
        self.events.insert(event.id, event);
    }

    /// Placeholder for a create-gesture, filed under the default calendar.
    /// It stays outside the event map until [`Self::commit_draft`].
    pub fn new_draft(
        &self,
        day: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> DraftEvent {
        DraftEvent {
            title: "New Event".to_string(),
            start,
            end,
            day,
            date,
            calendar_id: self.default_calendar.clone(),
            color: self.default_color,
        }
    }

    /// Promote a create-gesture placeholder into a permanent event.
    pub fn commit_draft(&mut self, draft: DraftEvent) -> EventId {
        let id = self.allocate_id();
        tracing::info!("Committing draft \"{}\" as event {}", draft.title, id);
        let event = Event {
            id,
            title: draft.title,
            start: draft.start,
            end: draft.end,
            day: draft.day,
            date: draft.date,
            description: None,
            location: None,
            attendees: vec![],
            organizer: self.organizer.clone(),
            calendar_id: draft.calendar_id,
            color: draft.color,
        };
        self.events.insert(id, event);
        id
    }

    /// Merge `patch` into the event. Permissive: a patch that inverts the
    /// time range is applied as-is, matching drag/resize behavior.
    pub fn update(&mut self, id: EventId, patch: EventPatch) {
        let Some(event) = self.events.get_mut(&id) else {
            return;
        };
        apply_patch(event, patch);
    }

    /// Validating entry point for form-driven edits: refuses a merge that
    /// would leave the event ending at or before its start.
    pub fn try_update(&mut self, id: EventId, patch: EventPatch) -> Result<(), StoreError> {
        let Some(event) = self.events.get(&id) else {
            return Err(StoreError::UnknownEvent(id));
        };
        let start = patch.start.unwrap_or(event.start);
        let end = patch.end.unwrap_or(event.end);
        if end <= start {
            return Err(StoreError::InvertedRange { start, end });
        }
        self.update(id, patch);
        Ok(())
    }

    pub fn duplicate(&mut self, id: EventId) -> Option<EventId> {
        let mut copy = self.events.get(&id)?.clone();
        let new_id = self.allocate_id();
        copy.id = new_id;
        copy.title.push_str(" (Copy)");
        tracing::info!("Duplicated event {} as {}", id, new_id);
        self.events.insert(new_id, copy);
        Some(new_id)
    }

    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let removed = self.events.remove(&id);
        if removed.is_some() {
            tracing::info!("Deleting event {}", id);
        }
        removed
    }

    /// Repaint every event owned by `calendar_id`. Events on other calendars
    /// are untouched.
    pub fn recolor_events(&mut self, calendar_id: &str, color: PaletteColor) {
        for event in self.events.values_mut() {
            if event.calendar_id == calendar_id {
                event.color = color;
            }
        }
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    /// Events whose calendar is currently visible. An event referencing a
    /// calendar the registry no longer knows is orphaned and filtered out.
    pub fn visible_events<'a>(&'a self, registry: &CalendarRegistry) -> Vec<&'a Event> {
        let visible = registry.visible_ids();
        let mut events: Vec<&Event> = self
            .events
            .values()
            .filter(|e| visible.contains(&e.calendar_id))
            .collect();
        events.sort_by_key(|e| (e.day, e.start, e.id));
        events
    }

    /// Visible events in one grid column, ordered by start time.
    pub fn visible_events_for_day<'a>(
        &'a self,
        registry: &CalendarRegistry,
        day: i32,
    ) -> Vec<&'a Event> {
        let mut events: Vec<&Event> = self
            .visible_events(registry)
            .into_iter()
            .filter(|e| e.day == day)
            .collect();
        events.sort_by_key(|e| (e.start, e.id));
        events
    }

    /// Visible events whose literal date matches, ordered by start time.
    pub fn visible_events_on_date<'a>(
        &'a self,
        registry: &CalendarRegistry,
        date: NaiveDate,
    ) -> Vec<&'a Event> {
        let mut events: Vec<&Event> = self
            .visible_events(registry)
            .into_iter()
            .filter(|e| e.date == date)
            .collect();
        events.sort_by_key(|e| (e.start, e.id));
        events
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_patch(event: &mut Event, patch: EventPatch) {
    if let Some(title) = patch.title {
        event.title = title;
    }
    if let Some(start) = patch.start {
        event.start = start;
    }
    if let Some(end) = patch.end {
        event.end = end;
    }
    if let Some(day) = patch.day {
        event.day = day;
    }
    if let Some(date) = patch.date {
        event.date = date;
    }
    if let Some(description) = patch.description {
        event.description = description;
    }
    if let Some(location) = patch.location {
        event.location = location;
    }
    if let Some(attendees) = patch.attendees {
        event.attendees = attendees;
    }
    if let Some(organizer) = patch.organizer {
        event.organizer = organizer;
    }
    if let Some(calendar_id) = patch.calendar_id {
        event.calendar_id = calendar_id;
    }
    if let Some(color) = patch.color {
        event.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn store_with_event() -> (EventStore, EventId) {
        let mut store = EventStore::new();
        let id = store.create(2, date(2025, 3, 11), time(9, 0), time(10, 0));
        (store, id)
    }

    fn registry_with(ids: &[&str]) -> CalendarRegistry {
        let mut registry = CalendarRegistry::new();
        for id in ids {
            registry.create(id.to_string(), id.to_string());
        }
        registry
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = EventStore::new();

        let first = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));
        let second = store.create(1, date(2025, 3, 10), time(11, 0), time(12, 0));

        assert_eq!(first, EventId(1));
        assert_eq!(second, EventId(2));
    }

    #[test]
    fn ids_are_not_reused_after_deletion() {
        let mut store = EventStore::new();
        let first = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));
        store.remove(first);

        let second = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));

        assert_eq!(second, EventId(2));
    }

    #[test]
    fn create_uses_the_default_calendar() {
        let mut store = EventStore::new();
        store.set_default_calendar("personal".to_string(), PaletteColor::Sky);

        let id = store.create(3, date(2025, 3, 12), time(14, 0), time(15, 0));

        let event = store.get(id).unwrap();
        assert_eq!(event.calendar_id, "personal");
        assert_eq!(event.color, PaletteColor::Sky);
        assert_eq!(event.title, "New Event");
    }

    #[test]
    fn insert_bumps_the_id_counter() {
        let (mut store, id) = store_with_event();
        let mut seeded = store.get(id).unwrap().clone();
        seeded.id = EventId(40);
        store.insert(seeded);

        let next = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));

        assert_eq!(next, EventId(41));
    }

    #[test]
    fn update_merges_only_patched_fields() {
        let (mut store, id) = store_with_event();

        store.update(
            id,
            EventPatch {
                title: Some("Table Read".to_string()),
                location: Some(Some("Stage 4".to_string())),
                ..EventPatch::default()
            },
        );

        let event = store.get(id).unwrap();
        assert_eq!(event.title, "Table Read");
        assert_eq!(event.location.as_deref(), Some("Stage 4"));
        assert_eq!(event.start, time(9, 0));
        assert_eq!(event.day, 2);
    }

    #[test]
    fn update_accepts_an_inverted_range() {
        let (mut store, id) = store_with_event();

        store.update(id, EventPatch::times(time(12, 0), time(11, 0)));

        let event = store.get(id).unwrap();
        assert_eq!(event.start, time(12, 0));
        assert_eq!(event.end, time(11, 0));
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let (mut store, _) = store_with_event();

        store.update(EventId(99), EventPatch::times(time(1, 0), time(2, 0)));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn try_update_rejects_an_inverted_range() {
        let (mut store, id) = store_with_event();

        let result = store.try_update(id, EventPatch::times(time(12, 0), time(11, 0)));

        assert_eq!(
            result,
            Err(StoreError::InvertedRange {
                start: time(12, 0),
                end: time(11, 0),
            })
        );
        assert_eq!(store.get(id).unwrap().start, time(9, 0));
    }

    #[test]
    fn try_update_rejects_a_zero_duration_range() {
        let (mut store, id) = store_with_event();

        let result = store.try_update(id, EventPatch::times(time(9, 0), time(9, 0)));

        assert!(result.is_err());
    }

    #[test]
    fn try_update_checks_the_merged_range() {
        let (mut store, id) = store_with_event();

        // Existing end is 10:00; moving start past it must fail even though
        // the patch itself holds no end.
        let result = store.try_update(
            id,
            EventPatch {
                start: Some(time(10, 30)),
                ..EventPatch::default()
            },
        );

        assert!(result.is_err());
    }

    #[test]
    fn try_update_applies_a_valid_patch() {
        let (mut store, id) = store_with_event();

        store
            .try_update(id, EventPatch::times(time(9, 15), time(9, 45)))
            .unwrap();

        assert_eq!(store.get(id).unwrap().start, time(9, 15));
    }

    #[test]
    fn try_update_of_unknown_id_fails() {
        let (mut store, _) = store_with_event();

        let result = store.try_update(EventId(99), EventPatch::default());

        assert_eq!(result, Err(StoreError::UnknownEvent(EventId(99))));
    }

    #[test]
    fn duplicate_clones_fields_and_suffixes_title() {
        let (mut store, id) = store_with_event();
        store.update(
            id,
            EventPatch {
                title: Some("Casting Call".to_string()),
                attendees: Some(vec!["Dana".to_string(), "Lee".to_string()]),
                ..EventPatch::default()
            },
        );

        let copy_id = store.duplicate(id).unwrap();

        let original = store.get(id).unwrap();
        let copy = store.get(copy_id).unwrap();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Casting Call (Copy)");
        assert_eq!(copy.start, original.start);
        assert_eq!(copy.end, original.end);
        assert_eq!(copy.day, original.day);
        assert_eq!(copy.attendees, original.attendees);
        assert_eq!(copy.calendar_id, original.calendar_id);
    }

    #[test]
    fn duplicate_of_unknown_id_is_none() {
        let (mut store, _) = store_with_event();

        assert_eq!(store.duplicate(EventId(99)), None);
    }

    #[test]
    fn remove_deletes_the_event() {
        let (mut store, id) = store_with_event();

        let removed = store.remove(id);

        assert!(removed.is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn commit_draft_assigns_a_fresh_id() {
        let (mut store, first) = store_with_event();
        let draft = DraftEvent {
            title: "New Event".to_string(),
            start: time(13, 0),
            end: time(13, 15),
            day: 4,
            date: date(2025, 3, 13),
            calendar_id: "personal".to_string(),
            color: PaletteColor::Sky,
        };

        let id = store.commit_draft(draft);

        assert_ne!(id, first);
        let event = store.get(id).unwrap();
        assert_eq!(event.start, time(13, 0));
        assert_eq!(event.day, 4);
    }

    #[test]
    fn recolor_events_is_scoped_to_one_calendar() {
        let mut store = EventStore::new();
        store.set_default_calendar("production".to_string(), PaletteColor::Violet);
        let a = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));
        store.set_default_calendar("casting".to_string(), PaletteColor::Rose);
        let b = store.create(2, date(2025, 3, 11), time(9, 0), time(10, 0));

        store.recolor_events("production", PaletteColor::Amber);

        assert_eq!(store.get(a).unwrap().color, PaletteColor::Amber);
        assert_eq!(store.get(b).unwrap().color, PaletteColor::Rose);
    }

    #[test]
    fn visible_events_excludes_hidden_calendars() {
        let mut registry = registry_with(&["personal", "production"]);
        let mut store = EventStore::new();
        store.set_default_calendar("personal".to_string(), PaletteColor::Sky);
        let mine = store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));
        store.set_default_calendar("production".to_string(), PaletteColor::Violet);
        store.create(1, date(2025, 3, 10), time(11, 0), time(12, 0));

        registry.toggle_visibility("production");
        let visible = store.visible_events(&registry);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, mine);
    }

    #[test]
    fn toggling_back_restores_events_unchanged() {
        let mut registry = registry_with(&["personal"]);
        let (store, id) = {
            let mut store = EventStore::new();
            store.set_default_calendar("personal".to_string(), PaletteColor::Sky);
            let id = store.create(2, date(2025, 3, 11), time(9, 0), time(10, 0));
            (store, id)
        };
        let before = store.get(id).unwrap().clone();

        registry.toggle_visibility("personal");
        assert!(store.visible_events(&registry).is_empty());

        registry.toggle_visibility("personal");
        let visible = store.visible_events(&registry);
        assert_eq!(visible.len(), 1);
        assert_eq!(*visible[0], before);
    }

    #[test]
    fn orphaned_events_are_invisible() {
        let mut registry = registry_with(&["personal"]);
        let mut store = EventStore::new();
        store.set_default_calendar("personal".to_string(), PaletteColor::Sky);
        store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));

        registry.remove("personal");

        assert!(store.visible_events(&registry).is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn visible_events_for_day_filters_by_column() {
        let registry = registry_with(&["personal"]);
        let mut store = EventStore::new();
        store.set_default_calendar("personal".to_string(), PaletteColor::Sky);
        store.create(1, date(2025, 3, 10), time(9, 0), time(10, 0));
        let tuesday = store.create(2, date(2025, 3, 11), time(9, 0), time(10, 0));

        let events = store.visible_events_for_day(&registry, 2);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, tuesday);
    }

    #[test]
    fn visible_events_on_date_uses_the_literal_date() {
        let registry = registry_with(&["personal"]);
        let mut store = EventStore::new();
        store.set_default_calendar("personal".to_string(), PaletteColor::Sky);
        // Same column, different literal dates.
        let this_week = store.create(3, date(2025, 3, 12), time(9, 0), time(10, 0));
        store.create(3, date(2025, 3, 19), time(9, 0), time(10, 0));

        let events = store.visible_events_on_date(&registry, date(2025, 3, 12));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, this_week);
    }
}
