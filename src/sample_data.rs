//! Deterministic seed data for demos and tests: one personal calendar, the
//! project calendars of a production, and a week of schedule entries laid
//! out relative to the currently selected week.

use chrono::{Duration, NaiveTime};

use crate::app::{AppState, Project};
use crate::calendar::{Calendar, Event, EventId, PaletteColor};
use crate::ui::week_view::week_of_date;

pub fn add_sample_data(state: &mut AppState) {
    let calendars = [
        ("personal", "My Calendar", PaletteColor::Sky, true),
        ("production", "Production", PaletteColor::Violet, false),
        ("casting", "Casting", PaletteColor::Rose, false),
        ("locations", "Locations", PaletteColor::Amber, false),
        ("post", "Post-Production", PaletteColor::Emerald, false),
    ];
    for (id, name, color, editable) in calendars {
        state.registry.insert(Calendar {
            id: id.to_string(),
            name: name.to_string(),
            color,
            visible: true,
            editable,
        });
    }

    state
        .store
        .set_default_calendar("personal".to_string(), PaletteColor::Sky);
    state.store.set_organizer("Alex Reyes");

    state.project = Some(Project {
        id: "prj-nightfall".to_string(),
        calendars: vec![
            "production".to_string(),
            "casting".to_string(),
            "locations".to_string(),
            "post".to_string(),
        ],
    });

    let week_start = week_of_date(state.selected_date);

    // (title, day, start, end, calendar, location, attendees)
    let events: [(&str, i32, (u32, u32), (u32, u32), &str, Option<&str>, &[&str]); 8] = [
        ("Production Kickoff", 1, (9, 0), (10, 0), "production", None, &["Sam Okafor", "Priya Nair"]),
        ("Budget Review", 1, (14, 0), (15, 30), "production", Some("Production Office"), &[]),
        ("Casting Call", 2, (10, 0), (13, 0), "casting", Some("Stage 2"), &["Dana Whitfield", "Marcus Cole"]),
        ("Table Read", 3, (9, 30), (11, 0), "casting", None, &[]),
        ("Location Scout: Harbor", 3, (13, 0), (16, 0), "locations", Some("East Harbor"), &["Sam Okafor"]),
        ("Wardrobe Fitting", 4, (11, 0), (12, 0), "production", None, &[]),
        ("Dailies Review", 5, (16, 0), (17, 0), "post", Some("Screening Room B"), &[]),
        ("Lunch with Composer", 5, (12, 30), (13, 30), "personal", Some("Downtown Cafe"), &[]),
    ];

    for (i, (title, day, start, end, calendar_id, location, attendees)) in
        events.into_iter().enumerate()
    {
        let Some(start) = NaiveTime::from_hms_opt(start.0, start.1, 0) else { continue };
        let Some(end) = NaiveTime::from_hms_opt(end.0, end.1, 0) else { continue };
        let color = state
            .registry
            .get(calendar_id)
            .map(|c| c.color)
            .unwrap_or(PaletteColor::Slate);

        state.store.insert(Event {
            id: EventId(i as u64 + 1),
            title: title.to_string(),
            start,
            end,
            day,
            date: week_start + Duration::days(i64::from(day) - 1),
            description: None,
            location: location.map(String::from),
            attendees: attendees.iter().map(|a| a.to_string()).collect(),
            organizer: "Alex Reyes".to_string(),
            calendar_id: calendar_id.to_string(),
            color,
        });
    }
}
