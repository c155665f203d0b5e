use std::env;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use callsheet::{
    app::{AppState, ViewType},
    calendar::Event,
    sample_data::add_sample_data,
    storage::config::Config,
    ui::week_view,
};

#[derive(Clone, Copy)]
pub enum CliMode {
    Default { sample: bool },
    AgendaDate { date: NaiveDate, sample: bool },
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut sample = false;
    let mut agenda_date = None;
    let mut args = env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--agenda" => {
                let target_date = if let Some(next) = args.peek() {
                    if !next.starts_with("--") {
                        let date_str = args.next().expect("peeked value must exist");
                        NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                            .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?
                    } else {
                        Local::now().date_naive()
                    }
                } else {
                    Local::now().date_naive()
                };
                agenda_date = Some(target_date);
            }
            "--help" => {
                println!("Usage: callsheet [--agenda [YYYY/MM/DD]] [--sample]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let Some(date) = agenda_date {
        Ok(CliMode::AgendaDate { date, sample })
    } else {
        Ok(CliMode::Default { sample })
    }
}

fn build_state(sample: bool) -> anyhow::Result<AppState> {
    let config = Config::load_or_create().context("loading configuration")?;

    let mut state = AppState::new();
    if sample {
        add_sample_data(&mut state);
    } else {
        state.registry.create(
            config.calendars.default.clone(),
            config.calendars.default.clone(),
        );
    }

    if let Some(calendar) = state.registry.get(&config.calendars.default) {
        let color = calendar.color;
        state
            .store
            .set_default_calendar(config.calendars.default.clone(), color);
    }
    state.view = match config.ui.default_view.as_str() {
        "Day" => ViewType::Day,
        "Month" => ViewType::Month,
        _ => ViewType::Week,
    };

    Ok(state)
}

/// Default mode: a textual dump of the current week, one section per column.
pub fn run_week_mode(sample: bool) -> anyhow::Result<()> {
    let state = build_state(sample)?;
    print!("{}", format_week_text(&state));
    Ok(())
}

pub fn run_agenda_mode(date: NaiveDate, sample: bool) -> anyhow::Result<()> {
    let mut state = build_state(sample)?;
    state.selected_date = date;

    let events = state.store.visible_events_on_date(&state.registry, date);
    print!("{}", format_agenda_text(date, &events));
    Ok(())
}

fn format_week_text(state: &AppState) -> String {
    let week_start = week_view::week_of_date(state.selected_date);
    let mut lines = Vec::new();
    lines.push(format!("Week of {}", week_start.format("%B %d, %Y")));

    for day in 1..=7 {
        let date = week_start + chrono::Duration::days(day - 1);
        lines.push(String::new());
        lines.push(format!("{}", date.format("%a %Y-%m-%d")));

        let events = state
            .store
            .visible_events_for_day(&state.registry, day as i32);
        if events.is_empty() {
            lines.push("  (no events)".to_string());
        }
        for event in events {
            lines.push(format_event_line(event, state));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn format_agenda_text(date: NaiveDate, events: &[&Event]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda – {}", date.format("%A, %B %d, %Y")));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    }
    for event in events {
        let mut line = format!(
            "{} - {}  {}",
            event.start.format("%H:%M"),
            event.end.format("%H:%M"),
            event.title
        );
        if let Some(location) = &event.location {
            line.push_str(&format!(" ({})", location));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.join("\n")
}

fn format_event_line(event: &Event, state: &AppState) -> String {
    let calendar_name = state
        .registry
        .get(&event.calendar_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| event.calendar_id.clone());
    format!(
        "  {} - {}  {} [{}]",
        event.start.format("%H:%M"),
        event.end.format("%H:%M"),
        event.title,
        calendar_name
    )
}
