pub mod calendar;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;
pub mod sample_data;

pub use calendar::{Calendar, CalendarRegistry, Event, EventId, EventStore, PaletteColor};
pub use app::{AppState, Project, ViewType};

pub use input::{context_menu, gesture, pointer};
