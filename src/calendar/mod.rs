pub mod calendar_type;
pub mod event;
pub mod registry;
pub mod store;

pub use calendar_type::{Calendar, CalendarId, PaletteColor};
pub use event::{DraftEvent, Event, EventId, EventPatch};
pub use registry::CalendarRegistry;
pub use store::{EventStore, StoreError};
