pub mod day_view;
pub mod mapper;
pub mod month_view;
pub mod week_view;

pub use mapper::{event_layout, offset_to_day, offset_to_time, time_to_offset, EventLayout};
