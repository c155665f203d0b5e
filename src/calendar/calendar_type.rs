use serde::{Deserialize, Serialize};

pub type CalendarId = String;

/// Fixed dashboard palette. Colors are assigned to calendars by creation
/// order (`by_index`) and copied onto events when they join a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteColor {
    Sky,
    Violet,
    Rose,
    Amber,
    Emerald,
    Slate,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Sky,
        PaletteColor::Violet,
        PaletteColor::Rose,
        PaletteColor::Amber,
        PaletteColor::Emerald,
        PaletteColor::Slate,
    ];

    /// Deterministic assignment: the nth created calendar gets
    /// `ALL[n % ALL.len()]`.
    pub fn by_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Sky => "#0ea5e9",
            PaletteColor::Violet => "#8b5cf6",
            PaletteColor::Rose => "#f43f5e",
            PaletteColor::Amber => "#f59e0b",
            PaletteColor::Emerald => "#10b981",
            PaletteColor::Slate => "#64748b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    pub name: String,
    pub color: PaletteColor,
    /// Hidden calendars keep their events; the events just drop out of every
    /// layout until the calendar is toggled back on.
    pub visible: bool,
    /// The user's own calendar is editable; project calendars are read-only.
    pub editable: bool,
}
