pub mod context_menu;
pub mod gesture;
pub mod pointer;

pub use context_menu::{ContextMenu, ContextMenuAction, ShellRequest};
pub use gesture::{Gesture, ResizeEdge};
pub use pointer::{GridMetrics, HitTarget, PointerPoint};
