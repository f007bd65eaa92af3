//! Presentation models consumed by the client UI.

pub mod announcements;

pub use announcements::{AnnouncementItem, AnnouncementsPanel, DEFAULT_ANNOUNCEMENT_ICON};
