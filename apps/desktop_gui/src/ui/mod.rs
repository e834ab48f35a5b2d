//! UI layer: app shell, navigation header and pages.

pub mod app;
pub mod header;
pub mod pages;

pub use app::BuddyTextApp;
