//! Interactive terminal window.
//!
//! - [`App`]: window state and the operations behind each action
//! - [`UiAction`] and [`action::handler`]: key mapping and handler table
//! - [`render::draw`]: rendering with ratatui
//! - [`theme`]: colors, styles and symbols

pub mod action;
pub mod app;
pub mod render;
pub mod theme;

pub use action::UiAction;
pub use app::{App, Dialog, DialogKind, Focus, LogEntry, LogLevel};
pub use render::draw;
