//! Centralized theme definitions for the window.

/// Unicode symbols used throughout the UI.
pub mod symbols {
    pub const APP_ICON: &str = "\u{25c9}"; // ◉
    pub const SELECTED: &str = "\u{25b6}"; // ▶
    pub const RADIO_ON: &str = "\u{25cf}"; // ●
    pub const RADIO_OFF: &str = "\u{25cb}"; // ○
    pub const ARROW_LEFT: &str = "\u{25c0}"; // ◀
    pub const ARROW_RIGHT: &str = "\u{25b6}"; // ▶
    pub const SUCCESS: &str = "\u{2714}"; // ✔
    pub const WARNING: &str = "\u{26a0}"; // ⚠
    pub const ERROR: &str = "\u{2717}"; // ✗
    pub const INFO: &str = "i";
    pub const CURSOR: &str = "\u{2588}"; // █
    pub const SEPARATOR_CHAR: &str = "\u{254c}"; // ╌
}

/// Color palette for the application.
pub mod colors {
    use ratatui::style::Color;

    /// Default border color (inactive).
    pub const BORDER_DEFAULT: Color = Color::Gray;
    /// Focused/active border color.
    pub const BORDER_FOCUS: Color = Color::Cyan;

    /// Primary text color.
    pub const TEXT_PRIMARY: Color = Color::White;
    /// Secondary/muted text color.
    pub const TEXT_SECONDARY: Color = Color::DarkGray;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    /// Accent color (title, info).
    pub const ACCENT: Color = Color::Cyan;
    /// Apply button background.
    pub const BUTTON: Color = Color::Rgb(48, 138, 66);
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    /// Style for the app title.
    pub fn title() -> Style {
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected/highlighted items.
    pub fn selected() -> Style {
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items.
    pub fn unselected() -> Style {
        Style::default().fg(colors::TEXT_PRIMARY)
    }

    /// Style for read-only field text.
    pub fn disabled() -> Style {
        Style::default().fg(colors::TEXT_SECONDARY)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::BORDER_FOCUS)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(colors::BORDER_DEFAULT)
    }

    /// Style for card and panel titles.
    pub fn card_title() -> Style {
        Style::default()
            .fg(colors::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the apply button.
    pub fn button(focused: bool) -> Style {
        let style = Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::BUTTON)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// Style for help text.
    pub fn help_text() -> Style {
        Style::default().fg(colors::TEXT_SECONDARY)
    }

    /// Style for key hints in help bar.
    pub fn help_key() -> Style {
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for separator lines.
    pub fn separator() -> Style {
        Style::default().fg(colors::TEXT_SECONDARY)
    }
}
