//! Key mapping and the action handler table.
//!
//! A key press becomes at most one [`UiAction`] ([`App::action_for_key`]);
//! [`handler`] maps each action to the function that performs it, and
//! [`App::handle_key`] ties the two together.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::network::{AdapterProvider, AddressingMode};

use super::app::{App, Focus};

/// Something the user asked the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move focus to the next widget.
    FocusNext,
    /// Move focus to the previous widget.
    FocusPrevious,
    /// Next adapter, or static mode.
    SelectNext,
    /// Previous adapter, or DHCP mode.
    SelectPrevious,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Apply the form to the selected adapter.
    Apply,
    /// Enumerate adapters again.
    Refresh,
    /// Close the open dialog.
    Dismiss,
    /// Leave the application.
    Quit,
}

/// Function performing one action.
pub type Handler<P> = fn(&mut App<P>, UiAction);

/// The handler table.
#[must_use]
pub fn handler<P: AdapterProvider>(action: UiAction) -> Handler<P> {
    match action {
        UiAction::FocusNext => |app: &mut App<P>, _: UiAction| app.focus_next(),
        UiAction::FocusPrevious => |app: &mut App<P>, _: UiAction| app.focus_previous(),
        UiAction::SelectNext => on_select_next,
        UiAction::SelectPrevious => on_select_previous,
        UiAction::Input(_) => on_input,
        UiAction::DeleteChar => on_delete,
        UiAction::Apply => |app: &mut App<P>, _: UiAction| app.apply(),
        UiAction::Refresh => |app: &mut App<P>, _: UiAction| app.refresh_adapters(),
        UiAction::Dismiss => |app: &mut App<P>, _: UiAction| app.dismiss_dialog(),
        UiAction::Quit => |app: &mut App<P>, _: UiAction| app.quit(),
    }
}

fn on_select_next<P: AdapterProvider>(app: &mut App<P>, _: UiAction) {
    match app.focus {
        Focus::Adapter => app.step_adapter(true),
        Focus::Mode => app.select_mode(AddressingMode::Static),
        Focus::Field(_) | Focus::Apply => {}
    }
}

fn on_select_previous<P: AdapterProvider>(app: &mut App<P>, _: UiAction) {
    match app.focus {
        Focus::Adapter => app.step_adapter(false),
        Focus::Mode => app.select_mode(AddressingMode::Dhcp),
        Focus::Field(_) | Focus::Apply => {}
    }
}

fn on_input<P: AdapterProvider>(app: &mut App<P>, action: UiAction) {
    if let (Focus::Field(field), UiAction::Input(c)) = (app.focus, action) {
        app.form.insert_char(field, c);
    }
}

fn on_delete<P: AdapterProvider>(app: &mut App<P>, _: UiAction) {
    if let Focus::Field(field) = app.focus {
        app.form.backspace(field);
    }
}

impl<P: AdapterProvider> App<P> {
    /// Handles one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.action_for_key(key) {
            tracing::trace!(?action, "Dispatching");
            handler::<P>(action)(self, action);
        }
    }

    /// Maps a key event to an action in the current context.
    #[must_use]
    pub fn action_for_key(&self, key: KeyEvent) -> Option<UiAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(UiAction::Quit);
        }

        if self.dialog.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(UiAction::Dismiss),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab => return Some(UiAction::FocusNext),
            KeyCode::BackTab => return Some(UiAction::FocusPrevious),
            KeyCode::F(5) => return Some(UiAction::Apply),
            _ => {}
        }

        if self.focus.is_text() {
            return match key.code {
                KeyCode::Char(c) if is_plain(key.modifiers) => Some(UiAction::Input(c)),
                KeyCode::Backspace => Some(UiAction::DeleteChar),
                KeyCode::Enter | KeyCode::Down => Some(UiAction::FocusNext),
                KeyCode::Up => Some(UiAction::FocusPrevious),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Up => Some(UiAction::SelectPrevious),
            KeyCode::Right | KeyCode::Down => Some(UiAction::SelectNext),
            KeyCode::Enter if self.focus == Focus::Apply => Some(UiAction::Apply),
            KeyCode::Enter => Some(UiAction::FocusNext),
            KeyCode::Char('r') if is_plain(key.modifiers) => Some(UiAction::Refresh),
            KeyCode::Char('q') if is_plain(key.modifiers) => Some(UiAction::Quit),
            KeyCode::Esc => Some(UiAction::Quit),
            _ => None,
        }
    }
}

/// Whether a character key was typed without Ctrl, Alt or other modifiers.
///
/// Shift is allowed since it only selects the character.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
