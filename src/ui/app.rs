//! Window state and the operations behind each user action.
//!
//! [`App`] is the single owner of everything the window shows. Key presses
//! are turned into [`UiAction`](super::UiAction)s and dispatched to the
//! methods here through the handler table in [`super::action`].

use std::collections::VecDeque;

use crate::form::{ConfigForm, FormField, FormValues};
use crate::manager::{AdapterManager, ManagerError};
use crate::network::{AdapterDescriptor, AdapterProvider, AddressingMode};

/// Maximum number of activity entries kept in memory.
const MAX_LOG_ENTRIES: usize = 200;

/// Widget that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Adapter selector.
    Adapter,
    /// DHCP / static selector.
    Mode,
    /// One of the text fields.
    Field(FormField),
    /// The apply button.
    Apply,
}

impl Focus {
    /// Tab order, including fields that may currently be skipped.
    pub const ORDER: [Self; 7] = [
        Self::Adapter,
        Self::Mode,
        Self::Field(FormField::Address),
        Self::Field(FormField::SubnetMask),
        Self::Field(FormField::Gateway),
        Self::Field(FormField::Dns),
        Self::Apply,
    ];

    /// Whether this widget edits text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Field(_))
    }
}

/// Severity of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Error,
    Success,
}

impl DialogKind {
    /// Title shown in the dialog border.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Success => "Success",
        }
    }
}

/// A modal message. While one is open, only dismiss and quit keys work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub message: String,
}

/// Severity of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Entry in the activity panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub level: LogLevel,
}

impl LogEntry {
    fn new(message: impl Into<String>, level: LogLevel) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            level,
        }
    }
}

/// Application state.
pub struct App<P> {
    manager: AdapterManager<P>,
    /// Mode and field text.
    pub form: ConfigForm,
    /// Adapters from the last enumeration.
    pub adapters: Vec<AdapterDescriptor>,
    /// Position of the selected adapter in `adapters`.
    pub selected: Option<usize>,
    /// Widget receiving keys.
    pub focus: Focus,
    /// Open modal dialog, if any.
    pub dialog: Option<Dialog>,
    /// Activity entries (bounded ring buffer).
    pub logs: VecDeque<LogEntry>,
    /// Set when the event loop should exit.
    pub should_quit: bool,
}

impl<P: AdapterProvider> App<P> {
    /// Creates the window state, enumerates adapters and loads the first one.
    pub fn new(manager: AdapterManager<P>, values: FormValues) -> Self {
        let mut app = Self {
            manager,
            form: ConfigForm::new(values),
            adapters: Vec::new(),
            selected: None,
            focus: Focus::Adapter,
            dialog: None,
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            should_quit: false,
        };

        app.refresh_adapters();
        app
    }

    /// Returns the manager the window talks to.
    #[must_use]
    pub const fn manager(&self) -> &AdapterManager<P> {
        &self.manager
    }

    /// Descriptor of the selected adapter.
    #[must_use]
    pub fn selected_adapter(&self) -> Option<&AdapterDescriptor> {
        self.selected.and_then(|i| self.adapters.get(i))
    }

    /// Enumerates adapters again.
    ///
    /// Keeps the current selection if an adapter with the same description
    /// is still listed, otherwise selects the first one, then loads it.
    pub fn refresh_adapters(&mut self) {
        let previous = self.selected_adapter().map(|d| d.description.clone());

        match self.manager.list_adapters() {
            Ok(adapters) => {
                self.adapters = adapters;
                if self.adapters.is_empty() {
                    self.selected = None;
                    self.warn("No IP-enabled network adapter found".to_string());
                    return;
                }

                self.log_info(format!("Found {} network adapter(s)", self.adapters.len()));
                let index = previous
                    .and_then(|desc| self.adapters.iter().position(|a| a.description == desc))
                    .unwrap_or(0);
                self.select_adapter(index);
            }
            Err(e) => {
                self.adapters.clear();
                self.selected = None;
                self.form.clear();
                self.warn(e.to_string());
            }
        }
    }

    /// Selects an adapter by position and loads its configuration.
    pub fn select_adapter(&mut self, index: usize) {
        if index >= self.adapters.len() {
            return;
        }
        self.selected = Some(index);
        self.load_selected();
    }

    /// Moves the adapter selection by one, without wrapping.
    pub fn step_adapter(&mut self, forward: bool) {
        let Some(current) = self.selected else {
            return;
        };
        let next = if forward {
            current + 1
        } else {
            current.saturating_sub(1)
        };
        if next != current && next < self.adapters.len() {
            self.select_adapter(next);
        }
    }

    /// Reads the selected adapter and puts its values in the fields.
    ///
    /// On failure the fields are cleared and a warning is shown.
    pub fn load_selected(&mut self) {
        let Some(descriptor) = self.selected_adapter().cloned() else {
            return;
        };

        match self.manager.read_configuration(&descriptor) {
            Ok(config) => {
                self.form.load(&config);
                self.log_info(format!(
                    "Loaded {} (currently {})",
                    descriptor.description, config.mode
                ));
            }
            Err(e) => {
                self.form.clear();
                self.warn(format!("Unable to load the current configuration: {e}"));
            }
        }
    }

    /// Selects DHCP or static mode.
    pub fn select_mode(&mut self, mode: AddressingMode) {
        if self.form.select_mode(mode) {
            tracing::debug!(%mode, "Mode selected");
        }
    }

    /// Validates the form and applies it to the selected adapter.
    ///
    /// Every outcome ends in a dialog.
    pub fn apply(&mut self) {
        let desired = match self.form.desired() {
            Ok(desired) => desired,
            Err(e) => {
                self.fail(&ManagerError::from(e));
                return;
            }
        };

        let Some(descriptor) = self.selected_adapter().cloned() else {
            self.fail(&ManagerError::NoSelection);
            return;
        };

        match self.manager.apply_configuration(&descriptor, &desired) {
            Ok(()) => {
                let message = format!(
                    "{} configuration applied to {}",
                    desired.mode, descriptor.description
                );
                self.log_success(message.clone());
                self.open_dialog(DialogKind::Success, message);
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Moves focus forward, skipping read-only fields.
    pub fn focus_next(&mut self) {
        self.focus = self.neighbour(1);
    }

    /// Moves focus backward, skipping read-only fields.
    pub fn focus_previous(&mut self) {
        self.focus = self.neighbour(Focus::ORDER.len() - 1);
    }

    fn neighbour(&self, step: usize) -> Focus {
        let len = Focus::ORDER.len();
        let start = Focus::ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);

        (1..=len)
            .map(|n| Focus::ORDER[(start + n * step) % len])
            .find(|f| self.can_focus(*f))
            .unwrap_or(self.focus)
    }

    /// Whether a widget accepts focus right now.
    #[must_use]
    pub const fn can_focus(&self, focus: Focus) -> bool {
        !focus.is_text() || self.form.is_editable()
    }

    /// Closes the open dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Requests exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Context help for the bottom bar.
    #[must_use]
    pub fn help_text(&self) -> &'static str {
        if self.dialog.is_some() {
            return "Enter: Close  Esc: Close";
        }

        match self.focus {
            Focus::Adapter => "←/→: Adapter  Tab: Next  r: Refresh  F5: Apply  q: Quit",
            Focus::Mode => "←/→: Mode  Tab: Next  r: Refresh  F5: Apply  q: Quit",
            Focus::Field(_) => "Type to edit  Tab: Next  Shift+Tab: Back  F5: Apply  Ctrl+C: Quit",
            Focus::Apply => "Enter: Apply  Tab: Next  r: Refresh  q: Quit",
        }
    }

    fn open_dialog(&mut self, kind: DialogKind, message: impl Into<String>) {
        self.dialog = Some(Dialog {
            kind,
            message: message.into(),
        });
    }

    fn warn(&mut self, message: String) {
        self.log_warning(message.clone());
        self.open_dialog(DialogKind::Warning, message);
    }

    fn fail(&mut self, error: &ManagerError) {
        let message = error.to_string();
        self.log_error(message.clone());
        self.open_dialog(DialogKind::Error, message);
    }

    // Logging helpers

    /// Append a log entry, evicting the oldest if at capacity.
    fn push_log(&mut self, entry: LogEntry) {
        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    fn log_info(&mut self, msg: impl Into<String>) {
        self.push_log(LogEntry::new(msg, LogLevel::Info));
    }

    fn log_success(&mut self, msg: impl Into<String>) {
        self.push_log(LogEntry::new(msg, LogLevel::Success));
    }

    fn log_warning(&mut self, msg: impl Into<String>) {
        self.push_log(LogEntry::new(msg, LogLevel::Warning));
    }

    fn log_error(&mut self, msg: impl Into<String>) {
        self.push_log(LogEntry::new(msg, LogLevel::Error));
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
