//! Application execution logic.
//!
//! Dispatches the parsed subcommand against the platform provider, or
//! opens the interactive window when no subcommand was given.

use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use ipchanger::commands::{self, CommandError};
use ipchanger::config::{Command, ValidatedConfig};
use ipchanger::form::FormValues;
use ipchanger::manager::AdapterManager;
use ipchanger::network::AdapterProvider;
use ipchanger::network::platform::PlatformProvider;
use ipchanger::ui::{self, App};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A subcommand failed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The terminal could not be set up, drawn, or read.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl RunError {
    /// Returns `true` if the command line itself was at fault.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Command(e) => e.is_user_error(),
            Self::Terminal(_) => false,
        }
    }
}

/// Runs the requested command against the platform provider.
///
/// # Errors
///
/// Returns an error if the command fails or the terminal cannot be used.
#[cfg(not(tarpaulin_include))]
pub fn execute(command: Option<Command>, config: &ValidatedConfig) -> Result<(), RunError> {
    let manager = AdapterManager::new(PlatformProvider::new());
    let stdout = io::stdout();
    dispatch(manager, command, config, &mut stdout.lock())
}

/// Runs one subcommand, writing its output to `out`.
///
/// `None` opens the interactive window. `init` is handled before the
/// configuration is loaded and does nothing here.
fn dispatch<P: AdapterProvider, W: Write>(
    manager: AdapterManager<P>,
    command: Option<Command>,
    config: &ValidatedConfig,
    out: &mut W,
) -> Result<(), RunError> {
    match command {
        None => run_window(manager, config.form.clone()),
        Some(Command::Init { .. }) => Ok(()),
        Some(Command::List { json }) => Ok(commands::list(&manager, out, json)?),
        Some(Command::Show { index, json }) => Ok(commands::show(&manager, index, out, json)?),
        Some(Command::Apply(args)) => Ok(commands::apply(&manager, &args, &config.form, out)?),
    }
}

/// Opens the window and runs it until the user quits.
///
/// The terminal is restored on exit and on panic. The previous panic hook
/// is put back once the window is closed.
fn run_window<P: AdapterProvider>(
    manager: AdapterManager<P>,
    values: FormValues,
) -> Result<(), RunError> {
    let original_hook = install_panic_hook();

    let result = event_loop(manager, values);
    let restored = restore_terminal();
    reset_panic_hook(original_hook);
    window_outcome(result, restored)
}

/// Chains a terminal restore in front of the current panic hook and
/// returns that hook.
fn install_panic_hook() -> Arc<PanicHook> {
    let original: Arc<PanicHook> = Arc::new(panic::take_hook());
    let chained = Arc::clone(&original);
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        chained.as_ref()(panic_info);
    }));
    original
}

fn reset_panic_hook(original: Arc<PanicHook>) {
    panic::set_hook(Box::new(move |panic_info| original.as_ref()(panic_info)));
}

/// An event loop failure is reported ahead of a failed terminal restore.
fn window_outcome(
    result: Result<(), RunError>,
    restored: io::Result<()>,
) -> Result<(), RunError> {
    if let Err(e) = &restored {
        tracing::warn!("Failed to restore terminal: {e}");
    }
    result.and(restored.map_err(RunError::from))
}

fn event_loop<P: AdapterProvider>(
    manager: AdapterManager<P>,
    values: FormValues,
) -> Result<(), RunError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(manager, values);
    tracing::info!(adapters = app.adapters.len(), "Window opened");

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }

    tracing::info!("Window closed");
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
