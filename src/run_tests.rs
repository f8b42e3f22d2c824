//! Tests for the run module.

use super::*;
use ipchanger::config::Cli;

fn config() -> ValidatedConfig {
    ValidatedConfig::from_raw(&Cli::parse_from_iter(["ipchanger"]), None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn terminal_error_displays_source() {
        let error = RunError::from(io::Error::other("not a tty"));
        assert_eq!(error.to_string(), "Terminal error: not a tty");
        assert!(!error.is_user_error());
    }

    #[test]
    fn command_error_is_transparent() {
        let error = RunError::from(CommandError::NoSuchAdapter { index: 3, count: 1 });
        assert!(error.to_string().starts_with("No adapter at index 3"));
        assert!(error.is_user_error());
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::from(io::Error::other("closed"));
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("Terminal"));
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn init_does_nothing() {
        let manager = AdapterManager::new(PlatformProvider::new());
        let command = Command::Init {
            output: "ipchanger.toml".into(),
        };
        let mut out = Vec::new();

        dispatch(manager, Some(command), &config(), &mut out).unwrap();

        assert!(out.is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn list_reports_unsupported_platform() {
        let manager = AdapterManager::new(PlatformProvider::new());
        let mut out = Vec::new();

        let error = dispatch(
            manager,
            Some(Command::List { json: false }),
            &config(),
            &mut out,
        )
        .unwrap_err();

        assert!(error.to_string().contains("not supported"));
        assert!(!error.is_user_error());
        assert!(out.is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn apply_with_blank_field_fails_before_platform() {
        let manager = AdapterManager::new(PlatformProvider::new());
        let cli = Cli::parse_from_iter(["ipchanger", "apply", "0", "--static", "--mask", ""]);

        let error = dispatch(manager, cli.command, &config(), &mut Vec::new()).unwrap_err();

        assert_eq!(error.to_string(), "The subnet mask field cannot be empty");
        assert!(error.is_user_error());
    }
}

mod window_outcome {
    use super::*;

    #[test]
    fn event_error_wins_over_restore_error() {
        let result = Err(RunError::from(io::Error::other("read failed")));
        let restored = Err(io::Error::other("leave screen failed"));

        let error = window_outcome(result, restored).unwrap_err();

        assert_eq!(error.to_string(), "Terminal error: read failed");
    }

    #[test]
    fn restore_error_is_reported_after_clean_exit() {
        let error = window_outcome(Ok(()), Err(io::Error::other("raw mode stuck"))).unwrap_err();

        assert_eq!(error.to_string(), "Terminal error: raw mode stuck");
    }

    #[test]
    fn clean_exit_and_restore_is_ok() {
        assert!(window_outcome(Ok(()), Ok(())).is_ok());
    }
}

mod panic_hook {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn previous_hook_is_put_back() {
        let before = panic::take_hook();
        panic::set_hook(Box::new(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        }));

        let original = install_panic_hook();
        reset_panic_hook(original);
        let _ = panic::catch_unwind(|| panic!("window closed"));

        panic::set_hook(before);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
