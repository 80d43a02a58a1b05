//! Raw-mode terminal setup with guaranteed restore.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Guard for raw mode and the alternate screen. Restores the terminal on drop.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    ///
    /// If entering the alternate screen fails, raw mode is switched back
    /// off before the error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        debug!("Terminal in raw mode");
        Ok(guard)
    }

    /// Runs every restore step even if an earlier one fails, and reports
    /// the first failure. Later calls do nothing.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        debug!("Restoring terminal");
        first_failure([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
            execute!(io::stdout(), Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// The first error among `results`, or `Ok` if all succeeded.
pub(crate) fn first_failure(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_steps_succeed() {
        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_is_reported() {
        let err = first_failure([
            Ok(()),
            Err(io::Error::other("raw mode")),
            Err(io::Error::other("screen")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_inactive_guard_restores_nothing() {
        let mut guard = TerminalGuard { active: false };
        assert!(guard.restore().is_ok());
        assert!(!guard.active);
    }
}
