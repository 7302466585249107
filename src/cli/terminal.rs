//! Scoped ownership of the terminal for the interactive phase

use std::io::{stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use super::picker::{run_picker, PickResult};

/// Set while a session owns the terminal
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// Raw mode plus alternate screen, restored when dropped.
///
/// Restoration also runs from a panic hook so the panic message lands on
/// the normal screen. The hook is installed once and only acts while a
/// session is live.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        install_panic_hook();

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            restore_terminal();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("Failed to initialize terminal");
            }
        };
        Ok(Self { terminal })
    }

    /// Run one picker screen inside this session
    pub fn pick(&mut self, options: &[String], title: &str) -> Result<PickResult> {
        self.terminal.clear()?;
        run_picker(&mut self.terminal, options, title)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            original_hook(panic_info);
        }));
    });
}

/// Restore terminal to normal state, returns `false` if no session was live
fn restore_terminal() -> bool {
    if !SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        return false;
    }
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().execute(Show);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_session_is_noop() {
        assert!(!SESSION_ACTIVE.load(Ordering::SeqCst));
        assert!(!restore_terminal());
    }
}
