//! RAII terminal lifecycle guard backed by crossterm.
//!
//! [`TerminalGuard`] enters raw mode and the alternate screen on construction,
//! and restores the terminal on [`Drop`] — even during panics or early error
//! returns. A custom panic hook is installed to ensure terminal restoration
//! happens *before* the default panic message is printed, so the backtrace is
//! readable on a normal terminal.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

/// Global flag indicating raw mode is active. Checked by the panic hook to
/// decide whether terminal restoration is needed.
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);
/// Whether mouse capture was enabled, so restoration can undo it.
static MOUSE_CAPTURE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// RAII guard that manages the terminal lifecycle via crossterm.
///
/// On creation: enables raw mode, enters the alternate screen, hides the
/// cursor, and optionally enables mouse capture. On drop everything is
/// undone in reverse order. A panic hook provides best-effort cleanup even
/// on unwind.
pub struct TerminalGuard {
    /// Whether we installed a custom panic hook (so drop knows to remove it).
    hook_installed: bool,
}

impl TerminalGuard {
    /// Enter raw mode and alternate screen, installing a panic-safe cleanup hook.
    ///
    /// # Errors
    /// Returns I/O errors if terminal setup fails. On partial failure the
    /// already-applied steps are rolled back before returning.
    pub fn new(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        if mouse {
            if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
                let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
            MOUSE_CAPTURE_ACTIVE.store(true, Ordering::SeqCst);
        }
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        // Install panic hook that restores terminal before printing the panic.
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal_best_effort();
            // Then delegate to the previous hook (typically the default one
            // that prints the backtrace).
            prev(info);
        }));

        Ok(Self {
            hook_installed: true,
        })
    }

    /// Terminal dimensions (columns, rows).
    ///
    /// Falls back to (80, 24) if the size cannot be queried (no tty, CI).
    #[must_use]
    pub fn terminal_size() -> (u16, u16) {
        crossterm::terminal::size().unwrap_or((80, 24))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal_best_effort();

        if self.hook_installed {
            // The previous hook was moved into the closure so we can't
            // restore it exactly; reset to default. The guard's lifetime
            // brackets all TUI usage.
            let _ = panic::take_hook();
        }
    }
}

/// Best-effort terminal restoration. Safe to call multiple times; uses the
/// atomic flag to avoid redundant work.
fn restore_terminal_best_effort() {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        let mut stdout = io::stdout();
        if MOUSE_CAPTURE_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = stdout.flush();
    }
}

// ──────────────────── tests ────────────────────
