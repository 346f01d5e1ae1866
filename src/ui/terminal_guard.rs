//! Raw mode and alternate screen, undone on drop and on panic.

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::debug;

static INSTALL_PANIC_HOOK: Once = Once::new();
/// Set while a guard holds the screen; the panic hook only restores then.
static SCREEN_TAKEN: AtomicBool = AtomicBool::new(false);

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        SCREEN_TAKEN.store(true, Ordering::SeqCst);
        debug!("terminal switched to raw mode and alternate screen");

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_screen();
        debug!("terminal restored");
    }
}

/// Leaves the alternate screen at most once, however many callers race here.
fn restore_screen() {
    if SCREEN_TAKEN.swap(false, Ordering::SeqCst) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        let _ = stdout.flush();
    }
}

/// Restores the screen before the previously installed hook prints the panic.
fn install_panic_hook() {
    INSTALL_PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_screen();
            previous(info);
        }));
    });
}
