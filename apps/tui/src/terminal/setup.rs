use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};
use tracing::{debug, warn};

/// Set up the terminal, undoing each completed step if a later one fails
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    debug!(width, height, "setting up terminal");

    enable_raw_mode().map_err(|e| color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"))?;

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    // Not fatal, continue
    if let Err(e) = terminal.clear() {
        warn!(error = %e, "failed to clear terminal");
    }
    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        warn!(error = %e, "failed to hide cursor");
    }

    debug!("terminal ready");
    Ok(terminal)
}

/// Restore terminal to initial state, handling any errors
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        warn!(error = %e, "failed to show cursor");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
    }

    // Force a newline to ensure the prompt appears correctly
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();

    debug!("terminal restored");
}
