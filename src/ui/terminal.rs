//! Terminal setup and teardown

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Raw mode, alternate screen and (optionally) mouse capture for the
/// lifetime of the value; everything is undone on drop.
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_captured: bool,
}

impl TerminalSession {
    pub fn start(capture_mouse: bool) -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if capture_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            mouse_captured: capture_mouse,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Nothing useful can be done with errors while tearing down
        let _ = disable_raw_mode();
        if self.mouse_captured {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
