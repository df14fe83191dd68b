//! Terminal host (impure shell).
//!
//! Renders the page the controller drives and feeds key presses back into it.

pub mod host;
mod layout;
mod styles;

pub use host::{HostSignal, PageHost, Screen};
pub use layout::{describe_effect, pad, render_page};
pub use styles::{ColorConfig, ScreenStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, Effect, KeyAction, PageFixture};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    host: PageHost,
    key_bindings: KeyBindings,
    styles: ScreenStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application and switch the terminal to raw mode with an alternate screen.
    pub fn new(host: PageHost, styles: ScreenStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, host, KeyBindings::default(), styles))
    }

    /// Run the event loop until the user quits or the popup closes.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(..) => self.draw()?,
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Application over an already set up terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        host: PageHost,
        key_bindings: KeyBindings,
        styles: ScreenStyles,
    ) -> Self {
        Self {
            terminal,
            host,
            key_bindings,
            styles,
        }
    }

    /// Page host driven by this app.
    pub fn host(&self) -> &PageHost {
        &self.host
    }

    /// Terminal, for inspecting test backends.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Consume the app, keeping the host (and its effect transcript).
    pub fn into_host(self) -> PageHost {
        self.host
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "Unbound key");
            return false;
        };
        self.handle_action(action)
    }

    /// Handle a host action directly. Returns true if app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        self.host.handle_key_action(action) == HostSignal::Quit
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let host = &self.host;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_page(frame, host, styles))?;
        Ok(())
    }
}

/// Initialize and run the TUI for `fixture` and return the effect transcript.
///
/// Logging must be initialized by the caller.
pub fn run_with_page(
    fixture: PageFixture,
    config: &ResolvedConfig,
    styles: ScreenStyles,
) -> Result<Vec<Effect>, TuiError> {
    let host = PageHost::open(fixture, config);
    let mut app = TuiApp::new(host, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result.map(|()| app.into_host().transcript().to_vec())
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
