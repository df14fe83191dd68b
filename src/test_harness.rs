//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with methods that simulate a user at the
//! keyboard and expose what the screen and the page look like afterwards.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{Effect, PageFixture};
use crate::view::{PageHost, ScreenStyles, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Demo page with `rows` rows opened at `url` on an 80x24 terminal.
    pub fn demo(rows: usize, url: &str) -> Result<Self, TuiError> {
        Self::with_fixture(PageFixture::demo(rows), url)
    }

    /// Page described by a JSON fixture file.
    pub fn from_fixture(path: &str, url: &str) -> Result<Self, TuiError> {
        let fixture = PageFixture::load(std::path::Path::new(path))
            .map_err(crate::model::AppError::from)?;
        Self::with_fixture(fixture, url)
    }

    pub fn with_fixture(fixture: PageFixture, url: &str) -> Result<Self, TuiError> {
        let config = ResolvedConfig {
            start_url: url.to_string(),
            ..ResolvedConfig::default()
        };
        Self::with_config(fixture, &config, 80, 24)
    }

    pub fn with_config(
        fixture: PageFixture,
        config: &ResolvedConfig,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let host = PageHost::open(fixture, config);
        let app = TuiApp::with_terminal(terminal, host, KeyBindings::default(), ScreenStyles::default());
        Ok(Self { app, running: true })
    }

    /// Send a single key; returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        let mods = match key {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        self.send_key_with_mods(key, mods)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type characters as individual key events.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    pub fn host(&self) -> &PageHost {
        self.app.host()
    }

    pub fn transcript(&self) -> &[Effect] {
        self.host().transcript()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
