//! Screen styling.

use ratatui::style::{Color, Modifier, Style};

/// Whether colors are used.
///
/// Disabled by `--no-color` or a `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors unless `--no-color` or `NO_COLOR` is set.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Whether styles carry colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles of the CRUD screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenStyles {
    /// Header bar and headings.
    pub header: Style,
    /// Row under the cursor.
    pub cursor: Style,
    /// Checked rows.
    pub checked: Style,
    /// Action menu with a selection.
    pub menu_enabled: Style,
    /// Action menu without a selection, disabled links.
    pub menu_disabled: Style,
    /// Alerts and delete confirmations.
    pub warning: Style,
    /// Enabled change links.
    pub link: Style,
    /// Status bar.
    pub status: Style,
}

impl ScreenStyles {
    /// Styles for `config`; plain modifiers only when colors are off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                checked: Style::default().fg(Color::Green),
                menu_enabled: Style::default().fg(Color::Yellow),
                menu_disabled: Style::default().fg(Color::DarkGray),
                warning: bold.fg(Color::Red),
                link: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                status: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header: bold,
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                checked: Style::default(),
                menu_enabled: Style::default(),
                menu_disabled: Style::default().add_modifier(Modifier::DIM),
                warning: bold,
                link: Style::default().add_modifier(Modifier::UNDERLINED),
                status: Style::default(),
            }
        }
    }
}

impl Default for ScreenStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
