//! Theme system for UI styling

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
}

impl Theme {
    /// Load a theme by name, falling back to the default for unknown names
    pub fn load(theme_name: &str) -> Self {
        match theme_name {
            "default" => Self::default_theme(),
            "dark" => Self::dark_theme(),
            "light" => Self::light_theme(),
            other => {
                warn!("Unknown theme '{}', using default", other);
                Self::default_theme()
            }
        }
    }

    /// Default theme (terminal colors with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                accent: Color::Yellow,
                success: Color::Green,
                error: Color::Red,
                muted: Color::DarkGray,
            },
        }
    }

    /// Dark theme with softer colors
    pub fn dark_theme() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ColorScheme {
                background: Color::Black,
                foreground: Color::Rgb(220, 220, 220),
                primary: Color::Rgb(100, 149, 237),
                accent: Color::Rgb(255, 215, 0),
                success: Color::Rgb(50, 205, 50),
                error: Color::Rgb(220, 20, 60),
                muted: Color::Rgb(105, 105, 105),
            },
        }
    }

    /// Light theme for bright terminals
    pub fn light_theme() -> Self {
        Self {
            name: "light".to_string(),
            colors: ColorScheme {
                background: Color::White,
                foreground: Color::Black,
                primary: Color::Rgb(0, 100, 200),
                accent: Color::Rgb(200, 150, 0),
                success: Color::Rgb(0, 150, 0),
                error: Color::Rgb(200, 0, 0),
                muted: Color::Rgb(120, 120, 120),
            },
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.colors.primary)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Call-to-action and submit button
    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.colors.background)
                .bg(self.colors.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.colors.primary)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.colors.success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.colors.error)
    }

    pub fn pending_style(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }
}

/// Color scheme for themes
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}
