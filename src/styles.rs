//! Theme and style system for researchmate
//!
//! Provides consistent styling across the application with support for
//! light and dark themes. Each workspace gets its own accent: blue for the
//! personal space, green for a project's team space.

use crate::controller::Workspace;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    personal: Color::Blue,
    project: Color::Green,
    secondary: Color::Magenta,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    highlight_bg: Color::DarkGray,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Personal space accent
    pub personal: Color,
    /// Team space accent
    pub project: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            personal: Color::LightBlue,
            project: Color::LightGreen,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            personal: Color::Blue,
            project: Color::Rgb(0, 128, 64),
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0), // Darker yellow/orange
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            highlight_bg: Color::Gray,
        }
    }

    /// No-color theme - style helpers below avoid fg/bg entirely
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            personal: Color::Reset,
            project: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    /// Foreground `color`, or `plain` when colors are disabled.
    fn fg_or(&self, color: Color, plain: Style) -> Style {
        match self.theme_type {
            ThemeType::NoColor => plain,
            ThemeType::Dark | ThemeType::Light => Style::default().fg(color),
        }
    }

    /// Accent color of a workspace
    pub fn accent(&self, workspace: &Workspace) -> Color {
        if workspace.is_project_workspace() {
            self.project
        } else {
            self.personal
        }
    }

    /// Bold title text in the workspace accent
    pub fn title_style(&self, workspace: &Workspace) -> Style {
        self.fg_or(self.accent(workspace), Style::default())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg_or(self.text, Style::default())
    }

    pub fn muted_style(&self) -> Style {
        self.fg_or(self.text_muted, Style::default().add_modifier(Modifier::DIM))
    }

    /// Key hints, counts, the user's own vote
    pub fn emphasis_style(&self) -> Style {
        self.fg_or(self.text_emphasis, bold())
    }

    /// Tags, categories, roles
    pub fn tag_style(&self) -> Style {
        self.fg_or(self.secondary, Style::default().add_modifier(Modifier::ITALIC))
    }

    pub fn success_style(&self) -> Style {
        self.fg_or(self.success, bold())
    }

    pub fn warning_style(&self) -> Style {
        self.fg_or(self.warning, Style::default())
    }

    pub fn error_style(&self) -> Style {
        self.fg_or(self.error, bold())
    }

    /// Border of the focused pane, in the workspace accent
    pub fn border_focused_style(&self, workspace: &Workspace) -> Style {
        self.fg_or(self.accent(workspace), bold())
    }

    pub fn border_style(&self) -> Style {
        self.fg_or(self.border, Style::default())
    }

    /// Selected list row
    pub fn highlight_style(&self) -> Style {
        match self.theme_type {
            ThemeType::NoColor => Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ThemeType::Dark | ThemeType::Light => Style::default()
                .fg(self.text_emphasis)
                .bg(self.highlight_bg)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Gauge fill in the workspace accent
    pub fn gauge_style(&self, workspace: &Workspace) -> Style {
        self.fg_or(
            self.accent(workspace),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no_color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [
            t.highlight_style(),
            t.title_style(&Workspace::project("1")),
            t.gauge_style(&Workspace::Personal),
        ] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }

    #[test]
    fn test_workspace_accents_differ() {
        for t in [Theme::dark(), Theme::light()] {
            let personal = t.accent(&Workspace::Personal);
            let project = t.accent(&Workspace::project("2"));
            assert_ne!(personal, project);
            assert_eq!(t.title_style(&Workspace::Personal).fg, Some(personal));
        }
    }
}
