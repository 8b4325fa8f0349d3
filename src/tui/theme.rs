//! Colors for the terminal browser in dark and light modes.
//!
//! `Auto` follows the OS appearance through the `dark-light` crate; the other
//! modes pin one palette.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the terminal browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and the store header
    pub primary: Color,
    /// Key hints and the selected tile
    pub accent: Color,
    /// Copy confirmation and the install action
    pub success: Color,
    /// Load failure and error overlay
    pub error: Color,
    /// Featured marker
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Labels such as "Version:" and "License:"
    pub text_secondary: Color,
    /// Help text and placeholders
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Selection background color
    pub highlight_bg: Color,
    /// Background of dialogs and the featured panel
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Palette for light terminal backgrounds.
    ///
    /// Accent colors are darkened to stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(150, 0, 150),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_light_contrast() {
        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        // Yellow is unreadable on white
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_semantic_colors_distinct() {
        let theme = Theme::dark();
        assert_ne!(theme.success, theme.error);
        assert_ne!(theme.primary, theme.accent);
        assert_ne!(theme.text, theme.text_muted);
    }
}
