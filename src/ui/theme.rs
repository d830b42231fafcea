//! Color themes for the dashboard.
//!
//! Two palettes, dark and light. The active palette is the presentation
//! flag the rest of the app consumes: toggling dark mode swaps the theme on
//! the `App` and every subsequent frame renders with it.

use ratatui::style::Color;

/// A resolved color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Panel border color
    pub border: Color,
    /// Panel title and primary text
    pub text: Color,
    /// De-emphasized text (hints, placeholders)
    pub dim: Color,
    /// Highlights and loaded values
    pub accent: Color,
    /// The "user is active" badge
    pub active: Color,
    /// The "user is idle" badge
    pub idle: Color,
}

impl Theme {
    /// Minimal dark palette.
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(16, 16, 24),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::LightCyan,
            active: Color::LightGreen,
            idle: Color::Yellow,
        }
    }

    /// Light palette.
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 245),
            border: Color::Gray,
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            active: Color::Green,
            idle: Color::Rgb(180, 120, 0),
        }
    }

    /// Select the palette for the dark-mode flag.
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(Theme::from_dark_mode(true), Theme::dark());
        assert_eq!(Theme::from_dark_mode(false), Theme::light());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark(), Theme::light());
    }
}
