//! Theme configuration for the plot views and status footer.
//!
//! Centralizes all color definitions for easy customization.

use ratatui::style::Color;

/// Theme configuration for the viewer.
///
/// All colors are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Scatter color for image detections
    pub image: Color,
    /// Scatter color for radar detections
    pub radar: Color,
    /// Vertical guide lines inside the plot views
    pub guide: Color,
    /// Primary text color (titles, footer values)
    pub text_primary: Color,
    /// Secondary/dimmed text color (footer hints, borders)
    pub text_secondary: Color,
    /// Accent color for key hints
    pub accent: Color,
    /// Diagnostic/error color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Classic theme - blue image points, red radar points, matching the
    /// colors the detections are plotted with in every view.
    pub fn classic() -> Self {
        Self {
            image: Color::Blue,
            radar: Color::Red,
            guide: Color::DarkGray,
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
        }
    }

    /// High-contrast theme for terminals with washed-out ANSI blues.
    pub fn contrast() -> Self {
        Self {
            image: Color::LightBlue,
            radar: Color::LightRed,
            guide: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::LightRed,
        }
    }
}
