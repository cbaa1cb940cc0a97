//! Theming for smartlearn

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Theme {
    /// The built-in dark palette
    pub fn night_campus() -> Self {
        Self {
            name: "Night Campus".to_string(),
            bg_primary: Color::Rgb(0x16, 0x18, 0x21),
            bg_secondary: Color::Rgb(0x1e, 0x22, 0x2e),
            fg_primary: Color::Rgb(0xd8, 0xdc, 0xe8),
            fg_secondary: Color::Rgb(0xa8, 0xae, 0xc2),
            fg_muted: Color::Rgb(0x5f, 0x66, 0x7a),
            accent_primary: Color::Rgb(0x42, 0xa5, 0xf5),
            accent_secondary: Color::Rgb(0x5c, 0x6b, 0xc0),
            success: Color::Rgb(0x66, 0xbb, 0x6a),
            warning: Color::Rgb(0xe5, 0xc0, 0x7b),
            error: Color::Rgb(0xef, 0x53, 0x50),
            border: Color::Rgb(0x2c, 0x31, 0x40),
            border_focused: Color::Rgb(0x42, 0xa5, 0xf5),
            selection: Color::Rgb(0x2c, 0x31, 0x40),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::night_campus()
    }
}
