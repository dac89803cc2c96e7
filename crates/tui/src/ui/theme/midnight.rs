use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Midnight palette
// Core
pub const BG: Color = Color::Rgb(0x1A, 0x1B, 0x26); // #1a1b26 - Background
pub const SURFACE: Color = Color::Rgb(0x1F, 0x23, 0x35); // #1f2335 - Panels
pub const CURRENT_LINE: Color = Color::Rgb(0x3B, 0x42, 0x61); // #3b4261 - Selection
pub const FOREGROUND: Color = Color::Rgb(0xC0, 0xCA, 0xF5); // #c0caf5 - Foreground text
pub const COMMENT: Color = Color::Rgb(0x56, 0x5F, 0x89); // #565f89 - Muted / hints

// Accents
pub const BLUE: Color = Color::Rgb(0x7A, 0xA2, 0xF7); // #7aa2f7
pub const CYAN: Color = Color::Rgb(0x7D, 0xCF, 0xFF); // #7dcfff
pub const MAGENTA: Color = Color::Rgb(0xBB, 0x9A, 0xF7); // #bb9af7

/// Default midnight theme tuned for dark truecolor terminals.
#[derive(Debug, Clone)]
pub struct MidnightTheme {
    roles: ThemeRoles,
}

impl MidnightTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: SURFACE,
                border: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: BLUE,
                text_muted: COMMENT,

                accent_primary: MAGENTA,

                selection_bg: CURRENT_LINE,
                selection_fg: FOREGROUND,
                focus: CYAN,
            },
        }
    }
}

impl Theme for MidnightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
