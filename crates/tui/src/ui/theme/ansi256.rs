use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Fallback palette for terminals without truecolor support.
///
/// Uses only indexed 256-color values so rendering stays faithful under
/// TERM settings that quantize RGB badly.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(235),
                border: Color::Indexed(240),

                text: Color::Indexed(252),
                text_secondary: Color::Indexed(110),
                text_muted: Color::Indexed(244),

                accent_primary: Color::Indexed(141),

                selection_bg: Color::Indexed(238),
                selection_fg: Color::Indexed(255),
                focus: Color::Indexed(117),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
