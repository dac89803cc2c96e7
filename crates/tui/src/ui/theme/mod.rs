//! Theme styling module for the TUI UI layer.
//!
//! Defines a truecolor palette, an ANSI 256-color fallback, semantic theme
//! roles, and helper builders for Ratatui widgets and styles. Prefer these
//! helpers over hard-coding colors to keep the UI consistent.

use std::env;
use std::str::FromStr;

use ratatui::style::Color;
use tracing::{debug, warn};

pub mod ansi256;
pub mod midnight;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use midnight::MidnightTheme;
pub use roles::{Theme, ThemeRoles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme based on environment variables, the caller's preference,
/// and terminal capabilities, then applies the primary-text-color override.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return Box::new(Ansi256Theme::new());
    }

    let theme = env::var("AUTOSUGGEST_THEME")
        .ok()
        .as_deref()
        .and_then(|name| resolve(name.trim()))
        .or_else(|| preferred_theme.and_then(|name| resolve(name.trim())))
        .unwrap_or_else(default_theme);

    apply_text_override(theme)
}

/// Default palette, also used by tests that never touch the environment.
pub fn default_theme() -> Box<dyn Theme> {
    Box::new(MidnightTheme::new())
}

fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.to_ascii_lowercase().as_str() {
        "midnight" => Some(Box::new(MidnightTheme::new())),
        "ansi256" | "256" | "8bit" => Some(Box::new(Ansi256Theme::new())),
        other => {
            warn!(theme = other, "unknown theme name; using default");
            None
        }
    }
}

/// Theme with a role set overridden after construction.
#[derive(Debug)]
struct OverriddenTheme {
    roles: ThemeRoles,
}

impl Theme for OverriddenTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Replaces the primary text color when `AUTOSUGGEST_TEXT_COLOR` holds a
/// parseable color (named or `#rrggbb`).
fn apply_text_override(theme: Box<dyn Theme>) -> Box<dyn Theme> {
    let Some(color) = env::var("AUTOSUGGEST_TEXT_COLOR")
        .ok()
        .and_then(|value| Color::from_str(value.trim()).ok())
    else {
        return theme;
    };
    let mut roles = theme.roles().clone();
    roles.text = color;
    Box::new(OverriddenTheme { roles })
}

fn detect_color_capability() -> ColorCapability {
    if env::var("AUTOSUGGEST_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_known_names_case_insensitively() {
        assert!(resolve("Midnight").is_some());
        assert!(resolve("ANSI256").is_some());
        assert!(resolve("no-such-theme").is_none());
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("Yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn overridden_theme_keeps_other_roles() {
        let base = default_theme();
        let mut roles = base.roles().clone();
        roles.text = Color::Red;
        let theme = OverriddenTheme { roles };
        assert_eq!(theme.roles().text, Color::Red);
        assert_eq!(theme.roles().focus, base.roles().focus);
    }
}
