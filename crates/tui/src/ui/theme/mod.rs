//! Theme styling for the TUI layer.
//!
//! Defines semantic color roles, the default Lumina palette, an ANSI-256
//! fallback for terminals without truecolor, and helper builders for
//! Ratatui widgets. Prefer the helpers over hard-coding colors so the UI
//! stays consistent.

use std::env;

use tracing::debug;

pub mod helpers;
pub mod palette;
pub mod roles;

pub use palette::{Ansi256Theme, LuminaDarkTheme};
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the configured preference, environment overrides,
/// and terminal capabilities.
///
/// `LUMINA_THEME` wins over the persisted preference; ANSI-only terminals
/// always get the fallback palette regardless of overrides.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    if detect_color_capability() == ColorCapability::Ansi256 {
        debug!("ANSI-only terminal detected; forcing fallback palette");
        return Box::new(Ansi256Theme::new());
    }

    let requested = env::var("LUMINA_THEME").ok();
    let name = requested.as_deref().or(preferred_theme).unwrap_or("lumina-dark");
    match name {
        "ansi" | "ansi256" => Box::new(Ansi256Theme::new()),
        "lumina-dark" => Box::new(LuminaDarkTheme::new()),
        other => {
            debug!(theme = other, "unknown theme name; using default");
            Box::new(LuminaDarkTheme::new())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Ok(colorterm) = env::var("COLORTERM") {
        let colorterm = colorterm.to_ascii_lowercase();
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return ColorCapability::Truecolor;
        }
    }
    match env::var("TERM") {
        Ok(term) if term.contains("256color") => ColorCapability::Ansi256,
        Ok(_) | Err(_) => ColorCapability::Truecolor,
    }
}
