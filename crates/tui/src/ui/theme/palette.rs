use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Lumina dark palette. Deep slate surfaces with an amber primary accent and
// a teal secondary, tuned for dark terminals.
pub const BG: Color = Color::Rgb(0x16, 0x1A, 0x21); // #161a21
pub const SURFACE: Color = Color::Rgb(0x1C, 0x21, 0x2A); // #1c212a
pub const SURFACE_MUTED: Color = Color::Rgb(0x27, 0x2E, 0x3A); // #272e3a
pub const BORDER: Color = Color::Rgb(0x34, 0x3D, 0x4C); // #343d4c
pub const TEXT: Color = Color::Rgb(0xE6, 0xE9, 0xEF); // #e6e9ef
pub const TEXT_SECONDARY: Color = Color::Rgb(0x9D, 0xA9, 0xBA); // #9da9ba
pub const TEXT_MUTED: Color = Color::Rgb(0x64, 0x70, 0x82); // #647082
pub const AMBER: Color = Color::Rgb(0xF5, 0xB8, 0x4C); // #f5b84c
pub const TEAL: Color = Color::Rgb(0x4C, 0xC8, 0xB4); // #4cc8b4
pub const GREEN: Color = Color::Rgb(0x77, 0xD1, 0x87); // #77d187
pub const ORANGE: Color = Color::Rgb(0xF2, 0x96, 0x5A); // #f2965a
pub const RED: Color = Color::Rgb(0xEF, 0x5B, 0x6E); // #ef5b6e
pub const MODAL_BG: Color = Color::Rgb(0x0E, 0x11, 0x16); // #0e1116

/// Default Lumina theme for truecolor terminals.
#[derive(Debug, Clone)]
pub struct LuminaDarkTheme {
    roles: ThemeRoles,
}

impl LuminaDarkTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: SURFACE,
                surface_muted: SURFACE_MUTED,
                border: BORDER,

                text: TEXT,
                text_secondary: TEXT_SECONDARY,
                text_muted: TEXT_MUTED,

                accent_primary: AMBER,
                accent_secondary: TEAL,

                success: GREEN,
                warning: ORANGE,
                error: RED,

                selection_bg: AMBER,
                selection_fg: BG,
                focus: TEAL,

                modal_bg: MODAL_BG,
            },
        }
    }
}

impl Default for LuminaDarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LuminaDarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Fallback theme for terminals without truecolor support, built from the
/// standard ANSI 256-color cube so it degrades predictably.
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
                surface_muted: Color::Indexed(237),
                border: Color::Indexed(240),

                text: Color::Indexed(253),
                text_secondary: Color::Indexed(248),
                text_muted: Color::Indexed(243),

                accent_primary: Color::Indexed(214),
                accent_secondary: Color::Indexed(80),

                success: Color::Indexed(114),
                warning: Color::Indexed(209),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(214),
                selection_fg: Color::Indexed(234),
                focus: Color::Indexed(80),

                modal_bg: Color::Indexed(233),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
