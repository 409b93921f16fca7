//! Glyph mapping for symbolic icon names.
//!
//! The navigation catalog stores icon names, not glyphs; only this module
//! knows how they draw. Prefer plain box-drawing/geometric symbols over
//! emoji for consistent terminal rendering.

/// Resolves a symbolic icon name to a single-cell glyph. Unknown names fall
/// back to a neutral bullet rather than erroring.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "dashboard" => "◧",
        "images" => "▣",
        "upload" => "↥",
        "folder" => "⊞",
        "users" => "◉",
        "shield" => "⛨",
        "chart" => "▤",
        "trend" => "↗",
        "pie" => "◔",
        "database" => "⛁",
        "settings" => "⚙",
        "mail" => "✉",
        "globe" => "◍",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn every_catalog_icon_resolves() {
        let tree = lumina_nav::NavigationTree::from_embedded_catalog().expect("load embedded catalog");
        for item in tree.flatten() {
            assert_ne!(glyph(&item.icon), "", "icon {} maps to a glyph", item.icon);
        }
    }

    #[test]
    fn unknown_icon_falls_back_to_bullet() {
        assert_eq!(glyph("no-such-icon"), "•");
        assert_eq!(glyph(""), "•");
    }
}
