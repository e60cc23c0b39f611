//! # Theme System
//!
//! Provides the color themes for the valentine page.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Instead of
//! hardcoding `ratatui::style::Color` values, rendering code references theme
//! fields. The active theme is picked with `--theme` or the config file.
//!
//! ## Built-in Themes
//!
//! - **Rose** (default) - soft pink page with rose buttons
//! - **Rose Night** - the same roses on a dark background
//! - **Catppuccin Latte** - light pastel theme
//! - **Catppuccin Mocha** - warm, dark pastel theme

use ratatui::style::Color;

/// All colors used by the page, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name accepted by `--theme`.
    pub name: &'static str,

    // -- Page --
    /// Page background.
    pub bg: Color,
    /// Title and modal message text.
    pub fg: Color,
    /// Faint background hearts and footer hints.
    pub fg_dim: Color,

    // -- Buttons --
    /// "Yes" and modal button fill.
    pub accent: Color,
    /// Text drawn on top of `accent`.
    pub accent_fg: Color,
    /// "No" button border.
    pub secondary: Color,
    /// "No" button text.
    pub secondary_fg: Color,
    /// Border of whichever page button has keyboard focus.
    pub focus: Color,

    // -- Modals --
    /// Dimmed backdrop behind an open modal.
    pub overlay: Color,
    /// Modal content background.
    pub surface: Color,
    /// Photo placeholder background.
    pub photo_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Rose).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Rose (default)
    Theme {
        name: "Rose",
        bg: Color::Rgb(255, 228, 230),         // rose-100
        fg: Color::Rgb(136, 19, 55),           // rose-900
        fg_dim: Color::Rgb(253, 164, 175),     // rose-300
        accent: Color::Rgb(244, 63, 94),       // rose-500
        accent_fg: Color::Rgb(255, 255, 255),  // white
        secondary: Color::Rgb(253, 164, 175),  // rose-300
        secondary_fg: Color::Rgb(190, 18, 60), // rose-700
        focus: Color::Rgb(225, 29, 72),        // rose-600
        overlay: Color::Rgb(128, 114, 115),    // black/50 over rose-100
        surface: Color::Rgb(255, 255, 255),    // white
        photo_bg: Color::Rgb(255, 241, 242),   // rose-50
    },
    // 1 - Rose Night
    Theme {
        name: "Rose Night",
        bg: Color::Rgb(36, 17, 24),
        fg: Color::Rgb(255, 228, 230),   // rose-100
        fg_dim: Color::Rgb(136, 19, 55), // rose-900
        accent: Color::Rgb(244, 63, 94), // rose-500
        accent_fg: Color::Rgb(255, 255, 255),
        secondary: Color::Rgb(190, 18, 60),      // rose-700
        secondary_fg: Color::Rgb(253, 164, 175), // rose-300
        focus: Color::Rgb(251, 113, 133),        // rose-400
        overlay: Color::Rgb(18, 8, 12),
        surface: Color::Rgb(56, 26, 37),
        photo_bg: Color::Rgb(76, 5, 25), // rose-950
    },
    // 2 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),         // base
        fg: Color::Rgb(76, 79, 105),           // text
        fg_dim: Color::Rgb(234, 118, 203),     // pink
        accent: Color::Rgb(210, 15, 57),       // red
        accent_fg: Color::Rgb(239, 241, 245),  // base
        secondary: Color::Rgb(230, 69, 83),    // maroon
        secondary_fg: Color::Rgb(230, 69, 83), // maroon
        focus: Color::Rgb(136, 57, 239),       // mauve
        overlay: Color::Rgb(156, 160, 176),    // overlay0
        surface: Color::Rgb(230, 233, 239),    // mantle
        photo_bg: Color::Rgb(220, 224, 232),   // crust
    },
    // 3 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),              // base
        fg: Color::Rgb(205, 214, 244),           // text
        fg_dim: Color::Rgb(245, 194, 231),       // pink
        accent: Color::Rgb(243, 139, 168),       // red
        accent_fg: Color::Rgb(30, 30, 46),       // base
        secondary: Color::Rgb(235, 160, 172),    // maroon
        secondary_fg: Color::Rgb(235, 160, 172), // maroon
        focus: Color::Rgb(203, 166, 247),        // mauve
        overlay: Color::Rgb(17, 17, 27),         // crust
        surface: Color::Rgb(49, 50, 68),         // surface0
        photo_bg: Color::Rgb(24, 24, 37),        // mantle
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 4);
    }

    #[test]
    fn test_default_is_rose() {
        assert_eq!(Theme::default_theme().name, "Rose");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("rose").is_some());
        assert!(Theme::by_name("ROSE NIGHT").is_some());
        assert!(Theme::by_name("catppuccin latte").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_latte_matches_palette() {
        let latte = catppuccin::PALETTE.latte.colors;
        let theme = Theme::by_name("Catppuccin Latte").expect("theme exists");
        assert_eq!(theme.bg, ctp(latte.base));
        assert_eq!(theme.fg, ctp(latte.text));
        assert_eq!(theme.fg_dim, ctp(latte.pink));
        assert_eq!(theme.accent, ctp(latte.red));
        assert_eq!(theme.secondary, ctp(latte.maroon));
        assert_eq!(theme.focus, ctp(latte.mauve));
        assert_eq!(theme.surface, ctp(latte.mantle));
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::by_name("Catppuccin Mocha").expect("theme exists");
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.fg_dim, ctp(mocha.pink));
        assert_eq!(theme.accent, ctp(mocha.red));
        assert_eq!(theme.secondary, ctp(mocha.maroon));
        assert_eq!(theme.focus, ctp(mocha.mauve));
        assert_eq!(theme.overlay, ctp(mocha.crust));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
