//! Chocolate Theme System for Course List
//!
//! Two static palettes (light and dark) selected by a single dark-mode flag.
//! Widgets ask for a style by [`Element`] instead of picking colors directly.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Palette variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ThemeVariant {
    #[default]
    #[strum(to_string = "Light")]
    ChocolateLight,
    #[strum(to_string = "Dark")]
    ChocolateDark,
}

impl ThemeVariant {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::ChocolateDark
        } else {
            Self::ChocolateLight
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::ChocolateDark
    }
}

/// Configured theme preference. `System` defers to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve to a starting dark-mode flag. An unknown system setting means light.
    pub fn resolve(self, system_dark: Option<bool>) -> bool {
        match self {
            Self::System => system_dark.unwrap_or(false),
            Self::Light => false,
            Self::Dark => true,
        }
    }
}

/// Reads the terminal background hint from `COLORFGBG`.
pub fn system_prefers_dark() -> Option<bool> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| dark_from_colorfgbg(&value))
}

/// Parses a `COLORFGBG` value such as `15;0` or `12;default;8`.
///
/// The last field is the background ANSI index: 0-6 and 8 are dark.
pub fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub border: Color,
    pub selection: Color,
    pub muted: Color,
}

impl ColorPalette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(239, 222, 221), // #efdedd creamy white
            surface: Color::Rgb(228, 205, 200),    // #e4cdc8
            primary: Color::Rgb(109, 76, 65),      // #6d4c41 milk chocolate
            secondary: Color::Rgb(161, 136, 127),  // #a1887f cocoa accent
            text: Color::Rgb(86, 61, 45),          // #563d2d deep cocoa
            border: Color::Rgb(161, 136, 127),     // #a1887f
            selection: Color::Rgb(215, 188, 180),  // #d7bcb4
            muted: Color::Rgb(141, 110, 99),       // #8d6e63
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(62, 39, 35),   // #3e2723 dark chocolate
            surface: Color::Rgb(78, 52, 46),      // #4e342e
            primary: Color::Rgb(243, 254, 222),   // #f3fede
            secondary: Color::Rgb(243, 254, 222), // #f3fede
            text: Color::Rgb(215, 204, 200),      // #d7ccc8 light cocoa
            border: Color::Rgb(121, 85, 72),      // #795548
            selection: Color::Rgb(93, 64, 55),    // #5d4037
            muted: Color::Rgb(161, 136, 127),     // #a1887f
        }
    }
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Screen background
    Background,
    /// Body text
    Text,
    /// Card titles and section labels
    Title,
    /// Credit hours and other secondary facts
    Secondary,
    /// Collapsed card frame
    Card,
    /// Expanded card frame
    CardExpanded,
    /// Frame of the selected card
    CardSelected,
    /// Plain borders
    Border,
    /// Focused input or button
    Active,
    /// Key hints, placeholders
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::ChocolateLight => ColorPalette::light(),
            ThemeVariant::ChocolateDark => ColorPalette::dark(),
        };
        Self { variant, colors }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        Self::new(ThemeVariant::from_dark_mode(dark_mode))
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn is_dark(&self) -> bool {
        self.variant.is_dark()
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        let c = &self.colors;
        match element {
            Element::Background => Style::default().fg(c.text).bg(c.background),
            Element::Text => Style::default().fg(c.text).bg(c.surface),
            Element::Title => Style::default()
                .fg(c.primary)
                .bg(c.surface)
                .add_modifier(Modifier::BOLD),
            Element::Secondary => Style::default().fg(c.secondary).bg(c.surface),
            Element::Card => Style::default().fg(c.border).bg(c.surface),
            Element::CardExpanded => Style::default().fg(c.primary).bg(c.surface),
            Element::CardSelected => Style::default()
                .fg(c.primary)
                .bg(c.selection)
                .add_modifier(Modifier::BOLD),
            Element::Border => Style::default().fg(c.border).bg(c.background),
            Element::Active => Style::default()
                .fg(c.primary)
                .bg(c.background)
                .add_modifier(Modifier::BOLD),
            Element::Inactive => Style::default().fg(c.muted).bg(c.background),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn inactive_style(&self) -> Style {
        self.ratatui_style(Element::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_selects_palette() {
        assert_eq!(Theme::default(), Theme::from_dark_mode(false));
        assert_eq!(Theme::default().variant(), ThemeVariant::ChocolateLight);
        let dark = Theme::from_dark_mode(true);
        assert_eq!(dark.variant(), ThemeVariant::ChocolateDark);
        assert!(dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::from_dark_mode(false);
        let dark = Theme::from_dark_mode(true);
        let background = |theme: &Theme| theme.ratatui_style(Element::Background).bg;
        assert_ne!(background(&light), background(&dark));
        assert_eq!(background(&dark), Some(Color::Rgb(62, 39, 35)));
        assert_eq!(
            light.ratatui_style(Element::Title).fg,
            Some(Color::Rgb(109, 76, 65))
        );
    }

    #[test]
    fn test_preference_resolution() {
        assert!(!ThemePreference::Light.resolve(Some(true)));
        assert!(ThemePreference::Dark.resolve(Some(false)));
        assert!(ThemePreference::System.resolve(Some(true)));
        assert!(!ThemePreference::System.resolve(None));
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("12;default;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;7"), Some(false));
        assert_eq!(dark_from_colorfgbg("default"), None);
        assert_eq!(dark_from_colorfgbg(""), None);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(ThemeVariant::ChocolateDark.to_string(), "Dark");
        assert_eq!(ThemePreference::System.to_string(), "system");
    }
}
