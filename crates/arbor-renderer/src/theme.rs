//! Site-wide theme values feeding the stylesheet.

use smol_str::SmolStr;

#[derive(Debug, Clone)]
pub struct SiteTheme {
    pub light: ColorScheme,
    pub dark: ColorScheme,
    pub accent: AccentScheme,
    pub fonts: FontScheme,
    pub spacing: SpacingScheme,
}

#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: SmolStr,
    pub foreground: SmolStr,
    pub link: SmolStr,
}

/// The three-stop gradient accent used by links, icons, and the dark-mode
/// biography treatment.
#[derive(Debug, Clone)]
pub struct AccentScheme {
    pub stop_1: SmolStr,
    pub stop_2: SmolStr,
    pub stop_3: SmolStr,
}

#[derive(Debug, Clone)]
pub struct FontScheme {
    pub body: SmolStr,
    pub heading: SmolStr,
    pub monospace: SmolStr,
}

#[derive(Debug, Clone)]
pub struct SpacingScheme {
    pub base_font_size: SmolStr,
    pub line_height: SmolStr,
    pub measure: SmolStr,
}

impl Default for SiteTheme {
    fn default() -> Self {
        Self {
            light: ColorScheme {
                background: SmolStr::new("#ffffff"),
                foreground: SmolStr::new("rgba(0, 0, 0, 0.65)"),
                link: SmolStr::new("#0077cc"),
            },
            dark: ColorScheme {
                background: SmolStr::new("#10131c"),
                foreground: SmolStr::new("rgba(255, 255, 255, 0.85)"),
                link: SmolStr::new("#66bfff"),
            },
            accent: AccentScheme::default(),
            fonts: FontScheme::default(),
            spacing: SpacingScheme::default(),
        }
    }
}

impl Default for AccentScheme {
    fn default() -> Self {
        Self {
            stop_1: SmolStr::new("#00dbde"),
            stop_2: SmolStr::new("#00de82"),
            stop_3: SmolStr::new("#00a3de"),
        }
    }
}

impl Default for FontScheme {
    fn default() -> Self {
        Self {
            body: SmolStr::new(
                "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            heading: SmolStr::new(
                "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            monospace: SmolStr::new(
                "'Cascadia Code', 'Roboto Mono', Consolas, monospace",
            ),
        }
    }
}

impl Default for SpacingScheme {
    fn default() -> Self {
        Self {
            base_font_size: SmolStr::new("16px"),
            line_height: SmolStr::new("1.6"),
            measure: SmolStr::new("70ch"),
        }
    }
}
