//! Per-post CSS custom properties.
//!
//! Each post page mounts a `.post-theme` block whose variables are all
//! derived from the post's single accent color: brightness variants,
//! translucent stops, contrast text, and the complementary accent handed to
//! the rich-text dispatcher (with a dark-scheme override).

use smol_str::SmolStr;

use crate::colors::{change_color_brightness, color_contrast, color_contrast_with, hex_to_rgba};
use crate::error::RenderError;

#[derive(Debug, Clone)]
pub struct PostTheme {
    pub color: SmolStr,
    pub complementary_light: SmolStr,
    pub complementary_dark: SmolStr,
}

impl PostTheme {
    /// Derive the full theme from a post's accent color.
    pub fn from_color(color: &str) -> Result<Self, RenderError> {
        Ok(Self {
            color: SmolStr::new(color),
            complementary_light: change_color_brightness(color, -30)?,
            complementary_dark: change_color_brightness(color, 15)?,
        })
    }

    /// Complementary accent for the current (light-first) render.
    pub fn complementary_color(&self) -> &SmolStr {
        &self.complementary_light
    }

    /// The `.post-theme` CSS variable block.
    pub fn css_variables(&self) -> Result<String, RenderError> {
        let color = self.color.as_str();
        let contrast = color_contrast(color)?;
        let contrast_shadow = hex_to_rgba(&color_contrast_with(color, 128, true)?, 0.45)?;

        Ok(format!(
            r#".post-theme {{
    --post-color: {color};
    --post-color-plus-15: {plus_15};
    --post-color-minus-30: {minus_30};
    --post-color-0_3: {alpha_3};
    --post-color-0_15: {alpha_15};
    --post-color-0_0: {alpha_0};
    --post-color-contrast: {contrast};
    --post-color-contrast-shadow-0_45: {contrast_shadow};
    --post-complementary-color: {complementary_light};
    --cover-image-color: var(--post-color);
    --cover-image-color-0_3: var(--post-color-0_3);
    --cover-image-border-width: 6px;
    --gallery-bullet-color: var(--post-complementary-color);
}}

@media screen and (prefers-color-scheme: dark) {{
    .post-theme {{
        --post-complementary-color: {complementary_dark};
    }}
}}
"#,
            plus_15 = change_color_brightness(color, 15)?,
            minus_30 = change_color_brightness(color, -30)?,
            alpha_3 = hex_to_rgba(color, 0.3)?,
            alpha_15 = hex_to_rgba(color, 0.15)?,
            alpha_0 = hex_to_rgba(color, 0.0)?,
            complementary_light = self.complementary_light,
            complementary_dark = self.complementary_dark,
        ))
    }
}
