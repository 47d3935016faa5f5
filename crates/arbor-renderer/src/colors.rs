//! Color math for post theming.
//!
//! The CMS hands each post a single hex accent color; contrast text,
//! brightness variants, and translucent stops are all derived here. Pure
//! functions, consumed by the dispatcher and the post theme.

use smol_str::{SmolStr, format_smolstr};

use crate::error::RenderError;

/// Fallback accents used when a post carries no color of its own.
pub mod ui {
    pub const POST_TEXT_QUOTE: &str = "#b8c4cc";
    pub const POST_TEXT_EMPHASIS: &str = "#6b7280";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rgb` or `#rrggbb`.
    pub fn parse(color: &str) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidColor(color.to_string());
        let hex = color.trim().strip_prefix('#').ok_or_else(invalid)?;

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut digits = hex.chars();
                let wide = |d: char| {
                    let s: String = [d, d].iter().collect();
                    channel(&s)
                };
                let r = wide(digits.next().ok_or_else(invalid)?)?;
                let g = wide(digits.next().ok_or_else(invalid)?)?;
                let b = wide(digits.next().ok_or_else(invalid)?)?;
                Ok(Self { r, g, b })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> SmolStr {
        format_smolstr!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// YIQ luma on the usual 0-255 scale.
    fn yiq(self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }
}

/// Shift a color's brightness by `delta` percent of full scale, clamping
/// each channel.
pub fn change_color_brightness(color: &str, delta: i32) -> Result<SmolStr, RenderError> {
    let rgb = Rgb::parse(color)?;
    let shift = 255 * delta / 100;
    let adjust = |c: u8| (i32::from(c) + shift).clamp(0, 255) as u8;
    Ok(Rgb {
        r: adjust(rgb.r),
        g: adjust(rgb.g),
        b: adjust(rgb.b),
    }
    .to_hex())
}

/// Black or white, whichever reads against `color` (YIQ against 128).
pub fn color_contrast(color: &str) -> Result<SmolStr, RenderError> {
    color_contrast_with(color, 128, false)
}

/// Contrast with an explicit luma threshold. With `nearest` set, returns the
/// extreme on the *same* side as the input instead of the opposite one,
/// for shadows that should deepen the base rather than fight it.
pub fn color_contrast_with(
    color: &str,
    threshold: u8,
    nearest: bool,
) -> Result<SmolStr, RenderError> {
    let light = Rgb::parse(color)?.yiq() >= u32::from(threshold);
    let pick_black = if nearest { !light } else { light };
    Ok(if pick_black {
        SmolStr::new_static("#000000")
    } else {
        SmolStr::new_static("#ffffff")
    })
}

/// CSS `rgba()` string from a hex color and an alpha in `0.0..=1.0`.
pub fn hex_to_rgba(color: &str, alpha: f32) -> Result<SmolStr, RenderError> {
    let Rgb { r, g, b } = Rgb::parse(color)?;
    Ok(format_smolstr!("rgba({}, {}, {}, {})", r, g, b, alpha))
}
