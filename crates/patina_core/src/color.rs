//! RGBA color value and primitive transforms
//!
//! Shading comes in two forms: `lighten`/`darken` take a `0.0..=1.0` fraction
//! and never fail (channels clamp), while `lighter`/`darker` take a `0..=100`
//! percentage and reject out-of-range input. The theming layer uses the
//! fraction form for its fixed derivations and exposes the checked form to
//! callers.

use std::fmt;

use crate::error::{ColorError, Result};

/// RGBA color, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a packed `0xRRGGBBAA` value.
    pub const fn from_packed_rgba(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as f32 / 255.0,
            g: ((rgba >> 16) & 0xFF) as f32 / 255.0,
            b: ((rgba >> 8) & 0xFF) as f32 / 255.0,
            a: (rgba & 0xFF) as f32 / 255.0,
        }
    }

    /// Parse a hex literal: `RRGGBB` (implicit full alpha) or `RRGGBBAA`,
    /// with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let well_formed =
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(ColorError::InvalidFormat(hex.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))?;
        Ok(match digits.len() {
            6 => Self::from_packed_rgba((value << 8) | 0xFF),
            _ => Self::from_packed_rgba(value),
        })
    }

    /// Replace the alpha channel.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Rec. 601 luma of the RGB channels.
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// True when the color reads as dark (luma below 0.5).
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.5
    }

    /// True when the color reads as light; always the negation of
    /// [`is_dark`](Self::is_dark).
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Shift every RGB channel toward white by `amount` (a `0.0..=1.0`
    /// fraction), clamping at pure white. Alpha is untouched.
    pub fn lighten(&self, amount: f32) -> Self {
        self.shifted(amount)
    }

    /// Shift every RGB channel toward black by `amount` (a `0.0..=1.0`
    /// fraction), clamping at pure black. Alpha is untouched.
    pub fn darken(&self, amount: f32) -> Self {
        self.shifted(-amount)
    }

    /// Checked percentage form of [`lighten`](Self::lighten).
    ///
    /// `percent` must be in `0.0..=100.0`; anything else fails with
    /// [`ColorError::InvalidRange`].
    pub fn lighter(&self, percent: f32) -> Result<Self> {
        Self::percent_fraction(percent).map(|amount| self.shifted(amount))
    }

    /// Checked percentage form of [`darken`](Self::darken).
    ///
    /// `percent` must be in `0.0..=100.0`; anything else fails with
    /// [`ColorError::InvalidRange`].
    pub fn darker(&self, percent: f32) -> Result<Self> {
        Self::percent_fraction(percent).map(|amount| self.shifted(-amount))
    }

    fn percent_fraction(percent: f32) -> Result<f32> {
        if (0.0..=100.0).contains(&percent) {
            Ok(percent / 100.0)
        } else {
            Err(ColorError::InvalidRange {
                param: "percent",
                value: percent,
                min: 0.0,
                max: 100.0,
            })
        }
    }

    fn shifted(&self, delta: f32) -> Self {
        Self {
            r: (self.r + delta).clamp(0.0, 1.0),
            g: (self.g + delta).clamp(0.0, 1.0),
            b: (self.b + delta).clamp(0.0, 1.0),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    /// Formats as `#RRGGBBAA`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}
