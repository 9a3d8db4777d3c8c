//! Drop-shadow token record

use patina_core::{Color, ColorError};

use crate::palette;

/// Process-wide drop-shadow descriptor.
///
/// There is one shadow record for the whole theme rather than one per
/// component; the navigation-bar style is what carries it out to the
/// toolkit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSpec {
    pub color: Color,
    /// Shadow opacity, `0.0..=1.0`.
    pub opacity: f32,
    /// Blur radius in points, non-negative.
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ShadowSpec {
    pub const fn new(
        color: Color,
        opacity: f32,
        radius: f32,
        offset_x: f32,
        offset_y: f32,
    ) -> Self {
        Self { color, opacity, radius, offset_x, offset_y }
    }

    /// Soft preset: translucent mid gray, blurred, offset slightly down.
    pub const fn soft() -> Self {
        Self::new(palette::gray::P500, 0.3, 3.0, 0.0, 2.0)
    }

    /// Flat preset: opaque mid gray, tight radius, no offset.
    pub const fn clean() -> Self {
        Self::new(palette::gray::P500, 1.0, 1.0, 0.0, 0.0)
    }

    /// Fully transparent, zero-size shadow.
    pub const fn none() -> Self {
        Self::new(Color::TRANSPARENT, 0.0, 0.0, 0.0, 0.0)
    }

    /// Check opacity and radius bounds without writing anything.
    pub fn validate(&self) -> Result<(), ColorError> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ColorError::InvalidRange {
                param: "opacity",
                value: self.opacity,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.radius < 0.0 || self.radius.is_nan() {
            return Err(ColorError::InvalidRange {
                param: "radius",
                value: self.radius,
                min: 0.0,
                max: f32::INFINITY,
            });
        }
        Ok(())
    }
}

impl Default for ShadowSpec {
    /// The record a fresh store starts with. Same shape as [`soft`] but a
    /// step darker gray.
    ///
    /// [`soft`]: Self::soft
    fn default() -> Self {
        Self::new(palette::gray::P600, 0.3, 3.0, 0.0, 2.0)
    }
}
