//! Declarative startup configuration
//!
//! A small TOML document can seed the whole theme at startup:
//!
//! ```toml
//! [seed]
//! primary = "#37474F"
//! secondary = "teal.A400"
//!
//! [shadow]
//! preset = "none"
//! ```
//!
//! Color references are hex literals (`"#RRGGBB"`, `"#RRGGBBAA"`, hash
//! optional), palette entries (`"family.SHADE"`), or the neutrals
//! `"white"`, `"black"` and `"transparent"`. [`ThemeConfig::apply`]
//! resolves every reference before firing any cascade rule, so a bad entry
//! leaves the store exactly as it was.

use patina_core::{Color, ColorError};
use serde::Deserialize;
use thiserror::Error;

use crate::appearance::AppearanceSink;
use crate::cascade::Stylist;
use crate::palette;
use crate::tokens::ShadowSpec;

/// Failures while parsing or applying a theme config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("theme config syntax error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("unknown palette color `{0}`")]
    UnknownColor(String),

    #[error("unknown shadow preset `{0}` (expected soft, clean, or none)")]
    UnknownShadowPreset(String),
}

/// Root of the TOML document. Both sections are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default)]
    pub seed: SeedConfig,
    pub shadow: Option<ShadowConfig>,
}

/// Seed-color references; each present entry fires its cascade rule.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub detail: Option<String>,
}

/// Shadow section: either a named preset or explicit fields. Omitted
/// explicit fields fall back to the soft preset's values. When both forms
/// appear in one table the preset wins.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ShadowConfig {
    Preset {
        preset: String,
    },
    Custom {
        color: Option<String>,
        opacity: Option<f32>,
        radius: Option<f32>,
        offset: Option<[f32; 2]>,
    },
}

impl ThemeConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Fire the configured cascade rules in declaration order: primary,
    /// secondary, tertiary, detail, then the shadow write. All references
    /// are resolved and validated up front; on error nothing fires.
    ///
    /// The shadow write keeps its usual deferred visibility, but here the
    /// seed rules dispatch first, so a config that sets both a seed and a
    /// shadow ends with the shadow still pending.
    pub fn apply<S: AppearanceSink>(&self, stylist: &mut Stylist<S>) -> Result<(), ConfigError> {
        let primary = self.seed.primary.as_deref().map(resolve_color).transpose()?;
        let secondary = self.seed.secondary.as_deref().map(resolve_color).transpose()?;
        let tertiary = self.seed.tertiary.as_deref().map(resolve_color).transpose()?;
        let detail = self.seed.detail.as_deref().map(resolve_color).transpose()?;
        let shadow = self.shadow.as_ref().map(ShadowConfig::resolve).transpose()?;

        if let Some(color) = primary {
            stylist.set_primary(color);
        }
        if let Some(color) = secondary {
            stylist.set_secondary(color);
        }
        if let Some(color) = tertiary {
            stylist.set_tertiary(color);
        }
        if let Some(color) = detail {
            stylist.set_detail(color);
        }
        if let Some(spec) = shadow {
            // Already validated by resolve().
            stylist.set_shadow(spec)?;
        }
        tracing::debug!("ThemeConfig::apply - done");
        Ok(())
    }
}

impl ShadowConfig {
    /// Resolve to a validated [`ShadowSpec`].
    pub fn resolve(&self) -> Result<ShadowSpec, ConfigError> {
        let spec = match self {
            ShadowConfig::Preset { preset } => match preset.to_ascii_lowercase().as_str() {
                "soft" => ShadowSpec::soft(),
                "clean" => ShadowSpec::clean(),
                "none" => ShadowSpec::none(),
                other => return Err(ConfigError::UnknownShadowPreset(other.to_string())),
            },
            ShadowConfig::Custom { color, opacity, radius, offset } => {
                let soft = ShadowSpec::soft();
                let color = match color.as_deref() {
                    Some(reference) => resolve_color(reference)?,
                    None => soft.color,
                };
                let [offset_x, offset_y] = offset.unwrap_or([soft.offset_x, soft.offset_y]);
                ShadowSpec::new(
                    color,
                    opacity.unwrap_or(soft.opacity),
                    radius.unwrap_or(soft.radius),
                    offset_x,
                    offset_y,
                )
            }
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Resolve a config color reference: a neutral name, a `family.SHADE`
/// palette entry, or a hex literal.
pub fn resolve_color(reference: &str) -> Result<Color, ConfigError> {
    let trimmed = reference.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "white" => return Ok(Color::WHITE),
        "black" => return Ok(Color::BLACK),
        "transparent" | "clear" => return Ok(Color::TRANSPARENT),
        _ => {}
    }
    if let Some((family, shade)) = trimmed.split_once('.') {
        return palette::lookup(family, shade)
            .ok_or_else(|| ConfigError::UnknownColor(trimmed.to_string()));
    }
    Ok(Color::from_hex(trimmed)?)
}
