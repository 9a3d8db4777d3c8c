//! Patina Core
//!
//! Color value type and the primitive operations the theming layer builds on:
//! hex/packed-RGBA parsing, shading toward white or black, and light/dark
//! classification.
//!
//! ```rust
//! use patina_core::Color;
//!
//! let seed = Color::from_hex("#37474F")?;
//! assert!(seed.is_dark());
//!
//! let highlight = seed.lighter(20.0)?;
//! assert!(highlight.luminance() > seed.luminance());
//! # Ok::<(), patina_core::ColorError>(())
//! ```

pub mod color;
pub mod error;

pub use color::Color;
pub use error::ColorError;
