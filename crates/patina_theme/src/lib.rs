//! Patina Theme
//!
//! Process-wide appearance registry for GUI toolkits: named color and
//! shadow tokens, a seed-color cascade that derives a full theme from a
//! handful of inputs, and a dispatch layer that pushes resolved component
//! styles to the toolkit's per-class appearance proxies.
//!
//! # Overview
//!
//! - **[`ThemeStore`]**: the token table (tints, backgrounds, text roles,
//!   status colors, one shadow record) behind a single lock, so snapshots
//!   are atomic
//! - **[`Stylist`]**: the cascade rules; one seed color fans out into a
//!   fixed list of token writes, then the new snapshot is pushed through
//!   the sink exactly once (shadow writes are the exception and do not
//!   dispatch)
//! - **[`AppearanceSink`]**: the seam to the toolkit; bindings forward each
//!   resolved style to the matching widget-class proxy, [`NullSink`] drops
//!   everything for headless use
//! - **[`palette`]** and **[`ThemeConfig`]**: the Material shade table the
//!   stock theme draws from, and TOML-driven seeding of the cascade
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use patina_theme::{Color, NullSink, Stylist, TextToken, ThemeStore, TintToken};
//!
//! let store = Arc::new(ThemeStore::new());
//! let mut stylist = Stylist::new(store.clone(), NullSink);
//!
//! let seed = Color::from_hex("#37474F")?;
//! stylist.set_primary(seed);
//!
//! assert_eq!(store.tint(TintToken::View), seed);
//! // Dark seeds flip the title text to white.
//! assert_eq!(store.text(TextToken::Title), Color::WHITE);
//! # Ok::<(), patina_theme::ColorError>(())
//! ```
//!
//! Applications that want one ambient theme initialize the shared store
//! once at startup (`ThemeStore::init()`) and hand clones of it to however
//! many stylists they need; the store is the only ambient piece, sinks are
//! always passed in explicitly.

pub mod appearance;
pub mod cascade;
pub mod config;
pub mod palette;
pub mod store;
pub mod tokens;

// Re-export commonly used types
pub use appearance::{
    AppearanceSink, ButtonStyle, NavigationBarStyle, NullSink, PageControlStyle, SearchBarStyle,
    SegmentedControlStyle, SliderStyle, SwitchStyle, TabBarStyle, ToolbarStyle, ViewStyle,
};
pub use cascade::Stylist;
pub use config::{ConfigError, SeedConfig, ShadowConfig, ThemeConfig};
pub use patina_core::{Color, ColorError};
pub use store::ThemeStore;
pub use tokens::*;
