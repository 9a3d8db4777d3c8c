//! Seed-color cascade rules
//!
//! One seed color fans out into a fixed list of token writes. A [`Stylist`]
//! owns the sink and a handle to the store; each seed rule derives its
//! values up front, commits the whole write list in a single store
//! acquisition, then pushes the resulting snapshot through the sink exactly
//! once. Shadow rules write the shadow record without dispatching; the new
//! record surfaces the next time any seed rule fires.

use std::sync::Arc;

use patina_core::{Color, ColorError};

use crate::appearance::{self, AppearanceSink};
use crate::store::ThemeStore;
use crate::tokens::ShadowSpec;

/// Cascade engine binding a token store to an appearance sink.
pub struct Stylist<S: AppearanceSink> {
    store: Arc<ThemeStore>,
    sink: S,
}

impl<S: AppearanceSink> Stylist<S> {
    pub fn new(store: Arc<ThemeStore>, sink: S) -> Self {
        Self { store, sink }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the stylist and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // ========== Seed rules ==========

    /// Seed the main surfaces: bar and button backgrounds plus the view,
    /// button, and toolbar tints. A dark seed also flips the title text to
    /// white (subtitle a touch dimmer) so it stays readable on the new
    /// bars; a light seed leaves the text tokens alone.
    pub fn set_primary(&mut self, color: Color) {
        tracing::debug!("Stylist::set_primary - seed {}", color);
        let titles = color.is_dark().then(|| (Color::WHITE, Color::WHITE.darken(0.05)));
        self.store.update(|tokens| {
            tokens.background.navigation_bar = color;
            tokens.background.tab_bar = color;
            tokens.background.button = color;
            tokens.tint.button = color;
            tokens.tint.view = color;
            tokens.tint.toolbar = color;
            if let Some((title, subtitle)) = titles {
                tokens.text.title = title;
                tokens.text.subtitle = subtitle;
            }
        });
        self.apply_all();
    }

    /// Seed the accent tints of the chrome components. The inactive tint
    /// gets a 20% darker shade of the seed and the info status adopts it;
    /// backgrounds are untouched.
    pub fn set_secondary(&mut self, color: Color) {
        tracing::debug!("Stylist::set_secondary - seed {}", color);
        let inactive = color.darken(0.2);
        self.store.update(|tokens| {
            tokens.tint.navigation_bar = color;
            tokens.tint.tab_bar = color;
            tokens.tint.toolbar = color;
            tokens.tint.inactive = inactive;
            tokens.tint.view = color;
            tokens.status.info = color;
        });
        self.apply_all();
    }

    /// Seed the button background plus the view and toolbar tints; the info
    /// status adopts the seed.
    pub fn set_tertiary(&mut self, color: Color) {
        tracing::debug!("Stylist::set_tertiary - seed {}", color);
        self.store.update(|tokens| {
            tokens.background.button = color;
            tokens.tint.view = color;
            tokens.status.info = color;
            tokens.tint.toolbar = color;
        });
        self.apply_all();
    }

    /// Seed just the view and toolbar tints.
    pub fn set_detail(&mut self, color: Color) {
        tracing::debug!("Stylist::set_detail - seed {}", color);
        self.store.update(|tokens| {
            tokens.tint.view = color;
            tokens.tint.toolbar = color;
        });
        self.apply_all();
    }

    // ========== Shadow rules ==========

    /// Replace the process-wide shadow record.
    ///
    /// Validates opacity and radius first; on failure the store is
    /// untouched. Does not dispatch: the navigation-bar style re-reads the
    /// record on the next seed rule or [`apply_all`](Self::apply_all).
    pub fn set_shadow(&mut self, shadow: ShadowSpec) -> Result<(), ColorError> {
        shadow.validate()?;
        tracing::debug!("Stylist::set_shadow - {:?}", shadow);
        self.write_shadow(shadow);
        Ok(())
    }

    /// Switch to the flat shadow preset ([`ShadowSpec::clean`]).
    pub fn set_clean_shadow(&mut self) {
        tracing::debug!("Stylist::set_clean_shadow");
        self.write_shadow(ShadowSpec::clean());
    }

    /// Disable the shadow entirely ([`ShadowSpec::none`]).
    pub fn set_no_shadow(&mut self) {
        tracing::debug!("Stylist::set_no_shadow");
        self.write_shadow(ShadowSpec::none());
    }

    fn write_shadow(&mut self, shadow: ShadowSpec) {
        self.store.update(|tokens| tokens.shadow = shadow);
    }

    // ========== Dispatch ==========

    /// Push the current snapshot through every sink method once.
    pub fn apply_all(&mut self) {
        let snapshot = self.store.snapshot();
        appearance::apply_all(&snapshot, &mut self.sink);
    }
}
