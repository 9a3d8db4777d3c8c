//! Process-wide token store
//!
//! The whole token table sits behind a single lock: cascade rules commit
//! all of their writes in one acquisition and [`ThemeStore::snapshot`]
//! clones under one read acquisition, so no reader ever observes a
//! half-applied rule.

use std::sync::{Arc, OnceLock, RwLock};

use patina_core::Color;

use crate::tokens::{
    BackgroundToken, ShadowSpec, StatusToken, TextToken, ThemeTokens, TintToken,
};

/// Process-wide store instance
static THEME_STORE: OnceLock<Arc<ThemeStore>> = OnceLock::new();

/// Mutable table of theme tokens.
///
/// Most applications use the shared instance via [`ThemeStore::init`] and
/// [`ThemeStore::get`], but stores are plain values: tests and embedded
/// setups can construct as many isolated ones as they like.
pub struct ThemeStore {
    tokens: RwLock<ThemeTokens>,
}

impl ThemeStore {
    /// Create an isolated store holding the stock light theme.
    pub fn new() -> Self {
        Self { tokens: RwLock::new(ThemeTokens::default()) }
    }

    // ========== Shared instance ==========

    /// Initialize the process-wide store, or fetch it if a previous call
    /// already did. Idempotent.
    pub fn init() -> Arc<ThemeStore> {
        THEME_STORE.get_or_init(|| Arc::new(ThemeStore::new())).clone()
    }

    /// Get the process-wide store.
    ///
    /// # Panics
    /// Panics when no one has called [`init`](Self::init) yet.
    pub fn get() -> Arc<ThemeStore> {
        THEME_STORE
            .get()
            .expect("ThemeStore not initialized. Call ThemeStore::init() at app startup.")
            .clone()
    }

    /// Like [`get`](Self::get), but returns `None` instead of panicking
    /// when the store is uninitialized.
    pub fn try_get() -> Option<Arc<ThemeStore>> {
        THEME_STORE.get().cloned()
    }

    // ========== Token access ==========

    /// Current value of a tint token.
    pub fn tint(&self, token: TintToken) -> Color {
        self.tokens.read().unwrap().tint.get(token)
    }

    pub fn set_tint(&self, token: TintToken, color: Color) {
        self.tokens.write().unwrap().tint.set(token, color);
    }

    /// Current value of a background token.
    pub fn background(&self, token: BackgroundToken) -> Color {
        self.tokens.read().unwrap().background.get(token)
    }

    pub fn set_background(&self, token: BackgroundToken, color: Color) {
        self.tokens.write().unwrap().background.set(token, color);
    }

    /// Current value of a text token.
    pub fn text(&self, token: TextToken) -> Color {
        self.tokens.read().unwrap().text.get(token)
    }

    pub fn set_text(&self, token: TextToken, color: Color) {
        self.tokens.write().unwrap().text.set(token, color);
    }

    /// Current value of a status token.
    pub fn status(&self, token: StatusToken) -> Color {
        self.tokens.read().unwrap().status.get(token)
    }

    pub fn set_status(&self, token: StatusToken, color: Color) {
        self.tokens.write().unwrap().status.set(token, color);
    }

    /// Current shadow record. Writes go through the cascade engine
    /// ([`Stylist::set_shadow`](crate::cascade::Stylist::set_shadow) and
    /// the shadow presets), which validates first.
    pub fn shadow(&self) -> ShadowSpec {
        self.tokens.read().unwrap().shadow
    }

    /// Immutable copy of the whole table, captured atomically.
    pub fn snapshot(&self) -> ThemeTokens {
        self.tokens.read().unwrap().clone()
    }

    /// Run a batch of token writes under one write acquisition.
    pub(crate) fn update(&self, mutate: impl FnOnce(&mut ThemeTokens)) {
        let mut tokens = self.tokens.write().unwrap();
        mutate(&mut tokens);
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}
