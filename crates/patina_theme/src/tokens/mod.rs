//! Design tokens
//!
//! Four color namespaces (tint, background, text, status) plus the
//! process-wide shadow record. [`ThemeTokens`] bundles them into the full
//! table held by the store; the same type doubles as the immutable snapshot
//! handed to the dispatch layer.

mod color;
mod shadow;

pub use color::*;
pub use shadow::*;

/// The complete token table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeTokens {
    pub tint: TintTokens,
    pub background: BackgroundTokens,
    pub text: TextTokens,
    pub status: StatusTokens,
    pub shadow: ShadowSpec,
}
