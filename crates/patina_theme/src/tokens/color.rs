//! Color token namespaces
//!
//! Four flat namespaces cover every themable color: component tints,
//! component backgrounds, text roles, and status colors. Each namespace
//! pairs an enum (the token names) with a plain struct (the values) so
//! callers can address tokens dynamically or by field.

use patina_core::Color;

use crate::palette;

// ========== Tint ==========

/// Foreground/accent color slots, one per component group.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TintToken {
    View,
    Button,
    NavigationBar,
    TabBar,
    Toolbar,
    /// Tint for de-emphasized items, e.g. unselected tab icons.
    Inactive,
}

/// Tint values for every [`TintToken`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintTokens {
    pub view: Color,
    pub button: Color,
    pub navigation_bar: Color,
    pub tab_bar: Color,
    pub toolbar: Color,
    pub inactive: Color,
}

impl TintTokens {
    pub fn get(&self, token: TintToken) -> Color {
        match token {
            TintToken::View => self.view,
            TintToken::Button => self.button,
            TintToken::NavigationBar => self.navigation_bar,
            TintToken::TabBar => self.tab_bar,
            TintToken::Toolbar => self.toolbar,
            TintToken::Inactive => self.inactive,
        }
    }

    pub fn set(&mut self, token: TintToken, color: Color) {
        match token {
            TintToken::View => self.view = color,
            TintToken::Button => self.button = color,
            TintToken::NavigationBar => self.navigation_bar = color,
            TintToken::TabBar => self.tab_bar = color,
            TintToken::Toolbar => self.toolbar = color,
            TintToken::Inactive => self.inactive = color,
        }
    }
}

impl Default for TintTokens {
    fn default() -> Self {
        Self {
            view: palette::light_blue::P500,
            button: palette::light_blue::P500,
            navigation_bar: palette::light_blue::P500,
            tab_bar: palette::light_blue::P500,
            toolbar: palette::light_blue::P500,
            inactive: palette::gray::P500,
        }
    }
}

// ========== Background ==========

/// Surface color slots, one per component group.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BackgroundToken {
    View,
    ViewController,
    Button,
    NavigationBar,
    TabBar,
    Toolbar,
}

/// Background values for every [`BackgroundToken`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundTokens {
    pub view: Color,
    pub view_controller: Color,
    pub button: Color,
    pub navigation_bar: Color,
    pub tab_bar: Color,
    pub toolbar: Color,
}

impl BackgroundTokens {
    pub fn get(&self, token: BackgroundToken) -> Color {
        match token {
            BackgroundToken::View => self.view,
            BackgroundToken::ViewController => self.view_controller,
            BackgroundToken::Button => self.button,
            BackgroundToken::NavigationBar => self.navigation_bar,
            BackgroundToken::TabBar => self.tab_bar,
            BackgroundToken::Toolbar => self.toolbar,
        }
    }

    pub fn set(&mut self, token: BackgroundToken, color: Color) {
        match token {
            BackgroundToken::View => self.view = color,
            BackgroundToken::ViewController => self.view_controller = color,
            BackgroundToken::Button => self.button = color,
            BackgroundToken::NavigationBar => self.navigation_bar = color,
            BackgroundToken::TabBar => self.tab_bar = color,
            BackgroundToken::Toolbar => self.toolbar = color,
        }
    }
}

impl Default for BackgroundTokens {
    fn default() -> Self {
        // The screen background is the classic grouped-list off-white, not
        // pure white.
        Self {
            view: Color::WHITE,
            view_controller: Color::from_packed_rgba(0xEFEFF4FF),
            button: Color::WHITE,
            navigation_bar: Color::WHITE,
            tab_bar: Color::WHITE,
            toolbar: Color::WHITE,
        }
    }
}

// ========== Text ==========

/// Text role slots, mirroring the usual type ramp.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextToken {
    Title,
    Subtitle,
    Body,
    Callout,
    Caption,
    Footnote,
    Headline,
    Subhead,
    Disabled,
}

/// Text colors for every [`TextToken`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTokens {
    pub title: Color,
    pub subtitle: Color,
    pub body: Color,
    pub callout: Color,
    pub caption: Color,
    pub footnote: Color,
    pub headline: Color,
    pub subhead: Color,
    pub disabled: Color,
}

impl TextTokens {
    pub fn get(&self, token: TextToken) -> Color {
        match token {
            TextToken::Title => self.title,
            TextToken::Subtitle => self.subtitle,
            TextToken::Body => self.body,
            TextToken::Callout => self.callout,
            TextToken::Caption => self.caption,
            TextToken::Footnote => self.footnote,
            TextToken::Headline => self.headline,
            TextToken::Subhead => self.subhead,
            TextToken::Disabled => self.disabled,
        }
    }

    pub fn set(&mut self, token: TextToken, color: Color) {
        match token {
            TextToken::Title => self.title = color,
            TextToken::Subtitle => self.subtitle = color,
            TextToken::Body => self.body = color,
            TextToken::Callout => self.callout = color,
            TextToken::Caption => self.caption = color,
            TextToken::Footnote => self.footnote = color,
            TextToken::Headline => self.headline = color,
            TextToken::Subhead => self.subhead = color,
            TextToken::Disabled => self.disabled = color,
        }
    }
}

impl Default for TextTokens {
    fn default() -> Self {
        let body = Color::from_packed_rgba(0x333333FF);
        Self {
            title: palette::gray::P900,
            subtitle: palette::gray::P800,
            body,
            callout: body,
            caption: body,
            footnote: body,
            headline: body,
            subhead: Color::from_packed_rgba(0x8E8E8EFF),
            disabled: palette::gray::P500,
        }
    }
}

// ========== Status ==========

/// Semantic state color slots.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum StatusToken {
    Info,
    Success,
    Warning,
    Danger,
}

/// Status colors for every [`StatusToken`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusTokens {
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl StatusTokens {
    pub fn get(&self, token: StatusToken) -> Color {
        match token {
            StatusToken::Info => self.info,
            StatusToken::Success => self.success,
            StatusToken::Warning => self.warning,
            StatusToken::Danger => self.danger,
        }
    }

    pub fn set(&mut self, token: StatusToken, color: Color) {
        match token {
            StatusToken::Info => self.info = color,
            StatusToken::Success => self.success = color,
            StatusToken::Warning => self.warning = color,
            StatusToken::Danger => self.danger = color,
        }
    }
}

impl Default for StatusTokens {
    fn default() -> Self {
        Self {
            info: palette::light_blue::P500,
            success: Color::from_packed_rgba(0x37D387FF),
            warning: palette::orange::P800.lighten(0.1),
            danger: Color::from_packed_rgba(0xFF6E6EFF),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_token() {
        let probe = Color::from_packed_rgba(0x12345678);

        let mut tint = TintTokens::default();
        for token in [
            TintToken::View,
            TintToken::Button,
            TintToken::NavigationBar,
            TintToken::TabBar,
            TintToken::Toolbar,
            TintToken::Inactive,
        ] {
            tint.set(token, probe);
            assert_eq!(tint.get(token), probe);
        }

        let mut background = BackgroundTokens::default();
        for token in [
            BackgroundToken::View,
            BackgroundToken::ViewController,
            BackgroundToken::Button,
            BackgroundToken::NavigationBar,
            BackgroundToken::TabBar,
            BackgroundToken::Toolbar,
        ] {
            background.set(token, probe);
            assert_eq!(background.get(token), probe);
        }

        let mut text = TextTokens::default();
        for token in [
            TextToken::Title,
            TextToken::Subtitle,
            TextToken::Body,
            TextToken::Callout,
            TextToken::Caption,
            TextToken::Footnote,
            TextToken::Headline,
            TextToken::Subhead,
            TextToken::Disabled,
        ] {
            text.set(token, probe);
            assert_eq!(text.get(token), probe);
        }

        let mut status = StatusTokens::default();
        for token in [
            StatusToken::Info,
            StatusToken::Success,
            StatusToken::Warning,
            StatusToken::Danger,
        ] {
            status.set(token, probe);
            assert_eq!(status.get(token), probe);
        }
    }

    #[test]
    fn defaults_follow_the_stock_light_theme() {
        let tint = TintTokens::default();
        assert_eq!(tint.view, palette::light_blue::P500);
        assert_eq!(tint.inactive, palette::gray::P500);

        let background = BackgroundTokens::default();
        assert_eq!(background.view, Color::WHITE);
        assert_eq!(background.view_controller, Color::from_packed_rgba(0xEFEFF4FF));

        let text = TextTokens::default();
        assert_eq!(text.title, palette::gray::P900);
        assert_eq!(text.body, text.headline);
        assert_eq!(text.disabled, palette::gray::P500);

        let status = StatusTokens::default();
        assert_eq!(status.info, tint.view);
        assert_eq!(status.warning, palette::orange::P800.lighten(0.1));
    }
}
