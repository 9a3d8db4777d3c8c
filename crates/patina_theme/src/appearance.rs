//! Appearance dispatch
//!
//! The registry never touches widgets itself. Each widget class has a small
//! style struct resolved from a token snapshot, and an injected
//! [`AppearanceSink`] receives the resolved styles; a toolkit binding
//! implements the sink by forwarding each style to the toolkit's global
//! appearance proxy for that class. [`NullSink`] drops everything for
//! headless and store-only setups.

use patina_core::Color;

use crate::palette;
use crate::tokens::{ShadowSpec, ThemeTokens};

// ========== Component styles ==========

/// Style for plain views; image views and table views share it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewStyle {
    pub background: Color,
    pub tint: Color,
}

impl ViewStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { background: tokens.background.view, tint: tokens.tint.view }
    }
}

/// Navigation-bar style; the only style that carries the shadow record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationBarStyle {
    pub bar: Color,
    pub text: Color,
    pub button_tint: Color,
    pub shadow: ShadowSpec,
}

impl NavigationBarStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self {
            bar: tokens.background.navigation_bar,
            text: tokens.text.title,
            button_tint: tokens.tint.navigation_bar,
            shadow: tokens.shadow,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabBarStyle {
    pub bar: Color,
    pub tint: Color,
}

impl TabBarStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { bar: tokens.background.tab_bar, tint: tokens.tint.tab_bar }
    }
}

/// Button style; the title color flips black/white off the background's
/// lightness rather than following a text token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background: Color,
    pub tint: Color,
    pub text: Color,
}

impl ButtonStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        let background = tokens.background.button;
        Self {
            background,
            tint: tokens.tint.button,
            text: if background.is_light() { Color::BLACK } else { Color::WHITE },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchStyle {
    pub on_tint: Color,
}

impl SwitchStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { on_tint: tokens.tint.view }
    }
}

/// Search bars restyle off the plain view tokens, not the bar tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchBarStyle {
    pub bar: Color,
    pub tint: Color,
}

impl SearchBarStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { bar: tokens.background.view, tint: tokens.tint.view }
    }
}

/// Segmented controls follow the navigation-bar tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentedControlStyle {
    pub background: Color,
    pub tint: Color,
}

impl SegmentedControlStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self {
            background: tokens.background.navigation_bar,
            tint: tokens.tint.navigation_bar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderStyle {
    pub minimum_track_tint: Color,
}

impl SliderStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { minimum_track_tint: tokens.tint.view }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolbarStyle {
    pub background: Color,
    pub tint: Color,
}

impl ToolbarStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self { background: tokens.background.toolbar, tint: tokens.tint.toolbar }
    }
}

/// Page-control style. Only the current-page dot follows the theme; the
/// other dots stay toolkit light gray on a transparent background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageControlStyle {
    pub indicator: Color,
    pub current_indicator: Color,
    pub background: Color,
}

impl PageControlStyle {
    pub fn resolve(tokens: &ThemeTokens) -> Self {
        Self {
            indicator: palette::LIGHT_GRAY,
            current_indicator: tokens.tint.view,
            background: Color::TRANSPARENT,
        }
    }
}

// ========== Sink ==========

/// Receiver for resolved styles, one method per widget class.
///
/// Every method defaults to a no-op so a binding only has to implement the
/// classes its toolkit actually exposes. [`apply_all`] drives all twelve in
/// a fixed order.
pub trait AppearanceSink {
    fn apply_view(&mut self, _style: ViewStyle) {}
    fn apply_image_view(&mut self, _style: ViewStyle) {}
    fn apply_table_view(&mut self, _style: ViewStyle) {}
    fn apply_navigation_bar(&mut self, _style: NavigationBarStyle) {}
    fn apply_tab_bar(&mut self, _style: TabBarStyle) {}
    fn apply_button(&mut self, _style: ButtonStyle) {}
    fn apply_switch(&mut self, _style: SwitchStyle) {}
    fn apply_search_bar(&mut self, _style: SearchBarStyle) {}
    fn apply_segmented_control(&mut self, _style: SegmentedControlStyle) {}
    fn apply_slider(&mut self, _style: SliderStyle) {}
    fn apply_toolbar(&mut self, _style: ToolbarStyle) {}
    fn apply_page_control(&mut self, _style: PageControlStyle) {}
}

/// Sink that drops every style.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AppearanceSink for NullSink {}

/// Resolve every component style from `tokens` and push each one to `sink`.
///
/// The order is fixed: view, image view, table view, navigation bar,
/// tab bar, button, switch, search bar, segmented control, slider, toolbar,
/// page control.
pub fn apply_all<S: AppearanceSink + ?Sized>(tokens: &ThemeTokens, sink: &mut S) {
    tracing::trace!("apply_all - pushing 12 component styles");
    sink.apply_view(ViewStyle::resolve(tokens));
    sink.apply_image_view(ViewStyle::resolve(tokens));
    sink.apply_table_view(ViewStyle::resolve(tokens));
    sink.apply_navigation_bar(NavigationBarStyle::resolve(tokens));
    sink.apply_tab_bar(TabBarStyle::resolve(tokens));
    sink.apply_button(ButtonStyle::resolve(tokens));
    sink.apply_switch(SwitchStyle::resolve(tokens));
    sink.apply_search_bar(SearchBarStyle::resolve(tokens));
    sink.apply_segmented_control(SegmentedControlStyle::resolve(tokens));
    sink.apply_slider(SliderStyle::resolve(tokens));
    sink.apply_toolbar(ToolbarStyle::resolve(tokens));
    sink.apply_page_control(PageControlStyle::resolve(tokens));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_style_feeds_views_search_bars_and_switches() {
        let mut tokens = ThemeTokens::default();
        tokens.background.view = Color::from_packed_rgba(0x112233FF);
        tokens.tint.view = Color::from_packed_rgba(0x445566FF);

        let view = ViewStyle::resolve(&tokens);
        assert_eq!(view.background, tokens.background.view);
        assert_eq!(view.tint, tokens.tint.view);

        let search_bar = SearchBarStyle::resolve(&tokens);
        assert_eq!(search_bar.bar, tokens.background.view);
        assert_eq!(search_bar.tint, tokens.tint.view);

        assert_eq!(SwitchStyle::resolve(&tokens).on_tint, tokens.tint.view);
        assert_eq!(SliderStyle::resolve(&tokens).minimum_track_tint, tokens.tint.view);
    }

    #[test]
    fn navigation_bar_style_carries_the_shadow_record() {
        let mut tokens = ThemeTokens::default();
        tokens.shadow = ShadowSpec::clean();

        let style = NavigationBarStyle::resolve(&tokens);
        assert_eq!(style.bar, tokens.background.navigation_bar);
        assert_eq!(style.text, tokens.text.title);
        assert_eq!(style.button_tint, tokens.tint.navigation_bar);
        assert_eq!(style.shadow, ShadowSpec::clean());
    }

    #[test]
    fn segmented_control_follows_navigation_bar_tokens() {
        let mut tokens = ThemeTokens::default();
        tokens.background.navigation_bar = Color::from_packed_rgba(0x102030FF);
        tokens.tint.navigation_bar = Color::from_packed_rgba(0x405060FF);

        let style = SegmentedControlStyle::resolve(&tokens);
        assert_eq!(style.background, tokens.background.navigation_bar);
        assert_eq!(style.tint, tokens.tint.navigation_bar);
    }

    #[test]
    fn button_text_contrasts_with_its_background() {
        let mut tokens = ThemeTokens::default();

        tokens.background.button = Color::WHITE;
        assert_eq!(ButtonStyle::resolve(&tokens).text, Color::BLACK);

        tokens.background.button = Color::from_packed_rgba(0x263238FF);
        assert_eq!(ButtonStyle::resolve(&tokens).text, Color::WHITE);
    }

    #[test]
    fn page_control_only_themes_the_current_dot() {
        let mut tokens = ThemeTokens::default();
        tokens.tint.view = Color::from_packed_rgba(0x00FF00FF);

        let style = PageControlStyle::resolve(&tokens);
        assert_eq!(style.indicator, palette::LIGHT_GRAY);
        assert_eq!(style.current_indicator, tokens.tint.view);
        assert_eq!(style.background, Color::TRANSPARENT);
    }

    #[test]
    fn null_sink_accepts_a_full_dispatch() {
        apply_all(&ThemeTokens::default(), &mut NullSink);
    }
}
