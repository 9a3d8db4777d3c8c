//! Integration tests for the seed-color cascade and appearance dispatch.

use std::sync::Arc;

use patina_theme::{
    AppearanceSink, BackgroundToken, ButtonStyle, Color, NavigationBarStyle, NullSink,
    PageControlStyle, SearchBarStyle, SegmentedControlStyle, ShadowSpec, SliderStyle,
    StatusToken, Stylist, SwitchStyle, TabBarStyle, TextToken, ThemeStore, TintToken,
    ToolbarStyle, ViewStyle, palette,
};
use pretty_assertions::assert_eq;

/// Test double that records every dispatch and keeps the latest styles.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<&'static str>,
    view: Option<ViewStyle>,
    image_view: Option<ViewStyle>,
    table_view: Option<ViewStyle>,
    navigation_bar: Option<NavigationBarStyle>,
    tab_bar: Option<TabBarStyle>,
    button: Option<ButtonStyle>,
    switch: Option<SwitchStyle>,
    search_bar: Option<SearchBarStyle>,
    segmented_control: Option<SegmentedControlStyle>,
    slider: Option<SliderStyle>,
    toolbar: Option<ToolbarStyle>,
    page_control: Option<PageControlStyle>,
}

impl AppearanceSink for RecordingSink {
    fn apply_view(&mut self, style: ViewStyle) {
        self.calls.push("view");
        self.view = Some(style);
    }

    fn apply_image_view(&mut self, style: ViewStyle) {
        self.calls.push("image_view");
        self.image_view = Some(style);
    }

    fn apply_table_view(&mut self, style: ViewStyle) {
        self.calls.push("table_view");
        self.table_view = Some(style);
    }

    fn apply_navigation_bar(&mut self, style: NavigationBarStyle) {
        self.calls.push("navigation_bar");
        self.navigation_bar = Some(style);
    }

    fn apply_tab_bar(&mut self, style: TabBarStyle) {
        self.calls.push("tab_bar");
        self.tab_bar = Some(style);
    }

    fn apply_button(&mut self, style: ButtonStyle) {
        self.calls.push("button");
        self.button = Some(style);
    }

    fn apply_switch(&mut self, style: SwitchStyle) {
        self.calls.push("switch");
        self.switch = Some(style);
    }

    fn apply_search_bar(&mut self, style: SearchBarStyle) {
        self.calls.push("search_bar");
        self.search_bar = Some(style);
    }

    fn apply_segmented_control(&mut self, style: SegmentedControlStyle) {
        self.calls.push("segmented_control");
        self.segmented_control = Some(style);
    }

    fn apply_slider(&mut self, style: SliderStyle) {
        self.calls.push("slider");
        self.slider = Some(style);
    }

    fn apply_toolbar(&mut self, style: ToolbarStyle) {
        self.calls.push("toolbar");
        self.toolbar = Some(style);
    }

    fn apply_page_control(&mut self, style: PageControlStyle) {
        self.calls.push("page_control");
        self.page_control = Some(style);
    }
}

const COMPONENT_ORDER: [&str; 12] = [
    "view",
    "image_view",
    "table_view",
    "navigation_bar",
    "tab_bar",
    "button",
    "switch",
    "search_bar",
    "segmented_control",
    "slider",
    "toolbar",
    "page_control",
];

fn recording_stylist() -> Stylist<RecordingSink> {
    Stylist::new(Arc::new(ThemeStore::new()), RecordingSink::default())
}

#[test]
fn set_primary_writes_its_full_token_list() {
    let mut stylist = recording_stylist();
    let seed = palette::blue_gray::P800;

    stylist.set_primary(seed);

    let store = stylist.store();
    assert_eq!(store.background(BackgroundToken::NavigationBar), seed);
    assert_eq!(store.background(BackgroundToken::TabBar), seed);
    assert_eq!(store.background(BackgroundToken::Button), seed);
    assert_eq!(store.tint(TintToken::Button), seed);
    assert_eq!(store.tint(TintToken::View), seed);
    assert_eq!(store.tint(TintToken::Toolbar), seed);

    // Untargeted tokens keep their defaults.
    assert_eq!(store.background(BackgroundToken::View), Color::WHITE);
    assert_eq!(store.tint(TintToken::NavigationBar), palette::light_blue::P500);
    assert_eq!(store.status(StatusToken::Info), palette::light_blue::P500);
}

#[test]
fn dark_primary_flips_title_text_to_white() {
    let mut stylist = recording_stylist();

    stylist.set_primary(palette::blue_gray::P900);

    let store = stylist.store();
    assert_eq!(store.text(TextToken::Title), Color::WHITE);
    assert_eq!(store.text(TextToken::Subtitle), Color::WHITE.darken(0.05));
    // The rest of the type ramp is untouched.
    assert_eq!(store.text(TextToken::Body), Color::from_hex("#333333").unwrap());
}

#[test]
fn light_primary_leaves_text_tokens_alone() {
    let mut stylist = recording_stylist();
    let before = stylist.store().snapshot().text;

    stylist.set_primary(palette::yellow::P300);

    assert_eq!(stylist.store().snapshot().text, before);
}

#[test]
fn set_secondary_retints_chrome_and_derives_inactive() {
    let mut stylist = recording_stylist();
    let seed = palette::teal::P500;
    let backgrounds_before = stylist.store().snapshot().background;

    stylist.set_secondary(seed);

    let store = stylist.store();
    assert_eq!(store.tint(TintToken::NavigationBar), seed);
    assert_eq!(store.tint(TintToken::TabBar), seed);
    assert_eq!(store.tint(TintToken::Toolbar), seed);
    assert_eq!(store.tint(TintToken::View), seed);
    assert_eq!(store.tint(TintToken::Inactive), seed.darker(20.0).unwrap());
    assert_eq!(store.status(StatusToken::Info), seed);

    // Secondary never touches surfaces.
    assert_eq!(store.snapshot().background, backgrounds_before);
}

#[test]
fn set_tertiary_writes_its_token_list() {
    let mut stylist = recording_stylist();
    let seed = palette::amber::P700;

    stylist.set_tertiary(seed);

    let store = stylist.store();
    assert_eq!(store.background(BackgroundToken::Button), seed);
    assert_eq!(store.tint(TintToken::View), seed);
    assert_eq!(store.tint(TintToken::Toolbar), seed);
    assert_eq!(store.status(StatusToken::Info), seed);
    // Bars keep their backgrounds.
    assert_eq!(store.background(BackgroundToken::NavigationBar), Color::WHITE);
}

#[test]
fn set_detail_touches_only_the_two_detail_tints() {
    let mut stylist = recording_stylist();
    let seed = palette::pink::A200;
    let before = stylist.store().snapshot();

    stylist.set_detail(seed);

    let after = stylist.store().snapshot();
    assert_eq!(after.tint.view, seed);
    assert_eq!(after.tint.toolbar, seed);
    assert_eq!(after.background, before.background);
    assert_eq!(after.text, before.text);
    assert_eq!(after.status, before.status);
    assert_eq!(after.shadow, before.shadow);
}

#[test]
fn seed_rules_are_idempotent() {
    let mut stylist = recording_stylist();
    let seed = palette::indigo::P500;

    stylist.set_primary(seed);
    let once = stylist.store().snapshot();
    stylist.set_primary(seed);

    assert_eq!(stylist.store().snapshot(), once);
}

#[test]
fn every_seed_rule_dispatches_exactly_once_in_fixed_order() {
    let mut stylist = recording_stylist();

    stylist.set_primary(palette::red::P500);
    assert_eq!(stylist.sink().calls, COMPONENT_ORDER);

    stylist.sink_mut().calls.clear();
    stylist.set_secondary(palette::green::P500);
    assert_eq!(stylist.sink().calls, COMPONENT_ORDER);

    stylist.sink_mut().calls.clear();
    stylist.set_tertiary(palette::blue::P500);
    assert_eq!(stylist.sink().calls, COMPONENT_ORDER);

    stylist.sink_mut().calls.clear();
    stylist.set_detail(palette::purple::P500);
    assert_eq!(stylist.sink().calls, COMPONENT_ORDER);
}

#[test]
fn dispatched_styles_mirror_the_committed_snapshot() {
    let mut stylist = recording_stylist();
    let seed = palette::blue_gray::P800;

    stylist.set_primary(seed);

    let sink = stylist.sink();
    let view = sink.view.unwrap();
    assert_eq!(view.background, Color::WHITE);
    assert_eq!(view.tint, seed);
    assert_eq!(sink.image_view.unwrap(), view);
    assert_eq!(sink.table_view.unwrap(), view);

    let navigation_bar = sink.navigation_bar.unwrap();
    assert_eq!(navigation_bar.bar, seed);
    assert_eq!(navigation_bar.text, Color::WHITE);
    assert_eq!(navigation_bar.shadow, ShadowSpec::default());

    let button = sink.button.unwrap();
    assert_eq!(button.background, seed);
    // Dark button background gets a white title.
    assert_eq!(button.text, Color::WHITE);

    assert_eq!(sink.switch.unwrap().on_tint, seed);
    assert_eq!(sink.search_bar.unwrap().bar, Color::WHITE);
    assert_eq!(sink.slider.unwrap().minimum_track_tint, seed);
    assert_eq!(sink.page_control.unwrap().current_indicator, seed);
    assert_eq!(sink.page_control.unwrap().indicator, palette::LIGHT_GRAY);
}

#[test]
fn light_button_background_gets_black_title() {
    let mut stylist = recording_stylist();

    stylist.set_tertiary(palette::yellow::P200);

    assert_eq!(stylist.sink().button.unwrap().text, Color::BLACK);
}

#[test]
fn shadow_rules_write_without_dispatching() {
    let mut stylist = recording_stylist();

    stylist.set_shadow(ShadowSpec::soft()).unwrap();
    stylist.set_clean_shadow();
    stylist.set_no_shadow();

    assert!(stylist.sink().calls.is_empty());
    assert_eq!(stylist.store().shadow(), ShadowSpec::none());
}

#[test]
fn shadow_changes_surface_on_the_next_cascade() {
    let mut stylist = recording_stylist();

    stylist.set_clean_shadow();
    assert!(stylist.sink().navigation_bar.is_none());

    stylist.set_detail(palette::cyan::P500);

    let navigation_bar = stylist.sink().navigation_bar.unwrap();
    assert_eq!(navigation_bar.shadow, ShadowSpec::clean());
}

#[test]
fn shadow_presets_write_their_documented_records() {
    let mut stylist = recording_stylist();

    stylist.set_clean_shadow();
    let clean = stylist.store().shadow();
    assert_eq!(clean.color, palette::gray::P500);
    assert_eq!(clean.opacity, 1.0);
    assert_eq!(clean.radius, 1.0);
    assert_eq!((clean.offset_x, clean.offset_y), (0.0, 0.0));

    stylist.set_no_shadow();
    let none = stylist.store().shadow();
    assert_eq!(none.color, Color::TRANSPARENT);
    assert_eq!(none.opacity, 0.0);
    assert_eq!(none.radius, 0.0);
}

#[test]
fn invalid_shadow_is_rejected_and_store_untouched() {
    let mut stylist = recording_stylist();
    let before = stylist.store().shadow();

    let overdriven = ShadowSpec::new(Color::BLACK, 1.5, 3.0, 0.0, 2.0);
    assert!(stylist.set_shadow(overdriven).is_err());

    let negative_radius = ShadowSpec::new(Color::BLACK, 0.5, -1.0, 0.0, 2.0);
    assert!(stylist.set_shadow(negative_radius).is_err());

    assert_eq!(stylist.store().shadow(), before);
    assert!(stylist.sink().calls.is_empty());
}

#[test]
fn stylists_share_state_through_a_common_store() {
    let store = Arc::new(ThemeStore::new());
    let mut themed = Stylist::new(store.clone(), NullSink);
    let mut recording = Stylist::new(store.clone(), RecordingSink::default());

    themed.set_detail(palette::lime::A400);
    // A manual re-dispatch on the second stylist sees the first one's write.
    recording.apply_all();

    assert_eq!(
        recording.sink().toolbar.unwrap().tint,
        palette::lime::A400
    );
    assert_eq!(store.tint(TintToken::Toolbar), palette::lime::A400);
}

#[test]
fn shared_store_instance_backs_ambient_use() {
    let store = ThemeStore::init();
    let mut stylist = Stylist::new(store, NullSink);

    stylist.set_detail(palette::brown::P400);

    assert_eq!(ThemeStore::get().tint(TintToken::View), palette::brown::P400);
}
