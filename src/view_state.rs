//! Scroll-reactive view state.
//!
//! Everything in here is pure: the DOM wiring in [`crate::observers`] reads
//! the window and feeds [`ScrollMetric`]s and intersection booleans in, and
//! the components turn the results into classes and inline styles.

use std::rc::Rc;
use yew::Reducible;

use crate::config;

/// Vertical scroll position of the page together with the viewport height
/// it was sampled with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetric {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollMetric {
    pub fn new(offset: f64, viewport_height: f64) -> Self {
        Self { offset, viewport_height }
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::NAVBAR_SCROLL_THRESHOLD
}

pub fn floating_button_visible(offset: f64, viewport_height: f64) -> bool {
    offset > viewport_height * config::FLOATING_BUTTON_VIEWPORT_RATIO
}

/// Linear fade from 1 at offset 0 to 0 at `distance`, always inside `[0, 1]`.
pub fn fade_opacity(offset: f64, distance: f64) -> f64 {
    if offset.is_nan() || distance <= 0.0 {
        return 1.0;
    }
    (1.0 - offset / distance).clamp(0.0, 1.0)
}

pub fn hero_opacity(offset: f64) -> f64 {
    fade_opacity(offset, config::HERO_FADE_DISTANCE)
}

/// Pixel translation for a layer whose top edge sits at `element_top`
/// relative to the viewport.
pub fn parallax_offset(element_top: f64, factor: f64) -> f64 {
    element_top * factor
}

/// Parallax for a section only while some part of it is inside the viewport.
/// `None` means the caller keeps whatever it rendered last.
pub fn section_parallax(
    rect_top: f64,
    rect_bottom: f64,
    viewport_height: f64,
    factor: f64,
) -> Option<f64> {
    if rect_top < viewport_height && rect_bottom > 0.0 {
        Some(parallax_offset(rect_top, factor))
    } else {
        None
    }
}

/// Continuous values driving the hero banner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroLayers {
    pub background_offset: f64,
    pub content_offset: f64,
    pub opacity: f64,
}

impl HeroLayers {
    pub fn from_offset(offset: f64) -> Self {
        // Overscroll on touch devices reports negative offsets; the hero stays put.
        let travel = if offset.is_nan() { 0.0 } else { offset.max(0.0) };
        Self {
            background_offset: parallax_offset(travel, config::HERO_BACKGROUND_FACTOR),
            content_offset: parallax_offset(travel, config::HERO_CONTENT_FACTOR),
            opacity: hero_opacity(offset),
        }
    }
}

impl Default for HeroLayers {
    fn default() -> Self {
        Self::from_offset(0.0)
    }
}

/// Discrete flags that only change when a threshold is crossed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewFlags {
    pub is_scrolled: bool,
    pub floating_button_visible: bool,
}

impl ViewFlags {
    pub fn from_metric(metric: &ScrollMetric) -> Self {
        Self {
            is_scrolled: is_scrolled(metric.offset),
            floating_button_visible: floating_button_visible(
                metric.offset,
                metric.viewport_height,
            ),
        }
    }

    /// Applies a scroll tick. Returns `true` when any flag flipped, so the
    /// owning view can skip re-rendering on ticks that change nothing.
    pub fn on_scroll(&mut self, metric: &ScrollMetric) -> bool {
        let next = Self::from_metric(metric);
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// One-shot visibility latch for reveal-on-scroll sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` only on the call that flips the latch.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Entrance delay for the `index`-th sibling of a revealed group.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(config::STAGGER_STEP_MS)
}

pub fn translate_y_style(px: f64) -> String {
    format!("transform: translateY({:.2}px);", px)
}

/// Leading-edge throttle with one trailing call per window.
///
/// The caller owns the timer: arm it whenever [`Throttle::on_event`] or
/// [`Throttle::on_elapsed`] returns `true`, and report back through
/// `on_elapsed` when it fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throttle {
    armed: bool,
    pending: bool,
}

impl Throttle {
    /// Returns `true` when the event should be dispatched right away.
    pub fn on_event(&mut self) -> bool {
        if self.armed {
            self.pending = true;
            return false;
        }
        self.armed = true;
        true
    }

    /// Returns `true` when events arrived during the window and a trailing
    /// dispatch is owed. The window is re-armed in that case.
    pub fn on_elapsed(&mut self) -> bool {
        self.armed = std::mem::take(&mut self.pending);
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub is_open: bool,
}

pub enum MenuAction {
    Toggle,
    /// A link inside the menu was selected.
    Navigate,
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::Toggle => Rc::new(Self { is_open: !self.is_open }),
            MenuAction::Navigate if self.is_open => Rc::new(Self { is_open: false }),
            MenuAction::Navigate => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSETS: [f64; 9] = [-120.0, 0.0, 49.9, 50.0, 50.1, 300.0, 720.0, 800.0, 1.0e9];

    #[test]
    fn navbar_threshold_is_strict() {
        for s in OFFSETS {
            assert_eq!(is_scrolled(s), s > 50.0, "offset {}", s);
        }
    }

    #[test]
    fn floating_button_tracks_viewport_ratio() {
        let vh = 900.0;
        for s in OFFSETS {
            assert_eq!(floating_button_visible(s, vh), s > 0.8 * vh, "offset {}", s);
        }
        assert!(!floating_button_visible(720.0, vh));
        assert!(floating_button_visible(720.5, vh));
    }

    #[test]
    fn floating_button_hides_again_when_scrolling_back() {
        let mut flags = ViewFlags::default();
        assert!(flags.on_scroll(&ScrollMetric::new(800.0, 900.0)));
        assert!(flags.floating_button_visible);
        assert!(flags.on_scroll(&ScrollMetric::new(100.0, 900.0)));
        assert!(!flags.floating_button_visible);
        assert!(flags.is_scrolled);
    }

    #[test]
    fn on_scroll_reports_only_transitions() {
        let mut flags = ViewFlags::default();
        assert!(!flags.on_scroll(&ScrollMetric::new(10.0, 900.0)));
        assert!(flags.on_scroll(&ScrollMetric::new(60.0, 900.0)));
        assert!(!flags.on_scroll(&ScrollMetric::new(70.0, 900.0)));
    }

    #[test]
    fn top_of_page_scenario() {
        let flags = ViewFlags::from_metric(&ScrollMetric::new(0.0, 900.0));
        assert!(!flags.is_scrolled);
        assert!(!flags.floating_button_visible);
        assert_eq!(HeroLayers::from_offset(0.0).opacity, 1.0);
    }

    #[test]
    fn past_hero_scenario() {
        let flags = ViewFlags::from_metric(&ScrollMetric::new(800.0, 900.0));
        assert!(flags.floating_button_visible);
    }

    #[test]
    fn opacity_stays_in_unit_range() {
        for s in OFFSETS.iter().copied().chain([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]) {
            let o = hero_opacity(s);
            assert!((0.0..=1.0).contains(&o), "offset {} gave {}", s, o);
        }
        assert_eq!(hero_opacity(350.0), 0.5);
        assert_eq!(hero_opacity(700.0), 0.0);
        assert_eq!(hero_opacity(-50.0), 1.0);
    }

    #[test]
    fn parallax_is_linear() {
        let factor = 0.15;
        for x in [-400.0, -1.0, 0.0, 3.0, 250.0] {
            assert_eq!(parallax_offset(2.0 * x, factor), 2.0 * parallax_offset(x, factor));
        }
        assert_eq!(parallax_offset(200.0, 0.15), 30.0);
    }

    #[test]
    fn section_parallax_only_inside_viewport() {
        assert_eq!(section_parallax(100.0, 900.0, 800.0, 0.5), Some(50.0));
        assert_eq!(section_parallax(-200.0, 400.0, 800.0, 0.5), Some(-100.0));
        assert_eq!(section_parallax(800.0, 1600.0, 800.0, 0.5), None);
        assert_eq!(section_parallax(-900.0, 0.0, 800.0, 0.5), None);
    }

    #[test]
    fn hero_layers_ignore_overscroll() {
        let layers = HeroLayers::from_offset(-80.0);
        assert_eq!(layers.background_offset, 0.0);
        assert_eq!(layers.content_offset, 0.0);
        assert_eq!(layers.opacity, 1.0);

        let layers = HeroLayers::from_offset(100.0);
        assert_eq!(layers.background_offset, 50.0);
        assert_eq!(layers.content_offset, 30.0);
    }

    #[test]
    fn reveal_latch_is_monotonic() {
        let mut latch = RevealLatch::default();
        assert!(!latch.on_intersect(false));
        assert!(!latch.is_visible());
        assert!(latch.on_intersect(true));
        for seen in [false, true, false, false] {
            assert!(!latch.on_intersect(seen));
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn stagger_grows_per_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 150);
        assert_eq!(stagger_delay_ms(3), 450);
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn throttle_dispatches_leading_edge_immediately() {
        let mut throttle = Throttle::default();
        assert!(throttle.on_event());
        assert!(throttle.is_armed());
        assert!(!throttle.on_elapsed());
        assert!(!throttle.is_armed());
    }

    #[test]
    fn throttle_always_delivers_the_trailing_event() {
        let mut throttle = Throttle::default();
        assert!(throttle.on_event());
        for _ in 0..5 {
            assert!(!throttle.on_event());
        }
        // the burst collapses into a single trailing dispatch
        assert!(throttle.on_elapsed());
        assert!(throttle.is_armed());
        assert!(!throttle.on_elapsed());
        assert!(throttle.on_event());
    }

    #[test]
    fn throttle_keeps_up_with_continuous_scrolling() {
        let mut throttle = Throttle::default();
        let mut dispatched = 0;
        for _window in 0..4 {
            for _ in 0..3 {
                if throttle.on_event() {
                    dispatched += 1;
                }
            }
            if throttle.on_elapsed() {
                dispatched += 1;
            }
        }
        // leading edge once, then one trailing dispatch per window
        assert_eq!(dispatched, 5);
        assert!(!throttle.on_elapsed());
    }

    #[test]
    fn menu_toggles_and_closes_on_navigate() {
        let menu = Rc::new(MobileMenu::default());
        let menu = menu.reduce(MenuAction::Toggle);
        assert!(menu.is_open);
        let menu = menu.reduce(MenuAction::Navigate);
        assert!(!menu.is_open);
        let menu = menu.reduce(MenuAction::Navigate);
        assert!(!menu.is_open);
        let menu = menu.reduce(MenuAction::Toggle).reduce(MenuAction::Toggle);
        assert!(!menu.is_open);
    }

    #[test]
    fn translate_style_formats_pixels() {
        assert_eq!(translate_y_style(12.5), "transform: translateY(12.50px);");
    }
}
