//! Property tests for slider invariants.
//!
//! 1. Touch position always lands inside the track
//! 2. Fill ratio is monotone and bounded
//! 3. Replaying a move changes nothing
//! 4. The bubble keeps its width and stays on the track
//! 5. The pointer triangle follows the touch, not the bubble

use proptest::prelude::*;
use tooltip_slider::slider::geometry::Shape;
use tooltip_slider::slider::input::{fill_ratio, PointerAction, PointerEvent};
use tooltip_slider::slider::layout::TrackBounds;
use tooltip_slider::slider::tooltip::{bubble_span, layout, TooltipMetrics};
use tooltip_slider::slider::{Slider, SliderColors, SliderConfig};

// ── Strategies ───────────────────────────────────────────────────────

fn arb_event_x() -> impl Strategy<Value = f32> {
    -1000.0..2000.0_f32
}

fn arb_width() -> impl Strategy<Value = f32> {
    1.0..1500.0_f32
}

fn arb_action() -> impl Strategy<Value = PointerAction> {
    prop_oneof![
        Just(PointerAction::Press),
        Just(PointerAction::Move),
        Just(PointerAction::Release),
        Just(PointerAction::Cancel),
        Just(PointerAction::Other),
    ]
}

fn metrics(width: f32) -> TooltipMetrics {
    TooltipMetrics {
        width,
        height: 50.0,
        triangle_height: 50.0,
        corner_radius: 10.0,
        triangle_half_base: 4.0,
        text_offset: 12.0,
        text_baseline_nudge: 5.0,
    }
}

fn slider(width: f32) -> Slider {
    let mut s = Slider::new(SliderConfig::default(), SliderColors::default()).unwrap();
    s.on_layout(TrackBounds::new(0.0, width));
    s
}

// ── 1-3. Input tracking ──────────────────────────────────────────────

proptest! {
    #[test]
    fn touch_stays_on_track(
        width in arb_width(),
        events in prop::collection::vec((arb_event_x(), arb_action()), 1..40),
    ) {
        let mut s = slider(width);
        for (x, action) in events {
            s.handle_pointer(PointerEvent::new(x, 0.0, action));
            let t = s.snapshot().touch_x;
            prop_assert!((0.0..=width).contains(&t), "touch {} outside 0..={}", t, width);
        }
    }

    #[test]
    fn fill_ratio_is_monotone(width in arb_width(), a in arb_event_x(), b in arb_event_x()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let r_lo = fill_ratio(lo, width);
        let r_hi = fill_ratio(hi, width);
        prop_assert!((0.0..=1.0).contains(&r_lo));
        prop_assert!((0.0..=1.0).contains(&r_hi));
        prop_assert!(r_lo <= r_hi);
    }

    #[test]
    fn repeated_move_is_idempotent(width in arb_width(), press in arb_event_x(), x in arb_event_x()) {
        let mut s = slider(width);
        s.handle_pointer(PointerEvent::new(press, 0.0, PointerAction::Press));
        s.handle_pointer(PointerEvent::new(x, 0.0, PointerAction::Move));
        let once = s.snapshot();
        s.take_redraw();
        s.handle_pointer(PointerEvent::new(x, 0.0, PointerAction::Move));
        prop_assert_eq!(s.snapshot(), once);
        prop_assert!(!s.take_redraw());
    }
}

// ── 4-5. Tooltip geometry ────────────────────────────────────────────

proptest! {
    #[test]
    fn bubble_width_is_preserved(width in arb_width(), tw in 1.0..400.0_f32, t in 0.0..1.0_f32) {
        let touch = t * width;
        let (l, r) = bubble_span(touch, width, tw);
        prop_assert!(((r - l) - tw).abs() < 1e-3, "width {} != {}", r - l, tw);
    }

    #[test]
    fn bubble_stays_on_track_when_it_fits(width in 100.0..1500.0_f32, t in 0.0..1.0_f32) {
        let touch = t * width;
        let (l, r) = bubble_span(touch, width, 100.0);
        prop_assert!(l >= -1e-3);
        prop_assert!(r <= width + 1e-3);
    }

    #[test]
    fn triangle_follows_touch(width in arb_width(), tw in 1.0..400.0_f32, t in 0.0..1.0_f32) {
        let touch = t * width;
        let l = layout(touch, width, &metrics(tw));
        prop_assert_eq!(l.triangle.apex.x, touch);
    }
}

// ── Scenarios ────────────────────────────────────────────────────────

fn label(s: &Slider) -> Option<String> {
    s.scene().cmds.iter().find_map(|c| match &c.shape {
        Shape::Text { text, .. } => Some(text.clone()),
        _ => None,
    })
}

#[test]
fn press_drag_release_round_trip() {
    let mut s = slider(300.0);
    assert_eq!(label(&s), None);

    s.handle_pointer(PointerEvent::new(10.0, 0.0, PointerAction::Press));
    assert_eq!(label(&s).as_deref(), Some("3%"));

    s.handle_pointer(PointerEvent::new(150.0, 0.0, PointerAction::Move));
    assert_eq!(label(&s).as_deref(), Some("50%"));

    s.handle_pointer(PointerEvent::new(150.0, 0.0, PointerAction::Release));
    assert_eq!(label(&s), None);
    assert_eq!(s.snapshot().touch_x, 150.0);
    assert_eq!(s.snapshot().fill_ratio(), 0.5);
}

#[test]
fn clamp_scenarios() {
    let m = metrics(100.0);
    let left = layout(10.0, 300.0, &m);
    assert_eq!((left.bubble.left, left.bubble.right, left.triangle.apex.x), (0.0, 100.0, 10.0));

    let right = layout(290.0, 300.0, &m);
    assert_eq!((right.bubble.left, right.bubble.right, right.triangle.apex.x), (200.0, 300.0, 290.0));

    let mid = layout(150.0, 300.0, &m);
    assert_eq!((mid.bubble.left, mid.bubble.right), (100.0, 200.0));
    assert_eq!(mid.label, "50%");
}

#[test]
fn zero_width_track_reports_zero_percent() {
    let m = metrics(100.0);
    assert_eq!(layout(0.0, 0.0, &m).label, "0%");

    let mut s = slider(0.0);
    s.handle_pointer(PointerEvent::new(5.0, 0.0, PointerAction::Press));
    assert_eq!(s.snapshot().percent(), 0);
    assert_eq!(label(&s), None);
}
