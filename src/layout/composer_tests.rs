//! Tests for bubble composition.

use super::*;
use std::cell::Cell;

// ===== Test Helpers =====

/// Records the width it was offered and returns a fixed size.
struct Probe {
    size: Size,
    offered: Cell<Option<f32>>,
}

impl Probe {
    fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            offered: Cell::new(None),
        }
    }
}

impl Measure for Probe {
    fn measure(&self, max_width: f32) -> Size {
        self.offered.set(Some(max_width));
        self.size
    }
}

fn insets() -> EdgeInsets {
    EdgeInsets::new(10.0, 19.0, 10.0, 15.0)
}

// ===== Empty Stack =====

#[test]
fn empty_content_without_decorations_is_zero() {
    let content = Size::ZERO;
    let composer = BubbleComposer::new(&content).insets(insets());
    let composed = composer.compose(320.0);

    assert_eq!(composed.size, Size::ZERO);
    assert_eq!(composed.top, None);
    assert_eq!(composed.bottom, None);
}

#[test]
fn zero_height_decorations_do_not_trigger_insets() {
    let top = Size::ZERO;
    let content = Size::ZERO;
    let composer = BubbleComposer::new(&content)
        .top(Some(&top))
        .insets(insets());
    assert_eq!(composer.size_that_fits(320.0), Size::ZERO);
}

// ===== Insets =====

#[test]
fn content_only_gets_all_insets() {
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content).insets(insets());
    let composed = composer.compose(320.0);

    assert_eq!(composed.size, Size::new(74.0, 38.0));
    assert_eq!(
        composed.content,
        Rect::new(Point::new(19.0, 10.0), Size::new(40.0, 18.0))
    );
}

#[test]
fn top_inset_applies_without_top_decoration() {
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content).insets(EdgeInsets::new(7.0, 0.0, 0.0, 0.0));
    let composed = composer.compose(320.0);
    assert_eq!(composed.content.origin.y, 7.0);
    assert_eq!(composed.size.height, 25.0);
}

#[test]
fn zero_insets_compose_to_content_size() {
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content);
    let composed = composer.compose(200.0);
    assert_eq!(composed.size, Size::new(40.0, 18.0));
    assert_eq!(composed.content, Rect::from_size(Size::new(40.0, 18.0)));
}

#[test]
fn regions_are_offered_the_inset_reduced_width() {
    let content = Probe::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content).insets(insets());
    composer.compose(320.0);
    assert_eq!(content.offered.get(), Some(286.0));
}

#[test]
fn offered_width_never_goes_negative() {
    let content = Probe::new(0.0, 18.0);
    let composer = BubbleComposer::new(&content).insets(insets());
    composer.compose(10.0);
    assert_eq!(content.offered.get(), Some(0.0));
}

// ===== Stacking =====

#[test]
fn decorations_stack_top_to_bottom() {
    let top = Size::new(60.0, 13.0);
    let content = Size::new(40.0, 18.0);
    let bottom = Size::new(20.0, 5.0);
    let composer = BubbleComposer::new(&content)
        .top(Some(&top))
        .bottom(Some(&bottom))
        .insets(insets());
    let composed = composer.compose(320.0);

    assert_eq!(
        composed.top,
        Some(Rect::new(Point::new(19.0, 10.0), Size::new(60.0, 13.0)))
    );
    assert_eq!(composed.content.origin, Point::new(19.0, 23.0));
    assert_eq!(
        composed.bottom,
        Some(Rect::new(Point::new(19.0, 41.0), Size::new(20.0, 5.0)))
    );
    // Widest region plus horizontal insets; stacked heights plus vertical insets.
    assert_eq!(composed.size, Size::new(94.0, 56.0));
}

#[test]
fn zero_height_top_does_not_shift_content() {
    let top = Size::new(30.0, 0.0);
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content)
        .top(Some(&top))
        .insets(insets());
    let composed = composer.compose(320.0);

    assert_eq!(composed.top.map(|r| r.origin.y), Some(0.0));
    assert_eq!(composed.content.origin.y, 10.0);
    assert_eq!(composed.size.height, 38.0);
}

#[test]
fn bottom_anchor_reverses_order() {
    let top = Size::new(60.0, 13.0);
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content)
        .top(Some(&top))
        .anchor(StackAnchor::Bottom);
    let composed = composer.compose(320.0);

    assert_eq!(composed.content.origin.y, 0.0);
    assert_eq!(composed.top.map(|r| r.origin.y), Some(18.0));
    assert_eq!(composed.size, Size::new(60.0, 31.0));
}

#[test]
fn right_alignment_flushes_to_widest_region() {
    let top = Size::new(60.0, 13.0);
    let content = Size::new(40.0, 18.0);
    let composer = BubbleComposer::new(&content)
        .top(Some(&top))
        .insets(EdgeInsets::new(0.0, 5.0, 0.0, 5.0))
        .alignment(StackAlignment::Right);
    let composed = composer.compose(320.0);

    assert_eq!(composed.top.map(|r| r.origin.x), Some(5.0));
    assert_eq!(composed.content.origin.x, 25.0);
    assert_eq!(composed.size.width, 70.0);
}

#[test]
fn negative_measurements_are_clamped() {
    let content = Size::new(-4.0, 18.0);
    let composer = BubbleComposer::new(&content);
    assert_eq!(composer.size_that_fits(100.0), Size::new(0.0, 18.0));
}
