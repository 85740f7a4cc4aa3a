//! Property-based tests for layout invariants.
//!
//! Tests validate:
//! 1. Layout models are deterministic for equal contexts
//! 2. The layout cache returns what was stored and never aliases contexts
//! 3. Photo aspect-ratio bucketing boundaries
//! 4. Photo visual center offset is symmetric in the tail width
//! 5. Composer size rules (empty stack, insets, widest region)

use bubblekit::layout::{
    BubbleComposer, LayoutCache, PhotoLayoutContext, PhotoLayoutModel, TextLayoutContext,
    TextLayoutModel,
};
use bubblekit::measure::{GridTextEngine, Measure};
use bubblekit::model::{DisplayScale, EdgeInsets, Size};
use bubblekit::style::{FontDescriptor, PhotoSizes};
use proptest::prelude::*;
use std::sync::Arc;

// ===== Strategies =====

fn text_context() -> impl Strategy<Value = TextLayoutContext> {
    (
        "[a-z ]{0,40}",
        8.0f32..24.0,
        0.0f32..400.0,
        prop_oneof![Just(1.0f32), Just(2.0f32), Just(3.0f32)],
    )
        .prop_map(|(text, font_size, width, scale)| TextLayoutContext {
            text,
            font: FontDescriptor::system(font_size),
            text_insets: EdgeInsets::ZERO,
            preferred_max_layout_width: width,
            display_scale: DisplayScale::new(scale),
        })
}

fn photo_context() -> impl Strategy<Value = PhotoLayoutContext> {
    (
        1.0f32..400.0,
        1.0f32..400.0,
        0.0f32..20.0,
        any::<bool>(),
        0.0f32..400.0,
    )
        .prop_map(|(w, h, tail, is_incoming, width)| PhotoLayoutContext {
            photo_size: Size::new(w, h),
            placeholder_size: Size::new(32.0, 32.0),
            tail_width: tail,
            is_incoming,
            preferred_max_layout_width: width,
        })
}

fn insets() -> impl Strategy<Value = EdgeInsets> {
    (0.0f32..30.0, 0.0f32..30.0, 0.0f32..30.0, 0.0f32..30.0)
        .prop_map(|(t, l, b, r)| EdgeInsets::new(t, l, b, r))
}

// ===== Property 1: Determinism =====

proptest! {
    #[test]
    fn text_layout_is_deterministic(ctx in text_context()) {
        let engine = GridTextEngine::default();
        let a = TextLayoutModel::compute(&ctx, &engine);
        let b = TextLayoutModel::compute(&ctx.clone(), &engine);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn text_frames_sit_at_origin(ctx in text_context()) {
        let model = TextLayoutModel::compute(&ctx, &GridTextEngine::default());
        prop_assert_eq!(model.text_frame.origin.x, 0.0);
        prop_assert_eq!(model.text_frame.origin.y, 0.0);
        prop_assert_eq!(model.text_frame, model.bubble_frame);
        prop_assert_eq!(model.text_frame.size, model.size);
    }

    #[test]
    fn text_size_is_on_the_pixel_grid(ctx in text_context()) {
        let model = TextLayoutModel::compute(&ctx, &GridTextEngine::default());
        let scale = ctx.display_scale.get();
        let w = model.size.width * scale;
        let h = model.size.height * scale;
        prop_assert!((w - w.round()).abs() < 1e-3, "width {} not on grid", model.size.width);
        prop_assert!((h - h.round()).abs() < 1e-3, "height {} not on grid", model.size.height);
    }

    #[test]
    fn photo_layout_is_deterministic(ctx in photo_context()) {
        prop_assert_eq!(PhotoLayoutModel::compute(&ctx), PhotoLayoutModel::compute(&ctx));
    }
}

// ===== Property 2: Cache Correctness =====

proptest! {
    #[test]
    fn cache_get_after_put_returns_stored_model(ctx in text_context()) {
        let mut cache = LayoutCache::new(16);
        let model = Arc::new(TextLayoutModel::compute(&ctx, &GridTextEngine::default()));
        cache.put(ctx.clone(), Arc::clone(&model));

        let hit = cache.get(&ctx);
        prop_assert!(hit.is_some());
        prop_assert!(Arc::ptr_eq(&hit.unwrap(), &model));
    }

    #[test]
    fn cache_never_aliases_unequal_contexts(a in text_context(), b in text_context()) {
        prop_assume!(a != b);
        let mut cache = LayoutCache::new(16);
        cache.put(a.clone(), Arc::new(1u8));
        prop_assert!(cache.get(&b).is_none());
    }
}

// ===== Property 3: Bucketing Boundaries =====

#[test]
fn bucketing_boundaries() {
    let sizes = PhotoSizes::default();
    let square = Size::new(210.0, 210.0);
    let portrait = Size::new(136.0, 210.0);
    let landscape = Size::new(210.0, 136.0);

    assert_eq!(sizes.bucket(0.90), square);
    assert_eq!(sizes.bucket(1.10), square);
    assert_eq!(sizes.bucket(1.0), square);
    assert_eq!(sizes.bucket(0.0), square);
    assert_eq!(sizes.bucket(0.89), portrait);
    assert_eq!(sizes.bucket(1.11), landscape);
}

proptest! {
    #[test]
    fn bucketing_is_monotonic(ratio in 0.01f32..10.0) {
        let sizes = PhotoSizes::default();
        let bucket = sizes.bucket(ratio);
        if ratio < 0.90 {
            prop_assert_eq!(bucket, sizes.portrait);
        } else if ratio > 1.10 {
            prop_assert_eq!(bucket, sizes.landscape);
        } else {
            prop_assert_eq!(bucket, sizes.square);
        }
    }
}

// ===== Property 4: Tail Offset Symmetry =====

proptest! {
    #[test]
    fn visual_centers_differ_by_tail_width(ctx in photo_context()) {
        let incoming = PhotoLayoutModel::compute(&PhotoLayoutContext { is_incoming: true, ..ctx });
        let outgoing = PhotoLayoutModel::compute(&PhotoLayoutContext { is_incoming: false, ..ctx });

        let dx = incoming.visual_center.x - outgoing.visual_center.x;
        prop_assert!((dx - ctx.tail_width).abs() < 1e-3, "dx {} vs tail {}", dx, ctx.tail_width);
        prop_assert_eq!(incoming.visual_center.y, outgoing.visual_center.y);
        prop_assert_eq!(incoming.size, ctx.photo_size);
    }
}

// ===== Property 5: Composer =====

proptest! {
    #[test]
    fn empty_stack_is_zero_whatever_the_insets(insets in insets(), width in 0.0f32..500.0) {
        let content = Size::ZERO;
        let size = BubbleComposer::new(&content).insets(insets).size_that_fits(width);
        prop_assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn non_empty_content_gets_all_insets(
        insets in insets(),
        w in 0.0f32..200.0,
        h in 1.0f32..200.0,
    ) {
        let content = Size::new(w, h);
        let composed = BubbleComposer::new(&content).insets(insets).compose(500.0);
        prop_assert!((composed.size.width - (w + insets.horizontal())).abs() < 1e-3);
        prop_assert!((composed.size.height - (h + insets.vertical())).abs() < 1e-3);
        prop_assert_eq!(composed.content.origin.y, insets.top);
        prop_assert_eq!(composed.content.origin.x, insets.left);
    }

    #[test]
    fn stack_width_is_widest_region(
        top_w in 0.0f32..200.0,
        content_w in 0.0f32..200.0,
        bottom_w in 0.0f32..200.0,
    ) {
        let top = Size::new(top_w, 10.0);
        let content = Size::new(content_w, 10.0);
        let bottom = Size::new(bottom_w, 10.0);
        let size = BubbleComposer::new(&content)
            .top(Some(&top as &dyn Measure))
            .bottom(Some(&bottom as &dyn Measure))
            .size_that_fits(500.0);
        prop_assert_eq!(size.width, top_w.max(content_w).max(bottom_w));
        prop_assert_eq!(size.height, 30.0);
    }
}
