//! Sizing pass over heterogeneous chat items.
//!
//! [`CellSizer`] owns one layout engine per message kind and the default
//! styles, and sizes each [`ChatItem`] through an off-screen
//! [`BubbleView`] in the sizing context.

pub mod rendezvous;

pub use rendezvous::{PrimaryHandle, PrimaryQueue, RendezvousError};

use crate::bubble::{BubbleView, PhotoBubbleContent, TextBubbleContent, ViewContext};
use crate::config::ResolvedConfig;
use crate::layout::{CacheStats, LayoutCacheConfig, PhotoLayoutEngine, TextLayoutEngine};
use crate::measure::{GridTextEngine, TextMeasurer};
use crate::model::{ChatItem, DisplayScale, Size};
use crate::style::{PhotoBubbleDefaultStyle, StyleConfig, TextBubbleDefaultStyle};
use std::sync::Arc;
use tracing::trace;

/// Cache counters of every engine in a [`CellSizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizingStats {
    /// Text layout cache.
    pub text: CacheStats,
    /// Photo layout cache.
    pub photo: CacheStats,
}

/// Sizes chat items for a list.
///
/// Cheap to share: wrap in an `Arc` to size from several threads.
pub struct CellSizer<M = GridTextEngine> {
    text_engine: Arc<TextLayoutEngine<M>>,
    photo_engine: Arc<PhotoLayoutEngine>,
    text_style: Arc<TextBubbleDefaultStyle>,
    photo_style: Arc<PhotoBubbleDefaultStyle>,
}

impl<M: TextMeasurer> CellSizer<M> {
    /// Build engines and default styles from resolved configuration.
    pub fn new(measurer: M, config: &ResolvedConfig) -> Self {
        Self::with_style(
            measurer,
            config.display_scale,
            &config.cache_config(),
            &config.style,
        )
    }

    /// Build from individual settings.
    pub fn with_style(
        measurer: M,
        display_scale: DisplayScale,
        cache: &LayoutCacheConfig,
        style: &StyleConfig,
    ) -> Self {
        Self {
            text_engine: Arc::new(TextLayoutEngine::new(measurer, display_scale, cache)),
            photo_engine: Arc::new(PhotoLayoutEngine::new(cache)),
            text_style: Arc::new(TextBubbleDefaultStyle::from_config(style)),
            photo_style: Arc::new(PhotoBubbleDefaultStyle::from_config(style)),
        }
    }

    /// The text engine, shared by text content and sender names.
    pub fn text_engine(&self) -> &Arc<TextLayoutEngine<M>> {
        &self.text_engine
    }

    /// The photo engine.
    pub fn photo_engine(&self) -> &Arc<PhotoLayoutEngine> {
        &self.photo_engine
    }

    /// Bubble size of `item` for a list `max_width` wide.
    pub fn size(&self, item: &ChatItem, max_width: f32, is_selected: bool) -> Size {
        let size = match item {
            ChatItem::Text(view_model) => {
                let content = TextBubbleContent::new(
                    view_model.clone(),
                    Arc::clone(&self.text_style),
                    Arc::clone(&self.text_engine),
                );
                self.measure(content, max_width, is_selected)
            }
            ChatItem::Photo(view_model) => {
                let content = PhotoBubbleContent::new(
                    view_model.clone(),
                    Arc::clone(&self.photo_style),
                    Arc::clone(&self.photo_engine),
                );
                self.measure(content, max_width, is_selected)
            }
        };
        trace!(
            kind = item.kind(),
            max_width,
            width = size.width,
            height = size.height,
            "sized chat item"
        );
        size
    }

    fn measure<C>(&self, content: C, max_width: f32, is_selected: bool) -> Size
    where
        C: crate::bubble::BubbleContent,
    {
        let mut view = BubbleView::new(content, Arc::clone(&self.text_engine))
            .with_view_context(ViewContext::Sizing);
        view.set_selected(is_selected);
        view.size_that_fits(max_width)
    }

    /// Sizes of every item, in order.
    pub fn sizes(&self, items: &[ChatItem], max_width: f32, is_selected: bool) -> Vec<Size> {
        items
            .iter()
            .map(|item| self.size(item, max_width, is_selected))
            .collect()
    }

    /// Current cache counters.
    pub fn stats(&self) -> SizingStats {
        SizingStats {
            text: self.text_engine.cache().stats(),
            photo: self.photo_engine.cache().stats(),
        }
    }

    /// Drop every cached layout, e.g. after a style or scale change.
    pub fn clear_caches(&self) {
        self.text_engine.cache().clear();
        self.photo_engine.cache().clear();
    }
}

impl<M: TextMeasurer + Send + Sync + 'static> CellSizer<M> {
    /// Size `item` from any thread.
    ///
    /// Items that cannot be sized in the background are marshalled onto the
    /// primary thread through `primary`, unless the caller already is on it.
    ///
    /// # Errors
    ///
    /// [`RendezvousError::Disconnected`] when the primary queue is gone.
    pub fn size_from_any_thread(
        self: &Arc<Self>,
        item: &ChatItem,
        max_width: f32,
        is_selected: bool,
        primary: &PrimaryHandle,
    ) -> Result<Size, RendezvousError> {
        if item.can_size_in_background() || primary.is_primary_thread() {
            return Ok(self.size(item, max_width, is_selected));
        }

        let sizer = Arc::clone(self);
        let item = item.clone();
        primary.run_sync(move || sizer.size(&item, max_width, is_selected))
    }
}
