//! Layout core: contexts, models, caches and composition.
//!
//! A sizing request flows through this module as follows:
//!
//! 1. The bubble builds a context from its view-model, style and width.
//! 2. The engine for that message kind looks the context up in its cache.
//! 3. On a miss the model is computed (text goes through the
//!    [`TextMeasurer`](crate::measure::TextMeasurer)) and stored.
//! 4. The [`BubbleComposer`] stacks the content size with any decorations
//!    and the style's insets to produce the final bubble size.
//!
//! Everything here is pure apart from the caches.

pub mod cache;
pub mod composer;
pub mod photo;
pub mod text;

pub use cache::{CacheStats, LayoutCache, LayoutCacheConfig, SharedLayoutCache};
pub use composer::{BubbleComposer, ComposedBubble, StackAlignment, StackAnchor};
pub use photo::{PhotoLayoutContext, PhotoLayoutEngine, PhotoLayoutModel};
pub use text::{TextLayoutContext, TextLayoutEngine, TextLayoutModel};
