//! Bubbles: the hosting-view facing layer.
//!
//! A [`BubbleView`] pairs a kind-specific [`BubbleContent`] (text or photo)
//! with the shared decorations and composes them through the
//! [`BubbleComposer`](crate::layout::BubbleComposer). Hosting views only
//! call [`BubbleView::size_that_fits`], [`BubbleView::compute_subframes`]
//! and [`BubbleView::appearance`].

pub mod decoration;
pub mod photo;
pub mod text;
pub mod view;

pub use decoration::SenderNameDecoration;
pub use photo::{
    PhotoBackground, PhotoBubbleContent, PhotoPresentation, PlaceholderIcon, ProgressIndicator,
    ProgressStatus,
};
pub use text::TextBubbleContent;
pub use view::{BubbleAppearance, BubbleView};

use crate::model::{MessageViewModel, Size};
use crate::style::BaseBubbleStyle;

/// What a bubble is being used for.
///
/// Sizing bubbles only ever measure; they skip every appearance update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewContext {
    /// On screen.
    #[default]
    Normal,
    /// Off-screen, measuring only.
    Sizing,
}

/// Kind-specific content of a bubble.
pub trait BubbleContent {
    /// Style the content is resolved against.
    type Style: BaseBubbleStyle + ?Sized;

    /// Common message attributes.
    fn message(&self) -> &MessageViewModel;

    /// The content's style.
    fn style(&self) -> &Self::Style;

    /// Size of the content region for `max_width`, without insets.
    fn content_size(&self, max_width: f32, is_selected: bool) -> Size;

    /// Whether this content may be measured off the primary thread.
    fn can_size_in_background(&self) -> bool {
        false
    }
}
