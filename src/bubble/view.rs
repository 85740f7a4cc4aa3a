//! Generic bubble view: composition, frame caching and appearance.

use super::decoration::SenderNameDecoration;
use super::{BubbleContent, ViewContext};
use crate::layout::{BubbleComposer, ComposedBubble, StackAlignment, TextLayoutEngine};
use crate::measure::{Measure, TextMeasurer};
use crate::model::geometry::same_float;
use crate::model::{EdgeInsets, Size};
use crate::style::{BaseBubbleStyle, Color, ImageRef};
use std::sync::Arc;
use tracing::trace;

/// Resolved appearance of a bubble on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleAppearance {
    /// Fill behind the stack.
    pub background: Color,
    /// Shape mask, chosen by direction and tail.
    pub mask: ImageRef,
    /// Optional border drawn over the bubble.
    pub border: Option<ImageRef>,
    /// Insets of the stack.
    pub content_insets: EdgeInsets,
}

/// Adapts bubble content to the composer's [`Measure`] capability.
struct ContentRegion<'a, C> {
    content: &'a C,
    is_selected: bool,
}

impl<C: BubbleContent> Measure for ContentRegion<'_, C> {
    fn measure(&self, max_width: f32) -> Size {
        self.content.content_size(max_width, self.is_selected)
    }
}

/// A bubble as seen by a hosting view.
///
/// The last composed frame set is kept together with the width it was
/// computed for; asking again for the same width reuses it. Any change that
/// can move a frame drops it.
pub struct BubbleView<C, M> {
    content: C,
    decorations: Arc<TextLayoutEngine<M>>,
    view_context: ViewContext,
    alignment: StackAlignment,
    is_selected: bool,
    last_layout: Option<(f32, ComposedBubble)>,
}

impl<C: BubbleContent, M: TextMeasurer> BubbleView<C, M> {
    /// Create a left-aligned, unselected bubble in the normal context.
    ///
    /// `decorations` measures the sender name.
    pub fn new(content: C, decorations: Arc<TextLayoutEngine<M>>) -> Self {
        Self {
            content,
            decorations,
            view_context: ViewContext::Normal,
            alignment: StackAlignment::Left,
            is_selected: false,
            last_layout: None,
        }
    }

    /// Builder-style view context.
    pub fn with_view_context(mut self, view_context: ViewContext) -> Self {
        self.view_context = view_context;
        self
    }

    /// Builder-style alignment of the stacked regions.
    pub fn with_alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self.last_layout = None;
        self
    }

    /// The kind-specific content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Replace the content. Drops cached frames.
    pub fn set_content(&mut self, content: C) {
        self.content = content;
        self.last_layout = None;
    }

    /// Current view context.
    pub fn view_context(&self) -> ViewContext {
        self.view_context
    }

    /// Switch between on-screen and sizing use.
    pub fn set_view_context(&mut self, view_context: ViewContext) {
        self.view_context = view_context;
    }

    /// Whether the bubble is selected.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Change selection. Drops cached frames when it changes.
    pub fn set_selected(&mut self, is_selected: bool) {
        if self.is_selected != is_selected {
            self.is_selected = is_selected;
            self.last_layout = None;
        }
    }

    /// Whether this bubble may be measured off the primary thread.
    pub fn can_size_in_background(&self) -> bool {
        self.content.can_size_in_background()
    }

    fn compose(&self, max_width: f32) -> ComposedBubble {
        let message = self.content.message();
        let style = self.content.style();
        let insets = style.content_insets(message.is_incoming, self.is_selected);

        let sender_name = style
            .sender_name(message)
            .map(|text| SenderNameDecoration::new(text, &self.decorations));
        let content = ContentRegion {
            content: &self.content,
            is_selected: self.is_selected,
        };

        BubbleComposer::new(&content)
            .top(sender_name.as_ref().map(|name| name as &dyn Measure))
            .insets(insets)
            .alignment(self.alignment)
            .compose(max_width)
    }

    /// Total bubble size for `max_width`.
    pub fn size_that_fits(&self, max_width: f32) -> Size {
        match &self.last_layout {
            Some((width, composed)) if same_float(*width, max_width) => composed.size,
            _ => self.compose(max_width).size,
        }
    }

    /// Frames of every region for `max_width`.
    pub fn compute_subframes(&mut self, max_width: f32) -> ComposedBubble {
        if let Some((width, composed)) = &self.last_layout {
            if same_float(*width, max_width) {
                trace!(max_width, "reusing bubble frames");
                return *composed;
            }
        }
        let composed = self.compose(max_width);
        self.last_layout = Some((max_width, composed));
        composed
    }

    /// Appearance to apply, or `None` while sizing.
    pub fn appearance(&self) -> Option<BubbleAppearance> {
        if self.view_context == ViewContext::Sizing {
            return None;
        }
        let message = self.content.message();
        let style = self.content.style();
        Some(BubbleAppearance {
            background: style.background_color(message.is_incoming, self.is_selected),
            mask: style
                .masking_image(message.is_incoming, message.decoration.is_showing_tail)
                .clone(),
            border: style.border_image(message.is_incoming).cloned(),
            content_insets: style.content_insets(message.is_incoming, self.is_selected),
        })
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
