//! Bubble composition: stacking decorations around the content.
//!
//! A bubble is a vertical stack of at most three regions: an optional top
//! decoration (e.g. the sender name), the content, and an optional bottom
//! decoration. The composer measures each region, places them top to bottom
//! inside the content insets, and reports the total size.
//!
//! # Inset rules
//!
//! - The top inset is applied when the first region with a non-zero height
//!   is placed, so it is present even without a top decoration as soon as
//!   anything renders.
//! - The bottom inset is applied when anything rendered.
//! - When nothing renders at all, the horizontal insets are dropped too and
//!   the stack composes to `(0, 0)`.

use crate::measure::Measure;
use crate::model::{EdgeInsets, Point, Rect, Size};

/// Horizontal placement of regions inside the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackAlignment {
    /// Regions start at the left inset.
    #[default]
    Left,
    /// Regions end at the right edge of the widest region.
    Right,
}

/// Which end of the stack the first region is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackAnchor {
    /// Regions stack in insertion order from the top.
    #[default]
    Top,
    /// Regions stack in reverse insertion order from the top.
    Bottom,
}

/// Frames produced by a composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposedBubble {
    /// Total bubble size including insets.
    pub size: Size,
    /// Frame of the top decoration, when present.
    pub top: Option<Rect>,
    /// Frame of the content.
    pub content: Rect,
    /// Frame of the bottom decoration, when present.
    pub bottom: Option<Rect>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top,
    Content,
    Bottom,
}

/// Stacks up to three measurable regions.
pub struct BubbleComposer<'a> {
    top: Option<&'a dyn Measure>,
    content: &'a dyn Measure,
    bottom: Option<&'a dyn Measure>,
    insets: EdgeInsets,
    alignment: StackAlignment,
    anchor: StackAnchor,
}

impl<'a> BubbleComposer<'a> {
    /// Composer with only a content region and no insets.
    pub fn new(content: &'a dyn Measure) -> Self {
        Self {
            top: None,
            content,
            bottom: None,
            insets: EdgeInsets::ZERO,
            alignment: StackAlignment::Left,
            anchor: StackAnchor::Top,
        }
    }

    /// Builder-style top decoration.
    pub fn top(mut self, top: Option<&'a dyn Measure>) -> Self {
        self.top = top;
        self
    }

    /// Builder-style bottom decoration.
    pub fn bottom(mut self, bottom: Option<&'a dyn Measure>) -> Self {
        self.bottom = bottom;
        self
    }

    /// Builder-style insets.
    pub fn insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Builder-style alignment.
    pub fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder-style anchor.
    pub fn anchor(mut self, anchor: StackAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Width offered to each region.
    pub fn region_max_width(&self, max_width: f32) -> f32 {
        (max_width - self.insets.horizontal()).max(0.0)
    }

    /// Measure and place every region for `max_width`.
    pub fn compose(&self, max_width: f32) -> ComposedBubble {
        let region_width = self.region_max_width(max_width);

        let mut regions: Vec<(Slot, Size)> = Vec::with_capacity(3);
        if let Some(top) = self.top {
            regions.push((Slot::Top, top.measure(region_width).clamped()));
        }
        regions.push((Slot::Content, self.content.measure(region_width).clamped()));
        if let Some(bottom) = self.bottom {
            regions.push((Slot::Bottom, bottom.measure(region_width).clamped()));
        }
        if self.anchor == StackAnchor::Bottom {
            regions.reverse();
        }

        let stack_width = regions
            .iter()
            .map(|(_, size)| size.width)
            .fold(0.0f32, f32::max);

        let mut composed = ComposedBubble {
            size: Size::ZERO,
            top: None,
            content: Rect::ZERO,
            bottom: None,
        };

        let mut y = 0.0f32;
        for (slot, size) in regions {
            if y == 0.0 && size.height > 0.0 {
                y = self.insets.top;
            }
            let x = match self.alignment {
                StackAlignment::Left => self.insets.left,
                StackAlignment::Right => self.insets.left + (stack_width - size.width),
            };
            let frame = Rect::new(Point::new(x, y), size);
            y += size.height;

            match slot {
                Slot::Top => composed.top = Some(frame),
                Slot::Content => composed.content = frame,
                Slot::Bottom => composed.bottom = Some(frame),
            }
        }

        let rendered = y - self.insets.top > 0.0;
        composed.size = if rendered {
            Size::new(
                stack_width + self.insets.horizontal(),
                y + self.insets.bottom,
            )
        } else {
            Size::new(stack_width, y)
        };
        composed
    }

    /// Total size for `max_width` without keeping the frames.
    pub fn size_that_fits(&self, max_width: f32) -> Size {
        self.compose(max_width).size
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
