//! Default base bubble style: insets, background colors, masks, sender names.

use super::{BaseBubbleStyle, Color, FontDescriptor, FontWeight, ImageRef, SenderNameText};
use crate::model::{EdgeInsets, MessageViewModel, Size};

/// The four mask images selected by direction and tail visibility.
///
/// Masks are resizable images, so they carry no intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleMasks {
    /// Incoming bubble with tail.
    pub incoming_tail: ImageRef,
    /// Incoming bubble without tail.
    pub incoming_no_tail: ImageRef,
    /// Outgoing bubble with tail.
    pub outgoing_tail: ImageRef,
    /// Outgoing bubble without tail.
    pub outgoing_no_tail: ImageRef,
    /// Width of the tail drawn by the `*_tail` masks.
    pub tail_width: f32,
}

impl BubbleMasks {
    /// The bundled mask set with the given tail width.
    pub fn bundled(tail_width: f32) -> Self {
        Self {
            incoming_tail: ImageRef::new("bubble-incoming-tail", Size::ZERO),
            incoming_no_tail: ImageRef::new("bubble-incoming", Size::ZERO),
            outgoing_tail: ImageRef::new("bubble-outgoing-tail", Size::ZERO),
            outgoing_no_tail: ImageRef::new("bubble-outgoing", Size::ZERO),
            tail_width,
        }
    }
}

impl Default for BubbleMasks {
    fn default() -> Self {
        Self::bundled(6.0)
    }
}

/// Colors shared by every bubble kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseColors {
    /// Background of incoming bubbles.
    pub incoming: Color,
    /// Background of outgoing bubbles.
    pub outgoing: Color,
    /// Background of a selected bubble, either direction.
    pub selected_overlay: Color,
    /// Sender name text color.
    pub sender_name: Color,
}

impl Default for BaseColors {
    fn default() -> Self {
        Self {
            incoming: Color::rgb(0xe6ecf2),
            outgoing: Color::rgb(0x3d68f5),
            selected_overlay: Color::rgb(0xd1d8de),
            sender_name: Color::rgb(0x8e8e93),
        }
    }
}

/// Base style built eagerly from its parts. All images are resolved here.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseBubbleDefaultStyle {
    masks: BubbleMasks,
    colors: BaseColors,
    incoming_insets: EdgeInsets,
    outgoing_insets: EdgeInsets,
    sender_name_font: FontDescriptor,
    hide_sender_names: bool,
}

impl BaseBubbleDefaultStyle {
    /// Create a base style with the given direction insets.
    pub fn new(masks: BubbleMasks, incoming_insets: EdgeInsets, outgoing_insets: EdgeInsets) -> Self {
        Self {
            masks,
            colors: BaseColors::default(),
            incoming_insets,
            outgoing_insets,
            sender_name_font: FontDescriptor::system(11.0).with_weight(FontWeight::Medium),
            hide_sender_names: false,
        }
    }

    /// Builder-style colors.
    pub fn with_colors(mut self, colors: BaseColors) -> Self {
        self.colors = colors;
        self
    }

    /// Builder-style sender name font.
    pub fn with_sender_name_font(mut self, font: FontDescriptor) -> Self {
        self.sender_name_font = font;
        self
    }

    /// Builder-style sender name visibility.
    pub fn with_sender_names_hidden(mut self, hidden: bool) -> Self {
        self.hide_sender_names = hidden;
        self
    }

    /// The colors in use.
    pub fn colors(&self) -> &BaseColors {
        &self.colors
    }
}

impl BaseBubbleStyle for BaseBubbleDefaultStyle {
    fn content_insets(&self, is_incoming: bool, _is_selected: bool) -> EdgeInsets {
        if is_incoming {
            self.incoming_insets
        } else {
            self.outgoing_insets
        }
    }

    fn background_color(&self, is_incoming: bool, is_selected: bool) -> Color {
        match (is_incoming, is_selected) {
            (_, true) => self.colors.selected_overlay,
            (true, false) => self.colors.incoming,
            (false, false) => self.colors.outgoing,
        }
    }

    fn masking_image(&self, is_incoming: bool, is_showing_tail: bool) -> &ImageRef {
        match (is_incoming, is_showing_tail) {
            (true, true) => &self.masks.incoming_tail,
            (true, false) => &self.masks.incoming_no_tail,
            (false, true) => &self.masks.outgoing_tail,
            (false, false) => &self.masks.outgoing_no_tail,
        }
    }

    fn border_image(&self, _is_incoming: bool) -> Option<&ImageRef> {
        None
    }

    fn sender_name(&self, message: &MessageViewModel) -> Option<SenderNameText> {
        if self.hide_sender_names {
            return None;
        }
        message.sender_name.as_ref().map(|name| SenderNameText {
            text: name.clone(),
            font: self.sender_name_font.clone(),
            color: self.colors.sender_name,
        })
    }

    fn tail_width(&self) -> f32 {
        self.masks.tail_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> BaseBubbleDefaultStyle {
        BaseBubbleDefaultStyle::new(
            BubbleMasks::default(),
            EdgeInsets::new(1.0, 2.0, 3.0, 4.0),
            EdgeInsets::new(5.0, 6.0, 7.0, 8.0),
        )
    }

    #[test]
    fn insets_follow_direction() {
        let style = style();
        assert_eq!(style.content_insets(true, false), EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(style.content_insets(false, true), EdgeInsets::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn mask_selected_by_direction_and_tail() {
        let style = style();
        assert_eq!(style.masking_image(true, true).name, "bubble-incoming-tail");
        assert_eq!(style.masking_image(true, false).name, "bubble-incoming");
        assert_eq!(style.masking_image(false, true).name, "bubble-outgoing-tail");
        assert_eq!(style.masking_image(false, false).name, "bubble-outgoing");
    }

    #[test]
    fn selected_background_overrides_direction() {
        let style = style();
        let colors = BaseColors::default();
        assert_eq!(style.background_color(true, false), colors.incoming);
        assert_eq!(style.background_color(false, false), colors.outgoing);
        assert_eq!(style.background_color(true, true), colors.selected_overlay);
    }

    #[test]
    fn sender_name_requires_name_and_visibility() {
        let style = style();
        let named = MessageViewModel::incoming().with_sender_name("Ana");
        assert_eq!(style.sender_name(&named).map(|s| s.text), Some("Ana".to_string()));
        assert!(style.sender_name(&MessageViewModel::incoming()).is_none());

        let hidden = style.with_sender_names_hidden(true);
        assert!(hidden.sender_name(&named).is_none());
    }

    #[test]
    fn tail_width_comes_from_masks() {
        assert_eq!(style().tail_width(), 6.0);
    }
}
