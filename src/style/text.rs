//! Default text bubble style.

use super::{
    BaseBubbleDefaultStyle, BaseBubbleStyle, BubbleMasks, Color, FontDescriptor, ImageRef,
    SenderNameText, StyleConfig, TextBubbleStyle,
};
use crate::model::{EdgeInsets, MessageViewModel};

/// Body text colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    /// Incoming body text.
    pub incoming: Color,
    /// Outgoing body text.
    pub outgoing: Color,
    /// Body text of a selected bubble.
    pub selected: Color,
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            incoming: Color::BLACK,
            outgoing: Color::WHITE,
            selected: Color::BLACK,
        }
    }
}

/// Text bubble style: a base style plus body font and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBubbleDefaultStyle {
    base: BaseBubbleDefaultStyle,
    font: FontDescriptor,
    colors: TextColors,
}

impl TextBubbleDefaultStyle {
    /// Create from parts.
    pub fn new(base: BaseBubbleDefaultStyle, font: FontDescriptor, colors: TextColors) -> Self {
        Self { base, font, colors }
    }

    /// Build from configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        let base = BaseBubbleDefaultStyle::new(
            BubbleMasks::bundled(config.tail_width),
            config.text.incoming_insets,
            config.text.outgoing_insets,
        )
        .with_sender_name_font(FontDescriptor::system(config.sender_name_font_size))
        .with_sender_names_hidden(config.hide_sender_names);
        Self::new(
            base,
            FontDescriptor::system(config.text.font_size),
            TextColors::default(),
        )
    }
}

impl Default for TextBubbleDefaultStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl BaseBubbleStyle for TextBubbleDefaultStyle {
    fn content_insets(&self, is_incoming: bool, is_selected: bool) -> EdgeInsets {
        self.base.content_insets(is_incoming, is_selected)
    }

    fn background_color(&self, is_incoming: bool, is_selected: bool) -> Color {
        self.base.background_color(is_incoming, is_selected)
    }

    fn masking_image(&self, is_incoming: bool, is_showing_tail: bool) -> &ImageRef {
        self.base.masking_image(is_incoming, is_showing_tail)
    }

    fn border_image(&self, is_incoming: bool) -> Option<&ImageRef> {
        self.base.border_image(is_incoming)
    }

    fn sender_name(&self, message: &MessageViewModel) -> Option<SenderNameText> {
        self.base.sender_name(message)
    }

    fn tail_width(&self) -> f32 {
        self.base.tail_width()
    }
}

impl TextBubbleStyle for TextBubbleDefaultStyle {
    fn font(&self, _is_selected: bool) -> FontDescriptor {
        self.font.clone()
    }

    fn text_color(&self, is_incoming: bool, is_selected: bool) -> Color {
        if is_selected {
            self.colors.selected
        } else if is_incoming {
            self.colors.incoming
        } else {
            self.colors.outgoing
        }
    }
}
