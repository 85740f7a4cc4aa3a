//! Default photo bubble style.

use super::{
    BaseBubbleDefaultStyle, BaseBubbleStyle, BubbleMasks, Color, FontDescriptor, ImageRef,
    PhotoBubbleStyle, PhotoSizes, SenderNameText, StyleConfig,
};
use crate::model::{
    EdgeInsets, MessageStatus, MessageViewModel, PhotoMessageViewModel, Size, TransferStatus,
};

/// Photo-specific colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoColors {
    /// Placeholder icon tint, incoming.
    pub placeholder_icon_tint_incoming: Color,
    /// Placeholder icon tint, outgoing.
    pub placeholder_icon_tint_outgoing: Color,
    /// Progress indicator, incoming.
    pub progress_indicator_incoming: Color,
    /// Progress indicator, outgoing.
    pub progress_indicator_outgoing: Color,
    /// Overlay above an image still in flight.
    pub overlay: Color,
}

impl Default for PhotoColors {
    fn default() -> Self {
        Self {
            placeholder_icon_tint_incoming: Color::rgb(0xced6dc),
            placeholder_icon_tint_outgoing: Color::rgb(0x508dfc),
            progress_indicator_incoming: Color::rgb(0x98a3ab),
            progress_indicator_outgoing: Color::WHITE,
            overlay: Color::BLACK.with_alpha(0.70),
        }
    }
}

/// Photo bubble style: a base style plus size buckets and placeholder assets.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoBubbleDefaultStyle {
    base: BaseBubbleDefaultStyle,
    sizes: PhotoSizes,
    colors: PhotoColors,
    placeholder_icon: ImageRef,
}

impl PhotoBubbleDefaultStyle {
    /// Create from parts.
    pub fn new(
        base: BaseBubbleDefaultStyle,
        sizes: PhotoSizes,
        colors: PhotoColors,
        placeholder_icon: ImageRef,
    ) -> Self {
        Self {
            base,
            sizes,
            colors,
            placeholder_icon,
        }
    }

    /// Build from configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        let base = BaseBubbleDefaultStyle::new(
            BubbleMasks::bundled(config.tail_width),
            config.photo.incoming_insets,
            config.photo.outgoing_insets,
        )
        .with_sender_name_font(FontDescriptor::system(config.sender_name_font_size))
        .with_sender_names_hidden(config.hide_sender_names);
        Self::new(
            base,
            config.photo.sizes,
            PhotoColors::default(),
            ImageRef::new(
                "photo-bubble-placeholder-icon",
                config.photo.placeholder_icon_size,
            ),
        )
    }

    /// Display size for a view-model's source image.
    pub fn bubble_size(&self, view_model: &PhotoMessageViewModel) -> Size {
        self.bubble_size_bucket(view_model.image_size.aspect_ratio())
    }
}

impl Default for PhotoBubbleDefaultStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl BaseBubbleStyle for PhotoBubbleDefaultStyle {
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

impl PhotoBubbleStyle for PhotoBubbleDefaultStyle {
    fn bubble_size_bucket(&self, aspect_ratio: f32) -> Size {
        self.sizes.bucket(aspect_ratio)
    }

    fn placeholder_icon(&self) -> &ImageRef {
        &self.placeholder_icon
    }

    fn placeholder_icon_tint(&self, is_incoming: bool) -> Color {
        if is_incoming {
            self.colors.placeholder_icon_tint_incoming
        } else {
            self.colors.placeholder_icon_tint_outgoing
        }
    }

    fn placeholder_background(&self, is_incoming: bool) -> Color {
        self.base.background_color(is_incoming, false)
    }

    fn progress_indicator_color(&self, is_incoming: bool) -> Color {
        if is_incoming {
            self.colors.progress_indicator_incoming
        } else {
            self.colors.progress_indicator_outgoing
        }
    }

    fn overlay_color(&self, view_model: &PhotoMessageViewModel) -> Option<Color> {
        let shows_overlay = view_model.image.is_some()
            && (view_model.transfer_status == TransferStatus::Transferring
                || view_model.message.status != MessageStatus::Success);
        shows_overlay.then_some(self.colors.overlay)
    }
}
