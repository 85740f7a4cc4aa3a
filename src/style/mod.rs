//! Bubble style capabilities.
//!
//! Styles are pure lookup tables consumed by the layout core. Each bubble
//! kind has a capability trait extending [`BaseBubbleStyle`]; the default
//! implementations are plain structs built eagerly from a [`StyleConfig`].
//!
//! # Module Structure
//!
//! - `base`: [`BaseBubbleDefaultStyle`] - insets, colors, masks, sender names
//! - `text`: [`TextBubbleDefaultStyle`] - fonts and text colors
//! - `photo`: [`PhotoBubbleDefaultStyle`] - aspect-ratio buckets, placeholder, overlay
//! - `config`: [`StyleConfig`] - deserializable style parameters

pub mod base;
pub mod config;
pub mod photo;
pub mod text;

pub use base::{BaseBubbleDefaultStyle, BubbleMasks};
pub use config::{PhotoSizes, StyleConfig};
pub use photo::PhotoBubbleDefaultStyle;
pub use text::TextBubbleDefaultStyle;

use crate::model::geometry::{canonical_bits, same_float};
use crate::model::{EdgeInsets, MessageViewModel, PhotoMessageViewModel, Size};
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xffffff);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x000000);

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
            a: 0xff,
        }
    }

    /// Same color with the given alpha fraction.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
    /// Bold weight.
    Bold,
}

/// Identifies a font for measurement. Two equal descriptors measure identically.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Family name; interpretation is up to the text engine.
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
}

impl FontDescriptor {
    /// Regular-weight font of the system family.
    pub fn system(size: f32) -> Self {
        Self {
            family: "system".to_string(),
            size,
            weight: FontWeight::Regular,
        }
    }

    /// Builder-style weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Default line height for this font: 1.2 × point size.
    pub fn line_height(&self) -> f32 {
        self.size * 6.0 / 5.0
    }
}

impl PartialEq for FontDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && same_float(self.size, other.size)
            && self.weight == other.weight
    }
}

impl Eq for FontDescriptor {}

impl Hash for FontDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        canonical_bits(self.size).hash(state);
        self.weight.hash(state);
    }
}

/// Reference to an image asset by name, with its point size.
///
/// Decoding the asset is the host's job; the layout core only needs the size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ImageRef {
    /// Asset name.
    pub name: String,
    /// Point size of the image.
    pub size: Size,
}

impl ImageRef {
    /// Create an image reference.
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Sender name text with its attributes, shown above the bubble content.
#[derive(Debug, Clone, PartialEq)]
pub struct SenderNameText {
    /// Name to display.
    pub text: String,
    /// Font used to draw it.
    pub font: FontDescriptor,
    /// Color used to draw it.
    pub color: Color,
}

/// Style contract shared by every bubble kind.
pub trait BaseBubbleStyle {
    /// Insets between the bubble edge and its stacked regions.
    fn content_insets(&self, is_incoming: bool, is_selected: bool) -> EdgeInsets;

    /// Background fill of the bubble.
    fn background_color(&self, is_incoming: bool, is_selected: bool) -> Color;

    /// Mask image giving the bubble its shape.
    fn masking_image(&self, is_incoming: bool, is_showing_tail: bool) -> &ImageRef;

    /// Optional border image drawn above the bubble.
    fn border_image(&self, is_incoming: bool) -> Option<&ImageRef>;

    /// Sender name decoration, or `None` when it should not be shown.
    fn sender_name(&self, message: &MessageViewModel) -> Option<SenderNameText>;

    /// Width of the directional tail in points.
    fn tail_width(&self) -> f32;
}

/// Style contract for text bubbles.
pub trait TextBubbleStyle: BaseBubbleStyle {
    /// Font of the message body.
    fn font(&self, is_selected: bool) -> FontDescriptor;

    /// Color of the message body.
    fn text_color(&self, is_incoming: bool, is_selected: bool) -> Color;
}

/// Style contract for photo bubbles.
pub trait PhotoBubbleStyle: BaseBubbleStyle {
    /// Display size bucket for a photo with the given aspect ratio.
    fn bubble_size_bucket(&self, aspect_ratio: f32) -> Size;

    /// Icon centered in the bubble while loading or after a failure.
    fn placeholder_icon(&self) -> &ImageRef;

    /// Tint of the placeholder icon.
    fn placeholder_icon_tint(&self, is_incoming: bool) -> Color;

    /// Fill shown in place of a missing image.
    fn placeholder_background(&self, is_incoming: bool) -> Color;

    /// Color of the circular progress indicator.
    fn progress_indicator_color(&self, is_incoming: bool) -> Color;

    /// Overlay drawn above a loaded image, if any.
    fn overlay_color(&self, view_model: &PhotoMessageViewModel) -> Option<Color>;
}
