//! Deserializable style parameters.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```toml
//! [style]
//! tail_width = 6.0
//!
//! [style.text]
//! font_size = 17.0
//!
//! [style.photo.sizes]
//! aspect_ratio_min = 0.9
//! aspect_ratio_max = 1.1
//! landscape = { width = 210.0, height = 136.0 }
//! ```

use crate::model::{EdgeInsets, Size};
use serde::Deserialize;

/// Root of the `[style]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Width of the bubble tail.
    pub tail_width: f32,
    /// Hide sender names even when the view-model carries one.
    pub hide_sender_names: bool,
    /// Point size of the sender name.
    pub sender_name_font_size: f32,
    /// Text bubble parameters.
    pub text: TextStyleConfig,
    /// Photo bubble parameters.
    pub photo: PhotoStyleConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            tail_width: 6.0,
            hide_sender_names: false,
            sender_name_font_size: 11.0,
            text: TextStyleConfig::default(),
            photo: PhotoStyleConfig::default(),
        }
    }
}

/// `[style.text]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextStyleConfig {
    /// Body font size.
    pub font_size: f32,
    /// Insets of incoming bubbles.
    pub incoming_insets: EdgeInsets,
    /// Insets of outgoing bubbles.
    pub outgoing_insets: EdgeInsets,
}

impl Default for TextStyleConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            incoming_insets: EdgeInsets::new(10.0, 19.0, 10.0, 15.0),
            outgoing_insets: EdgeInsets::new(10.0, 15.0, 10.0, 19.0),
        }
    }
}

/// `[style.photo]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotoStyleConfig {
    /// Insets of incoming bubbles.
    pub incoming_insets: EdgeInsets,
    /// Insets of outgoing bubbles.
    pub outgoing_insets: EdgeInsets,
    /// Size of the placeholder icon.
    pub placeholder_icon_size: Size,
    /// Aspect-ratio buckets.
    pub sizes: PhotoSizes,
}

impl Default for PhotoStyleConfig {
    fn default() -> Self {
        Self {
            incoming_insets: EdgeInsets::new(10.0, 19.0, 10.0, 15.0),
            outgoing_insets: EdgeInsets::new(10.0, 15.0, 10.0, 10.0),
            placeholder_icon_size: Size::new(32.0, 32.0),
            sizes: PhotoSizes::default(),
        }
    }
}

/// Discrete photo display sizes selected by aspect ratio.
///
/// A ratio inside the closed interval `[aspect_ratio_min, aspect_ratio_max]`
/// selects `square`, below it `portrait`, above it `landscape`. A ratio of 0
/// (unknown source size) selects `square`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhotoSizes {
    /// Lower bound of the square interval (inclusive).
    pub aspect_ratio_min: f32,
    /// Upper bound of the square interval (inclusive).
    pub aspect_ratio_max: f32,
    /// Size for wide photos.
    pub landscape: Size,
    /// Size for tall photos.
    pub portrait: Size,
    /// Size for square-ish photos.
    pub square: Size,
}

impl PhotoSizes {
    /// Pick the bucket for `aspect_ratio`.
    pub fn bucket(&self, aspect_ratio: f32) -> Size {
        if aspect_ratio == 0.0
            || (self.aspect_ratio_min..=self.aspect_ratio_max).contains(&aspect_ratio)
        {
            self.square
        } else if aspect_ratio < self.aspect_ratio_min {
            self.portrait
        } else {
            self.landscape
        }
    }
}

impl Default for PhotoSizes {
    fn default() -> Self {
        Self {
            aspect_ratio_min: 0.90,
            aspect_ratio_max: 1.10,
            landscape: Size::new(210.0, 136.0),
            portrait: Size::new(136.0, 210.0),
            square: Size::new(210.0, 210.0),
        }
    }
}
