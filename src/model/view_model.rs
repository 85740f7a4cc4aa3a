//! Read-only message view-model snapshots consumed by the sizing core.
//!
//! These are the inputs a presenter hands to a bubble. They are plain data
//! and deserialize from JSON so that a sizing pass can be driven from a file.

use super::geometry::Size;
use crate::style::ImageRef;
use serde::Deserialize;

/// Delivery status of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    /// Delivered.
    #[default]
    Success,
    /// Delivery failed.
    Failed,
    /// Still being sent.
    Sending,
}

/// Per-message decoration flags decided by the list, not the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct DecorationAttributes {
    /// Whether the bubble draws its directional tail.
    pub is_showing_tail: bool,
}

impl Default for DecorationAttributes {
    fn default() -> Self {
        Self {
            is_showing_tail: true,
        }
    }
}

/// Fields shared by every message kind.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageViewModel {
    /// True when the message was received rather than sent.
    #[serde(default)]
    pub is_incoming: bool,
    /// Display name of the sender, if the list shows one.
    #[serde(default)]
    pub sender_name: Option<String>,
    /// Delivery status.
    #[serde(default)]
    pub status: MessageStatus,
    /// Tail and other list-driven decorations.
    #[serde(default)]
    pub decoration: DecorationAttributes,
}

impl MessageViewModel {
    /// Incoming message with default decorations.
    pub fn incoming() -> Self {
        Self {
            is_incoming: true,
            ..Self::default()
        }
    }

    /// Outgoing message with default decorations.
    pub fn outgoing() -> Self {
        Self::default()
    }

    /// Builder-style sender name.
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }
}

/// A text message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextMessageViewModel {
    /// Shared message fields.
    #[serde(flatten)]
    pub message: MessageViewModel,
    /// Message body.
    pub text: String,
}

impl TextMessageViewModel {
    /// Create a text view-model.
    pub fn new(message: MessageViewModel, text: impl Into<String>) -> Self {
        Self {
            message,
            text: text.into(),
        }
    }
}

/// Photo transfer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Upload or download in progress.
    Transferring,
    /// Transfer finished.
    Success,
    /// Transfer failed.
    Failed,
}

/// Error returned when a transfer progress is outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("transfer progress must be within [0, 1] (got {0})")]
pub struct InvalidProgress(pub f32);

/// Transfer progress fraction. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(try_from = "f32")]
pub struct TransferProgress(f32);

impl TransferProgress {
    /// Not started.
    pub const ZERO: Self = Self(0.0);

    /// Complete.
    pub const COMPLETE: Self = Self(1.0);

    /// Smart constructor that rejects values outside `[0, 1]` and NaN.
    pub fn new(value: f32) -> Result<Self, InvalidProgress> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidProgress(value))
        }
    }

    /// Raw fraction.
    pub fn get(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for TransferProgress {
    type Error = InvalidProgress;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A photo message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoMessageViewModel {
    /// Shared message fields.
    #[serde(flatten)]
    pub message: MessageViewModel,
    /// Pixel size of the source image, `(0, 0)` when unknown.
    #[serde(default)]
    pub image_size: Size,
    /// Loaded image, if any.
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Transfer state.
    #[serde(default)]
    pub transfer_status: TransferStatus,
    /// Transfer progress.
    #[serde(default)]
    pub transfer_progress: TransferProgress,
}

impl PhotoMessageViewModel {
    /// Create a photo view-model with no image loaded and no transfer.
    pub fn new(message: MessageViewModel, image_size: Size) -> Self {
        Self {
            message,
            image_size,
            image: None,
            transfer_status: TransferStatus::Idle,
            transfer_progress: TransferProgress::ZERO,
        }
    }

    /// Builder-style loaded image.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Builder-style transfer state.
    pub fn with_transfer(mut self, status: TransferStatus, progress: TransferProgress) -> Self {
        self.transfer_status = status;
        self.transfer_progress = progress;
        self
    }
}

/// One item of a chat list, tagged by kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatItem {
    /// A text bubble.
    Text(TextMessageViewModel),
    /// A photo bubble.
    Photo(PhotoMessageViewModel),
}

impl ChatItem {
    /// Shared message fields.
    pub fn message(&self) -> &MessageViewModel {
        match self {
            ChatItem::Text(text) => &text.message,
            ChatItem::Photo(photo) => &photo.message,
        }
    }

    /// Short kind name, used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatItem::Text(_) => "text",
            ChatItem::Photo(_) => "photo",
        }
    }

    /// Whether this kind may be measured off the primary thread.
    ///
    /// Both kinds measure against the primary rendering engine.
    pub fn can_size_in_background(&self) -> bool {
        match self {
            ChatItem::Text(_) => false,
            ChatItem::Photo(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_accepts_bounds() {
        assert_eq!(TransferProgress::new(0.0).unwrap(), TransferProgress::ZERO);
        assert_eq!(TransferProgress::new(1.0).unwrap(), TransferProgress::COMPLETE);
        assert_eq!(TransferProgress::new(0.42).unwrap().get(), 0.42);
    }

    #[test]
    fn progress_rejects_out_of_range_and_nan() {
        assert_eq!(TransferProgress::new(1.5), Err(InvalidProgress(1.5)));
        assert_eq!(TransferProgress::new(-0.1), Err(InvalidProgress(-0.1)));
        assert!(TransferProgress::new(f32::NAN).is_err());
    }

    #[test]
    fn decoration_defaults_to_showing_tail() {
        assert!(DecorationAttributes::default().is_showing_tail);
    }

    #[test]
    fn chat_item_deserializes_text() {
        let json = r#"{"type":"text","is_incoming":true,"sender_name":"Ana","text":"Hello"}"#;
        let item: ChatItem = serde_json::from_str(json).expect("valid text item");
        match item {
            ChatItem::Text(text) => {
                assert_eq!(text.text, "Hello");
                assert!(text.message.is_incoming);
                assert_eq!(text.message.sender_name.as_deref(), Some("Ana"));
                assert!(text.message.decoration.is_showing_tail);
            }
            other => panic!("expected text item, got {:?}", other),
        }
    }

    #[test]
    fn chat_item_deserializes_photo() {
        let json = r#"{"type":"photo","image_size":{"width":800,"height":600},
            "transfer_status":"transferring","transfer_progress":0.5}"#;
        let item: ChatItem = serde_json::from_str(json).expect("valid photo item");
        match item {
            ChatItem::Photo(photo) => {
                assert_eq!(photo.image_size, Size::new(800.0, 600.0));
                assert_eq!(photo.transfer_status, TransferStatus::Transferring);
                assert_eq!(photo.transfer_progress.get(), 0.5);
                assert!(!photo.message.is_incoming);
            }
            other => panic!("expected photo item, got {:?}", other),
        }
    }

    #[test]
    fn chat_item_rejects_invalid_progress() {
        let json = r#"{"type":"photo","transfer_progress":2.0}"#;
        assert!(serde_json::from_str::<ChatItem>(json).is_err());
    }

    #[test]
    fn kind_names() {
        let text = ChatItem::Text(TextMessageViewModel::new(MessageViewModel::incoming(), "x"));
        let photo = ChatItem::Photo(PhotoMessageViewModel::new(
            MessageViewModel::outgoing(),
            Size::ZERO,
        ));
        assert_eq!(text.kind(), "text");
        assert_eq!(photo.kind(), "photo");
        assert!(!text.can_size_in_background());
    }
}
