//! Domain model types (pure).
//!
//! Geometry values, message view-models and the crate's error taxonomy.

pub mod error;
pub mod geometry;
pub mod view_model;

// Re-export for convenience
pub use geometry::{DisplayScale, EdgeInsets, Point, Rect, Size};
pub use view_model::{
    ChatItem, DecorationAttributes, InvalidProgress, MessageStatus, MessageViewModel,
    PhotoMessageViewModel, TextMessageViewModel, TransferProgress, TransferStatus,
};
