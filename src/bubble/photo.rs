//! Photo bubble content and its presentation state.
//!
//! Sizing a photo bubble never looks at the image itself: the displayed size
//! is one of the style's aspect-ratio buckets. Presentation covers what the
//! hosting view shows on top of that frame while a transfer is running or
//! after it failed.

use super::BubbleContent;
use crate::layout::{PhotoLayoutContext, PhotoLayoutEngine, PhotoLayoutModel};
use crate::model::{MessageViewModel, PhotoMessageViewModel, Size, TransferStatus};
use crate::style::{Color, ImageRef, PhotoBubbleStyle};
use std::sync::Arc;

/// Stage of the circular progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Transfer started, nothing received yet.
    Starting,
    /// Partially transferred.
    InProgress,
    /// Everything received.
    Completed,
}

impl ProgressStatus {
    /// Stage for a progress fraction.
    pub fn from_progress(progress: f32) -> Self {
        if progress <= 0.0 {
            Self::Starting
        } else if progress >= 1.0 {
            Self::Completed
        } else {
            Self::InProgress
        }
    }
}

/// Progress indicator centered on the photo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressIndicator {
    /// Current stage.
    pub status: ProgressStatus,
    /// Fraction in `[0, 1]`.
    pub progress: f32,
    /// Stroke color.
    pub line_color: Color,
    /// Stroke width in points.
    pub line_width: f32,
}

/// Placeholder icon centered on the photo.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderIcon {
    /// Icon image.
    pub image: ImageRef,
    /// Tint applied to the icon.
    pub tint: Color,
}

/// What fills the photo frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoBackground {
    /// The transferred image.
    Image(ImageRef),
    /// A flat placeholder fill until the image arrives.
    Placeholder(Color),
}

/// Everything a hosting view draws inside a photo bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoPresentation {
    /// Image or placeholder fill.
    pub background: PhotoBackground,
    /// Shown only while transferring.
    pub progress: Option<ProgressIndicator>,
    /// Shown only when there is no image and the transfer failed.
    pub placeholder_icon: Option<PlaceholderIcon>,
    /// Dimming overlay over the image.
    pub overlay: Option<Color>,
}

const PROGRESS_LINE_WIDTH: f32 = 1.0;

/// Photo content of a photo bubble.
pub struct PhotoBubbleContent<S: ?Sized> {
    view_model: PhotoMessageViewModel,
    style: Arc<S>,
    engine: Arc<PhotoLayoutEngine>,
}

impl<S: PhotoBubbleStyle + ?Sized> PhotoBubbleContent<S> {
    /// Create content for `view_model`.
    pub fn new(
        view_model: PhotoMessageViewModel,
        style: Arc<S>,
        engine: Arc<PhotoLayoutEngine>,
    ) -> Self {
        Self {
            view_model,
            style,
            engine,
        }
    }

    /// The message being shown.
    pub fn view_model(&self) -> &PhotoMessageViewModel {
        &self.view_model
    }

    /// Layout inputs for `max_width`.
    pub fn context(&self, max_width: f32) -> PhotoLayoutContext {
        PhotoLayoutContext {
            photo_size: self
                .style
                .bubble_size_bucket(self.view_model.image_size.aspect_ratio()),
            placeholder_size: self.style.placeholder_icon().size,
            tail_width: self.style.tail_width(),
            is_incoming: self.view_model.message.is_incoming,
            preferred_max_layout_width: max_width,
        }
    }

    /// Cached layout for `max_width`.
    pub fn layout(&self, max_width: f32) -> Arc<PhotoLayoutModel> {
        self.engine.layout(self.context(max_width))
    }

    /// Resolve what to draw for the current transfer state.
    pub fn presentation(&self) -> PhotoPresentation {
        let vm = &self.view_model;
        let is_incoming = vm.message.is_incoming;

        let progress = (vm.transfer_status == TransferStatus::Transferring).then(|| {
            let progress = vm.transfer_progress.get();
            ProgressIndicator {
                status: ProgressStatus::from_progress(progress),
                progress,
                line_color: self.style.progress_indicator_color(is_incoming),
                line_width: PROGRESS_LINE_WIDTH,
            }
        });

        let (background, shows_icon) = match &vm.image {
            Some(image) => (PhotoBackground::Image(image.clone()), false),
            None => (
                PhotoBackground::Placeholder(self.style.placeholder_background(is_incoming)),
                vm.transfer_status == TransferStatus::Failed,
            ),
        };
        let placeholder_icon = shows_icon.then(|| PlaceholderIcon {
            image: self.style.placeholder_icon().clone(),
            tint: self.style.placeholder_icon_tint(is_incoming),
        });

        PhotoPresentation {
            background,
            progress,
            placeholder_icon,
            overlay: self.style.overlay_color(vm),
        }
    }
}

impl<S: PhotoBubbleStyle + ?Sized> BubbleContent for PhotoBubbleContent<S> {
    type Style = S;

    fn message(&self) -> &MessageViewModel {
        &self.view_model.message
    }

    fn style(&self) -> &S {
        &self.style
    }

    fn content_size(&self, max_width: f32, _is_selected: bool) -> Size {
        self.layout(max_width).size
    }
}
