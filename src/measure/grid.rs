//! Deterministic grid text engine.
//!
//! Every character advances by its display width in columns (via
//! `unicode-width`) times a fixed fraction of the font size, and every line
//! is `font.line_height()` tall. Wrapping is greedy on whitespace; words wider
//! than a line are broken between characters. Hard line breaks (`\n`) always
//! start a new line.
//!
//! Real products plug a platform text engine in through [`TextMeasurer`];
//! this engine backs the CLI and tests, where reproducibility matters more
//! than typographic fidelity.

use super::TextMeasurer;
use crate::model::Size;
use crate::style::FontDescriptor;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fixed-advance text engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTextEngine {
    /// Width of one column as a fraction of the font size.
    advance_ratio: f32,
}

impl GridTextEngine {
    /// Default column advance: half the font size.
    pub const DEFAULT_ADVANCE_RATIO: f32 = 0.5;

    /// Create an engine with the given column advance ratio.
    ///
    /// Non-finite or negative ratios fall back to the default.
    pub fn new(advance_ratio: f32) -> Self {
        let advance_ratio = if advance_ratio.is_finite() && advance_ratio >= 0.0 {
            advance_ratio
        } else {
            Self::DEFAULT_ADVANCE_RATIO
        };
        Self { advance_ratio }
    }

    fn column_width(&self, font: &FontDescriptor) -> f32 {
        font.size * self.advance_ratio
    }

    /// Widths of the lines `paragraph` wraps into.
    fn wrap_paragraph(&self, paragraph: &str, column: f32, max_width: f32, lines: &mut Vec<f32>) {
        let space = column;
        let mut current = 0.0f32;
        let mut has_content = false;

        for word in paragraph.split_whitespace() {
            let word_width = word.width() as f32 * column;

            if has_content && current + space + word_width <= max_width {
                current += space + word_width;
                continue;
            }

            if has_content {
                lines.push(current);
                current = 0.0;
            }

            if word_width <= max_width {
                current = word_width;
            } else {
                // Break the word between characters.
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0) as f32 * column;
                    if current > 0.0 && current + ch_width > max_width {
                        lines.push(current);
                        current = 0.0;
                    }
                    current += ch_width;
                }
            }
            has_content = true;
        }

        lines.push(current);
    }
}

impl Default for GridTextEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ADVANCE_RATIO)
    }
}

impl TextMeasurer for GridTextEngine {
    fn measure(&self, text: &str, font: &FontDescriptor, max_width: f32) -> Size {
        let max_width = if max_width.is_nan() {
            0.0
        } else {
            max_width.max(0.0)
        };
        let column = self.column_width(font);

        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            self.wrap_paragraph(paragraph, column, max_width, &mut lines);
        }

        let width = lines.iter().copied().fold(0.0f32, f32::max);
        let height = lines.len() as f32 * font.line_height();
        Size::new(width, height)
    }
}
