//! Pagination and text-flow for the question export.
#![allow(dead_code)]
//!
//! A [`DocumentBuilder`] owns the vertical cursor and the growing page list;
//! the output is a pure [`LayoutDocument`] of positioned, styled lines that
//! the PDF writer renders verbatim. Layout is deterministic: no clock, no
//! randomness, no ambient state outside the builder.
//!
//! # Page-break policy
//! A block of wrapped lines is placed atomically. Before rendering, if
//! `cursor + lines × line_height > page_height − bottom_margin`, a new page
//! is started and the cursor resets to the top margin. The comparison is
//! strictly `>`: a block ending exactly at the limit stays on its page.
//! A block taller than one full page still renders atomically and runs past
//! the bottom margin; that overflow is detected and logged, not split.

use tracing::warn;

use crate::export::font_metrics::{get_metrics, FontMetricTable, FontStyle, PageSetup};
use crate::export::theme::Rgb;

// ────────────────────────────────────────────────────────────────────────────
// Layout model
// ────────────────────────────────────────────────────────────────────────────

/// One rendered line with its position (top-down mm, baseline at `y_mm`)
/// and style.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub style: FontStyle,
    pub color: Rgb,
}

/// All lines placed on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    pub texts: Vec<PlacedText>,
}

/// The finished, renderer-agnostic document.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub setup: PageSetup,
    pub pages: Vec<LayoutPage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Word wrap
// ────────────────────────────────────────────────────────────────────────────

/// Greedy word-wrap: packs as many whole words as fit `max_width_mm` per
/// line before breaking. Whitespace runs collapse to single spaces. A word
/// wider than the line gets a line of its own (and overflows horizontally).
/// Empty or whitespace-only input yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![];
    }

    let space_w = metrics.space_width_mm(font_size_pt);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.width_mm(word, font_size_pt);

        if !current.is_empty() && current_width + space_w + word_w > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_width += space_w;
            }
            current.push_str(word);
            current_width += word_w;
        }
    }
    lines.push(current);
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Document builder
// ────────────────────────────────────────────────────────────────────────────

/// Builds a [`LayoutDocument`] one text block at a time.
///
/// The cursor tracks the baseline of the next line in top-down millimeters.
/// Color is a per-call argument with a black default, so a colored block can
/// never leak its color into the following one.
pub struct DocumentBuilder {
    setup: PageSetup,
    pages: Vec<LayoutPage>,
    cursor_mm: f32,
}

impl DocumentBuilder {
    pub fn new(setup: PageSetup) -> Self {
        let cursor_mm = setup.margin_mm;
        Self {
            setup,
            pages: vec![LayoutPage::default()],
            cursor_mm,
        }
    }

    /// Wraps `text` and places the resulting block at the current cursor,
    /// breaking to a new page first if the whole block would overflow.
    /// Advances the cursor by one line height per rendered line.
    pub fn add_text(&mut self, text: &str, font_size_pt: f32, style: FontStyle, color: Rgb) {
        let metrics = get_metrics(style);
        let lines = wrap_text(text, metrics, font_size_pt, self.setup.max_text_width_mm);
        if lines.is_empty() {
            return;
        }

        let block_height = lines.len() as f32 * self.setup.line_height_mm;
        if self.cursor_mm + block_height > self.setup.content_limit_mm() {
            self.start_page();
        }
        if block_height > self.setup.usable_height_mm() {
            warn!(
                lines = lines.len(),
                "text block taller than one page; it will render past the bottom margin: {:.40}…",
                text
            );
        }

        for line in lines {
            let page = self.pages.last_mut().expect("builder always has a page");
            page.texts.push(PlacedText {
                text: line,
                x_mm: self.setup.margin_mm,
                y_mm: self.cursor_mm,
                font_size_pt,
                style,
                color,
            });
            self.cursor_mm += self.setup.line_height_mm;
        }
    }

    /// Moves the cursor down without placing text and without a page-break
    /// check, mirroring the source document's inter-section spacing.
    pub fn advance(&mut self, dy_mm: f32) {
        self.cursor_mm += dy_mm;
    }

    pub fn cursor_mm(&self) -> f32 {
        self.cursor_mm
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn finish(self) -> LayoutDocument {
        LayoutDocument {
            setup: self.setup,
            pages: self.pages,
        }
    }

    fn start_page(&mut self) {
        self.pages.push(LayoutPage::default());
        self.cursor_mm = self.setup.margin_mm;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
