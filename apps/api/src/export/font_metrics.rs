//! Static font-metric tables for the two PDF export fonts.
#![allow(dead_code)]
//!
//! Widths are standard Helvetica / Helvetica-Bold AFM advance widths in em
//! units (AFM value ÷ 1000). The export renders with the PDF built-in fonts,
//! so these tables are exact for ASCII; non-ASCII characters fall back to an
//! average width. All tables cover ASCII 0x20..=0x7E (95 printable
//! characters). Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// 1 PostScript point in millimeters (25.4 / 72).
pub const PT_TO_MM: f32 = 0.352_778;

// ────────────────────────────────────────────────────────────────────────────
// Font styles
// ────────────────────────────────────────────────────────────────────────────

/// The two faces used by the question export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Bold,
}

// ────────────────────────────────────────────────────────────────────────────
// Page setup
// ────────────────────────────────────────────────────────────────────────────

/// Fixed page geometry for the exported document, in millimeters.
///
/// A4 portrait with 20 mm margins, a 7 mm baseline-to-baseline line height
/// and a 170 mm text column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Top/left margin; also the bottom reserve used by the page-break check.
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub max_text_width_mm: f32,
}

impl PageSetup {
    /// The lowest cursor position content may extend to before a block must
    /// move to the next page.
    pub fn content_limit_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }

    /// Vertical space available to a single block starting at the top margin.
    pub fn usable_height_mm(&self) -> f32 {
        self.content_limit_mm() - self.margin_mm
    }
}

/// Default export geometry: A4 portrait, 20 mm margins, 7 mm lines, 170 mm
/// text width.
pub fn default_page_setup() -> PageSetup {
    PageSetup {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_mm: 20.0,
        line_height_mm: 7.0,
        max_text_width_mm: 170.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = advance width of ASCII character `(i + 32)` in em units,
/// covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub style: FontStyle,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures the rendered width of a string in millimeters at the given
    /// font size.
    pub fn width_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }

    /// Width of a single inter-word space in millimeters at the given size.
    pub fn space_width_mm(&self, font_size_pt: f32) -> f32 {
        self.space_width * font_size_pt * PT_TO_MM
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica regular (AFM advance widths ÷ 1000).
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    style: FontStyle::Regular,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

/// Helvetica bold (AFM advance widths ÷ 1000).
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    style: FontStyle::Bold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.536,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn get_metrics(style: FontStyle) -> &'static FontMetricTable {
    match style {
        FontStyle::Regular => &HELVETICA_TABLE,
        FontStyle::Bold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontStyle::Regular);
        let width = metrics.measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontStyle::Regular);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontStyle::Regular);
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "Evaluation Criteria:";
        let regular = get_metrics(FontStyle::Regular).measure_str(text);
        let bold = get_metrics(FontStyle::Bold).measure_str(text);
        assert!(bold > regular, "bold should measure wider than regular");
    }

    #[test]
    fn test_width_mm_scales_with_font_size() {
        let metrics = get_metrics(FontStyle::Regular);
        let at_10 = metrics.width_mm("interview", 10.0);
        let at_16 = metrics.width_mm("interview", 16.0);
        assert!((at_16 / at_10 - 1.6).abs() < 1e-3);
    }

    #[test]
    fn test_default_page_setup_sanity() {
        let setup = default_page_setup();
        assert_eq!(setup.page_width_mm, 210.0);
        assert_eq!(setup.page_height_mm, 297.0);
        assert_eq!(setup.content_limit_mm(), 277.0);
        assert_eq!(setup.usable_height_mm(), 257.0);
    }
}
