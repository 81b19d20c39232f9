//! Static font-metric tables for the two PDF base fonts used by the exporter.
//!
//! Character widths are in em units (AFM advance widths / 1000), so a string's printed
//! width is `measure_str(s) × font size`. Tables cover ASCII 0x20..=0x7E
//! (95 printable characters). Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Typeface enum
// ────────────────────────────────────────────────────────────────────────────

/// The standard-14 faces the document is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Typeface {
    /// Body text.
    Helvetica,
    /// Title and category headers.
    HelveticaBold,
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry and type sizes of the exported document. All lengths in millimetres.
///
/// The cursor model is top-down: `y` grows from the top edge and marks the text
/// baseline of the next line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub line_height_mm: f32,
    /// Cursor position of the document title on page 1.
    pub title_top_mm: f32,
    pub title_size_pt: f32,
    pub body_size_pt: f32,
    /// Left offset of context / criteria / follow-up lines.
    pub indent_mm: f32,
}

impl PageConfig {
    /// Width available to a line starting at the left margin.
    pub fn printable_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_mm * 2.0
    }

    /// A line may start at `y` only if `y + line_height` stays within this bound.
    pub fn bottom_limit_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }
}

/// A4 portrait, 10 mm margins, 8 mm lines, 14 pt title, 11 pt body.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_mm: 10.0,
        line_height_mm: 8.0,
        title_top_mm: 20.0,
        title_size_pt: 14.0,
        body_size_pt: 11.0,
        indent_mm: 4.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a typeface.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub face: Typeface,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    pub fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Printed width in millimetres at `size_pt`.
    pub fn width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * MM_PER_PT
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: Typeface::Helvetica,
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
    average_char_width: 0.556,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: Typeface::HelveticaBold,
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
    average_char_width: 0.611,
    space_width: 0.278,
};

/// Returns the static metric table for the given face.
pub fn get_metrics(face: Typeface) -> &'static FontMetricTable {
    match face {
        Typeface::Helvetica => &HELVETICA_TABLE,
        Typeface::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(Typeface::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let m = get_metrics(Typeface::Helvetica);
        assert!((m.measure_str(" ") - m.space_width).abs() < f32::EPSILON);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let m = get_metrics(Typeface::Helvetica);
        // "Hi" = H(0.722) + i(0.222)
        assert!((m.measure_str("Hi") - 0.944).abs() < 1e-4);
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let m = get_metrics(Typeface::Helvetica);
        assert!((m.measure_str("é") - m.average_char_width).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bold_is_never_narrower_for_letters() {
        let regular = get_metrics(Typeface::Helvetica);
        let bold = get_metrics(Typeface::HelveticaBold);
        let sample = "Technical Questions";
        assert!(bold.measure_str(sample) > regular.measure_str(sample));
    }

    #[test]
    fn test_width_mm_scales_with_size() {
        let m = get_metrics(Typeface::Helvetica);
        let at_11 = m.width_mm("interview", 11.0);
        let at_22 = m.width_mm("interview", 22.0);
        assert!((at_22 - 2.0 * at_11).abs() < 1e-3);
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = default_page_config();
        assert!((config.printable_width_mm() - 190.0).abs() < f32::EPSILON);
        assert!((config.bottom_limit_mm() - 287.0).abs() < f32::EPSILON);
        assert!(config.title_top_mm > config.margin_mm);
    }
}
