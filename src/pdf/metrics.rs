//! Width tables and text encoding for the two standard fonts the renderer
//! uses (Helvetica and Helvetica-Bold).
//!
//! Widths are the Adobe AFM values in 1/1000 of the font size, covering the
//! printable ASCII range plus the euro sign. Right alignment, word wrapping,
//! and column fitting all go through [`text_width_mm`].

/// One of the two base-14 fonts registered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FontId {
    /// Helvetica, resource name /F1.
    Regular,
    /// Helvetica-Bold, resource name /F2.
    Bold,
}

impl FontId {
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            FontId::Regular => "F1",
            FontId::Bold => "F2",
        }
    }
}

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Helvetica AFM widths for chars 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold AFM widths for chars 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(font: FontId, ch: char) -> u16 {
    let table = match font {
        FontId::Regular => &HELVETICA,
        FontId::Bold => &HELVETICA_BOLD,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        // Euro sign (WinAnsi 0x80) reuses the digit width in both weights.
        '\u{20AC}' => 556,
        _ => table['?' as usize - 0x20],
    }
}

/// Width of `text` in millimeters at the given font size in points.
pub(crate) fn text_width_mm(text: &str, font: FontId, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|ch| char_width(font, ch) as u32).sum();
    (units as f64 / 1000.0) * size_pt * MM_PER_PT
}

/// Encode text as WinAnsi bytes for a Tj operand.
///
/// ASCII passes through, the euro sign maps to 0x80, anything else falls
/// back to '?'.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{20AC}' => 0x80,
            _ => b'?',
        })
        .collect()
}

/// Greedy word wrap of `text` into lines no wider than `max_mm`.
///
/// A single word wider than the limit gets a line of its own rather than
/// being split mid-word; the sample catalog never needs that anyway.
pub(crate) fn wrap(text: &str, font: FontId, size_pt: f64, max_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, font, size_pt) <= max_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
