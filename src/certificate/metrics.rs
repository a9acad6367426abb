//! Glyph widths for the standard Helvetica faces.
//!
//! Text is measured as it is drawn: each character is first mapped to its
//! WinAnsiEncoding byte by [`win_ansi_byte`]. Widths are in 1/1000 em for
//! printable ASCII (0x20..=0x7E); Latin-1 letters above that share one
//! fallback width.

use super::layout::FontWeight;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// WinAnsiEncoding byte drawn for `ch`. Latin-1 characters map directly;
/// anything the standard fonts cannot show becomes `?`.
pub fn win_ansi_byte(ch: char) -> u8 {
    match u32::from(ch) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
        _ => b'?',
    }
}

fn glyph_width(byte: u8, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    if (0x20..=0x7E).contains(&byte) {
        table[usize::from(byte - 0x20)]
    } else {
        FALLBACK_WIDTH
    }
}

/// Advance width of `text` in points at `size_pt`.
pub fn text_width_pt(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| u32::from(glyph_width(win_ansi_byte(ch), weight)))
        .sum();
    units as f32 * size_pt / 1000.0
}
