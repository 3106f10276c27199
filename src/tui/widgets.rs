//! Text-assembly helpers for board surfaces.
//!
//! Placards are built as plain line vectors so they can be asserted on in
//! tests without a backend; the render layer styles and positions them.

#![allow(missing_docs)]

use super::layout::{PLACARD_HEIGHT, PLACARD_WIDTH};

/// Pin glyph drawn at the top edge of every placard.
pub const PIN: &str = "📌";

/// Truncate or pad a line to exactly `width` display columns.
///
/// Width is counted in `chars`; the art and labels used here are single-width.
#[must_use]
pub fn fit_line(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    if len < width {
        out.extend(std::iter::repeat_n(' ', width - len));
    }
    out
}

/// Center `text` within `width` columns.
#[must_use]
pub fn center_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return fit_line(text, width);
    }
    let left = (width - len) / 2;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width - left - len));
    out
}

/// Assemble one placard as a list of rows: pin row, framed art block,
/// framed label row.
#[must_use]
pub fn placard_lines(art: &[String], label: &str) -> Vec<String> {
    let inner = PLACARD_WIDTH as usize - 2;
    let art_rows = PLACARD_HEIGHT as usize - 4; // pin + top/bottom frame + label

    let mut lines = Vec::with_capacity(PLACARD_HEIGHT as usize);
    lines.push(center_line(PIN, PLACARD_WIDTH as usize));
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    for row in 0..art_rows {
        let body = art.get(row).map_or("", String::as_str);
        lines.push(format!("│{}│", center_line(body, inner)));
    }
    lines.push(format!("│{}│", center_line(label, inner)));
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

/// Horizontal offset for a placard row, faking the photo's tilt.
///
/// A positive rotation leans the card right going down; negative leans left.
/// The offset is at most one column per card to keep hit-testing honest.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn skew_offset(rotation_deg: f32, row: u16, height: u16) -> u16 {
    if rotation_deg == 0.0 || height < 2 {
        return 0;
    }
    let midpoint = f32::from(height - 1) / 2.0;
    let lean = (f32::from(row) - midpoint) * rotation_deg.signum();
    if lean > 0.0 { 1 } else { 0 }
}
