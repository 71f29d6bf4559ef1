//! lopdf drawing helpers
//!
//! Thin wrappers that append content-stream operations to an explicit
//! builder vec. Input coordinates use the layout convention (origin
//! top-left, y down); conversion to PDF user space (y up) happens here
//! and nowhere else.
//!
//! Text metrics: Helvetica widths are not embedded, so measurement
//! uses a conservative average glyph width. The bands are fixed-height
//! and the wrapped line counts bounded, so stability matters more than
//! typographic exactness.

use crate::layout::{Rect, PAGE_H};
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f64 = 0.55;

#[derive(Debug, Clone, Copy)]
pub struct Color(pub f64, pub f64, pub f64);

pub const BLACK: Color = Color(0.0, 0.0, 0.0);
pub const WHITE: Color = Color(1.0, 1.0, 1.0);
/// Light gray grid lines (#cccccc).
pub const GRID_GRAY: Color = Color(0.8, 0.8, 0.8);
/// Polygon highlight fill (#FFD700).
pub const GOLD: Color = Color(1.0, 0.843, 0.0);
/// Table header fill (#e0e0e0).
pub const HEADER_GRAY: Color = Color(0.878, 0.878, 0.878);
/// Author box fill (#f5f5f5).
pub const BOX_GRAY: Color = Color(0.961, 0.961, 0.961);
/// Muted label text (#666666).
pub const MUTED: Color = Color(0.4, 0.4, 0.4);
/// Provenance footer text (#999999).
pub const FAINT: Color = Color(0.6, 0.6, 0.6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

fn real(v: f64) -> Object {
    Object::Real(v as f32)
}

fn pdf_y(y: f64) -> f64 {
    PAGE_H - y
}

fn set_stroke(ops: &mut Vec<Operation>, color: Color) {
    ops.push(Operation::new("RG", vec![real(color.0), real(color.1), real(color.2)]));
}

fn set_fill(ops: &mut Vec<Operation>, color: Color) {
    ops.push(Operation::new("rg", vec![real(color.0), real(color.1), real(color.2)]));
}

fn rect_path(ops: &mut Vec<Operation>, r: Rect) {
    ops.push(Operation::new(
        "re",
        vec![real(r.x), real(pdf_y(r.y + r.h)), real(r.w), real(r.h)],
    ));
}

pub fn stroke_rect(ops: &mut Vec<Operation>, r: Rect, line_width: f64, color: Color) {
    ops.push(Operation::new("w", vec![real(line_width)]));
    set_stroke(ops, color);
    rect_path(ops, r);
    ops.push(Operation::new("S", vec![]));
}

pub fn fill_rect(ops: &mut Vec<Operation>, r: Rect, color: Color) {
    set_fill(ops, color);
    rect_path(ops, r);
    ops.push(Operation::new("f", vec![]));
}

pub fn fill_stroke_rect(
    ops: &mut Vec<Operation>,
    r: Rect,
    line_width: f64,
    stroke: Color,
    fill: Color,
) {
    ops.push(Operation::new("w", vec![real(line_width)]));
    set_stroke(ops, stroke);
    set_fill(ops, fill);
    rect_path(ops, r);
    ops.push(Operation::new("B", vec![]));
}

pub fn line(ops: &mut Vec<Operation>, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
    ops.push(Operation::new("w", vec![real(width)]));
    set_stroke(ops, color);
    ops.push(Operation::new("m", vec![real(x1), real(pdf_y(y1))]));
    ops.push(Operation::new("l", vec![real(x2), real(pdf_y(y2))]));
    ops.push(Operation::new("S", vec![]));
}

/// Closed polygon path. `translucent` switches to the shared ExtGState
/// carrying the highlight fill alpha, then back to opaque.
pub fn fill_stroke_polygon(
    ops: &mut Vec<Operation>,
    points: &[(f64, f64)],
    line_width: f64,
    stroke: Color,
    fill: Color,
    translucent: bool,
) {
    if points.len() < 3 {
        return;
    }
    if translucent {
        ops.push(Operation::new("gs", vec!["GS1".into()]));
    }
    ops.push(Operation::new("w", vec![real(line_width)]));
    set_stroke(ops, stroke);
    set_fill(ops, fill);
    ops.push(Operation::new("m", vec![real(points[0].0), real(pdf_y(points[0].1))]));
    for p in &points[1..] {
        ops.push(Operation::new("l", vec![real(p.0), real(pdf_y(p.1))]));
    }
    ops.push(Operation::new("h", vec![]));
    ops.push(Operation::new("B", vec![]));
    if translucent {
        ops.push(Operation::new("gs", vec!["GS0".into()]));
    }
}

/// Filled polygon without an outline (north arrow glyph).
pub fn fill_polygon(ops: &mut Vec<Operation>, points: &[(f64, f64)], fill: Color) {
    if points.len() < 3 {
        return;
    }
    set_fill(ops, fill);
    ops.push(Operation::new("m", vec![real(points[0].0), real(pdf_y(points[0].1))]));
    for p in &points[1..] {
        ops.push(Operation::new("l", vec![real(p.0), real(pdf_y(p.1))]));
    }
    ops.push(Operation::new("h", vec![]));
    ops.push(Operation::new("f", vec![]));
}

/// Estimated rendered width of `text` at `size`.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * AVG_GLYPH_WIDTH
}

/// Greedy word wrap into lines no wider than `width`.
pub fn wrap_text(text: &str, width: f64, size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size) <= width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw one line of text. `y` is the top of the line in layout
/// coordinates; alignment is resolved inside `box_width`.
pub fn text(
    ops: &mut Vec<Operation>,
    content: &str,
    x: f64,
    y: f64,
    box_width: f64,
    size: f64,
    font: Font,
    align: Align,
    color: Color,
) {
    let measured = text_width(content, size);
    let tx = match align {
        Align::Left => x,
        Align::Center => x + ((box_width - measured) / 2.0).max(0.0),
        Align::Right => x + (box_width - measured).max(0.0),
    };
    let baseline = pdf_y(y + size * 0.8);

    ops.push(Operation::new("BT", vec![]));
    set_fill(ops, color);
    ops.push(Operation::new("Tf", vec![font.resource_name().into(), real(size)]));
    ops.push(Operation::new("Td", vec![real(tx), real(baseline)]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(encode_win_ansi(content), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Map text to the WinAnsi single-byte encoding the base fonts are
/// declared with. The degree sign and Indonesian text fit in Latin-1;
/// anything outside becomes '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            c if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Clip text so it fits in `width`, appending an ellipsis when cut.
pub fn truncate_to_width(text: &str, width: f64, size: f64) -> String {
    if text_width(text, size) <= width {
        return text.to_string();
    }
    let fitting = (width / (size * AVG_GLYPH_WIDTH)) as usize;
    let cut: String = text.chars().take(fitting.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn degree_sign_encodes_to_single_byte() {
        assert_eq!(encode_win_ansi("6° S"), vec![b'6', 0xB0, b' ', b'S']);
    }

    #[test]
    fn non_latin_falls_back_to_question_mark() {
        assert_eq!(encode_win_ansi("→"), vec![b'?']);
        assert_eq!(encode_win_ansi("•"), vec![0x95]);
    }

    #[test]
    fn truncate_adds_ellipsis_only_when_clipping() {
        assert_eq!(truncate_to_width("short", 200.0, 8.0), "short");
        let clipped = truncate_to_width(&"x".repeat(100), 50.0, 8.0);
        assert!(clipped.ends_with("..."));
        assert!(text_width(&clipped, 8.0) <= 50.0 + 1e-9);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("PEMBANGUNAN GUDANG DAN KANTOR OPERASIONAL", 120.0, 10.0);
        assert!(lines.len() > 1);
        for line in &lines {
            // A single overlong word may exceed the width; these don't.
            assert!(text_width(line, 10.0) <= 120.0 + 1e-9, "line too wide: {line}");
        }
    }

    #[test]
    fn wrap_keeps_single_word() {
        assert_eq!(wrap_text("PEMRAKARSA", 10.0, 10.0), vec!["PEMRAKARSA".to_string()]);
    }

    #[test]
    fn rect_converts_to_bottom_left_origin() {
        let mut ops = Vec::new();
        fill_rect(&mut ops, Rect::new(10.0, 20.0, 100.0, 50.0), BLACK);
        let re = ops.iter().find(|op| op.operator == "re").unwrap();
        // y operand is PAGE_H - (y + h) = 842 - 70
        assert_eq!(re.operands[1], Object::Real(772.0));
    }
}
