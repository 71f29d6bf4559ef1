//! Map panel
//!
//! The left ~69% of the sheet: outer border, inset grid frame with
//! coordinate tick labels, the subject polygon, a two-segment scale
//! bar and the north arrow.

use crate::draw::{
    self, fill_polygon, fill_rect, fill_stroke_polygon, fill_stroke_rect, line, stroke_rect,
    Align, Font, BLACK, GOLD, GRID_GRAY, WHITE,
};
use crate::error::SheetError;
use crate::layout::{Rect, GRID_MARGIN, GRID_STEPS, SCALE_BAR_H, SCALE_BAR_W, TICK_STEPS};
use lopdf::content::Operation;
use tapak_geo::{format_dms, Axis, NormalizedRing, PanelTransform};

pub fn draw(
    ops: &mut Vec<Operation>,
    panel: Rect,
    sheet: &NormalizedRing,
) -> Result<(), SheetError> {
    stroke_rect(ops, panel, 3.0, BLACK);

    let inner = panel.inset(GRID_MARGIN);
    stroke_rect(ops, inner, 2.0, BLACK);

    grid_lines(ops, inner);

    let transform =
        PanelTransform::fit(&sheet.bbox, inner.w, inner.h, tapak_geo::DEFAULT_PADDING)?;
    tick_labels(ops, panel, inner, &transform)?;

    let points: Vec<(f64, f64)> = sheet
        .ring
        .iter()
        .map(|p| {
            let (x, y) = transform.apply(p.lon, p.lat);
            (inner.x + x, inner.y + y)
        })
        .collect();
    fill_stroke_polygon(ops, &points, 2.0, BLACK, GOLD, true);

    scale_bar(ops, inner.x + 20.0, inner.y + inner.h - 50.0);
    north_arrow(ops, inner.x + inner.w - 50.0, inner.y + 20.0);

    Ok(())
}

fn grid_lines(ops: &mut Vec<Operation>, inner: Rect) {
    for i in 1..GRID_STEPS {
        let x = inner.x + inner.w * i as f64 / GRID_STEPS as f64;
        line(ops, x, inner.y, x, inner.y + inner.h, 0.5, GRID_GRAY);
    }
    for i in 1..GRID_STEPS {
        let y = inner.y + inner.h * i as f64 / GRID_STEPS as f64;
        line(ops, inner.x, y, inner.x + inner.w, y, 0.5, GRID_GRAY);
    }
}

/// DMS labels at the four cardinal edges, sampled from the padded
/// display bounds so they line up with what the grid frame covers.
fn tick_labels(
    ops: &mut Vec<Operation>,
    panel: Rect,
    inner: Rect,
    transform: &PanelTransform,
) -> Result<(), SheetError> {
    let padded = transform.padded;

    for i in 0..=TICK_STEPS {
        let fraction = i as f64 / TICK_STEPS as f64;
        let lon = padded.min_lon + padded.lon_range() * fraction;
        let label = format_dms(lon, Axis::Longitude)?;
        let x = inner.x + inner.w * fraction - 30.0;
        draw::text(ops, &label, x, panel.y + 10.0, 60.0, 8.0, Font::Regular, Align::Center, BLACK);
        draw::text(
            ops,
            &label,
            x,
            panel.y + panel.h - 25.0,
            60.0,
            8.0,
            Font::Regular,
            Align::Center,
            BLACK,
        );
    }

    for i in 0..=TICK_STEPS {
        let fraction = i as f64 / TICK_STEPS as f64;
        // Top edge carries the northernmost latitude.
        let lat = padded.max_lat - padded.lat_range() * fraction;
        let label = format_dms(lat, Axis::Latitude)?;
        let y = inner.y + inner.h * fraction - 5.0;
        draw::text(ops, &label, panel.x + 5.0, y, 30.0, 8.0, Font::Regular, Align::Left, BLACK);
        draw::text(
            ops,
            &label,
            panel.x + panel.w - 35.0,
            y,
            30.0,
            8.0,
            Font::Regular,
            Align::Right,
            BLACK,
        );
    }

    Ok(())
}

/// 1 km bar in two alternating 500 m segments.
fn scale_bar(ops: &mut Vec<Operation>, x: f64, y: f64) {
    let half = SCALE_BAR_W / 2.0;
    fill_rect(ops, Rect::new(x, y, half, SCALE_BAR_H), BLACK);
    fill_stroke_rect(ops, Rect::new(x + half, y, half, SCALE_BAR_H), 1.0, BLACK, WHITE);
    stroke_rect(ops, Rect::new(x, y, SCALE_BAR_W, SCALE_BAR_H), 1.0, BLACK);

    let label_y = y + SCALE_BAR_H + 3.0;
    draw::text(ops, "0", x - 5.0, label_y, 10.0, 7.0, Font::Regular, Align::Left, BLACK);
    draw::text(ops, "500m", x + half - 15.0, label_y, 30.0, 7.0, Font::Regular, Align::Left, BLACK);
    draw::text(
        ops,
        "1km",
        x + SCALE_BAR_W - 15.0,
        label_y,
        30.0,
        7.0,
        Font::Regular,
        Align::Left,
        BLACK,
    );
}

fn north_arrow(ops: &mut Vec<Operation>, x: f64, y: f64) {
    let size = 30.0;
    fill_polygon(ops, &[(x, y), (x - 10.0, y + size), (x + 10.0, y + size)], BLACK);
    draw::text(ops, "N", x - 5.0, y + size + 5.0, 10.0, 12.0, Font::Bold, Align::Left, BLACK);
}
