//! Information panel
//!
//! The right side of the sheet, divided top to bottom into fixed
//! proportional bands: title, technical parameters, keterangan with
//! the attribute grid and vertex table, inset placeholder, footer.
//! Each band draws purely from its own rectangle and data.

use crate::compose::SheetMeta;
use crate::draw::{
    self, fill_stroke_rect, stroke_rect, truncate_to_width, wrap_text, Align, Font, BLACK,
    BOX_GRAY, FAINT, GOLD, HEADER_GRAY, MUTED, WHITE,
};
use crate::error::SheetError;
use crate::layout::{
    Rect, INSET_BAND_FRACTION, LEGEND_BAND_FRACTION, TECH_BAND_FRACTION, TITLE_BAND_FRACTION,
    VERTEX_TABLE_ROWS,
};
use lopdf::content::Operation;
use tapak_geo::{format_dms, Axis, NormalizedRing};
use tapak_types::{attribute_rows, PolygonRecord};

/// Fixed technical-parameter rows. These describe the conventional
/// projection for this class of document; nothing here is computed.
const TECH_ROWS: [(&str, &str); 4] = [
    ("Skala", ": 1:10.000 (A3)"),
    ("Proyeksi", ": Transverse Mercator"),
    ("Sistem Grid", ": Geografi"),
    ("Datum Horizontal", ": WGS84 - Zona 49 S"),
];

const LEGEND_ITEMS: [(&str, &str); 4] = [
    ("\u{2022}", "Titik ikat Tapak/Lokasi Kegiatan"),
    ("---", "Batas Kelurahan/Desa"),
    ("\u{2014}", "Sungai"),
    ("\u{2014}", "Jalan"),
];

pub fn draw(
    ops: &mut Vec<Operation>,
    panel: Rect,
    record: &PolygonRecord,
    meta: &SheetMeta,
    sheet: &NormalizedRing,
    stamp: &str,
) -> Result<(), SheetError> {
    let mut remaining = panel;
    let title = remaining.take_band((panel.h * TITLE_BAND_FRACTION).floor());
    let tech = remaining.take_band((panel.h * TECH_BAND_FRACTION).floor());
    let legend = remaining.take_band((panel.h * LEGEND_BAND_FRACTION).floor());
    let inset = remaining.take_band((panel.h * INSET_BAND_FRACTION).floor());
    let footer = remaining;

    title_band(ops, title, record);
    tech_band(ops, tech);
    legend_band(ops, legend, record, sheet)?;
    inset_band(ops, inset);
    footer_band(ops, footer, meta, stamp);

    Ok(())
}

fn band_frame(ops: &mut Vec<Operation>, band: Rect) {
    fill_stroke_rect(ops, band, 2.0, BLACK, WHITE);
}

fn title_band(ops: &mut Vec<Operation>, band: Rect, record: &PolygonRecord) {
    band_frame(ops, band);
    let inner_x = band.x + 10.0;
    let inner_w = band.w - 20.0;

    draw::text(
        ops,
        "PETA LOKASI KEGIATAN",
        inner_x,
        band.y + 10.0,
        inner_w,
        14.0,
        Font::Bold,
        Align::Center,
        BLACK,
    );
    draw::text(
        ops,
        &truncate_to_width(&record.pemrakarsa.to_uppercase(), inner_w, 12.0),
        inner_x,
        band.y + 32.0,
        inner_w,
        12.0,
        Font::Bold,
        Align::Center,
        BLACK,
    );

    let mut y = band.y + 55.0;
    for line in wrap_text(&record.kegiatan.to_uppercase(), inner_w, 10.0).iter().take(2) {
        draw::text(ops, line, inner_x, y, inner_w, 10.0, Font::Regular, Align::Center, BLACK);
        y += 12.0;
    }
}

fn tech_band(ops: &mut Vec<Operation>, band: Rect) {
    band_frame(ops, band);
    let mut y = band.y + 15.0;
    for (label, value) in TECH_ROWS {
        draw::text(ops, label, band.x + 15.0, y, 70.0, 9.0, Font::Regular, Align::Left, BLACK);
        draw::text(ops, value, band.x + 85.0, y, band.w - 100.0, 9.0, Font::Regular, Align::Left, BLACK);
        y += 18.0;
    }
}

fn legend_band(
    ops: &mut Vec<Operation>,
    band: Rect,
    record: &PolygonRecord,
    sheet: &NormalizedRing,
) -> Result<(), SheetError> {
    band_frame(ops, band);
    let mut y = band.y + 8.0;

    draw::text(ops, "KETERANGAN", band.x + 10.0, y, band.w, 10.0, Font::Bold, Align::Left, BLACK);
    y += 18.0;

    for (symbol, label) in LEGEND_ITEMS {
        draw::text(ops, symbol, band.x + 15.0, y, 15.0, 8.0, Font::Regular, Align::Left, BLACK);
        draw::text(ops, label, band.x + 30.0, y, band.w - 50.0, 8.0, Font::Regular, Align::Left, BLACK);
        y += 12.0;
    }

    // Subject polygon swatch.
    fill_stroke_rect(ops, Rect::new(band.x + 15.0, y, 12.0, 8.0), 1.0, BLACK, GOLD);
    draw::text(
        ops,
        "Tapak/Lokasi Kegiatan",
        band.x + 30.0,
        y,
        band.w - 50.0,
        8.0,
        Font::Regular,
        Align::Left,
        BLACK,
    );
    y += 18.0;

    y = attribute_grid(ops, band, record, y)?;
    vertex_table(ops, band, sheet, y)?;
    Ok(())
}

/// The fixed-schema attribute grid. Shares `attribute_rows` with the
/// shapefile writer so the two outputs cannot drift.
fn attribute_grid(
    ops: &mut Vec<Operation>,
    band: Rect,
    record: &PolygonRecord,
    mut y: f64,
) -> Result<f64, SheetError> {
    draw::text(ops, "ATRIBUT", band.x + 10.0, y, band.w - 20.0, 9.0, Font::Bold, Align::Left, BLACK);
    y += 12.0;

    let value_w = band.w - 100.0;
    for (name, value) in attribute_rows(record)? {
        draw::text(ops, name, band.x + 15.0, y, 70.0, 7.0, Font::Regular, Align::Left, BLACK);
        draw::text(
            ops,
            &truncate_to_width(&value, value_w, 7.0),
            band.x + 85.0,
            y,
            value_w,
            7.0,
            Font::Regular,
            Align::Left,
            BLACK,
        );
        y += 10.0;
    }
    Ok(y + 6.0)
}

fn vertex_table(
    ops: &mut Vec<Operation>,
    band: Rect,
    sheet: &NormalizedRing,
    mut y: f64,
) -> Result<(), SheetError> {
    draw::text(
        ops,
        "Titik ikat Tapak/Lokasi Kegiatan",
        band.x,
        y,
        band.w,
        9.0,
        Font::Bold,
        Align::Center,
        BLACK,
    );
    y += 14.0;

    let table_x = band.x + 10.0;
    let table_w = band.w - 20.0;
    let col = [table_w * 0.15, table_w * 0.425, table_w * 0.425];

    let header_h = 16.0;
    let mut x = table_x;
    for (i, title) in ["No.", "X", "Y"].iter().enumerate() {
        fill_stroke_rect(ops, Rect::new(x, y, col[i], header_h), 0.5, BLACK, HEADER_GRAY);
        draw::text(ops, title, x + 2.0, y + 5.0, col[i] - 4.0, 7.0, Font::Bold, Align::Center, BLACK);
        x += col[i];
    }
    y += header_h;

    let row_h = 14.0;
    for (index, point) in sheet.ring.iter().take(VERTEX_TABLE_ROWS).enumerate() {
        let cells = [
            (index + 1).to_string(),
            format_dms(point.lon, Axis::Longitude)?,
            format_dms(point.lat, Axis::Latitude)?,
        ];
        let mut x = table_x;
        for (i, cell) in cells.iter().enumerate() {
            stroke_rect(ops, Rect::new(x, y, col[i], row_h), 0.3, BLACK);
            draw::text(ops, cell, x + 2.0, y + 4.0, col[i] - 4.0, 6.0, Font::Regular, Align::Center, BLACK);
            x += col[i];
        }
        y += row_h;
    }
    Ok(())
}

fn inset_band(ops: &mut Vec<Operation>, band: Rect) {
    band_frame(ops, band);
    // Static placeholder; no independent inset rendering.
    draw::text(
        ops,
        "Peta Inset Indonesia",
        band.x,
        band.y + band.h / 2.0,
        band.w,
        8.0,
        Font::Regular,
        Align::Center,
        MUTED,
    );

    let label_y = band.y + band.h - 12.0;
    draw::text(ops, "112\u{B0}0'0\"E", band.x + 10.0, label_y, 40.0, 6.0, Font::Regular, Align::Left, MUTED);
    draw::text(
        ops,
        "112\u{B0}15'0\"E",
        band.x + band.w / 2.0 - 25.0,
        label_y,
        50.0,
        6.0,
        Font::Regular,
        Align::Center,
        MUTED,
    );
    draw::text(
        ops,
        "112\u{B0}30'0\"E",
        band.x + band.w - 50.0,
        label_y,
        40.0,
        6.0,
        Font::Regular,
        Align::Right,
        MUTED,
    );
}

fn footer_band(ops: &mut Vec<Operation>, band: Rect, meta: &SheetMeta, stamp: &str) {
    band_frame(ops, band);
    draw::text(ops, "SUMBER PETA:", band.x + 10.0, band.y + 8.0, band.w, 7.0, Font::Bold, Align::Left, BLACK);
    draw::text(
        ops,
        &format!("Sistem Koordinat: {}", meta.coordinate_system),
        band.x + 10.0,
        band.y + 18.0,
        band.w - 20.0,
        6.0,
        Font::Regular,
        Align::Left,
        BLACK,
    );

    let info_box = Rect::new(band.x + 10.0, band.y + 30.0, band.w - 20.0, 50.0);
    fill_stroke_rect(ops, info_box, 0.5, BLACK, BOX_GRAY);
    draw::text(ops, "Dibuat oleh:", info_box.x + 5.0, info_box.y + 5.0, info_box.w, 7.0, Font::Bold, Align::Left, BLACK);
    if let Some(author) = &meta.author {
        draw::text(ops, &author.name, info_box.x + 5.0, info_box.y + 17.0, info_box.w, 7.0, Font::Regular, Align::Left, BLACK);
        if let Some(email) = &author.email {
            draw::text(ops, email, info_box.x + 5.0, info_box.y + 27.0, info_box.w, 7.0, Font::Regular, Align::Left, BLACK);
        }
    }
    draw::text(
        ops,
        &format!("Tanggal: {stamp}"),
        info_box.x + 5.0,
        info_box.y + 37.0,
        info_box.w,
        6.0,
        Font::Regular,
        Align::Left,
        BLACK,
    );

    draw::text(
        ops,
        "Created by - AMDALNET Shapefile Converter",
        band.x + 10.0,
        info_box.y + info_box.h + 10.0,
        band.w - 20.0,
        6.0,
        Font::Regular,
        Align::Center,
        FAINT,
    );
}
