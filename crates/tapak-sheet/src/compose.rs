//! Document assembly
//!
//! Builds the single-page lopdf document: fonts, the translucency
//! graphics states, the content stream produced by the two panels, and
//! the document information dictionary.

use crate::error::SheetError;
use crate::layout::{info_panel_rect, map_panel_rect, PAGE_H, PAGE_W};
use crate::{info_panel, map_panel};
use chrono::{DateTime, Datelike, Timelike, Utc};
use lopdf::content::Content;
use lopdf::xref::XrefType;
use lopdf::{dictionary, Document, Object, Stream};
use tapak_types::{Author, PolygonRecord};

/// Caller-supplied sheet metadata; everything else comes from the
/// polygon record itself.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub project_name: String,
    /// Display-only coordinate system label, e.g. "EPSG:4326".
    pub coordinate_system: String,
    pub author: Option<Author>,
}

/// Fill alpha for the polygon highlight.
const HIGHLIGHT_ALPHA: f32 = 0.6;

const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Compose the complete map sheet.
///
/// Pure in its arguments: the supplied `rendered_at` instant is the
/// only clock-derived content, so identical inputs produce
/// byte-identical PDFs.
pub fn compose_map_sheet(
    record: &PolygonRecord,
    meta: &SheetMeta,
    rendered_at: DateTime<Utc>,
) -> Result<Vec<u8>, SheetError> {
    let sheet = tapak_geo::normalize(&record.geometry)?;

    let mut ops = Vec::new();
    map_panel::draw(&mut ops, map_panel_rect(), &sheet)?;
    info_panel::draw(
        &mut ops,
        info_panel_rect(),
        record,
        meta,
        &sheet,
        &format_stamp(&rendered_at),
    )?;

    let mut doc = Document::with_version("1.4");
    doc.reference_table.cross_reference_type = XrefType::CrossReferenceTable;

    let id_pages = doc.new_object_id();

    let id_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let id_font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let id_gs_opaque = doc.add_object(dictionary! {
        "Type" => "ExtGState",
        "ca" => Object::Real(1.0),
    });
    let id_gs_highlight = doc.add_object(dictionary! {
        "Type" => "ExtGState",
        "ca" => Object::Real(HIGHLIGHT_ALPHA),
    });

    let content = Content { operations: ops };
    let encoded = content
        .encode()
        .map_err(|e| SheetError::Render(format!("content stream: {e}")))?;
    let id_content = doc.add_object(Stream::new(dictionary! {}, encoded));

    let id_resources = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => id_font,
            "F2" => id_font_bold,
        },
        "ExtGState" => dictionary! {
            "GS0" => id_gs_opaque,
            "GS1" => id_gs_highlight,
        },
    });

    let id_page = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => id_pages,
        "Contents" => id_content,
        "Resources" => id_resources,
    });

    doc.set_object(
        id_pages,
        dictionary! {
            "Type" => "Pages",
            "Count" => 1,
            "Kids" => vec![id_page.into()],
            "MediaBox" => vec![0.into(), 0.into(), Object::Real(PAGE_W as f32), Object::Real(PAGE_H as f32)],
        },
    );

    let id_catalog = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => id_pages,
    });
    doc.trailer.set("Root", id_catalog);

    let id_info = doc.add_object(dictionary! {
        "Title" => Object::string_literal(format!("Peta Tapak Proyek - {}", meta.project_name)),
        "Author" => Object::string_literal("AMDALNET Shapefile Converter"),
        "Subject" => Object::string_literal("Peta Tapak Proyek AMDALNET"),
        "Creator" => Object::string_literal("AMDALNET Shapefile Converter"),
        "CreationDate" => Object::string_literal(pdf_date(&rendered_at)),
    });
    doc.trailer.set("Info", id_info);

    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| SheetError::Render(format!("save: {e}")))?;
    Ok(buffer)
}

/// Localized footer timestamp, e.g. "02 Januari 2024 10:30".
fn format_stamp(at: &DateTime<Utc>) -> String {
    format!(
        "{:02} {} {} {:02}:{:02}",
        at.day(),
        BULAN[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}

fn pdf_date(at: &DateTime<Utc>) -> String {
    format!(
        "D:{:04}{:02}{:02}{:02}{:02}{:02}Z",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record() -> PolygonRecord {
        PolygonRecord {
            object_id: 1,
            pemrakarsa: "PT Contoh Abadi".into(),
            kegiatan: "Pembangunan Gudang".into(),
            tahun: 2024,
            provinsi: "DKI Jakarta".into(),
            keterangan: "Jakarta Timur".into(),
            layer: "Tapak Proyek".into(),
            area: "1.00000000000".into(),
            geometry: r#"{"type":"Polygon","coordinates":[[[106.8,-6.3],[106.9,-6.3],[106.9,-6.2],[106.8,-6.2],[106.8,-6.3]]]}"#
                .into(),
            nib: None,
            kbli: None,
            kabupaten_kota: None,
            kecamatan: None,
            desa_kelurahan: None,
            alamat: None,
        }
    }

    fn meta() -> SheetMeta {
        SheetMeta {
            project_name: "Proyek Contoh".into(),
            coordinate_system: "EPSG:4326".into(),
            author: None,
        }
    }

    #[test]
    fn produces_a_pdf_header() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap();
        let bytes = compose_map_sheet(&record(), &meta(), at).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn identical_inputs_give_identical_bytes() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap();
        let first = compose_map_sheet(&record(), &meta(), at).unwrap();
        let second = compose_map_sheet(&record(), &meta(), at).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_broken_geometry() {
        let mut r = record();
        r.geometry = "{}".into();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap();
        assert!(matches!(
            compose_map_sheet(&r, &meta(), at),
            Err(SheetError::Geometry(_))
        ));
    }

    #[test]
    fn stamp_is_indonesian() {
        let at = Utc.with_ymd_and_hms(2024, 8, 17, 7, 5, 0).unwrap();
        assert_eq!(format_stamp(&at), "17 Agustus 2024 07:05");
    }

    #[test]
    fn pdf_date_is_utc_marked() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 59).unwrap();
        assert_eq!(pdf_date(&at), "D:20240102103059Z");
    }
}
