//! Fixed AMDALNET attribute schema.
//!
//! The field order and names below are the external contract shared
//! between the PDF attribute table and the shapefile bundle; the two
//! outputs must never drift apart, so both render through this module.

use crate::types::PolygonRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttributeError {
    #[error("stored AREA is not a decimal number: {0:?}")]
    BadArea(String),
}

/// dBASE field type tag as written into the DBF field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbaseType {
    Character,
    Numeric,
}

impl DbaseType {
    pub fn tag(&self) -> u8 {
        match self {
            DbaseType::Character => b'C',
            DbaseType::Numeric => b'N',
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeField {
    pub name: &'static str,
    pub kind: DbaseType,
    pub width: u8,
    pub decimals: u8,
}

/// The regulator-mandated schema, in mandated order. Widths follow the
/// AMDALNET column definitions (AREA is decimal(19,11) in storage).
pub const ATTRIBUTE_SCHEMA: [AttributeField; 8] = [
    AttributeField { name: "OBJECTID_1", kind: DbaseType::Numeric, width: 10, decimals: 0 },
    AttributeField { name: "PEMRAKARSA", kind: DbaseType::Character, width: 100, decimals: 0 },
    AttributeField { name: "KEGIATAN", kind: DbaseType::Character, width: 254, decimals: 0 },
    AttributeField { name: "TAHUN", kind: DbaseType::Numeric, width: 4, decimals: 0 },
    AttributeField { name: "PROVINSI", kind: DbaseType::Character, width: 50, decimals: 0 },
    AttributeField { name: "KETERANGAN", kind: DbaseType::Character, width: 254, decimals: 0 },
    AttributeField { name: "LAYER", kind: DbaseType::Character, width: 50, decimals: 0 },
    AttributeField { name: "AREA", kind: DbaseType::Numeric, width: 19, decimals: 11 },
];

/// Parse the stored decimal-string AREA into the numeric value the
/// interchange format requires.
pub fn parse_area(record: &PolygonRecord) -> Result<f64, AttributeError> {
    let value: f64 = record
        .area
        .trim()
        .parse()
        .map_err(|_| AttributeError::BadArea(record.area.clone()))?;
    if !value.is_finite() {
        return Err(AttributeError::BadArea(record.area.clone()));
    }
    Ok(value)
}

/// Render one record as ordered (field name, display value) rows.
///
/// AREA always carries exactly 11 fractional digits; integer fields are
/// plain; text fields pass through untouched.
pub fn attribute_rows(record: &PolygonRecord) -> Result<Vec<(&'static str, String)>, AttributeError> {
    let area = parse_area(record)?;
    Ok(vec![
        ("OBJECTID_1", record.object_id.to_string()),
        ("PEMRAKARSA", record.pemrakarsa.clone()),
        ("KEGIATAN", record.kegiatan.clone()),
        ("TAHUN", record.tahun.to_string()),
        ("PROVINSI", record.provinsi.clone()),
        ("KETERANGAN", record.keterangan.clone()),
        ("LAYER", record.layer.clone()),
        ("AREA", format!("{:.11}", area)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> PolygonRecord {
        PolygonRecord {
            object_id: 3,
            pemrakarsa: "PT Contoh".into(),
            kegiatan: "Pembangunan".into(),
            tahun: 2023,
            provinsi: "Jawa Barat".into(),
            keterangan: "Kab. Bandung".into(),
            layer: "Tapak Proyek".into(),
            area: "2.50000000000".into(),
            geometry: String::new(),
            nib: None,
            kbli: None,
            kabupaten_kota: None,
            kecamatan: None,
            desa_kelurahan: None,
            alamat: None,
        }
    }

    #[test]
    fn rows_follow_mandated_order() {
        let rows = attribute_rows(&record()).unwrap();
        let names: Vec<&str> = rows.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "OBJECTID_1",
                "PEMRAKARSA",
                "KEGIATAN",
                "TAHUN",
                "PROVINSI",
                "KETERANGAN",
                "LAYER",
                "AREA"
            ]
        );
    }

    #[test]
    fn schema_names_match_rows() {
        let rows = attribute_rows(&record()).unwrap();
        for (field, (name, _)) in ATTRIBUTE_SCHEMA.iter().zip(rows.iter()) {
            assert_eq!(field.name, *name);
        }
    }

    #[test]
    fn area_always_has_eleven_decimals() {
        let mut r = record();
        r.area = "2.5".into();
        let rows = attribute_rows(&r).unwrap();
        assert_eq!(rows[7].1, "2.50000000000");
    }

    #[test]
    fn bad_area_is_rejected() {
        let mut r = record();
        r.area = "not-a-number".into();
        assert!(attribute_rows(&r).is_err());
    }
}
