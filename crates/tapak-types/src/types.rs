/// One tapak-proyek polygon row as stored by the persistence layer.
///
/// `area` is kept as a decimal string with 11 fractional digits so the
/// stored precision survives text storage; it is always derived from
/// `geometry`, never hand-entered.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PolygonRecord {
    /// 1-based sequence number, unique within a project (OBJECTID_1).
    pub object_id: i32,
    pub pemrakarsa: String,
    pub kegiatan: String,
    /// Four-digit year in [1900, 2100].
    pub tahun: i32,
    pub provinsi: String,
    pub keterangan: String,
    pub layer: String,
    /// Hectares, decimal string with exactly 11 fractional digits.
    pub area: String,
    /// GeoJSON Polygon, stored as text.
    pub geometry: String,

    // Optional attributes from document extraction; not part of the
    // interchange schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nib: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kbli: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kabupaten_kota: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kecamatan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desa_kelurahan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alamat: Option<String>,
}

/// Default layer name assigned at polygon creation.
pub const DEFAULT_LAYER: &str = "Tapak Proyek";

/// Project metadata resolved by the persistence collaborator.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProjectRecord {
    pub id: i32,
    pub name: String,
    /// Display-only label, e.g. "EPSG:4326".
    pub coordinate_system: String,
}

/// Creator info printed in the map sheet footer.
#[derive(Debug, Clone, Default)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    Pdf,
    Zip,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Pdf => "application/pdf",
            MimeType::Zip => "application/zip",
        }
    }
}

/// A finished export: binary payload plus the filename to serve it under.
/// Produced per call and never cached or mutated.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime: MimeType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn polygon_record_roundtrips_through_json() {
        let record = PolygonRecord {
            object_id: 1,
            pemrakarsa: "PT Contoh".into(),
            kegiatan: "Pembangunan Pabrik".into(),
            tahun: 2024,
            provinsi: "Jawa Timur".into(),
            keterangan: "Kec. Contoh".into(),
            layer: DEFAULT_LAYER.into(),
            area: "1.00000000000".into(),
            geometry: r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[0,0]]]}"#.into(),
            nib: None,
            kbli: None,
            kabupaten_kota: None,
            kecamatan: None,
            desa_kelurahan: None,
            alamat: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: PolygonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.object_id, 1);
        assert_eq!(back.area, "1.00000000000");
        // Optional extraction fields are omitted entirely when absent
        assert!(!json.contains("nib"));
    }

    #[test]
    fn mime_strings() {
        assert_eq!(MimeType::Pdf.as_str(), "application/pdf");
        assert_eq!(MimeType::Zip.as_str(), "application/zip");
    }
}
