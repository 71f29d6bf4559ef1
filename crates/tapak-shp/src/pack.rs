//! Zip container assembly
//!
//! Produces the final interchange artifact: the four shapefile bundle
//! members under a fixed `Tapak_proyek/` folder, deflate compressed.

use crate::dbf::write_dbf;
use crate::error::PackageError;
use crate::shp::{write_shp_shx, ShpFeature};
use std::io::{Cursor, Write};
use tapak_types::PolygonRecord;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Layer and folder name mandated for the interchange package.
pub const LAYER_NAME: &str = "Tapak_proyek";

/// ESRI WKT for geographic WGS84, matching the EPSG:4326 convention the
/// records are stored in.
const WGS84_WKT: &str = "GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",\
SPHEROID[\"WGS_1984\",6378137.0,298.257223563]],PRIMEM[\"Greenwich\",0.0],\
UNIT[\"Degree\",0.0174532925199433]]";

/// Serialize every record into one polygon layer and wrap the bundle in
/// a compressed container. Fails atomically: either the complete zip is
/// returned or nothing is.
pub fn pack_interchange(records: &[PolygonRecord]) -> Result<Vec<u8>, PackageError> {
    if records.is_empty() {
        return Err(PackageError::EmptyInput);
    }

    let mut features = Vec::with_capacity(records.len());
    for record in records {
        let normalized = tapak_geo::normalize(&record.geometry).map_err(|source| {
            PackageError::Geometry { object_id: record.object_id, source }
        })?;
        tracing::debug!(object_id = record.object_id, vertices = normalized.ring.len(), "packing feature");
        features.push(ShpFeature::from_open_ring(&normalized.ring, normalized.bbox));
    }

    let (shp, shx) = write_shp_shx(&features);
    let dbf = write_dbf(records)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(6));

    let members: [(&str, &[u8]); 4] = [
        ("shp", &shp),
        ("shx", &shx),
        ("dbf", &dbf),
        ("prj", WGS84_WKT.as_bytes()),
    ];
    for (extension, bytes) in members {
        zip.start_file(format!("{LAYER_NAME}/{LAYER_NAME}.{extension}"), options)
            .map_err(|e| PackageError::Container(e.to_string()))?;
        zip.write_all(bytes)
            .map_err(|e| PackageError::Container(e.to_string()))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| PackageError::Container(e.to_string()))?;
    Ok(cursor.into_inner())
}
