//! The two export operations.
//!
//! `export_map` / `export_interchange` resolve their inputs through a
//! `ProjectDirectory`; the `*_artifact` functions below them are pure
//! over already-resolved records and are what tests and embedding
//! callers with their own lookup layer use directly.

use crate::directory::ProjectDirectory;
use crate::error::ExportError;
use chrono::{DateTime, Utc};
use tapak_sheet::{compose_map_sheet, SheetMeta};
use tapak_shp::pack_interchange;
use tapak_types::{Author, ExportArtifact, MimeType, PolygonRecord, ProjectRecord};

/// Produce the PDF map sheet for one polygon of a project.
pub fn export_map<D: ProjectDirectory>(
    directory: &D,
    project_id: i32,
    polygon_id: i32,
    author: Option<Author>,
) -> Result<ExportArtifact, ExportError> {
    let project = directory
        .project(project_id)
        .ok_or(ExportError::ProjectNotFound(project_id))?;
    let polygon = directory
        .polygons(project_id)
        .into_iter()
        .find(|p| p.object_id == polygon_id)
        .ok_or(ExportError::PolygonNotFound { project_id, polygon_id })?;

    map_artifact(&polygon, &project, author, Utc::now())
}

/// Produce the shapefile interchange zip over all polygons of a
/// project.
pub fn export_interchange<D: ProjectDirectory>(
    directory: &D,
    project_id: i32,
) -> Result<ExportArtifact, ExportError> {
    let project = directory
        .project(project_id)
        .ok_or(ExportError::ProjectNotFound(project_id))?;
    let polygons = directory.polygons(project_id);
    interchange_artifact(&polygons, &project)
}

/// Pure map export over resolved records. `rendered_at` is the single
/// clock capture that ends up in the sheet.
pub fn map_artifact(
    polygon: &PolygonRecord,
    project: &ProjectRecord,
    author: Option<Author>,
    rendered_at: DateTime<Utc>,
) -> Result<ExportArtifact, ExportError> {
    // The stored area string is never trusted; it is re-derived from
    // the geometry before anything renders it.
    let normalized = tapak_geo::normalize(&polygon.geometry)?;
    let mut record = polygon.clone();
    record.area = normalized.format_area_ha();

    let meta = SheetMeta {
        project_name: project.name.clone(),
        coordinate_system: project.coordinate_system.clone(),
        author,
    };
    let bytes = compose_map_sheet(&record, &meta, rendered_at)?;

    let artifact = ExportArtifact {
        filename: format!("{}_Peta_Tapak_Proyek.pdf", project.name),
        mime: MimeType::Pdf,
        bytes,
    };
    tracing::info!(
        project = %project.name,
        object_id = polygon.object_id,
        bytes = artifact.bytes.len(),
        "map sheet exported"
    );
    Ok(artifact)
}

/// Pure interchange export over resolved records.
pub fn interchange_artifact(
    polygons: &[PolygonRecord],
    project: &ProjectRecord,
) -> Result<ExportArtifact, ExportError> {
    let bytes = pack_interchange(polygons)?;
    let artifact = ExportArtifact {
        filename: format!("{}_Tapak_proyek.zip", project.name),
        mime: MimeType::Zip,
        bytes,
    };
    tracing::info!(
        project = %project.name,
        features = polygons.len(),
        bytes = artifact.bytes.len(),
        "interchange package exported"
    );
    Ok(artifact)
}
