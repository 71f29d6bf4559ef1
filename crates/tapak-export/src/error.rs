use tapak_geo::GeometryError;
use tapak_sheet::SheetError;
use tapak_shp::PackageError;
use thiserror::Error;

/// Terminal failures surfaced to the caller. Nothing here is retried:
/// inputs are already resolved and deterministic, so a retry would
/// reproduce the same error.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("project {0} not found")]
    ProjectNotFound(i32),

    #[error("polygon {polygon_id} not found in project {project_id}")]
    PolygonNotFound { project_id: i32, polygon_id: i32 },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error(transparent)]
    Package(#[from] PackageError),
}
