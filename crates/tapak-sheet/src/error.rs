use tapak_geo::{CoordinateError, GeometryError, ProjectionError};
use tapak_types::AttributeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error("failed to build PDF: {0}")]
    Render(String),
}
