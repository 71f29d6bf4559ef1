use tapak_geo::GeometryError;
use tapak_types::AttributeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("no polygons to export")]
    EmptyInput,

    #[error("record {object_id}: {source}")]
    Geometry {
        object_id: i32,
        source: GeometryError,
    },

    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error("value for field {field} exceeds its fixed width of {width}")]
    FieldOverflow { field: &'static str, width: u8 },

    #[error("failed to write container: {0}")]
    Container(String),
}
