use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("polygon ring has fewer than 3 distinct vertices")]
    EmptyRing,

    #[error("polygon area rounds to zero hectares at 11 decimal places")]
    DegenerateArea,
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("coordinate value is not finite: {0}")]
    NonFinite(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error("bounding box range is zero on at least one axis")]
    ZeroRange,
}
