use tapak_types::{PolygonRecord, ProjectRecord};

/// Read-only lookups the pipeline depends on but does not implement.
/// The persistence layer provides these; the pipeline never writes
/// back through them.
pub trait ProjectDirectory {
    fn project(&self, project_id: i32) -> Option<ProjectRecord>;

    /// All polygons of a project, in object-id order.
    fn polygons(&self, project_id: i32) -> Vec<PolygonRecord>;
}
