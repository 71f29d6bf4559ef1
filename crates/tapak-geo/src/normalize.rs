//! GeoJSON polygon normalization
//!
//! Accepts a stored GeoJSON `Polygon`, validates the exterior ring and
//! derives the two values every downstream consumer needs: geodetic
//! area in square meters and the tight bounding box.

use crate::error::GeometryError;
use serde::Deserialize;

/// WGS84 mean radius, meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Meters per degree along a meridian at the mean radius.
const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// Tight axis-aligned bounds of a ring, unpadded. Padding for display
/// is a layout concern handled by the projection mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    pub fn lon_range(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_range(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// A validated exterior ring. `ring` is open: the GeoJSON closing
/// vertex (first repeated as last) has been trimmed.
#[derive(Debug, Clone)]
pub struct NormalizedRing {
    pub ring: Vec<LonLat>,
    pub area_m2: f64,
    pub bbox: GeoBounds,
}

impl NormalizedRing {
    pub fn area_hectares(&self) -> f64 {
        self.area_m2 / 10_000.0
    }

    /// The stored-area convention: hectares with exactly 11 fractional
    /// digits.
    pub fn format_area_ha(&self) -> String {
        format!("{:.11}", self.area_hectares())
    }
}

#[derive(Deserialize)]
struct GeoJsonPolygon {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<Vec<Vec<f64>>>,
}

/// Validate a stored GeoJSON polygon and compute its derived values.
///
/// Only `Polygon` geometries are accepted; interior rings are ignored.
/// Structurally invalid JSON and wrong geometry types are treated the
/// same as a missing ring.
pub fn normalize(geojson: &str) -> Result<NormalizedRing, GeometryError> {
    let parsed: GeoJsonPolygon =
        serde_json::from_str(geojson).map_err(|_| GeometryError::EmptyRing)?;
    if parsed.kind != "Polygon" {
        return Err(GeometryError::EmptyRing);
    }
    let exterior = parsed.coordinates.first().ok_or(GeometryError::EmptyRing)?;

    let mut ring: Vec<LonLat> = Vec::with_capacity(exterior.len());
    for position in exterior {
        if position.len() < 2 {
            return Err(GeometryError::EmptyRing);
        }
        let (lon, lat) = (position[0], position[1]);
        if !lon.is_finite() || !lat.is_finite() {
            return Err(GeometryError::EmptyRing);
        }
        ring.push(LonLat { lon, lat });
    }

    // Trim the explicit closing vertex if present.
    if ring.len() >= 2 && ring.first() == ring.last() {
        ring.pop();
    }

    let mut distinct: Vec<LonLat> = Vec::new();
    for p in &ring {
        if !distinct.contains(p) {
            distinct.push(*p);
        }
    }
    if distinct.len() < 3 {
        return Err(GeometryError::EmptyRing);
    }

    let bbox = bounds(&ring);
    let area_m2 = ring_area_m2(&ring);

    let normalized = NormalizedRing { ring, area_m2, bbox };
    if normalized.format_area_ha() == "0.00000000000" {
        return Err(GeometryError::DegenerateArea);
    }
    Ok(normalized)
}

fn bounds(ring: &[LonLat]) -> GeoBounds {
    let mut bbox = GeoBounds {
        min_lon: f64::INFINITY,
        max_lon: f64::NEG_INFINITY,
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
    };
    for p in ring {
        bbox.min_lon = bbox.min_lon.min(p.lon);
        bbox.max_lon = bbox.max_lon.max(p.lon);
        bbox.min_lat = bbox.min_lat.min(p.lat);
        bbox.max_lat = bbox.max_lat.max(p.lat);
    }
    bbox
}

/// Shoelace area over an equirectangular projection about the ring's
/// centroid latitude. One uniform method for every call site, so the
/// stored hectare strings stay comparable across the whole corpus of
/// projects. Winding order is normalized away by taking the absolute
/// value.
fn ring_area_m2(ring: &[LonLat]) -> f64 {
    let lat0 = ring.iter().map(|p| p.lat).sum::<f64>() / ring.len() as f64;
    let lon_scale = METERS_PER_DEGREE * lat0.to_radians().cos();

    let mut doubled = 0.0;
    for i in 0..ring.len() {
        let a = &ring[i];
        let b = &ring[(i + 1) % ring.len()];
        let (xa, ya) = (a.lon * lon_scale, a.lat * METERS_PER_DEGREE);
        let (xb, yb) = (b.lon * lon_scale, b.lat * METERS_PER_DEGREE);
        doubled += xa * yb - xb * ya;
    }
    (doubled / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// A ~100m x 100m square just south of Jakarta, built from the same
    /// degree-to-meter scaling the normalizer uses.
    fn jakarta_square() -> String {
        let lat0: f64 = -6.2;
        let lon0: f64 = 106.8;
        let dlat = 100.0 / METERS_PER_DEGREE;
        let dlon = 100.0 / (METERS_PER_DEGREE * lat0.to_radians().cos());
        format!(
            r#"{{"type":"Polygon","coordinates":[[[{lon0},{lat0}],[{a},{lat0}],[{a},{b}],[{lon0},{b}],[{lon0},{lat0}]]]}}"#,
            a = lon0 + dlon,
            b = lat0 + dlat,
        )
    }

    #[test]
    fn hundred_meter_square_is_one_hectare() {
        let n = normalize(&jakarta_square()).unwrap();
        let ha = n.area_hectares();
        assert!((ha - 1.0).abs() < 1e-3, "got {ha} ha");
    }

    #[test]
    fn unit_degree_square_is_not_degenerate() {
        // Huge in real units even though the planar shoelace of the raw
        // coordinates is tiny.
        let n = normalize(r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}"#)
            .unwrap();
        assert!(n.area_hectares() > 1_000_000.0);
    }

    #[test]
    fn closing_vertex_is_trimmed() {
        let n = normalize(r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[0,0]]]}"#)
            .unwrap();
        assert_eq!(n.ring.len(), 3);
    }

    #[test]
    fn bbox_is_tight() {
        let n = normalize(r#"{"type":"Polygon","coordinates":[[[10,-3],[10,-1],[12,-1],[12,-3],[10,-3]]]}"#)
            .unwrap();
        assert_eq!(n.bbox.min_lon, 10.0);
        assert_eq!(n.bbox.max_lon, 12.0);
        assert_eq!(n.bbox.min_lat, -3.0);
        assert_eq!(n.bbox.max_lat, -1.0);
    }

    #[test]
    fn rejects_two_vertices() {
        let err = normalize(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[0,0]]]}"#)
            .unwrap_err();
        assert_eq!(err, GeometryError::EmptyRing);
    }

    #[test]
    fn rejects_collinear_ring() {
        let err = normalize(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[2,2],[0,0]]]}"#)
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateArea);
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(normalize("not json").unwrap_err(), GeometryError::EmptyRing);
        assert_eq!(
            normalize(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap_err(),
            GeometryError::EmptyRing
        );
        assert_eq!(
            normalize(r#"{"type":"Polygon","coordinates":[]}"#).unwrap_err(),
            GeometryError::EmptyRing
        );
    }

    proptest! {
        /// Area does not depend on which vertex the ring starts at.
        #[test]
        fn area_invariant_under_rotation(rot in 0usize..5) {
            let base = [
                (106.80, -6.20),
                (106.81, -6.20),
                (106.815, -6.19),
                (106.805, -6.185),
                (106.80, -6.19),
            ];
            let rotated: Vec<_> = (0..base.len())
                .map(|i| base[(i + rot) % base.len()])
                .collect();
            let json = ring_json(&rotated);
            let reference = normalize(&ring_json(&base)).unwrap().area_m2;
            let got = normalize(&json).unwrap().area_m2;
            prop_assert!((got - reference).abs() < 1e-6 * reference);
        }

        /// Reversing winding order flips the signed area; the result is
        /// normalized to the same non-negative value.
        #[test]
        fn area_invariant_under_reversal(rot in 0usize..5) {
            let base = [
                (106.80, -6.20),
                (106.81, -6.20),
                (106.815, -6.19),
                (106.805, -6.185),
                (106.80, -6.19),
            ];
            let mut reversed: Vec<_> = (0..base.len())
                .map(|i| base[(i + rot) % base.len()])
                .collect();
            reversed.reverse();
            let reference = normalize(&ring_json(&base)).unwrap().area_m2;
            let got = normalize(&ring_json(&reversed)).unwrap().area_m2;
            prop_assert!((got - reference).abs() < 1e-6 * reference);
        }
    }

    fn ring_json(points: &[(f64, f64)]) -> String {
        let mut coords: Vec<String> = points.iter().map(|(lon, lat)| format!("[{lon},{lat}]")).collect();
        coords.push(coords[0].clone());
        format!(r#"{{"type":"Polygon","coordinates":[[{}]]}}"#, coords.join(","))
    }
}
