//! ESRI shapefile main file and index
//!
//! Fixed-layout binary per the ESRI whitepaper: a 100-byte header with
//! mixed endianness, then one record per feature. Only shape type 5
//! (Polygon) is ever written. Outer rings must wind clockwise, so
//! counter-clockwise input rings are reversed before serialization.

use tapak_geo::{GeoBounds, LonLat};

const FILE_CODE: i32 = 9994;
const VERSION: i32 = 1000;
const SHAPE_POLYGON: i32 = 5;

/// One feature's closed outer ring, ready to serialize.
pub struct ShpFeature {
    pub ring: Vec<LonLat>,
    pub bbox: GeoBounds,
}

impl ShpFeature {
    /// Build from an open normalized ring: enforce clockwise winding
    /// and append the explicit closing vertex.
    pub fn from_open_ring(open: &[LonLat], bbox: GeoBounds) -> Self {
        let mut ring: Vec<LonLat> = open.to_vec();
        if planar_signed_area(&ring) > 0.0 {
            ring.reverse();
        }
        if let Some(first) = ring.first().copied() {
            ring.push(first);
        }
        Self { ring, bbox }
    }

    /// Record content length in bytes (shape type + box + counts +
    /// parts + points).
    fn content_len(&self) -> usize {
        4 + 32 + 4 + 4 + 4 + self.ring.len() * 16
    }
}

/// Signed planar shoelace over raw decimal degrees. Positive means
/// counter-clockwise in conventional axis orientation.
fn planar_signed_area(ring: &[LonLat]) -> f64 {
    let mut doubled = 0.0;
    for i in 0..ring.len() {
        let a = &ring[i];
        let b = &ring[(i + 1) % ring.len()];
        doubled += a.lon * b.lat - b.lon * a.lat;
    }
    doubled / 2.0
}

/// Serialize the .shp main file and the matching .shx index.
pub fn write_shp_shx(features: &[ShpFeature]) -> (Vec<u8>, Vec<u8>) {
    let bbox = union_bbox(features);

    let mut shp = Vec::new();
    let mut shx = Vec::new();

    let total_content: usize = features.iter().map(|f| 8 + f.content_len()).sum();
    write_header(&mut shp, (100 + total_content) / 2, &bbox);
    write_header(&mut shx, (100 + features.len() * 8) / 2, &bbox);

    let mut offset_words = 50; // header is 100 bytes = 50 words
    for (index, feature) in features.iter().enumerate() {
        let content_words = feature.content_len() / 2;

        // Index entry: record offset and content length, both in words.
        push_i32_be(&mut shx, offset_words as i32);
        push_i32_be(&mut shx, content_words as i32);

        // Record header: 1-based record number, content length.
        push_i32_be(&mut shp, (index + 1) as i32);
        push_i32_be(&mut shp, content_words as i32);

        // Record content.
        push_i32_le(&mut shp, SHAPE_POLYGON);
        push_f64_le(&mut shp, feature.bbox.min_lon);
        push_f64_le(&mut shp, feature.bbox.min_lat);
        push_f64_le(&mut shp, feature.bbox.max_lon);
        push_f64_le(&mut shp, feature.bbox.max_lat);
        push_i32_le(&mut shp, 1); // one part
        push_i32_le(&mut shp, feature.ring.len() as i32);
        push_i32_le(&mut shp, 0); // part start index
        for p in &feature.ring {
            push_f64_le(&mut shp, p.lon);
            push_f64_le(&mut shp, p.lat);
        }

        offset_words += 4 + content_words;
    }

    (shp, shx)
}

fn union_bbox(features: &[ShpFeature]) -> GeoBounds {
    let mut bbox = GeoBounds {
        min_lon: f64::INFINITY,
        max_lon: f64::NEG_INFINITY,
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
    };
    for f in features {
        bbox.min_lon = bbox.min_lon.min(f.bbox.min_lon);
        bbox.max_lon = bbox.max_lon.max(f.bbox.max_lon);
        bbox.min_lat = bbox.min_lat.min(f.bbox.min_lat);
        bbox.max_lat = bbox.max_lat.max(f.bbox.max_lat);
    }
    bbox
}

fn write_header(out: &mut Vec<u8>, file_len_words: usize, bbox: &GeoBounds) {
    push_i32_be(out, FILE_CODE);
    for _ in 0..5 {
        push_i32_be(out, 0);
    }
    push_i32_be(out, file_len_words as i32);
    push_i32_le(out, VERSION);
    push_i32_le(out, SHAPE_POLYGON);
    push_f64_le(out, bbox.min_lon);
    push_f64_le(out, bbox.min_lat);
    push_f64_le(out, bbox.max_lon);
    push_f64_le(out, bbox.max_lat);
    // Z and M ranges, unused for plain polygons.
    for _ in 0..4 {
        push_f64_le(out, 0.0);
    }
}

pub(crate) fn push_i32_be(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_be_bytes());
}

pub(crate) fn push_i32_le(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn push_f64_le(out: &mut Vec<u8>, v: f64) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triangle() -> ShpFeature {
        // Counter-clockwise input; the writer must flip it.
        let ring = vec![
            LonLat { lon: 106.8, lat: -6.2 },
            LonLat { lon: 106.9, lat: -6.2 },
            LonLat { lon: 106.85, lat: -6.1 },
        ];
        let bbox = GeoBounds { min_lon: 106.8, max_lon: 106.9, min_lat: -6.2, max_lat: -6.1 };
        ShpFeature::from_open_ring(&ring, bbox)
    }

    #[test]
    fn ring_is_closed_and_clockwise() {
        let f = triangle();
        assert_eq!(f.ring.len(), 4);
        assert_eq!(f.ring.first(), f.ring.last());
        assert!(planar_signed_area(&f.ring[..3]) < 0.0);
    }

    #[test]
    fn header_layout() {
        let (shp, shx) = write_shp_shx(&[triangle()]);
        // File code and version at their mandated offsets.
        assert_eq!(&shp[0..4], &9994i32.to_be_bytes());
        assert_eq!(&shp[28..32], &1000i32.to_le_bytes());
        assert_eq!(&shp[32..36], &5i32.to_le_bytes());
        // Declared length matches actual size (in 16-bit words).
        let words = i32::from_be_bytes(shp[24..28].try_into().unwrap()) as usize;
        assert_eq!(words * 2, shp.len());
        let shx_words = i32::from_be_bytes(shx[24..28].try_into().unwrap()) as usize;
        assert_eq!(shx_words * 2, shx.len());
        assert_eq!(shx.len(), 108);
    }

    #[test]
    fn record_numbers_are_one_based() {
        let (shp, _) = write_shp_shx(&[triangle(), triangle()]);
        assert_eq!(&shp[100..104], &1i32.to_be_bytes());
        let second = 100 + 8 + (4 + 32 + 12 + 4 * 16);
        assert_eq!(&shp[second..second + 4], &2i32.to_be_bytes());
    }
}
