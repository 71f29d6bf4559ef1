//! dBASE III attribute file
//!
//! The field descriptors come straight from the shared attribute
//! schema, so the DBF columns can never drift from the PDF attribute
//! table. Character fields are left-justified and space padded to the
//! fixed width; numeric fields are right-justified. The header date is
//! pinned so identical input always produces identical bytes.

use crate::error::PackageError;
use tapak_types::{attribute_rows, DbaseType, PolygonRecord, ATTRIBUTE_SCHEMA};

const DBASE_III: u8 = 0x03;
const DESCRIPTOR_TERMINATOR: u8 = 0x0D;
const EOF: u8 = 0x1A;

/// Pinned header date (year-1900, month, day). The wall clock never
/// enters the artifact.
const HEADER_DATE: [u8; 3] = [124, 1, 1];

/// Serialize the attribute table for the given records.
pub fn write_dbf(records: &[PolygonRecord]) -> Result<Vec<u8>, PackageError> {
    let record_len: usize = 1 + ATTRIBUTE_SCHEMA.iter().map(|f| f.width as usize).sum::<usize>();
    let header_len = 32 + 32 * ATTRIBUTE_SCHEMA.len() + 1;

    let mut out = Vec::with_capacity(header_len + records.len() * record_len + 1);

    // Header.
    out.push(DBASE_III);
    out.extend_from_slice(&HEADER_DATE);
    out.extend_from_slice(&(records.len() as u32).to_le_bytes());
    out.extend_from_slice(&(header_len as u16).to_le_bytes());
    out.extend_from_slice(&(record_len as u16).to_le_bytes());
    out.extend_from_slice(&[0u8; 20]);

    // Field descriptors.
    for field in &ATTRIBUTE_SCHEMA {
        let mut name = [0u8; 11];
        name[..field.name.len()].copy_from_slice(field.name.as_bytes());
        out.extend_from_slice(&name);
        out.push(field.kind.tag());
        out.extend_from_slice(&[0u8; 4]);
        out.push(field.width);
        out.push(field.decimals);
        out.extend_from_slice(&[0u8; 14]);
    }
    out.push(DESCRIPTOR_TERMINATOR);

    // Records.
    for record in records {
        out.push(b' '); // not deleted
        let rows = attribute_rows(record)?;
        for (field, (_, value)) in ATTRIBUTE_SCHEMA.iter().zip(rows) {
            out.extend_from_slice(&encode_field(field.name, field.kind, field.width, &value)?);
        }
    }
    out.push(EOF);

    Ok(out)
}

fn encode_field(
    name: &'static str,
    kind: DbaseType,
    width: u8,
    value: &str,
) -> Result<Vec<u8>, PackageError> {
    let width = width as usize;
    let bytes = value.as_bytes();
    let mut cell = vec![b' '; width];
    match kind {
        DbaseType::Character => {
            // Free-text attributes are length-limited by the caller;
            // anything longer is clipped to the schema width.
            let take = bytes.len().min(width);
            cell[..take].copy_from_slice(&bytes[..take]);
        }
        DbaseType::Numeric => {
            if bytes.len() > width {
                return Err(PackageError::FieldOverflow { field: name, width: width as u8 });
            }
            cell[width - bytes.len()..].copy_from_slice(bytes);
        }
    }
    Ok(cell)
}
