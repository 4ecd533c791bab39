// DAWG binary format: header parsing, validation and writing.
//
// Layout:
//   "DAWG" ':' <startIndex> ':' <numBytes> ':' <numBytes bytes of edges>
// Both integers are ASCII decimal. Edge records are big-endian.

use std::io::{self, Read, Write};

use crate::DawgError;

/// Magic tag at the start of every binary dictionary.
pub const MAGIC: &[u8; 4] = b"DAWG";

/// Field separator in the ASCII header.
pub const SEPARATOR: u8 = b':';

const START_FIELD: &str = "start index";
const BYTES_FIELD: &str = "edge byte count";

/// Parsed DAWG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DawgHeader {
    /// Index of the first edge of the root sibling run.
    pub start_index: u64,
    /// Length in bytes of the edge data that follows the header.
    pub num_bytes: u64,
}

/// Returns `true` if `prefix` starts with the binary magic tag.
pub fn is_dawg_magic(prefix: &[u8]) -> bool {
    prefix.starts_with(MAGIC)
}

/// Read and validate a DAWG header, leaving `reader` positioned at the first
/// byte of edge data.
///
/// Bytes are pulled one at a time, so callers should hand in a buffered
/// reader.
pub fn read_header<R: Read + ?Sized>(reader: &mut R) -> Result<DawgHeader, DawgError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => DawgError::TruncatedHeader { field: "magic" },
        _ => DawgError::Io(e),
    })?;
    if &magic != MAGIC {
        return Err(DawgError::InvalidMagic { found: magic });
    }

    expect_separator(reader, START_FIELD)?;
    let start_index = read_field(reader, START_FIELD)?;
    let num_bytes = read_field(reader, BYTES_FIELD)?;

    Ok(DawgHeader {
        start_index,
        num_bytes,
    })
}

/// Parse a header from an in-memory buffer.
///
/// Returns the header and the offset of the first edge byte.
pub fn parse_header(data: &[u8]) -> Result<(DawgHeader, usize), DawgError> {
    let mut cursor = io::Cursor::new(data);
    let header = read_header(&mut cursor)?;
    Ok((header, cursor.position() as usize))
}

/// Write a header in the exact form [`read_header`] accepts.
pub fn write_header<W: Write + ?Sized>(writer: &mut W, header: &DawgHeader) -> io::Result<()> {
    write!(writer, "DAWG:{}:{}:", header.start_index, header.num_bytes)
}

fn read_byte<R: Read + ?Sized>(reader: &mut R, field: &'static str) -> Result<u8, DawgError> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Err(DawgError::TruncatedHeader { field }),
            Ok(_) => return Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DawgError::Io(e)),
        }
    }
}

fn expect_separator<R: Read + ?Sized>(
    reader: &mut R,
    field: &'static str,
) -> Result<(), DawgError> {
    let found = read_byte(reader, field)?;
    if found != SEPARATOR {
        return Err(DawgError::MissingSeparator { field, found });
    }
    Ok(())
}

/// Read one decimal field and the `:` that terminates it.
fn read_field<R: Read + ?Sized>(reader: &mut R, field: &'static str) -> Result<u64, DawgError> {
    let mut first = read_byte(reader, field)?;
    let negative = first == b'-';
    if negative {
        first = read_byte(reader, field)?;
    }

    let mut value: u64 = 0;
    let mut digits = 0usize;
    let mut byte = first;
    loop {
        match byte {
            b'0'..=b'9' => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                    .ok_or(DawgError::MalformedInteger { field })?;
                digits += 1;
            }
            SEPARATOR if digits > 0 => break,
            _ => return Err(DawgError::MalformedInteger { field }),
        }
        byte = read_byte(reader, field)?;
    }

    // "-0" is still a sign the producer did not intend
    if negative {
        return Err(DawgError::NegativeValue { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_header() {
        let (header, offset) = parse_header(b"DAWG:12:400:rest").unwrap();
        assert_eq!(header.start_index, 12);
        assert_eq!(header.num_bytes, 400);
        // "DAWG:12:400:" is 12 bytes; "rest" follows
        assert_eq!(offset, 12);
    }

    #[test]
    fn parse_zero_fields() {
        let (header, offset) = parse_header(b"DAWG:0:0:").unwrap();
        assert_eq!(header, DawgHeader { start_index: 0, num_bytes: 0 });
        assert_eq!(offset, 9);
    }

    #[test]
    fn header_with_trailing_data() {
        let mut data = b"DAWG:0:8:".to_vec();
        data.extend_from_slice(&[0xFF; 8]);
        let (header, offset) = parse_header(&data).unwrap();
        assert_eq!(header.num_bytes, 8);
        assert_eq!(&data[offset..], &[0xFF; 8]);
    }

    #[test]
    fn reject_invalid_magic() {
        let err = parse_header(b"DAWN:0:0:").unwrap_err();
        assert!(matches!(err, DawgError::InvalidMagic { found } if &found == b"DAWN"));
    }

    #[test]
    fn reject_too_short() {
        let err = parse_header(b"DA").unwrap_err();
        assert!(matches!(err, DawgError::TruncatedHeader { field: "magic" }));
    }

    #[test]
    fn reject_missing_separator() {
        let err = parse_header(b"DAWG;0:0:").unwrap_err();
        assert!(matches!(err, DawgError::MissingSeparator { found: b';', .. }));
    }

    #[test]
    fn reject_negative_start() {
        let err = parse_header(b"DAWG:-3:8:").unwrap_err();
        assert!(matches!(err, DawgError::NegativeValue { field: START_FIELD }));
    }

    #[test]
    fn reject_negative_byte_count() {
        let err = parse_header(b"DAWG:0:-8:").unwrap_err();
        assert!(matches!(err, DawgError::NegativeValue { field: BYTES_FIELD }));
    }

    #[test]
    fn reject_non_digit() {
        let err = parse_header(b"DAWG:1x:8:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedInteger { field: START_FIELD }));
    }

    #[test]
    fn reject_empty_field() {
        let err = parse_header(b"DAWG:0::").unwrap_err();
        assert!(matches!(err, DawgError::MalformedInteger { field: BYTES_FIELD }));
    }

    #[test]
    fn reject_lone_minus() {
        let err = parse_header(b"DAWG:-:8:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedInteger { .. }));
    }

    #[test]
    fn reject_overflow() {
        let err = parse_header(b"DAWG:0:99999999999999999999999:").unwrap_err();
        assert!(matches!(err, DawgError::MalformedInteger { field: BYTES_FIELD }));
    }

    #[test]
    fn reject_header_cut_mid_field() {
        let err = parse_header(b"DAWG:0:12").unwrap_err();
        assert!(matches!(err, DawgError::TruncatedHeader { field: BYTES_FIELD }));
    }

    #[test]
    fn write_then_read() {
        let header = DawgHeader { start_index: 7, num_bytes: 1024 };
        let mut buf = Vec::new();
        write_header(&mut buf, &header).unwrap();
        assert_eq!(buf, b"DAWG:7:1024:");
        assert_eq!(parse_header(&buf).unwrap().0, header);
    }

    #[test]
    fn magic_detection() {
        assert!(is_dawg_magic(b"DAWG:0:0:"));
        assert!(is_dawg_magic(b"DAWG"));
        assert!(!is_dawg_magic(b"DAW"));
        assert!(!is_dawg_magic(b"dawg"));
        assert!(!is_dawg_magic(b"apple\n"));
    }
}
