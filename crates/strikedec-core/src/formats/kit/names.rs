use serde::Serialize;

use super::error::KitError;
use super::layout;
use super::reader::KitReader;

/// Trailing table of sample/instrument names, referenced by index from
/// the voice layers. Built once per kit and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct NameTable {
    names: Vec<String>,
    /// Length field as written in the file. Firmware revisions encode it
    /// inconsistently, so it is recorded but never trusted to bound the
    /// scan.
    declared_len: u32,
}

impl NameTable {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn declared_len(&self) -> u32 {
        self.declared_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Decode the trailing name table slice.
///
/// Layout: 4-byte `str ` marker, reversed-byte length field, then the
/// string payload from offset 8 to end of buffer. Strings are split on
/// single NUL delimiters; empty fragments are dropped. The scan always
/// runs to end-of-buffer regardless of the declared length.
pub fn parse_name_table(data: &[u8]) -> Result<NameTable, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::NAME_PAYLOAD_OFFSET)?;

    let marker = reader.read_slice(layout::NAME_MARKER_RANGE)?;
    if marker != layout::NAME_MARKER {
        let mut found = [0u8; 4];
        found.copy_from_slice(marker);
        return Err(KitError::NameTableMarkerMismatch { found });
    }

    let declared_len = reader.read_reversed_u32(layout::NAME_LEN_RANGE)?;
    let payload = &data[layout::NAME_PAYLOAD_OFFSET..];

    let mut names = Vec::new();
    for (entry, fragment) in payload.split(|&b| b == 0).enumerate() {
        if fragment.is_empty() {
            continue;
        }
        let name = std::str::from_utf8(fragment)
            .map_err(|_| KitError::NameNotUtf8 { entry })?
            .to_string();
        names.push(name);
    }

    Ok(NameTable {
        names,
        declared_len,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_name_table;
    use crate::formats::kit::error::KitError;

    fn table_bytes(names: &[&str]) -> Vec<u8> {
        let payload: Vec<u8> = names
            .iter()
            .flat_map(|n| n.bytes().chain(std::iter::once(0)))
            .collect();
        let mut data = Vec::new();
        data.extend_from_slice(b"str ");
        data.extend_from_slice(&[payload.len() as u8, 0, 0, 0]);
        data.extend_from_slice(&payload);
        data
    }

    #[test]
    fn three_names_round_trip() {
        let data = table_bytes(&["KickDeep", "SnareTight", "RideWash"]);
        let table = parse_name_table(&data).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("KickDeep"));
        assert_eq!(table.get(1), Some("SnareTight"));
        assert_eq!(table.get(2), Some("RideWash"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn consecutive_delimiters_drop_empty_fragments() {
        let mut data = Vec::new();
        data.extend_from_slice(b"str ");
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(b"\0\0A\0\0B\0");
        let table = parse_name_table(&data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), Some("A"));
        assert_eq!(table.get(1), Some("B"));
    }

    #[test]
    fn declared_length_is_informational_only() {
        let mut data = table_bytes(&["One", "Two"]);
        // Bogus declared length: the scan must still reach end of buffer.
        data[4] = 1;
        let table = parse_name_table(&data).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.declared_len(), 1);
    }

    #[test]
    fn utf8_names_survive_exactly() {
        let data = table_bytes(&["Caisse claire", "Grosse caisse"]);
        let table = parse_name_table(&data).unwrap();
        assert_eq!(table.get(0), Some("Caisse claire"));
        assert_eq!(table.get(1), Some("Grosse caisse"));
    }

    #[test]
    fn bad_marker_is_fatal() {
        let mut data = table_bytes(&["A"]);
        data[0] = b'x';
        let err = parse_name_table(&data).unwrap_err();
        assert!(matches!(err, KitError::NameTableMarkerMismatch { .. }));
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let mut data = table_bytes(&["AB"]);
        data[8] = 0xC0;
        let err = parse_name_table(&data).unwrap_err();
        assert!(matches!(err, KitError::NameNotUtf8 { entry: 0 }));
    }

    #[test]
    fn short_slice_is_too_short() {
        let err = parse_name_table(b"str").unwrap_err();
        assert!(matches!(err, KitError::TooShort { .. }));
    }
}
