use serde::Serialize;

use super::error::KitError;
use super::layout;
use super::names::{NameTable, parse_name_table};
use super::reader::KitReader;
use super::settings::{KitSettings, parse_kit_settings};
use super::voice::{Voice, parse_voice};

/// A fully decoded kit: kit-wide settings, the fixed table of 24 voices
/// and the trailing name table. Immutable after the decode call; every
/// child structure is owned exclusively by the kit.
#[derive(Debug, Clone, Serialize)]
pub struct Kit {
    /// Header length field as written in the file (44 in every capture).
    pub header_len: u32,
    pub settings: KitSettings,
    pub voices: Vec<Voice>,
    pub names: NameTable,
}

/// Decode a whole `.skt` buffer.
///
/// Slicing order is load-bearing: the name table is decoded before any
/// voice, because layers resolve their sample references against it.
pub fn parse_kit(data: &[u8]) -> Result<Kit, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::MIN_LEN)?;

    let marker = reader.read_slice(layout::MARKER_RANGE)?;
    if marker != layout::MARKER {
        return Err(KitError::MarkerMismatch);
    }
    let header_len = reader.read_reversed_u32(layout::HEADER_LEN_RANGE)?;

    let header = reader.read_slice(0..layout::HEADER_SIZE)?;
    let settings = parse_kit_settings(&header[layout::SETTINGS_RANGE])?;

    let names = parse_name_table(&data[layout::NAME_TABLE_OFFSET..])?;

    let mut voices = Vec::with_capacity(layout::VOICE_COUNT);
    for index in 0..layout::VOICE_COUNT {
        let offset = layout::HEADER_SIZE + index * layout::VOICE_SIZE;
        let raw = reader.read_slice(offset..offset + layout::VOICE_SIZE)?;
        voices.push(parse_voice(index, offset, raw, &names)?);
    }

    Ok(Kit {
        header_len,
        settings,
        voices,
        names,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_kit;
    use crate::formats::kit::error::KitError;
    use crate::formats::kit::layout;

    pub(crate) fn kit_fixture(names: &[&str]) -> Vec<u8> {
        let mut data = vec![0u8; layout::MIN_LEN];
        data[layout::MARKER_RANGE].copy_from_slice(layout::MARKER);
        data[layout::HEADER_LEN_RANGE].copy_from_slice(&[0x2C, 0x00, 0x00, 0x00]);
        for index in 0..layout::VOICE_COUNT {
            let offset = layout::HEADER_SIZE + index * layout::VOICE_SIZE;
            data[offset..offset + 8].copy_from_slice(layout::VOICE_SENTINEL);
            data[offset + layout::TRIGGER_RANGE.start..offset + layout::TRIGGER_RANGE.end]
                .copy_from_slice(b"T1H");
            // Leave both layers unassigned by default.
            data[offset + layout::LAYER_A_RANGE.start] = 0xFF;
            data[offset + layout::LAYER_B_RANGE.start] = 0xFF;
        }
        data.extend_from_slice(b"str ");
        data.extend_from_slice(&[0, 0, 0, 0]);
        for name in names {
            data.extend_from_slice(name.as_bytes());
            data.push(0);
        }
        data
    }

    #[test]
    fn kit_always_has_24_voices() {
        let kit = parse_kit(&kit_fixture(&["A", "B"])).unwrap();
        assert_eq!(kit.voices.len(), layout::VOICE_COUNT);
        assert_eq!(kit.names.len(), 2);
        assert_eq!(kit.header_len, 44);
    }

    #[test]
    fn empty_name_table_still_yields_24_voices() {
        let kit = parse_kit(&kit_fixture(&[])).unwrap();
        assert_eq!(kit.voices.len(), 24);
        assert!(kit.names.is_empty());
    }

    #[test]
    fn short_buffer_is_fatal() {
        let data = vec![0u8; layout::MIN_LEN - 1];
        let err = parse_kit(&data).unwrap_err();
        assert!(matches!(err, KitError::TooShort { .. }));
    }

    #[test]
    fn bad_kit_marker_is_fatal() {
        let mut data = kit_fixture(&[]);
        data[0] = b'X';
        let err = parse_kit(&data).unwrap_err();
        assert!(matches!(err, KitError::MarkerMismatch));
    }

    #[test]
    fn corrupt_voice_sentinel_aborts_whole_kit() {
        let mut data = kit_fixture(&["A"]);
        let offset = layout::HEADER_SIZE + 7 * layout::VOICE_SIZE;
        data[offset + 2] ^= 0x01;
        let err = parse_kit(&data).unwrap_err();
        match err {
            KitError::VoiceSentinelMismatch {
                voice,
                offset: reported,
            } => {
                assert_eq!(voice, 7);
                assert_eq!(reported, offset);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn layer_sample_reference_resolves_through_names() {
        let mut data = kit_fixture(&["KickDeep", "SnareTight"]);
        let offset = layout::HEADER_SIZE + layout::LAYER_A_RANGE.start;
        data[offset] = 1;
        let kit = parse_kit(&data).unwrap();
        assert_eq!(kit.voices[0].layer_a.sample_name, "SnareTight");
    }
}
