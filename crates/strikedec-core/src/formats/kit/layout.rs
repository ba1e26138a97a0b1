//! Byte layout of a `.skt` kit file.
//!
//! The file is a fixed 52-byte header, a fixed table of 24 voice records
//! of 80 bytes each, then a variable-length name table running to end of
//! buffer. All positions below are fixed offsets; the only self-describing
//! parts of the format are the marker/sentinel byte sequences.

pub const MARKER: &[u8; 4] = b"KIT ";
pub const MARKER_RANGE: std::ops::Range<usize> = 0..4;
pub const HEADER_LEN_RANGE: std::ops::Range<usize> = 4..8;

pub const HEADER_SIZE: usize = 52;
/// Reverb + fx settings block inside the header.
pub const SETTINGS_RANGE: std::ops::Range<usize> = 16..32;

pub const VOICE_COUNT: usize = 24;
pub const VOICE_SIZE: usize = 80;
pub const VOICE_TABLE_SIZE: usize = VOICE_COUNT * VOICE_SIZE;
/// Shortest buffer that can hold the header and the full voice table.
pub const MIN_LEN: usize = HEADER_SIZE + VOICE_TABLE_SIZE;
pub const NAME_TABLE_OFFSET: usize = MIN_LEN;

// Voice record, offsets relative to the 80-byte record.
pub const VOICE_SENTINEL: &[u8; 8] = b"instH\x00\x00\x00";
pub const VOICE_SENTINEL_RANGE: std::ops::Range<usize> = 0..8;
pub const TRIGGER_RANGE: std::ops::Range<usize> = 8..11;
pub const LAYER_A_RANGE: std::ops::Range<usize> = 12..32;
pub const LAYER_B_RANGE: std::ops::Range<usize> = 32..52;
pub const VOICE_SETTINGS_RANGE: std::ops::Range<usize> = 52..80;
pub const LAYER_SIZE: usize = 20;
pub const VOICE_SETTINGS_SIZE: usize = 28;

// Layer record, offsets relative to the 20-byte record.
pub const LAYER_SAMPLE_INDEX: usize = 0;
pub const LAYER_LEVEL: usize = 2;
pub const LAYER_PAN: usize = 3;
pub const LAYER_DECAY: usize = 4;
pub const LAYER_TUNE: usize = 8;
pub const LAYER_FINE: usize = 9;
pub const LAYER_CUTOFF: usize = 10;
pub const LAYER_FILTER_TYPE: usize = 11;
pub const LAYER_VEL_DECAY: usize = 12;
pub const LAYER_VEL_PITCH: usize = 13;
pub const LAYER_VEL_FILTER: usize = 14;
pub const LAYER_VEL_LEVEL: usize = 15;
pub const LAYER_RESERVED_RANGE: std::ops::Range<usize> = 16..20;

// Voice settings record, offsets relative to the 28-byte record.
pub const SETTINGS_REVERB_SEND: usize = 0;
pub const SETTINGS_FX_SEND: usize = 1;
pub const SETTINGS_PRIORITY: usize = 4;
pub const SETTINGS_MUTE_GROUP: usize = 5;
pub const SETTINGS_PLAYBACK: usize = 6;
pub const SETTINGS_MIDI_CHANNEL: usize = 7;
pub const SETTINGS_MIDI_NOTE: usize = 8;
// Ambiguous across firmware captures; see `VoiceSettings` docs.
pub const SETTINGS_MIDI_GATE: usize = 9;
pub const SETTINGS_NOTE_OFF: usize = 10;

// Kit settings block, offsets relative to the 16-byte slice.
pub const REVERB_TYPE: usize = 0;
pub const REVERB_SIZE: usize = 1;
pub const REVERB_COLOR: usize = 2;
pub const REVERB_LEVEL: usize = 3;
pub const FX_TYPE: usize = 4;
pub const FX_LEVEL: usize = 5;
pub const FX_DELAY_LEFT_RANGE: std::ops::Range<usize> = 6..8;
pub const FX_DELAY_RIGHT_RANGE: std::ops::Range<usize> = 8..10;
pub const FX_FEEDBACK_LEFT: usize = 10;
pub const FX_FEEDBACK_RIGHT: usize = 11;
pub const FX_DEPTH: usize = 12;
pub const FX_RATE: usize = 13;
pub const FX_DAMPING: usize = 14;
pub const FX_RESERVED: usize = 15;

// Name table, offsets relative to the trailing slice.
pub const NAME_MARKER: &[u8; 4] = b"str ";
pub const NAME_MARKER_RANGE: std::ops::Range<usize> = 0..4;
pub const NAME_LEN_RANGE: std::ops::Range<usize> = 4..8;
pub const NAME_PAYLOAD_OFFSET: usize = 8;
