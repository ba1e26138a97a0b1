//! Byte layout of a `.sin` instrument file.
//!
//! An `inst` header with a reversed-dword payload length carries the
//! instrument settings; an embedded `msmp` sub-header then declares the
//! velocity sample table. The per-record size is not stored — it is
//! derived from the sub-header length and the sample count, and only the
//! two known firmware record widths are accepted.

pub const MARKER: &[u8; 4] = b"inst";
pub const MARKER_RANGE: std::ops::Range<usize> = 0..4;
pub const HEADER_LEN_RANGE: std::ops::Range<usize> = 4..8;
pub const HEADER_PAYLOAD_OFFSET: usize = 8;

// Settings, offsets relative to the header payload.
pub const SETTINGS_SIZE: usize = 24;
pub const SETTINGS_GROUP: usize = 1;
pub const SETTINGS_LEVEL: usize = 6;
pub const SETTINGS_PAN: usize = 7;
pub const SETTINGS_DECAY: usize = 8;
pub const SETTINGS_TUNE_SEMITONES: usize = 11;
pub const SETTINGS_TUNE_FINE: usize = 12;
pub const SETTINGS_CUTOFF: usize = 13;
pub const SETTINGS_FILTER_TYPE: usize = 14;
pub const SETTINGS_VEL_DECAY: usize = 15;
pub const SETTINGS_VEL_TUNE: usize = 16;
pub const SETTINGS_VEL_FILTER: usize = 17;
pub const SETTINGS_VEL_VOLUME: usize = 18;
pub const SETTINGS_TERM_RANGE: std::ops::Range<usize> = 20..24;

// Sample table sub-header, absolute offsets.
pub const MSMP_MARKER: &[u8; 4] = b"msmp";
pub const MSMP_MARKER_RANGE: std::ops::Range<usize> = 32..36;
pub const MSMP_LEN_RANGE: std::ops::Range<usize> = 36..40;
pub const CYCLE_MODE_OFFSET: usize = 40;
pub const SAMPLE_COUNT_OFFSET: usize = 42;
pub const RECORDS_OFFSET: usize = 44;
/// Sub-header bytes counted inside the declared msmp length but not part
/// of the record table.
pub const MSMP_PREFIX: u32 = 4;
/// Record widths of the known firmware revisions.
pub const RECORD_SIZES: [u32; 2] = [28, 30];

pub const MIN_LEN: usize = RECORDS_OFFSET;

// Velocity sample record, offsets relative to the record.
pub const RECORD_SAMPLE_INDEX: usize = 0;
pub const RECORD_VEL_LOW: usize = 2;
pub const RECORD_VEL_HIGH: usize = 3;
pub const RECORD_PLAY_ORDER: usize = 4;
pub const RECORD_VOLUME_TRIM: usize = 5;
