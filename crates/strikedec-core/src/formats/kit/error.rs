use thiserror::Error;

/// Errors raised while decoding a kit file.
///
/// Structural and bounds failures abort the whole kit decode: every read
/// in the format is offset-based, so one malformed fixed-size record
/// invalidates every later offset.
#[derive(Debug, Error)]
pub enum KitError {
    #[error("kit buffer too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("kit marker mismatch at offset 0: expected \"KIT \"")]
    MarkerMismatch,
    #[error("voice {voice} sentinel mismatch at byte offset {offset}")]
    VoiceSentinelMismatch { voice: usize, offset: usize },
    #[error("sample index {index} outside name table of {table_len} entries")]
    SampleIndexOutOfRange { index: u8, table_len: usize },
    #[error("name table marker mismatch: expected \"str \", found {found:02x?}")]
    NameTableMarkerMismatch { found: [u8; 4] },
    #[error("name table entry {entry} is not valid UTF-8")]
    NameNotUtf8 { entry: usize },
}
