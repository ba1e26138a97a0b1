use thiserror::Error;

/// Errors raised while decoding an instrument file.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("instrument buffer too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("{marker} marker mismatch at byte offset {offset}")]
    MarkerMismatch { marker: &'static str, offset: usize },
    #[error("invalid cycle mode {value}: expected 0 or 1")]
    CycleModeInvalid { value: u8 },
    #[error("sample count is zero")]
    SampleCountZero,
    /// The derived record width is outside the known set. This signals an
    /// unsupported firmware revision, not a corrupt file.
    #[error("unsupported sample record size {size}: not a known firmware revision")]
    RecordSizeUnsupported { size: u32 },
}
