use serde::Serialize;

use crate::tables::{FilterType, Lookup};

use super::error::InstrumentError;
use super::layout;
use super::reader::InstrumentReader;

/// A fully decoded instrument: header settings plus the velocity-layered
/// sample table.
#[derive(Debug, Clone, Serialize)]
pub struct InstrumentFile {
    pub settings: InstrumentSettings,
    /// Whether the sample table round-robins within a velocity range.
    pub cycle: bool,
    pub samples: Vec<VelocitySample>,
}

/// Instrument-wide level/tone/velocity response from the header payload.
#[derive(Debug, Clone, Serialize)]
pub struct InstrumentSettings {
    pub group: u8,
    pub level: u8,
    pub pan: i8,
    pub decay: u8,
    pub tune_semitones: i8,
    pub tune_fine: i8,
    pub cutoff: u8,
    pub filter_type: Lookup<FilterType>,
    pub vel_decay: i8,
    pub vel_tune: i8,
    pub vel_filter: i8,
    pub vel_volume: i8,
    /// Header terminator bytes. The value differs across firmware dumps,
    /// so it is preserved opaquely rather than validated.
    pub reserved: [u8; 4],
}

/// One entry in the multi-sample table, covering a MIDI velocity
/// sub-range.
#[derive(Debug, Clone, Serialize)]
pub struct VelocitySample {
    pub sample_index: Option<u8>,
    pub velocity_low: u8,
    pub velocity_high: u8,
    pub play_order: u8,
    pub volume_trim: i8,
}

/// Decode a whole `.sin` buffer.
pub fn parse_instrument(data: &[u8]) -> Result<InstrumentFile, InstrumentError> {
    let reader = InstrumentReader::new(data);
    reader.require_len(layout::MIN_LEN)?;

    let marker = reader.read_slice(layout::MARKER_RANGE)?;
    if marker != layout::MARKER {
        return Err(InstrumentError::MarkerMismatch {
            marker: "inst",
            offset: 0,
        });
    }

    let header_len = reader.read_reversed_u32(layout::HEADER_LEN_RANGE)? as usize;
    let header_end = layout::HEADER_PAYLOAD_OFFSET + header_len;
    let payload = reader.read_slice(layout::HEADER_PAYLOAD_OFFSET..header_end)?;
    let settings = parse_settings(payload)?;

    let msmp = reader.read_slice(layout::MSMP_MARKER_RANGE)?;
    if msmp != layout::MSMP_MARKER {
        return Err(InstrumentError::MarkerMismatch {
            marker: "msmp",
            offset: layout::MSMP_MARKER_RANGE.start,
        });
    }

    let msmp_len = reader.read_reversed_u32(layout::MSMP_LEN_RANGE)?;
    let cycle = match reader.read_u8(layout::CYCLE_MODE_OFFSET)? {
        0 => false,
        1 => true,
        value => return Err(InstrumentError::CycleModeInvalid { value }),
    };
    let sample_count = reader.read_u8(layout::SAMPLE_COUNT_OFFSET)?;
    let record_size = derive_record_size(msmp_len, sample_count)?;

    let mut samples = Vec::with_capacity(sample_count as usize);
    for index in 0..sample_count as usize {
        let start = layout::RECORDS_OFFSET + index * record_size as usize;
        let raw = reader.read_slice(start..start + record_size as usize)?;
        samples.push(parse_velocity_sample(raw)?);
    }

    Ok(InstrumentFile {
        settings,
        cycle,
        samples,
    })
}

/// Derive the per-record width from the sub-header. The table length
/// counts a 4-byte prefix and pads the final record, hence the ceiling
/// division. Only the two known firmware widths are accepted; anything
/// else is an unsupported revision.
fn derive_record_size(msmp_len: u32, sample_count: u8) -> Result<u32, InstrumentError> {
    if sample_count == 0 {
        return Err(InstrumentError::SampleCountZero);
    }
    let table_bytes = msmp_len.saturating_sub(layout::MSMP_PREFIX);
    let size = table_bytes.div_ceil(u32::from(sample_count));
    if !layout::RECORD_SIZES.contains(&size) {
        return Err(InstrumentError::RecordSizeUnsupported { size });
    }
    Ok(size)
}

fn parse_settings(payload: &[u8]) -> Result<InstrumentSettings, InstrumentError> {
    let reader = InstrumentReader::new(payload);
    reader.require_len(layout::SETTINGS_SIZE)?;

    let mut reserved = [0u8; 4];
    reserved.copy_from_slice(reader.read_slice(layout::SETTINGS_TERM_RANGE)?);

    Ok(InstrumentSettings {
        group: reader.read_u8(layout::SETTINGS_GROUP)?,
        level: reader.read_u8(layout::SETTINGS_LEVEL)?,
        pan: reader.read_i8(layout::SETTINGS_PAN)?,
        decay: reader.read_u8(layout::SETTINGS_DECAY)?,
        tune_semitones: reader.read_i8(layout::SETTINGS_TUNE_SEMITONES)?,
        tune_fine: reader.read_i8(layout::SETTINGS_TUNE_FINE)?,
        cutoff: reader.read_u8(layout::SETTINGS_CUTOFF)?,
        filter_type: Lookup::resolve(reader.read_u8(layout::SETTINGS_FILTER_TYPE)?),
        vel_decay: reader.read_i8(layout::SETTINGS_VEL_DECAY)?,
        vel_tune: reader.read_i8(layout::SETTINGS_VEL_TUNE)?,
        vel_filter: reader.read_i8(layout::SETTINGS_VEL_FILTER)?,
        vel_volume: reader.read_i8(layout::SETTINGS_VEL_VOLUME)?,
        reserved,
    })
}

fn parse_velocity_sample(data: &[u8]) -> Result<VelocitySample, InstrumentError> {
    let reader = InstrumentReader::new(data);

    let raw_index = reader.read_i8(layout::RECORD_SAMPLE_INDEX)?;
    let sample_index = if raw_index < 0 {
        None
    } else {
        Some(raw_index as u8)
    };

    Ok(VelocitySample {
        sample_index,
        velocity_low: reader.read_u8(layout::RECORD_VEL_LOW)?,
        velocity_high: reader.read_u8(layout::RECORD_VEL_HIGH)?,
        play_order: reader.read_u8(layout::RECORD_PLAY_ORDER)?,
        volume_trim: reader.read_i8(layout::RECORD_VOLUME_TRIM)?,
    })
}
