use serde::Serialize;

use crate::formats::common::reader::optional_nonzero_u8;
use crate::tables::{FilterType, Lookup, NoteOff, Playback, Priority};

use super::error::KitError;
use super::layout;
use super::names::NameTable;
use super::reader::KitReader;

/// One pad/zone slot in a kit: trigger routing, two sample layers and the
/// MIDI/mix settings block. Either fully populated or the kit decode
/// fails; there is no partial voice.
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    pub trigger: TriggerSpec,
    pub layer_a: Layer,
    pub layer_b: Layer,
    pub settings: VoiceSettings,
}

/// Physical trigger input driving a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputType {
    Kick,
    Snare,
    Tom,
    Crash,
    Ride,
    HiHat,
}

impl InputType {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'K' => Some(Self::Kick),
            b'S' => Some(Self::Snare),
            b'T' => Some(Self::Tom),
            b'C' => Some(Self::Crash),
            b'R' => Some(Self::Ride),
            b'H' => Some(Self::HiHat),
            _ => None,
        }
    }
}

/// Zone on the trigger input (head/rim for pads, bow/edge/bell for
/// cymbals, foot splash for the hat pedal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputPin {
    Head,
    Rim,
    FootSplash,
    Bow,
    Edge,
    Bell,
}

impl InputPin {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'H' => Some(Self::Head),
            b'R' => Some(Self::Rim),
            b'F' => Some(Self::FootSplash),
            b'B' => Some(Self::Bow),
            b'E' => Some(Self::Edge),
            b'D' => Some(Self::Bell),
            _ => None,
        }
    }
}

/// Three raw ASCII bytes, e.g. `K1H` for Kick 1 Head. Unknown letters
/// decode to `None` rather than failing; the raw digit is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerSpec {
    pub input_type: Option<InputType>,
    pub input_index: char,
    pub input_pin: Option<InputPin>,
}

/// One sample assignment with its level/tone/velocity response.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    /// `None` when the layer has no sample assigned (0xFF in the file).
    pub sample_index: Option<u8>,
    /// Resolved from the kit name table; empty when unassigned.
    pub sample_name: String,
    pub level: i8,
    pub pan: i8,
    pub decay: i8,
    pub tune: i8,
    pub fine: i8,
    pub cutoff: i8,
    pub filter_type: Lookup<FilterType>,
    pub vel_decay: i8,
    pub vel_pitch: i8,
    pub vel_filter: i8,
    pub vel_level: i8,
    /// Trailing pad/terminator bytes, kept for round-trippability.
    pub reserved: [u8; 4],
}

/// MIDI and mixing settings for a voice.
///
/// Bytes 7..=10 of the record are ambiguous: some firmware captures
/// mirror the channel/note values into the gate/note-off positions. Gate
/// and note-off are read from their documented slots (9 and 10) and both
/// readings are exposed; do not "fix" one from the other without a
/// hardware-verified fixture.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    pub reverb_send: i8,
    pub fx_send: i8,
    pub priority: Lookup<Priority>,
    /// `None` when the voice is in no mute group (0 in the file).
    pub mute_group: Option<u8>,
    pub playback: Lookup<Playback>,
    pub midi_channel: i8,
    pub midi_note: i8,
    pub midi_gate: i8,
    pub note_off: Lookup<NoteOff>,
}

/// Decode one 80-byte voice record. `index` and `offset` locate the
/// record inside the kit buffer for error context.
pub(crate) fn parse_voice(
    index: usize,
    offset: usize,
    data: &[u8],
    names: &NameTable,
) -> Result<Voice, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::VOICE_SIZE)?;

    let sentinel = reader.read_slice(layout::VOICE_SENTINEL_RANGE)?;
    if sentinel != layout::VOICE_SENTINEL {
        return Err(KitError::VoiceSentinelMismatch {
            voice: index,
            offset,
        });
    }

    let trigger = parse_trigger_spec(reader.read_slice(layout::TRIGGER_RANGE)?);
    let layer_a = parse_layer(reader.read_slice(layout::LAYER_A_RANGE)?, names)?;
    let layer_b = parse_layer(reader.read_slice(layout::LAYER_B_RANGE)?, names)?;
    let settings = parse_voice_settings(reader.read_slice(layout::VOICE_SETTINGS_RANGE)?)?;

    Ok(Voice {
        trigger,
        layer_a,
        layer_b,
        settings,
    })
}

fn parse_trigger_spec(data: &[u8]) -> TriggerSpec {
    TriggerSpec {
        input_type: InputType::from_byte(data[0]),
        input_index: char::from(data[1]),
        input_pin: InputPin::from_byte(data[2]),
    }
}

/// Decode one 20-byte layer record against the shared name table.
///
/// A negative sample index means "no sample assigned". A non-negative
/// index outside the table is a bounds error, not a silent miss.
pub(crate) fn parse_layer(data: &[u8], names: &NameTable) -> Result<Layer, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::LAYER_SIZE)?;

    let raw_index = reader.read_i8(layout::LAYER_SAMPLE_INDEX)?;
    let (sample_index, sample_name) = if raw_index < 0 {
        (None, String::new())
    } else {
        let index = raw_index as u8;
        let name = names
            .get(index as usize)
            .ok_or(KitError::SampleIndexOutOfRange {
                index,
                table_len: names.len(),
            })?;
        (Some(index), name.to_string())
    };

    let mut reserved = [0u8; 4];
    reserved.copy_from_slice(reader.read_slice(layout::LAYER_RESERVED_RANGE)?);

    Ok(Layer {
        sample_index,
        sample_name,
        level: reader.read_i8(layout::LAYER_LEVEL)?,
        pan: reader.read_i8(layout::LAYER_PAN)?,
        decay: reader.read_i8(layout::LAYER_DECAY)?,
        tune: reader.read_i8(layout::LAYER_TUNE)?,
        fine: reader.read_i8(layout::LAYER_FINE)?,
        cutoff: reader.read_i8(layout::LAYER_CUTOFF)?,
        filter_type: Lookup::resolve(reader.read_u8(layout::LAYER_FILTER_TYPE)?),
        vel_decay: reader.read_i8(layout::LAYER_VEL_DECAY)?,
        vel_pitch: reader.read_i8(layout::LAYER_VEL_PITCH)?,
        vel_filter: reader.read_i8(layout::LAYER_VEL_FILTER)?,
        vel_level: reader.read_i8(layout::LAYER_VEL_LEVEL)?,
        reserved,
    })
}

fn parse_voice_settings(data: &[u8]) -> Result<VoiceSettings, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::VOICE_SETTINGS_SIZE)?;

    Ok(VoiceSettings {
        reverb_send: reader.read_i8(layout::SETTINGS_REVERB_SEND)?,
        fx_send: reader.read_i8(layout::SETTINGS_FX_SEND)?,
        priority: Lookup::resolve(reader.read_u8(layout::SETTINGS_PRIORITY)?),
        mute_group: optional_nonzero_u8(reader.read_u8(layout::SETTINGS_MUTE_GROUP)?),
        playback: Lookup::resolve(reader.read_u8(layout::SETTINGS_PLAYBACK)?),
        midi_channel: reader.read_i8(layout::SETTINGS_MIDI_CHANNEL)?,
        midi_note: reader.read_i8(layout::SETTINGS_MIDI_NOTE)?,
        midi_gate: reader.read_i8(layout::SETTINGS_MIDI_GATE)?,
        note_off: Lookup::resolve(reader.read_u8(layout::SETTINGS_NOTE_OFF)?),
    })
}
