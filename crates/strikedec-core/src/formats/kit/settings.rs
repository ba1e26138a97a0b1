use serde::Serialize;

use crate::tables::{FxType, Lookup, ReverbType};

use super::error::KitError;
use super::layout;
use super::reader::KitReader;

/// Kit-wide reverb and effect sends, decoded from the 16-byte settings
/// block inside the kit header.
#[derive(Debug, Clone, Serialize)]
pub struct KitSettings {
    pub reverb: ReverbSettings,
    pub fx: FxSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReverbSettings {
    pub reverb_type: Lookup<ReverbType>,
    pub size: u8,
    pub color: u8,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct FxSettings {
    pub fx_type: Lookup<FxType>,
    pub level: u8,
    /// Delay times hold 12-bit values stored as plain little-endian u16 —
    /// the one multi-byte field family in the format that is NOT the
    /// reversed encoding.
    pub delay_left: u16,
    pub delay_right: u16,
    pub feedback_left: u8,
    pub feedback_right: u8,
    pub depth: u8,
    pub rate: u8,
    pub damping: i8,
    /// Meaning unknown; preserved so a future encoder can round-trip it.
    pub reserved: u8,
}

pub fn parse_kit_settings(data: &[u8]) -> Result<KitSettings, KitError> {
    let reader = KitReader::new(data);
    reader.require_len(layout::SETTINGS_RANGE.len())?;

    let reverb = ReverbSettings {
        reverb_type: Lookup::resolve(reader.read_u8(layout::REVERB_TYPE)?),
        size: reader.read_u8(layout::REVERB_SIZE)?,
        color: reader.read_u8(layout::REVERB_COLOR)?,
        level: reader.read_u8(layout::REVERB_LEVEL)?,
    };

    let fx = FxSettings {
        fx_type: Lookup::resolve(reader.read_u8(layout::FX_TYPE)?),
        level: reader.read_u8(layout::FX_LEVEL)?,
        delay_left: reader.read_u16_le(layout::FX_DELAY_LEFT_RANGE)?,
        delay_right: reader.read_u16_le(layout::FX_DELAY_RIGHT_RANGE)?,
        feedback_left: reader.read_u8(layout::FX_FEEDBACK_LEFT)?,
        feedback_right: reader.read_u8(layout::FX_FEEDBACK_RIGHT)?,
        depth: reader.read_u8(layout::FX_DEPTH)?,
        rate: reader.read_u8(layout::FX_RATE)?,
        damping: reader.read_i8(layout::FX_DAMPING)?,
        reserved: reader.read_u8(layout::FX_RESERVED)?,
    };

    Ok(KitSettings { reverb, fx })
}

#[cfg(test)]
mod tests {
    use super::parse_kit_settings;
    use crate::tables::{FxType, Lookup, ReverbType};

    #[test]
    fn decode_big_gate_reverb() {
        let mut data = [0u8; 16];
        data[0] = ReverbType::BigGate as u8;
        data[1] = 75; // size
        data[2] = 50; // color
        data[3] = 32; // level
        let settings = parse_kit_settings(&data).unwrap();
        assert_eq!(
            settings.reverb.reverb_type,
            Lookup::Known(ReverbType::BigGate)
        );
        assert_eq!(settings.reverb.size, 75);
        assert_eq!(settings.reverb.color, 50);
        assert_eq!(settings.reverb.level, 32);
    }

    #[test]
    fn decode_stereo_flanger_fx_block() {
        // Captured fx sub-block: 01 63 01 00 01 00 58 55 46 1c 00 00
        let fx_block = [
            0x01, 0x63, 0x01, 0x00, 0x01, 0x00, 0x58, 0x55, 0x46, 0x1C, 0x00, 0x00,
        ];
        let mut data = [0u8; 16];
        data[4..16].copy_from_slice(&fx_block);
        let fx = parse_kit_settings(&data).unwrap().fx;
        assert_eq!(fx.fx_type, Lookup::Known(FxType::StereoFlanger));
        assert_eq!(fx.level, 99);
        assert_eq!(fx.delay_left, 1);
        assert_eq!(fx.delay_right, 1);
        assert_eq!(fx.feedback_left, 88);
        assert_eq!(fx.feedback_right, 85);
        assert_eq!(fx.depth, 70);
        assert_eq!(fx.rate, 28);
        assert_eq!(fx.damping, 0);
        assert_eq!(fx.reserved, 0);
    }

    #[test]
    fn decode_xover_delay_fx_block() {
        // Captured fx sub-block: 0f 63 a4 01 44 02 45 47 00 00 2a 00
        let fx_block = [
            0x0F, 0x63, 0xA4, 0x01, 0x44, 0x02, 0x45, 0x47, 0x00, 0x00, 0x2A, 0x00,
        ];
        let mut data = [0u8; 16];
        data[4..16].copy_from_slice(&fx_block);
        let fx = parse_kit_settings(&data).unwrap().fx;
        assert_eq!(fx.fx_type, Lookup::Known(FxType::XoverDelay));
        assert_eq!(fx.delay_left, 420);
        assert_eq!(fx.delay_right, 580);
        assert_eq!(fx.feedback_left, 69);
        assert_eq!(fx.feedback_right, 71);
        assert_eq!(fx.damping, 42);
    }

    #[test]
    fn negative_damping_decodes_signed() {
        // d9 = 217 -> -39
        let fx_block = [
            0x0E, 0x63, 0x20, 0x03, 0x2C, 0x01, 0x37, 0x4E, 0x00, 0x00, 0xD9, 0x00,
        ];
        let mut data = [0u8; 16];
        data[4..16].copy_from_slice(&fx_block);
        let fx = parse_kit_settings(&data).unwrap().fx;
        assert_eq!(fx.fx_type, Lookup::Known(FxType::StereoDelay));
        assert_eq!(fx.delay_left, 800);
        assert_eq!(fx.delay_right, 300);
        assert_eq!(fx.damping, -39);
    }

    #[test]
    fn unknown_fx_code_is_carried_not_fatal() {
        let mut data = [0u8; 16];
        data[4] = 0x30;
        let fx = parse_kit_settings(&data).unwrap().fx;
        assert_eq!(fx.fx_type, Lookup::Unknown(0x30));
    }
}
