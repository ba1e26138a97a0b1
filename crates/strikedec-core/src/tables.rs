//! Static code/name tables for the enumerated fields of both formats.
//!
//! The tables are pure data: immutable, bidirectional (code to name and
//! name to code) and free of initialization order concerns. A lookup for
//! a code outside the known set fails with [`UnknownEnumCode`] — callers
//! decide whether that is fatal. Inside decoded records the recoverable
//! form is [`Lookup`], which carries unknown codes as raw numbers instead
//! of aborting the decode.

use serde::Serialize;
use thiserror::Error;

/// A code with no entry in its table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {table} code: {code}")]
pub struct UnknownEnumCode {
    pub table: &'static str,
    pub code: u8,
}

/// Bidirectional code/name mapping implemented by every table enum.
pub trait CodeMap: Sized + Copy + 'static {
    /// Table name used in error messages.
    const TABLE: &'static str;
    /// Every known value, in code order.
    const ALL: &'static [Self];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode>;
    fn code(self) -> u8;
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

/// Resolve a code directly to its display name.
pub fn name_for<T: CodeMap>(code: u8) -> Result<&'static str, UnknownEnumCode> {
    T::from_code(code).map(CodeMap::name)
}

/// Recoverable table lookup: unknown codes are kept as raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Known(T),
    Unknown(u8),
}

impl<T: CodeMap> Lookup<T> {
    pub fn resolve(code: u8) -> Self {
        match T::from_code(code) {
            Ok(value) => Lookup::Known(value),
            Err(_) => Lookup::Unknown(code),
        }
    }

    pub fn known(self) -> Option<T> {
        match self {
            Lookup::Known(value) => Some(value),
            Lookup::Unknown(_) => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Lookup::Known(value) => value.code(),
            Lookup::Unknown(code) => code,
        }
    }
}

/// Kit-level reverb algorithm. 255 is the explicit off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum ReverbType {
    Room1 = 0,
    Room2 = 1,
    Room3 = 2,
    Hall1 = 3,
    Hall2 = 4,
    Hall3 = 5,
    Plate1 = 6,
    Plate2 = 7,
    Chamber = 8,
    Chapel = 9,
    Church = 10,
    Cathedral = 11,
    Arena = 12,
    Spring1 = 13,
    Spring2 = 14,
    Ambience = 15,
    Studio = 16,
    SmallGate = 17,
    BigGate = 18,
    ReverseGate = 19,
    PlateGate = 20,
    Stadium = 21,
    Off = 255,
}

impl CodeMap for ReverbType {
    const TABLE: &'static str = "reverb type";
    const ALL: &'static [Self] = &[
        Self::Room1,
        Self::Room2,
        Self::Room3,
        Self::Hall1,
        Self::Hall2,
        Self::Hall3,
        Self::Plate1,
        Self::Plate2,
        Self::Chamber,
        Self::Chapel,
        Self::Church,
        Self::Cathedral,
        Self::Arena,
        Self::Spring1,
        Self::Spring2,
        Self::Ambience,
        Self::Studio,
        Self::SmallGate,
        Self::BigGate,
        Self::ReverseGate,
        Self::PlateGate,
        Self::Stadium,
        Self::Off,
    ];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or(UnknownEnumCode {
                table: Self::TABLE,
                code,
            })
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Room1 => "Room1",
            Self::Room2 => "Room2",
            Self::Room3 => "Room3",
            Self::Hall1 => "Hall1",
            Self::Hall2 => "Hall2",
            Self::Hall3 => "Hall3",
            Self::Plate1 => "Plate1",
            Self::Plate2 => "Plate2",
            Self::Chamber => "Chamber",
            Self::Chapel => "Chapel",
            Self::Church => "Church",
            Self::Cathedral => "Cathedral",
            Self::Arena => "Arena",
            Self::Spring1 => "Spring1",
            Self::Spring2 => "Spring2",
            Self::Ambience => "Ambience",
            Self::Studio => "Studio",
            Self::SmallGate => "SmallGate",
            Self::BigGate => "BigGate",
            Self::ReverseGate => "ReverseGate",
            Self::PlateGate => "PlateGate",
            Self::Stadium => "Stadium",
            Self::Off => "Off",
        }
    }
}

/// Kit-level effect algorithm. Codes 1, 3, 4 and 13..=15 are pinned by
/// captured kits; 255 is the explicit off state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum FxType {
    MonoFlanger = 0,
    StereoFlanger = 1,
    XoverFlanger = 2,
    MonoChorus1 = 3,
    MonoChorus2 = 4,
    StereoChorus = 5,
    XoverChorus = 6,
    MonoVibrato = 7,
    StereoVibrato = 8,
    MonoDoubler = 9,
    StereoDoubler = 10,
    MonoSlapback = 11,
    StereoSlapback = 12,
    MonoDelay = 13,
    StereoDelay = 14,
    XoverDelay = 15,
    Off = 255,
}

impl CodeMap for FxType {
    const TABLE: &'static str = "fx type";
    const ALL: &'static [Self] = &[
        Self::MonoFlanger,
        Self::StereoFlanger,
        Self::XoverFlanger,
        Self::MonoChorus1,
        Self::MonoChorus2,
        Self::StereoChorus,
        Self::XoverChorus,
        Self::MonoVibrato,
        Self::StereoVibrato,
        Self::MonoDoubler,
        Self::StereoDoubler,
        Self::MonoSlapback,
        Self::StereoSlapback,
        Self::MonoDelay,
        Self::StereoDelay,
        Self::XoverDelay,
        Self::Off,
    ];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or(UnknownEnumCode {
                table: Self::TABLE,
                code,
            })
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::MonoFlanger => "MonoFlanger",
            Self::StereoFlanger => "StereoFlanger",
            Self::XoverFlanger => "XoverFlanger",
            Self::MonoChorus1 => "MonoChorus1",
            Self::MonoChorus2 => "MonoChorus2",
            Self::StereoChorus => "StereoChorus",
            Self::XoverChorus => "XoverChorus",
            Self::MonoVibrato => "MonoVibrato",
            Self::StereoVibrato => "StereoVibrato",
            Self::MonoDoubler => "MonoDoubler",
            Self::StereoDoubler => "StereoDoubler",
            Self::MonoSlapback => "MonoSlapback",
            Self::StereoSlapback => "StereoSlapback",
            Self::MonoDelay => "MonoDelay",
            Self::StereoDelay => "StereoDelay",
            Self::XoverDelay => "XoverDelay",
            Self::Off => "Off",
        }
    }
}

/// MIDI note-off behavior for a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum NoteOff {
    NotSent = 0,
    Sent = 1,
    Alt = 2,
}

impl CodeMap for NoteOff {
    const TABLE: &'static str = "note-off mode";
    const ALL: &'static [Self] = &[Self::NotSent, Self::Sent, Self::Alt];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        match code {
            0 => Ok(Self::NotSent),
            1 => Ok(Self::Sent),
            2 => Ok(Self::Alt),
            _ => Err(UnknownEnumCode {
                table: Self::TABLE,
                code,
            }),
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::NotSent => "NotSent",
            Self::Sent => "Sent",
            Self::Alt => "Alt",
        }
    }
}

/// Voice stealing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Priority {
    Low = 0,
    Med = 1,
    Hi = 2,
}

impl CodeMap for Priority {
    const TABLE: &'static str = "priority";
    const ALL: &'static [Self] = &[Self::Low, Self::Med, Self::Hi];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        match code {
            0 => Ok(Self::Low),
            1 => Ok(Self::Med),
            2 => Ok(Self::Hi),
            _ => Err(UnknownEnumCode {
                table: Self::TABLE,
                code,
            }),
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Med => "Med",
            Self::Hi => "Hi",
        }
    }
}

/// Voice playback mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Playback {
    Poly = 0,
    Mono = 1,
}

impl CodeMap for Playback {
    const TABLE: &'static str = "playback mode";
    const ALL: &'static [Self] = &[Self::Poly, Self::Mono];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        match code {
            0 => Ok(Self::Poly),
            1 => Ok(Self::Mono),
            _ => Err(UnknownEnumCode {
                table: Self::TABLE,
                code,
            }),
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Poly => "Poly",
            Self::Mono => "Mono",
        }
    }
}

/// Velocity-to-filter direction for a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum FilterType {
    Lo = 0,
    Hi = 1,
}

impl CodeMap for FilterType {
    const TABLE: &'static str = "filter type";
    const ALL: &'static [Self] = &[Self::Lo, Self::Hi];

    fn from_code(code: u8) -> Result<Self, UnknownEnumCode> {
        match code {
            0 => Ok(Self::Lo),
            1 => Ok(Self::Hi),
            _ => Err(UnknownEnumCode {
                table: Self::TABLE,
                code,
            }),
        }
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Lo => "Lo",
            Self::Hi => "Hi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverb_table_has_22_named_values_plus_off() {
        assert_eq!(ReverbType::ALL.len(), 23);
        assert_eq!(ReverbType::from_code(255).unwrap(), ReverbType::Off);
    }

    #[test]
    fn fx_table_has_16_named_values_plus_off() {
        assert_eq!(FxType::ALL.len(), 17);
        assert_eq!(FxType::from_code(255).unwrap(), FxType::Off);
    }

    #[test]
    fn fx_codes_match_captured_kits() {
        assert_eq!(FxType::from_code(1).unwrap(), FxType::StereoFlanger);
        assert_eq!(FxType::from_code(3).unwrap(), FxType::MonoChorus1);
        assert_eq!(FxType::from_code(4).unwrap(), FxType::MonoChorus2);
        assert_eq!(FxType::from_code(13).unwrap(), FxType::MonoDelay);
        assert_eq!(FxType::from_code(14).unwrap(), FxType::StereoDelay);
        assert_eq!(FxType::from_code(15).unwrap(), FxType::XoverDelay);
    }

    #[test]
    fn unknown_code_is_an_error_not_a_default() {
        let err = name_for::<FxType>(200).unwrap_err();
        assert_eq!(err, UnknownEnumCode { table: "fx type", code: 200 });
        assert!(err.to_string().contains("unknown fx type code: 200"));
    }

    #[test]
    fn tables_round_trip_code_name_code() {
        fn check<T: CodeMap + PartialEq + std::fmt::Debug>() {
            for &value in T::ALL {
                assert_eq!(T::from_code(value.code()).unwrap(), value);
                assert_eq!(T::from_name(value.name()).unwrap(), value);
            }
        }
        check::<ReverbType>();
        check::<FxType>();
        check::<NoteOff>();
        check::<Priority>();
        check::<Playback>();
        check::<FilterType>();
    }

    #[test]
    fn lookup_keeps_raw_code_for_unknown_values() {
        let known: Lookup<Priority> = Lookup::resolve(2);
        assert_eq!(known, Lookup::Known(Priority::Hi));
        assert_eq!(known.code(), 2);

        let unknown: Lookup<Priority> = Lookup::resolve(9);
        assert_eq!(unknown, Lookup::Unknown(9));
        assert_eq!(unknown.known(), None);
        assert_eq!(unknown.code(), 9);
    }

    #[test]
    fn lookup_serializes_name_or_raw_code() {
        let known: Lookup<ReverbType> = Lookup::resolve(18);
        assert_eq!(serde_json::to_value(known).unwrap(), "BigGate");

        let unknown: Lookup<ReverbType> = Lookup::resolve(99);
        assert_eq!(serde_json::to_value(unknown).unwrap(), 99);
    }
}
