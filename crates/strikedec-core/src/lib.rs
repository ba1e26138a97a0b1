//! Strikedec core library: decoders for the Strike drum-module binary
//! containers.
//!
//! This crate turns raw `.skt` (kit) and `.sin` (instrument) byte buffers
//! into structured, validated values. Decoding is byte-oriented and
//! side-effect free; all file access stays with the caller. Format
//! conventions are captured in per-format readers so parsers stay minimal
//! and consistent, and byte positions live in `layout` modules as the
//! single source of truth.
//!
//! Invariants:
//! - A decoded kit always holds exactly 24 voices.
//! - The name table is decoded before any voice; layers resolve sample
//!   references against the completed table.
//! - Structural and bounds failures abort the whole container decode;
//!   enum-lookup misses degrade to raw codes locally.
//! - Every decode call is a pure function of one immutable buffer, so
//!   batch decoding is parallel at the caller's discretion.
//!
//! Version française (résumé):
//! Cette crate décode les conteneurs binaires du module Strike : kits
//! `.skt` et instruments `.sin`. Le décodage est pur et sans E/S; les
//! positions d'octets vivent dans `layout`, les conventions dans les
//! `reader`. Garanties : 24 voix par kit, table de noms décodée avant les
//! voix, erreurs structurelles fatales pour tout le conteneur.
//!
//! # Examples
//! ```no_run
//! use strikedec_core::parse_kit;
//!
//! let data = std::fs::read("909Kit.skt")?;
//! let kit = parse_kit(&data)?;
//! assert_eq!(kit.voices.len(), 24);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod formats;
pub mod tables;

pub use formats::instrument::{
    InstrumentError, InstrumentFile, InstrumentSettings, VelocitySample, parse_instrument,
};
pub use formats::kit::{
    FxSettings, InputPin, InputType, Kit, KitError, KitSettings, Layer, NameTable,
    ReverbSettings, TriggerSpec, Voice, VoiceSettings, parse_kit,
};
pub use tables::{
    CodeMap, FilterType, FxType, Lookup, NoteOff, Playback, Priority, ReverbType,
    UnknownEnumCode, name_for,
};
