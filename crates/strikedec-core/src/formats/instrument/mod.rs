//! Instrument (`.sin`) container decoding.
//!
//! The parser validates the `inst` and `msmp` markers, decodes the header
//! settings, then derives the velocity-record width from the sub-header
//! length and sample count. Revision dispatch is explicit: a derived
//! width outside the known set fails as an unsupported firmware revision
//! instead of being guessed around.
//!
//! Version française (résumé):
//! Le module décode les instruments `.sin` : marqueurs `inst`/`msmp`,
//! réglages d'en-tête, puis table d'échantillons par vélocité. La largeur
//! d'enregistrement est dérivée et validée contre les révisions connues.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::InstrumentError;
pub use parser::{InstrumentFile, InstrumentSettings, VelocitySample, parse_instrument};
