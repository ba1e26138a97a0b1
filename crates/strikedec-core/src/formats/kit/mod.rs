//! Kit (`.skt`) container decoding.
//!
//! A kit file is a 52-byte header, a fixed 24 x 80-byte voice table and a
//! trailing NUL-delimited name table. The container decoder slices the
//! buffer at fixed offsets, decodes the name table first and then each
//! voice with the table injected, so sample references resolve during the
//! voice pass. Sentinel validation is strict: one bad voice record aborts
//! the whole kit with positional context.
//!
//! Version française (résumé):
//! Le module décode les kits `.skt` : en-tête de 52 octets, table fixe de
//! 24 voix de 80 octets, puis table de noms terminée par NUL. La table de
//! noms est décodée avant les voix; une sentinelle invalide interrompt le
//! décodage complet avec sa position.

pub mod error;
pub mod layout;
pub mod names;
pub mod parser;
pub mod reader;
pub mod settings;
pub mod voice;

pub use error::KitError;
pub use names::NameTable;
pub use parser::{Kit, parse_kit};
pub use settings::{FxSettings, KitSettings, ReverbSettings};
pub use voice::{InputPin, InputType, Layer, TriggerSpec, Voice, VoiceSettings};
