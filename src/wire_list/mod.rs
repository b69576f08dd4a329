//! JSON Import/Export für Leitungslisten.
//!
//! Das Dokument enthält pro Leitung ID, Ports, Wegpunkte, Ebenenwechsel,
//! Klassifizierung und die abgeleitete Länge (nur für Abnehmer, beim Import
//! ignoriert).

mod document;
pub mod parser;
pub mod writer;

pub use parser::{parse_wire_list, read_wire_list_file};
pub use writer::{write_wire_list, write_wire_list_file};

/// Aktuelle Formatversion.
pub const WIRE_LIST_VERSION: u32 = 1;
