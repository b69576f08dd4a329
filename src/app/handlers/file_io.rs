//! Handler für Export und Import der Leitungsliste.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::wire_list;
use std::path::PathBuf;

/// Schreibt alle Leitungen als JSON nach `path`.
pub fn export_wires(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let path = PathBuf::from(path);
    wire_list::write_wire_list_file(state.core.wires().values(), &path)?;
    state.last_export_path = Some(path);
    Ok(())
}

/// Ersetzt die Leitungsmenge durch den Inhalt von `path` (undo-fähig).
///
/// Die Datei wird vollständig geprüft, bevor der Zustand angefasst wird;
/// eine laufende Session wird danach verworfen.
pub fn import_wires(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let wires = wire_list::read_wire_list_file(&PathBuf::from(&path))?;

    if state.core.is_routing() {
        log::info!("Laufendes Verlegen wird für den Import abgebrochen");
        state.core.cancel_wire()?;
        state.session_snapshot = None;
    }

    let snapshot = Snapshot::from_state(state);
    let count = state.core.replace_wires(wires)?;
    state.history.record_snapshot(snapshot);
    log::info!("{} Leitungen aus {} übernommen", count, path);
    Ok(())
}
