//! Handler für den Verlege-Zustandsautomaten.
//!
//! Vor Start bzw. Fortsetzen wird ein Snapshot gemerkt; erst Abschluss oder
//! Aufhängen übernimmt ihn in die History, Abbruch verwirft ihn.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{Port, WireId};
use glam::DVec3;

/// Beginnt eine neue Leitung am Port.
pub fn start_wire(state: &mut AppState, port: Port, seed: DVec3) {
    let snapshot = Snapshot::from_state(state);
    match state.core.start_wire(&port, seed) {
        Ok(_) => state.session_snapshot = Some(snapshot),
        Err(e) => log::warn!("Leitung nicht gestartet: {}", e),
    }
}

/// Setzt eine hängende Leitung fort.
pub fn resume_wire(state: &mut AppState, wire_id: WireId) {
    let snapshot = Snapshot::from_state(state);
    match state.core.resume_wire(wire_id) {
        Ok(()) => state.session_snapshot = Some(snapshot),
        Err(e) => log::warn!("Leitung {} nicht fortgesetzt: {}", wire_id, e),
    }
}

/// Aktualisiert die Vorschau zum Cursor.
pub fn update_preview(state: &mut AppState, cursor: DVec3) {
    if let Err(e) = state.core.update_preview(cursor) {
        log::debug!("Vorschau ignoriert: {}", e);
    }
}

/// Übernimmt den Vorschaupunkt als Wegpunkt.
pub fn add_waypoint(state: &mut AppState) {
    match state.core.add_waypoint() {
        Ok(true) => {}
        Ok(false) => log::debug!("Kein neuer Wegpunkt"),
        Err(e) => log::debug!("Wegpunkt ignoriert: {}", e),
    }
}

/// Schließt die Leitung am End-Port ab.
pub fn complete_wire(state: &mut AppState, end_port: Port) {
    match state.core.complete_wire(&end_port) {
        Ok(_) => commit_session_snapshot(state),
        Err(e) => log::warn!("Leitung nicht abgeschlossen: {}", e),
    }
}

/// Hängt die Leitung am Vorschaupunkt auf.
pub fn hang_wire(state: &mut AppState) {
    match state.core.hang_wire() {
        Ok(_) => commit_session_snapshot(state),
        Err(e) => log::warn!("Leitung nicht aufgehängt: {}", e),
    }
}

/// Bricht das Verlegen ab, ohne Spuren in Leitungsmenge oder History.
pub fn cancel_wire(state: &mut AppState) {
    match state.core.cancel_wire() {
        Ok(()) => state.session_snapshot = None,
        Err(e) => log::debug!("Abbruch ignoriert: {}", e),
    }
}

fn commit_session_snapshot(state: &mut AppState) {
    if let Some(snapshot) = state.session_snapshot.take() {
        state.history.record_snapshot(snapshot);
    }
}
