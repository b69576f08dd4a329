//! Handler für Selektion und Löschen von Leitungen.

use crate::app::history::Snapshot;
use crate::app::AppState;
use glam::DVec3;

/// Selektiert die Leitung unter dem Weltpunkt (oder hebt die Selektion auf).
pub fn select_wire(state: &mut AppState, world_pos: DVec3) {
    state.core.select_wire(world_pos);
}

/// Löscht die selektierte Leitung (undo-fähig).
///
/// Während des Verlegens ignoriert: Die Session ist ein einzelner
/// Undo-Schritt und darf keine fremden Schritte umschließen.
pub fn delete_selected(state: &mut AppState) {
    if state.core.is_routing() {
        log::debug!("Löschen während des Verlegens ignoriert");
        return;
    }
    let snapshot = Snapshot::from_state(state);
    match state.core.delete_selected_wire() {
        Ok(_) => state.history.record_snapshot(snapshot),
        Err(e) => log::debug!("Löschen ignoriert: {}", e),
    }
}

/// Entfernt alle Leitungen (undo-fähig, sofern etwas vorhanden war).
///
/// Während des Verlegens ignoriert.
pub fn clear_all(state: &mut AppState) {
    if state.core.is_routing() {
        log::debug!("Entfernen aller Leitungen während des Verlegens ignoriert");
        return;
    }
    if state.core.wires().is_empty() {
        log::debug!("Keine Leitungen zum Entfernen");
        return;
    }
    state.record_undo_snapshot();
    state.core.clear_all_wires();
}
