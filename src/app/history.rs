use crate::app::AppState;
use crate::core::{WireSelection, WireSet};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon der Leitungsmenge findet erst beim nächsten `Arc::make_mut()` im
/// Routing-Kern statt.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Leitungsmenge (Arc-Klon für O(1)-Snapshot)
    pub wires: Arc<WireSet>,
    /// Selektion zum Zeitpunkt des Snapshots
    pub selection: Option<WireSelection>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            wires: state.core.wires_snapshot(),
            selection: state.core.selection(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut AppState) {
        state.core.restore_wires(self.wires, self.selection);
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            if stack.len() > max_depth {
                stack.drain(..stack.len() - max_depth);
            }
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
