//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{WireRoutingCore, WireSet};
use crate::shared::EditorOptions;
use glam::{DVec2, DVec3};
use std::path::PathBuf;

/// View-bezogener Anwendungszustand (Bildschirm-Transformation)
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: DVec2,
    /// Maßstab in Pixel pro mm
    pub scale: f64,
    /// Verschiebung in Pixel
    pub pan: DVec2,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: DVec2::ZERO,
            scale: 1.0,
            pan: DVec2::ZERO,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Routing-Kern mit Ansichten, Raster, Leitungen und Session
    pub core: WireRoutingCore,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Snapshot vor Beginn der laufenden Session (wird bei Abschluss übernommen)
    pub session_snapshot: Option<Snapshot>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Zielpfad für `ApplyOptions` (None = nicht speichern)
    pub options_path: Option<PathBuf>,
    /// Pfad des letzten Exports
    pub last_export_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self {
            core: WireRoutingCore::new(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            session_snapshot: None,
            options,
            options_path: None,
            last_export_path: None,
        };
        state.apply_options();
        if let Err(e) = state
            .core
            .views_mut()
            .set_active(&state.options.default_projection)
        {
            log::warn!("Standard-Ansicht nicht verfügbar: {}", e);
        }
        state
    }

    /// Überträgt die Optionen in Routing-Kern, History und View.
    ///
    /// Ungültige Werte werden geloggt und die bisherigen beibehalten.
    pub fn apply_options(&mut self) {
        if let Err(e) = self.core.grid_mut().set_pitch(self.options.grid_pitch) {
            log::warn!("{}", e);
        }
        self.core.set_hit_threshold(self.options.hit_threshold);
        self.core.set_hanging_end_factor(self.options.hanging_end_factor);
        self.core.set_waypoint_epsilon(self.options.waypoint_epsilon);
        self.core.set_wire_class(
            self.options.default_wire_type,
            self.options.default_wire_gauge,
        );
        self.history.set_max_depth(self.options.history_depth);
        self.view.scale = self.options.clamp_scale(self.view.scale);
    }

    /// Anzahl der Leitungen (für UI-Anzeige)
    pub fn wire_count(&self) -> usize {
        self.core.wires().len()
    }

    /// Anzahl der hängenden Leitungen (für UI-Anzeige)
    pub fn hanging_count(&self) -> usize {
        self.core.wires().values().filter(|w| w.is_hanging()).count()
    }

    /// Gesamtlänge aller Leitungen in mm
    pub fn total_length(&self) -> f64 {
        self.core.wires().values().map(|w| w.length()).sum()
    }

    /// Aktuelle Leitungsmenge
    pub fn wires(&self) -> &WireSet {
        self.core.wires()
    }

    /// Bildschirm → Welt in der aktiven Ansicht.
    ///
    /// Die konstante Achse übernimmt den letzten Wegpunkt der Session, im
    /// Idle-Zustand 0.
    pub fn screen_to_world(&self, screen_pos: DVec2) -> DVec3 {
        let views = self.core.views();
        let constant_value = self
            .core
            .session()
            .map_or(0.0, |s| views.constant_axis().get(s.last_waypoint()));
        views.screen_to_world(
            screen_pos,
            self.view.viewport_size,
            self.view.scale,
            self.view.pan,
            constant_value,
        )
    }

    /// Welt → Bildschirm in der aktiven Ansicht.
    pub fn world_to_screen(&self, world_pos: DVec3) -> DVec2 {
        self.core.views().world_to_screen(
            world_pos,
            self.view.viewport_size,
            self.view.scale,
            self.view.pan,
        )
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
