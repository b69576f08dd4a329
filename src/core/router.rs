//! Routing-Kern: Zustandsautomat für das Verlegen orthogonaler Leitungen.
//!
//! Zustände: `Idle` (keine Session) und `Routing` (genau eine Session).
//! Eine Leitung kann in einer Ansicht aufgehängt und in einer anderen
//! fortgesetzt werden; jedes Segment bleibt achsparallel in der Ebene der
//! Ansicht, in der es gezeichnet wurde.


use super::geometry::{self, DEFAULT_WAYPOINT_EPSILON};
use super::{
    GridSystem, PlaneTransition, Port, ProjectionId, RoutingError, ViewManager, Wire, WireGauge,
    WireId, WireType,
};
use glam::DVec3;
use indexmap::IndexMap;
use std::sync::Arc;

/// Standard-Trefferradius für Leitungssegmente in mm.
pub const DEFAULT_HIT_THRESHOLD: f64 = 5.0;
/// Faktor auf den Trefferradius für hängende Enden.
pub const DEFAULT_HANGING_END_FACTOR: f64 = 3.0;

/// Fertige und hängende Leitungen in Einfüge-Reihenfolge.
pub type WireSet = IndexMap<WireId, Wire>;

/// Aktuelle Selektion: Leitung plus getroffenes Segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSelection {
    /// Selektierte Leitung
    pub wire_id: WireId,
    /// Index des Segments `waypoints[i]..waypoints[i + 1]`
    pub segment_index: usize,
}

/// Fortgesetzte Leitung samt ursprünglicher Position in der Leitungsmenge.
#[derive(Debug, Clone)]
struct ResumedWire {
    wire: Wire,
    index: usize,
}

/// Laufender Verlege-Vorgang.
#[derive(Debug, Clone)]
pub struct RoutingSession {
    wire: Wire,
    preview_point: Option<DVec3>,
    projection_at_start: ProjectionId,
    pending_transition: Option<PlaneTransition>,
    resumed_from: Option<ResumedWire>,
}

impl RoutingSession {
    /// Die im Aufbau befindliche Leitung (End-Port immer `None`)
    pub fn wire(&self) -> &Wire {
        &self.wire
    }

    /// Bisher gesetzte Wegpunkte
    pub fn waypoints(&self) -> &[DVec3] {
        self.wire.waypoints()
    }

    /// Letzter gesetzter Wegpunkt
    pub fn last_waypoint(&self) -> DVec3 {
        self.wire.last_waypoint()
    }

    /// Orthogonale Vorschau zum Cursor
    pub fn preview_point(&self) -> Option<DVec3> {
        self.preview_point
    }

    /// Ansicht beim Start bzw. Fortsetzen
    pub fn projection_at_start(&self) -> &ProjectionId {
        &self.projection_at_start
    }

    /// Ebenenwechsel, der beim Abschluss übernommen wird
    pub fn pending_transition(&self) -> Option<&PlaneTransition> {
        self.pending_transition.as_ref()
    }

    /// Ob die Session eine hängende Leitung fortsetzt
    pub fn is_resumed(&self) -> bool {
        self.resumed_from.is_some()
    }
}

/// Routing-Kern: besitzt Ansichten, Raster, Leitungen, Session und Selektion.
#[derive(Debug, Clone)]
pub struct WireRoutingCore {
    views: ViewManager,
    grid: GridSystem,
    /// Arc für O(1)-Snapshots der Undo-Historie
    wires: Arc<WireSet>,
    session: Option<RoutingSession>,
    selection: Option<WireSelection>,
    next_wire_id: u64,
    wire_type: WireType,
    wire_gauge: WireGauge,
    hit_threshold: f64,
    hanging_end_factor: f64,
    waypoint_epsilon: f64,
}

impl WireRoutingCore {
    /// Erstellt einen leeren Kern mit Standard-Ansichten und Standard-Raster.
    pub fn new() -> Self {
        Self::with_parts(ViewManager::new(), GridSystem::default())
    }

    /// Erstellt einen leeren Kern mit eigenen Ansichten und eigenem Raster.
    pub fn with_parts(views: ViewManager, grid: GridSystem) -> Self {
        Self {
            views,
            grid,
            wires: Arc::new(WireSet::new()),
            session: None,
            selection: None,
            next_wire_id: 1,
            wire_type: WireType::default(),
            wire_gauge: WireGauge::default(),
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            hanging_end_factor: DEFAULT_HANGING_END_FACTOR,
            waypoint_epsilon: DEFAULT_WAYPOINT_EPSILON,
        }
    }

    // --- Zugriff ---

    /// Alle fertigen und hängenden Leitungen
    pub fn wires(&self) -> &WireSet {
        &self.wires
    }

    /// Leitung per ID
    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(&id)
    }

    /// Aktive Session
    pub fn session(&self) -> Option<&RoutingSession> {
        self.session.as_ref()
    }

    /// Ob gerade eine Leitung verlegt wird
    pub fn is_routing(&self) -> bool {
        self.session.is_some()
    }

    /// Aktuelle Selektion
    pub fn selection(&self) -> Option<WireSelection> {
        self.selection
    }

    /// ID der selektierten Leitung
    pub fn selected_wire(&self) -> Option<WireId> {
        self.selection.map(|s| s.wire_id)
    }

    /// Index des selektierten Segments
    pub fn selected_segment(&self) -> Option<usize> {
        self.selection.map(|s| s.segment_index)
    }

    /// Endpunkte aller hängenden Leitungen (Marker für "fortsetzbar")
    pub fn hanging_ends(&self) -> Vec<(WireId, DVec3)> {
        self.wires
            .values()
            .filter(|w| w.is_hanging())
            .map(|w| (w.id(), w.last_waypoint()))
            .collect()
    }

    /// Wegpunkte der Session plus Vorschaupunkt (nur im Routing-Zustand)
    pub fn preview_polyline(&self) -> Option<Vec<DVec3>> {
        let session = self.session.as_ref()?;
        let mut points = session.waypoints().to_vec();
        points.extend(session.preview_point);
        Some(points)
    }

    /// Ansichten
    pub fn views(&self) -> &ViewManager {
        &self.views
    }

    /// Ansichten (veränderlich, z.B. für `set_active`)
    pub fn views_mut(&mut self) -> &mut ViewManager {
        &mut self.views
    }

    /// Raster
    pub fn grid(&self) -> &GridSystem {
        &self.grid
    }

    /// Raster (veränderlich, z.B. für `set_pitch`)
    pub fn grid_mut(&mut self) -> &mut GridSystem {
        &mut self.grid
    }

    /// Klassifizierung für neu begonnene Leitungen
    pub fn wire_class(&self) -> (WireType, WireGauge) {
        (self.wire_type, self.wire_gauge)
    }

    /// Trefferradius für Segmente in mm
    pub fn hit_threshold(&self) -> f64 {
        self.hit_threshold
    }

    /// Trefferradius für hängende Enden in mm
    pub fn hanging_end_threshold(&self) -> f64 {
        self.hit_threshold * self.hanging_end_factor
    }

    /// Toleranz für Punktgleichheit in mm
    pub fn waypoint_epsilon(&self) -> f64 {
        self.waypoint_epsilon
    }

    // --- Einstellungen ---

    /// Setzt Leitungsart und Querschnitt für die nächsten Leitungen.
    pub fn set_wire_class(&mut self, wire_type: WireType, wire_gauge: WireGauge) {
        self.wire_type = wire_type;
        self.wire_gauge = wire_gauge;
    }

    /// Setzt den Trefferradius. Nicht-positive Werte werden ignoriert.
    pub fn set_hit_threshold(&mut self, mm: f64) {
        if mm.is_finite() && mm > 0.0 {
            self.hit_threshold = mm;
        } else {
            log::warn!("Trefferradius {} mm ignoriert", mm);
        }
    }

    /// Setzt den Faktor für hängende Enden. Werte < 1 werden ignoriert.
    pub fn set_hanging_end_factor(&mut self, factor: f64) {
        if factor.is_finite() && factor >= 1.0 {
            self.hanging_end_factor = factor;
        } else {
            log::warn!("Faktor für hängende Enden {} ignoriert", factor);
        }
    }

    /// Setzt die Punkt-Toleranz. Nicht-positive Werte werden ignoriert.
    pub fn set_waypoint_epsilon(&mut self, mm: f64) {
        if mm.is_finite() && mm > 0.0 {
            self.waypoint_epsilon = mm;
        } else {
            log::warn!("Wegpunkt-Toleranz {} mm ignoriert", mm);
        }
    }

    // --- Zustandsautomat ---

    /// Beginnt eine neue Leitung an `port`.
    ///
    /// Erster Wegpunkt ist die eingerastete Port-Position, ersatzweise der
    /// eingerastete `seed`.
    pub fn start_wire(&mut self, port: &Port, seed: DVec3) -> Result<WireId, RoutingError> {
        if self.session.is_some() {
            return Err(RoutingError::AlreadyRouting);
        }

        let first = self.grid.snap_point(port.world_position.unwrap_or(seed));
        let id = self.allocate_wire_id()?;
        let projection = self.views.active_id().clone();
        let wire = Wire::new(
            id,
            port.clone(),
            first,
            self.wire_type,
            self.wire_gauge,
            projection.clone(),
        );

        self.session = Some(RoutingSession {
            wire,
            preview_point: None,
            projection_at_start: projection,
            pending_transition: None,
            resumed_from: None,
        });
        log::info!("Leitung {} gestartet an Port {}", id, port.id);
        Ok(id)
    }

    /// Setzt eine hängende Leitung fort.
    ///
    /// Die Leitung verlässt die Leitungsmenge bis zum Abschluss. Weicht die
    /// aktive Ansicht von der beim Aufhängen ab, wird ein Ebenenwechsel
    /// vorgemerkt.
    pub fn resume_wire(&mut self, id: WireId) -> Result<(), RoutingError> {
        if self.session.is_some() {
            return Err(RoutingError::AlreadyRouting);
        }
        let Some((index, _, wire)) = self.wires.get_full(&id) else {
            return Err(RoutingError::WireNotFound(id));
        };
        if !wire.is_hanging() {
            return Err(RoutingError::WireNotHanging(id));
        }

        let Some((_, original)) = Arc::make_mut(&mut self.wires).shift_remove_index(index) else {
            return Err(RoutingError::WireNotFound(id));
        };

        let active = self.views.active_id().clone();
        let pending_transition = (original.projection() != &active).then(|| PlaneTransition {
            waypoint_index: original.waypoints().len() - 1,
            from_projection: original.projection().clone(),
            to_projection: active.clone(),
            at_point: original.last_waypoint(),
        });

        if self.selected_wire() == Some(id) {
            self.selection = None;
        }

        log::info!(
            "Leitung {} fortgesetzt in Ansicht {}{}",
            id,
            active,
            if pending_transition.is_some() {
                " (Ebenenwechsel)"
            } else {
                ""
            }
        );
        self.session = Some(RoutingSession {
            wire: original.clone(),
            preview_point: None,
            projection_at_start: active,
            pending_transition,
            resumed_from: Some(ResumedWire {
                wire: original,
                index,
            }),
        });
        Ok(())
    }

    /// Berechnet die orthogonale Vorschau zum (eingerasteten) Cursor.
    pub fn update_preview(&mut self, cursor: DVec3) -> Result<DVec3, RoutingError> {
        let session = self.session.as_mut().ok_or(RoutingError::NotRouting)?;
        let snapped = self.grid.snap_point(cursor);
        let preview =
            geometry::manhattan_preview(self.views.active(), session.last_waypoint(), snapped);
        session.preview_point = Some(preview);
        Ok(preview)
    }

    /// Übernimmt den Vorschaupunkt als Wegpunkt.
    ///
    /// `Ok(false)` ohne Vorschau oder wenn die Vorschau mit dem letzten
    /// Wegpunkt zusammenfällt.
    pub fn add_waypoint(&mut self) -> Result<bool, RoutingError> {
        let epsilon = self.waypoint_epsilon;
        let session = self.session.as_mut().ok_or(RoutingError::NotRouting)?;
        let Some(preview) = session.preview_point else {
            return Ok(false);
        };
        if geometry::points_equal(preview, session.last_waypoint(), epsilon) {
            log::debug!("Wegpunkt ignoriert: fällt mit letztem zusammen");
            return Ok(false);
        }
        session.wire.push_waypoint(preview);
        Ok(true)
    }

    /// Schließt die Leitung an `end_port` ab.
    ///
    /// Bei Selbstverbindung oder fehlender Port-Position bleibt die Session aktiv.
    pub fn complete_wire(&mut self, end_port: &Port) -> Result<WireId, RoutingError> {
        let epsilon = self.waypoint_epsilon;
        let session = self.session.as_mut().ok_or(RoutingError::NotRouting)?;
        if session.wire.start_port() == end_port {
            return Err(RoutingError::SelfConnection(end_port.id.clone()));
        }
        let Some(position) = end_port.world_position else {
            return Err(RoutingError::PortWithoutPosition(end_port.id.clone()));
        };

        let end = self.grid.snap_point(position);
        if !geometry::points_equal(end, session.last_waypoint(), epsilon) {
            session.wire.push_waypoint(end);
        }
        session.wire.set_end_port(end_port.clone());

        let id = self.commit_session()?;
        log::info!("Leitung {} verbunden mit Port {}", id, end_port.id);
        Ok(id)
    }

    /// Hängt die Leitung am Vorschaupunkt auf (ohne End-Port).
    pub fn hang_wire(&mut self) -> Result<WireId, RoutingError> {
        let epsilon = self.waypoint_epsilon;
        let session = self.session.as_mut().ok_or(RoutingError::NotRouting)?;
        let Some(preview) = session.preview_point else {
            return Err(RoutingError::NoPreviewPoint);
        };
        if !geometry::points_equal(preview, session.last_waypoint(), epsilon) {
            session.wire.push_waypoint(preview);
        }

        let id = self.commit_session()?;
        log::info!("Leitung {} aufgehängt", id);
        Ok(id)
    }

    /// Verwirft die Session. Eine fortgesetzte Leitung wird unverändert
    /// an ihrer alten Position wiederhergestellt.
    pub fn cancel_wire(&mut self) -> Result<(), RoutingError> {
        let session = self.session.take().ok_or(RoutingError::NotRouting)?;
        let id = session.wire.id();
        if let Some(resumed) = session.resumed_from {
            let wires = Arc::make_mut(&mut self.wires);
            let index = resumed.index.min(wires.len());
            wires.shift_insert(index, id, resumed.wire);
        }
        log::info!("Verlegen von Leitung {} abgebrochen", id);
        Ok(())
    }

    /// Löscht die selektierte Leitung.
    pub fn delete_selected_wire(&mut self) -> Result<WireId, RoutingError> {
        let selection = self.selection.take().ok_or(RoutingError::NothingSelected)?;
        let id = selection.wire_id;
        if Arc::make_mut(&mut self.wires).shift_remove(&id).is_none() {
            return Err(RoutingError::WireNotFound(id));
        }
        log::info!("Leitung {} gelöscht", id);
        Ok(id)
    }

    /// Entfernt alle Leitungen. Eine laufende Session bleibt unberührt.
    pub fn clear_all_wires(&mut self) -> usize {
        let count = self.wires.len();
        self.wires = Arc::new(WireSet::new());
        self.selection = None;
        log::info!("{} Leitungen entfernt", count);
        count
    }

    // --- Snapshots ---

    /// O(1)-Snapshot der Leitungsmenge für die Undo-Historie.
    pub fn wires_snapshot(&self) -> Arc<WireSet> {
        Arc::clone(&self.wires)
    }

    /// Stellt eine Leitungsmenge samt Selektion wieder her.
    ///
    /// Eine Selektion auf eine nicht vorhandene Leitung wird verworfen.
    pub fn restore_wires(&mut self, wires: Arc<WireSet>, selection: Option<WireSelection>) {
        self.selection = selection.filter(|s| wires.contains_key(&s.wire_id));
        self.wires = wires;
    }

    /// Ersetzt alle Leitungen (Import). Der ID-Zähler läuft hinter die
    /// höchste importierte ID, damit keine ID doppelt vergeben wird.
    ///
    /// Doppelte IDs und eine ID am Ende des Wertebereichs werden abgelehnt;
    /// der bisherige Zustand bleibt dann unverändert.
    pub fn replace_wires(&mut self, wires: Vec<Wire>) -> Result<usize, RoutingError> {
        if self.session.is_some() {
            return Err(RoutingError::AlreadyRouting);
        }
        let mut set = WireSet::with_capacity(wires.len());
        for wire in wires {
            let id = wire.id();
            if set.insert(id, wire).is_some() {
                return Err(RoutingError::DuplicateWireId(id));
            }
        }
        let next_wire_id = match set.keys().map(|id| id.value()).max() {
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(RoutingError::WireIdsExhausted)?
                .max(self.next_wire_id),
            None => self.next_wire_id,
        };

        let count = set.len();
        self.next_wire_id = next_wire_id;
        self.wires = Arc::new(set);
        self.selection = None;
        Ok(count)
    }

    fn allocate_wire_id(&mut self) -> Result<WireId, RoutingError> {
        let id = WireId(self.next_wire_id);
        self.next_wire_id = self
            .next_wire_id
            .checked_add(1)
            .ok_or(RoutingError::WireIdsExhausted)?;
        Ok(id)
    }

    /// Übernimmt die Session in die Leitungsmenge (fertig oder hängend).
    fn commit_session(&mut self) -> Result<WireId, RoutingError> {
        let session = self.session.take().ok_or(RoutingError::NotRouting)?;
        let mut wire = session.wire;
        if let Some(transition) = session.pending_transition {
            wire.push_transition(transition);
        }
        wire.set_projection(self.views.active_id().clone());

        let id = wire.id();
        Arc::make_mut(&mut self.wires).insert(id, wire);
        Ok(id)
    }
}

impl Default for WireRoutingCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
