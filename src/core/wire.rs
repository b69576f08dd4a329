//! Leitungen: Wegpunkte, Ebenenwechsel, Klassifizierung.

use super::{geometry, Port, ProjectionId};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Eindeutige ID einer Leitung, angezeigt als `wire-<n>`.
///
/// IDs werden monoton vergeben und innerhalb eines Routing-Kerns nie
/// wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WireId(pub u64);

impl WireId {
    /// Numerischer Wert
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wire-{}", self.0)
    }
}

impl FromStr for WireId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("wire-")
            .and_then(|n| n.parse::<u64>().ok())
            .map(WireId)
            .ok_or_else(|| format!("Ungültige Leitungs-ID: '{s}'"))
    }
}

impl TryFrom<String> for WireId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        id.to_string()
    }
}

/// Leitungsart, steuert Farbcodierung und Export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    /// Versorgung
    Power,
    /// Steuer-/Signalleitung
    #[default]
    Signal,
    /// Schutzleiter / Masse
    Ground,
    /// Bus- und Datenleitungen
    Data,
}

impl WireType {
    /// Alle Leitungsarten in Anzeige-Reihenfolge.
    pub const ALL: [WireType; 4] = [
        WireType::Power,
        WireType::Signal,
        WireType::Ground,
        WireType::Data,
    ];

    /// Anzeigename
    pub fn label(self) -> &'static str {
        match self {
            WireType::Power => "Versorgung",
            WireType::Signal => "Signal",
            WireType::Ground => "Masse",
            WireType::Data => "Daten",
        }
    }
}

/// Leiterquerschnitt als AWG-Nummer (nur für Export und Anzeige).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireGauge(pub u8);

impl Default for WireGauge {
    fn default() -> Self {
        Self(16)
    }
}

impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AWG", self.0)
    }
}

/// Markiert, dass eine Leitung ab einem Wegpunkt in einer anderen Ansicht weiterverlegt wurde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneTransition {
    /// Index des Wegpunkts, an dem der Wechsel stattfand
    pub waypoint_index: usize,
    /// Ansicht beim Aufhängen
    pub from_projection: ProjectionId,
    /// Ansicht beim Fortsetzen
    pub to_projection: ProjectionId,
    /// Weltposition des Wechsels
    pub at_point: DVec3,
}

/// Eine Leitung zwischen Ports, fertig verlegt oder hängend.
///
/// Invariante: `waypoints` ist nie leer.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    id: WireId,
    start_port: Port,
    end_port: Option<Port>,
    waypoints: Vec<DVec3>,
    plane_transitions: Vec<PlaneTransition>,
    wire_type: WireType,
    wire_gauge: WireGauge,
    projection: ProjectionId,
}

impl Wire {
    /// Neue Leitung mit genau einem Wegpunkt (Startpunkt).
    pub(crate) fn new(
        id: WireId,
        start_port: Port,
        first_waypoint: DVec3,
        wire_type: WireType,
        wire_gauge: WireGauge,
        projection: ProjectionId,
    ) -> Self {
        Self {
            id,
            start_port,
            end_port: None,
            waypoints: vec![first_waypoint],
            plane_transitions: Vec::new(),
            wire_type,
            wire_gauge,
            projection,
        }
    }

    /// Baut eine Leitung aus gespeicherten Teilen wieder auf (Import).
    ///
    /// Gibt `None` zurück bei leerer Wegpunktliste, Schleife auf denselben Port
    /// oder einem Ebenenwechsel hinter dem letzten Wegpunkt.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id: WireId,
        start_port: Port,
        end_port: Option<Port>,
        waypoints: Vec<DVec3>,
        plane_transitions: Vec<PlaneTransition>,
        wire_type: WireType,
        wire_gauge: WireGauge,
        projection: ProjectionId,
    ) -> Option<Self> {
        if waypoints.is_empty() || end_port.as_ref() == Some(&start_port) {
            return None;
        }
        if plane_transitions
            .iter()
            .any(|t| t.waypoint_index >= waypoints.len())
        {
            return None;
        }
        Some(Self {
            id,
            start_port,
            end_port,
            waypoints,
            plane_transitions,
            wire_type,
            wire_gauge,
            projection,
        })
    }

    /// ID der Leitung
    pub fn id(&self) -> WireId {
        self.id
    }

    /// Port, an dem die Leitung beginnt
    pub fn start_port(&self) -> &Port {
        &self.start_port
    }

    /// End-Port (None = hängend)
    pub fn end_port(&self) -> Option<&Port> {
        self.end_port.as_ref()
    }

    /// Geordnete Wegpunkte in Weltkoordinaten
    pub fn waypoints(&self) -> &[DVec3] {
        &self.waypoints
    }

    /// Aufgezeichnete Ebenenwechsel
    pub fn plane_transitions(&self) -> &[PlaneTransition] {
        &self.plane_transitions
    }

    /// Leitungsart
    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    /// Querschnitt
    pub fn wire_gauge(&self) -> WireGauge {
        self.wire_gauge
    }

    /// Ansicht, die beim letzten Abschluss (fertig oder hängend) aktiv war
    pub fn projection(&self) -> &ProjectionId {
        &self.projection
    }

    /// Ob die Leitung noch keinen End-Port hat
    pub fn is_hanging(&self) -> bool {
        self.end_port.is_none()
    }

    /// Letzter Wegpunkt
    pub fn last_waypoint(&self) -> DVec3 {
        self.waypoints.last().copied().unwrap_or_default()
    }

    /// Gesamtlänge in mm, immer aus den Wegpunkten berechnet.
    pub fn length(&self) -> f64 {
        geometry::polyline_length(&self.waypoints)
    }

    pub(crate) fn push_waypoint(&mut self, p: DVec3) {
        self.waypoints.push(p);
    }

    pub(crate) fn push_transition(&mut self, transition: PlaneTransition) {
        self.plane_transitions.push(transition);
    }

    pub(crate) fn set_end_port(&mut self, port: Port) {
        self.end_port = Some(port);
    }

    pub(crate) fn set_projection(&mut self, projection: ProjectionId) {
        self.projection = projection;
    }
}
