use crate::core::{PlaneTransition, Port, ProjectionId, WireGauge, WireId, WireType};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wurzel des JSON-Dokuments.
///
/// `total_wires` und `statistics` sind abgeleitet und werden beim Import
/// nicht gelesen.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct WireListDocument {
    pub version: u32,
    #[serde(default, skip_deserializing)]
    pub total_wires: usize,
    pub wires: Vec<WireRecord>,
    #[serde(default, skip_deserializing)]
    pub statistics: WireListStatistics,
}

/// Summen über alle exportierten Leitungen.
#[derive(Debug, Default, Serialize)]
pub(super) struct WireListStatistics {
    /// Pro Querschnitt (AWG-Zahl als Schlüssel)
    pub by_gauge: BTreeMap<u8, GaugeStatistics>,
    pub total_length_mm: f64,
}

#[derive(Debug, Default, Serialize)]
pub(super) struct GaugeStatistics {
    pub count: usize,
    pub total_length_mm: f64,
}

/// Eine Leitung im Export-Format.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct WireRecord {
    pub id: WireId,
    pub start_port: Port,
    #[serde(default)]
    pub end_port: Option<Port>,
    #[serde(default)]
    pub wire_type: WireType,
    #[serde(default)]
    pub wire_gauge: WireGauge,
    pub projection: ProjectionId,
    #[serde(default)]
    pub length_mm: f64,
    pub waypoints: Vec<DVec3>,
    #[serde(default)]
    pub plane_transitions: Vec<PlaneTransition>,
}
