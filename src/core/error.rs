//! Fehlertypen des Routing-Kerns.
//!
//! Alle Fehler sind lokal behebbar: Der Aufrufer loggt sie und der Zustand
//! bleibt unverändert. Kein Fehler ist fatal.

use super::{PortId, WireId};
use thiserror::Error;

/// Ungültige Operation im aktuellen Zustand des Routing-Kerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Es läuft bereits eine Routing-Session
    #[error("Es wird bereits eine Leitung verlegt")]
    AlreadyRouting,

    /// Operation benötigt eine aktive Routing-Session
    #[error("Keine aktive Routing-Session")]
    NotRouting,

    /// Leitung existiert nicht in der Menge fertiger Leitungen
    #[error("Leitung nicht gefunden: {0}")]
    WireNotFound(WireId),

    /// Leitung ist bereits an einem End-Port terminiert
    #[error("Leitung {0} ist bereits verbunden und kann nicht fortgesetzt werden")]
    WireNotHanging(WireId),

    /// Start- und End-Port sind identisch
    #[error("Port {0} kann nicht mit sich selbst verbunden werden")]
    SelfConnection(PortId),

    /// Port besitzt keine auflösbare Weltposition
    #[error("Port {0} hat keine Weltposition")]
    PortWithoutPosition(PortId),

    /// Es existiert kein Vorschaupunkt
    #[error("Kein Vorschaupunkt vorhanden")]
    NoPreviewPoint,

    /// Keine Leitung selektiert
    #[error("Keine Leitung selektiert")]
    NothingSelected,

    /// Leitungs-ID kommt mehrfach vor
    #[error("Doppelte Leitungs-ID: {0}")]
    DuplicateWireId(WireId),

    /// Der ID-Zähler ist am Ende des Wertebereichs angekommen
    #[error("Keine freien Leitungs-IDs mehr")]
    WireIdsExhausted,
}

/// Projektions-ID ist im ViewManager nicht registriert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unbekannte Ansicht: {0}")]
pub struct UnknownProjection(pub String);

/// Rasterweite ist ungültig (≤ 0 oder nicht endlich).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Ungültige Rasterweite: {0} mm (muss > 0 sein)")]
pub struct InvalidGridPitch(pub f64);

/// Projektion überdeckt nicht alle drei Achsen genau einmal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Ungültige Ansicht {id}: Ebenen-Achsen müssen verschieden sein")]
pub struct InvalidProjection {
    /// ID der abgelehnten Projektion
    pub id: String,
}
