//! Anschlusspunkt (Klemme, Pin) einer Komponente im Gehäuse.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile Identität eines Ports, vergeben von der externen Port-Registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(String);

impl PortId {
    /// Erstellt eine Port-ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Ein Port, wie er in eine Leitung kopiert wird.
///
/// Gleichheit gilt ausschließlich über die ID; Label und Position sind
/// Momentaufnahmen zum Zeitpunkt des Verlegens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// Stabile ID
    pub id: PortId,
    /// Anzeigename (z.B. "X1:3")
    #[serde(default)]
    pub label: String,
    /// Weltposition in mm, falls auflösbar
    #[serde(default)]
    pub world_position: Option<DVec3>,
}

impl Port {
    /// Erstellt einen Port mit bekannter Weltposition.
    pub fn new(id: impl Into<String>, label: impl Into<String>, world_position: DVec3) -> Self {
        Self {
            id: PortId::new(id),
            label: label.into(),
            world_position: Some(world_position),
        }
    }

    /// Erstellt einen Port ohne auflösbare Position.
    pub fn unplaced(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: PortId::new(id),
            label: label.into(),
            world_position: None,
        }
    }
}

impl PartialEq for Port {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Port {}
