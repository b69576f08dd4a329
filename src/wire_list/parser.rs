//! Import einer Leitungsliste aus JSON.

use super::document::{WireListDocument, WireRecord};
use super::WIRE_LIST_VERSION;
use crate::core::Wire;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Parst eine Leitungsliste und prüft sie auf Konsistenz.
///
/// Abgelehnt werden unbekannte Versionen, doppelte IDs, leere
/// Wegpunktlisten und Leitungen, die an ihrem Start-Port enden.
pub fn parse_wire_list(json: &str) -> Result<Vec<Wire>> {
    let document: WireListDocument =
        serde_json::from_str(json).context("Fehler beim Parsen der Leitungsliste")?;

    if document.version != WIRE_LIST_VERSION {
        bail!(
            "Nicht unterstützte Version {} (erwartet {})",
            document.version,
            WIRE_LIST_VERSION
        );
    }

    let mut seen = HashSet::with_capacity(document.wires.len());
    let mut wires = Vec::with_capacity(document.wires.len());
    for record in document.wires {
        if !seen.insert(record.id) {
            bail!("Doppelte Leitungs-ID: {}", record.id);
        }
        if record.id.value() == u64::MAX {
            bail!("Leitungs-ID {} liegt außerhalb des vergebbaren Bereichs", record.id);
        }
        wires.push(from_record(record)?);
    }
    Ok(wires)
}

/// Liest und parst eine Leitungsliste aus einer Datei.
pub fn read_wire_list_file(path: &Path) -> Result<Vec<Wire>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei {} nicht lesbar", path.display()))?;
    let wires = parse_wire_list(&content)
        .with_context(|| format!("Ungültige Leitungsliste: {}", path.display()))?;
    log::info!("{} Leitungen importiert aus: {}", wires.len(), path.display());
    Ok(wires)
}

fn from_record(record: WireRecord) -> Result<Wire> {
    let id = record.id;
    if record.waypoints.is_empty() {
        bail!("Leitung {} hat keine Wegpunkte", id);
    }
    if record.end_port.as_ref() == Some(&record.start_port) {
        bail!("Leitung {} endet an ihrem Start-Port {}", id, record.start_port.id);
    }
    Wire::from_parts(
        id,
        record.start_port,
        record.end_port,
        record.waypoints,
        record.plane_transitions,
        record.wire_type,
        record.wire_gauge,
        record.projection,
    )
    .with_context(|| format!("Leitung {} ist inkonsistent", id))
}
