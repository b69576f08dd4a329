//! Export der Leitungsmenge als JSON.

use super::document::{WireListDocument, WireListStatistics, WireRecord};
use super::WIRE_LIST_VERSION;
use crate::core::Wire;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialisiert Leitungen in Einfüge-Reihenfolge als formatiertes JSON.
pub fn write_wire_list<'a>(wires: impl IntoIterator<Item = &'a Wire>) -> Result<String> {
    let wires: Vec<WireRecord> = wires.into_iter().map(to_record).collect();
    let document = WireListDocument {
        version: WIRE_LIST_VERSION,
        total_wires: wires.len(),
        statistics: statistics(&wires),
        wires,
    };
    serde_json::to_string_pretty(&document).context("Leitungsliste konnte nicht serialisiert werden")
}

/// Schreibt die Leitungsliste in eine Datei.
pub fn write_wire_list_file<'a>(
    wires: impl IntoIterator<Item = &'a Wire>,
    path: &Path,
) -> Result<usize> {
    let wires: Vec<&Wire> = wires.into_iter().collect();
    let count = wires.len();
    let content = write_wire_list(wires)?;
    std::fs::write(path, content)
        .with_context(|| format!("Schreiben nach {} fehlgeschlagen", path.display()))?;
    log::info!("{} Leitungen exportiert nach: {}", count, path.display());
    Ok(count)
}

fn to_record(wire: &Wire) -> WireRecord {
    WireRecord {
        id: wire.id(),
        start_port: wire.start_port().clone(),
        end_port: wire.end_port().cloned(),
        wire_type: wire.wire_type(),
        wire_gauge: wire.wire_gauge(),
        projection: wire.projection().clone(),
        length_mm: wire.length(),
        waypoints: wire.waypoints().to_vec(),
        plane_transitions: wire.plane_transitions().to_vec(),
    }
}

fn statistics(records: &[WireRecord]) -> WireListStatistics {
    let mut stats = WireListStatistics::default();
    for record in records {
        let gauge = stats.by_gauge.entry(record.wire_gauge.0).or_default();
        gauge.count += 1;
        gauge.total_length_mm += record.length_mm;
        stats.total_length_mm += record.length_mm;
    }
    stats
}
