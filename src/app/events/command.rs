use crate::core::{Port, WireGauge, WireId, WireType};
use crate::shared::EditorOptions;
use glam::{DVec2, DVec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neue Leitung an einem Port beginnen
    StartWire { port: Port, seed: DVec3 },
    /// Hängende Leitung fortsetzen
    ResumeWire { wire_id: WireId },
    /// Vorschau zum Cursor (Weltkoordinaten) neu berechnen
    UpdatePreview { cursor: DVec3 },
    /// Vorschaupunkt als Wegpunkt übernehmen
    AddWaypoint,
    /// Leitung an einem End-Port abschließen
    CompleteWire { end_port: Port },
    /// Leitung aufhängen
    HangWire,
    /// Verlegen abbrechen
    CancelWire,
    /// Leitung unter Weltpunkt selektieren
    SelectWire { world_pos: DVec3 },
    /// Selektierte Leitung löschen
    DeleteSelectedWire,
    /// Alle Leitungen entfernen
    ClearAllWires,
    /// Aktive Ansicht setzen
    SetActiveProjection { projection_id: String },
    /// Rasterweite setzen
    SetGridPitch { pitch: f64 },
    /// Klassifizierung für neue Leitungen setzen
    SetWireClass {
        wire_type: WireType,
        wire_gauge: WireGauge,
    },
    /// Viewport-Größe setzen
    SetViewportSize { size: DVec2 },
    /// Ansicht um Pixel-Delta verschieben
    PanView { delta: DVec2 },
    /// Ansicht zoomen (optional auf Fokuspunkt)
    ZoomView {
        factor: f64,
        focus_screen: Option<DVec2>,
    },
    /// Ansicht auf Standard zurücksetzen
    ResetView,
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Leitungsliste als JSON schreiben
    ExportWires { path: String },
    /// Leitungsliste aus JSON laden
    ImportWires { path: String },
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
}
