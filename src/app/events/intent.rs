use crate::core::{Port, WireGauge, WireType};
use crate::shared::EditorOptions;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Serialisierbar, damit aufgezeichnete Eingaben headless abgespielt werden können.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "intent")]
pub enum AppIntent {
    /// Klick in den Viewport (optional auf einen Port)
    ViewportClicked {
        screen_pos: DVec2,
        #[serde(default)]
        port: Option<Port>,
    },
    /// Klick direkt auf einen Port (z.B. aus einer Port-Liste)
    PortClicked { port: Port },
    /// Mauszeiger bewegt
    PointerMoved { screen_pos: DVec2 },
    /// Leitung am Vorschaupunkt aufhängen (Enter/Leertaste)
    HangRequested,
    /// Verlegen abbrechen (Escape)
    CancelRequested,
    /// Selektierte Leitung löschen (Entf)
    DeleteSelectedRequested,
    /// Alle Leitungen entfernen
    ClearAllWiresRequested,
    /// Aktive Ansicht wechseln
    ProjectionChangeRequested { projection_id: String },
    /// Rasterweite ändern
    GridPitchChanged { pitch: f64 },
    /// Leitungsart für neue Leitungen ändern
    WireTypeChanged { wire_type: WireType },
    /// Querschnitt für neue Leitungen ändern
    WireGaugeChanged { wire_gauge: WireGauge },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: DVec2 },
    /// Ansicht um Pixel-Delta verschieben
    ViewPanned { delta: DVec2 },
    /// Ansicht zoomen (optional auf einen Fokuspunkt in Pixeln)
    ViewZoomed {
        factor: f64,
        #[serde(default)]
        focus_screen: Option<DVec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf Standard zurücksetzen
    ResetViewRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Leitungsliste exportieren
    ExportWiresRequested { path: String },
    /// Leitungsliste importieren
    ImportWiresRequested { path: String },
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsApplied { options: EditorOptions },
}
