//! Render-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Darstellungsschicht sie konsumiert.

use crate::core::{Projection, WireId, WireSelection};
use glam::{DVec2, DVec3};

/// Eine Leitung als fertig eingefärbter Polygonzug.
#[derive(Debug, Clone, PartialEq)]
pub struct WirePolyline {
    /// ID der Leitung
    pub wire_id: WireId,
    /// Wegpunkte in Weltkoordinaten
    pub points: Vec<DVec3>,
    /// RGBA-Farbe (Leitungsart oder Selektion)
    pub color: [f32; 4],
    /// Ob die Leitung hängt (offenes Ende)
    pub hanging: bool,
    /// Positionen der Ebenenwechsel
    pub transition_points: Vec<DVec3>,
}

/// Live-Vorschau der gerade verlegten Leitung.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPolyline {
    /// Gesetzte Wegpunkte plus Vorschaupunkt
    pub points: Vec<DVec3>,
    /// RGBA-Farbe der Vorschau
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktive Ansicht
    pub projection: Projection,
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
    /// Maßstab (Pixel pro mm)
    pub scale: f64,
    /// Verschiebung in Pixeln
    pub pan: DVec2,
    /// Fertige und hängende Leitungen in Einfüge-Reihenfolge
    pub wires: Vec<WirePolyline>,
    /// Vorschau (nur im Routing-Zustand)
    pub preview: Option<PreviewPolyline>,
    /// Marker für fortsetzbare Leitungsenden
    pub hanging_ends: Vec<(WireId, DVec3)>,
    /// Markerfarbe hängender Enden
    pub hanging_end_color: [f32; 4],
    /// Markerfarbe für Ebenenwechsel
    pub transition_color: [f32; 4],
    /// Aktuelle Selektion
    pub selection: Option<WireSelection>,
    /// Rasterweite in mm
    pub grid_pitch: f64,
}

impl RenderScene {
    /// Gibt zurück, ob gerade eine Leitung verlegt wird.
    pub fn is_routing(&self) -> bool {
        self.preview.is_some()
    }

    /// Anzahl der Leitungen im Frame.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }
}
