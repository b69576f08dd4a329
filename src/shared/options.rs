//! Zentrale Konfiguration für den Enclosure-Wiring-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{WireGauge, WireType, DEFAULT_GRID_PITCH, VIEW_TOP};
use serde::{Deserialize, Serialize};

// ── Ansicht ─────────────────────────────────────────────────────────

/// Minimaler Maßstab (Pixel pro mm).
pub const VIEW_SCALE_MIN: f64 = 0.1;
/// Maximaler Maßstab (Pixel pro mm).
pub const VIEW_SCALE_MAX: f64 = 10.0;
/// Zoom-Schritt bei stufenweisem Zoom.
pub const VIEW_ZOOM_STEP: f64 = 1.2;

// ── Routing ─────────────────────────────────────────────────────────

/// Trefferradius für Leitungssegmente in mm.
pub const HIT_THRESHOLD_MM: f64 = 5.0;
/// Faktor auf den Trefferradius für hängende Enden.
pub const HANGING_END_FACTOR: f64 = 3.0;
/// Toleranz für Punktgleichheit in mm.
pub const WAYPOINT_EPSILON_MM: f64 = 0.1;
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 50;

// ── Leitungs-Rendering ─────────────────────────────────────────────

/// Farbe für Versorgungsleitungen (RGBA: Rot).
pub const WIRE_COLOR_POWER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe für Signalleitungen (RGBA: Blau).
pub const WIRE_COLOR_SIGNAL: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe für Masse (RGBA: Schwarz).
pub const WIRE_COLOR_GROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe für Datenleitungen (RGBA: Gelb).
pub const WIRE_COLOR_DATA: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe der Live-Vorschau (RGBA: Grün).
pub const WIRE_COLOR_PREVIEW: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe der selektierten Leitung (RGBA: Gelb).
pub const WIRE_COLOR_SELECTED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Markerfarbe für Ebenenwechsel (RGBA: Magenta).
pub const TRANSITION_MARKER_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Markerfarbe für hängende Enden (RGBA: Orange).
pub const HANGING_END_MARKER_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als TOML neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster & Routing ────────────────────────────────────────────
    /// Rasterweite in mm
    pub grid_pitch: f64,
    /// Trefferradius für Segmente in mm
    pub hit_threshold: f64,
    /// Faktor für den Trefferradius hängender Enden
    pub hanging_end_factor: f64,
    /// Toleranz für Punktgleichheit in mm
    pub waypoint_epsilon: f64,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,

    // ── Ansicht ─────────────────────────────────────────────────────
    /// Minimaler Maßstab
    pub view_scale_min: f64,
    /// Maximaler Maßstab
    pub view_scale_max: f64,
    /// Zoom-Schritt
    pub view_zoom_step: f64,
    /// Ansicht beim Start
    pub default_projection: String,

    // ── Leitungen ───────────────────────────────────────────────────
    /// Leitungsart für neue Leitungen
    pub default_wire_type: WireType,
    /// Querschnitt für neue Leitungen
    pub default_wire_gauge: WireGauge,
    /// Farbe Versorgung
    pub wire_color_power: [f32; 4],
    /// Farbe Signal
    pub wire_color_signal: [f32; 4],
    /// Farbe Masse
    pub wire_color_ground: [f32; 4],
    /// Farbe Daten
    pub wire_color_data: [f32; 4],
    /// Farbe der Live-Vorschau
    pub wire_color_preview: [f32; 4],
    /// Farbe der Selektion
    pub wire_color_selected: [f32; 4],
    /// Markerfarbe Ebenenwechsel
    pub transition_marker_color: [f32; 4],
    /// Markerfarbe hängende Enden
    pub hanging_end_marker_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_pitch: DEFAULT_GRID_PITCH,
            hit_threshold: HIT_THRESHOLD_MM,
            hanging_end_factor: HANGING_END_FACTOR,
            waypoint_epsilon: WAYPOINT_EPSILON_MM,
            history_depth: HISTORY_DEPTH,
            view_scale_min: VIEW_SCALE_MIN,
            view_scale_max: VIEW_SCALE_MAX,
            view_zoom_step: VIEW_ZOOM_STEP,
            default_projection: VIEW_TOP.to_string(),
            default_wire_type: WireType::default(),
            default_wire_gauge: WireGauge::default(),
            wire_color_power: WIRE_COLOR_POWER,
            wire_color_signal: WIRE_COLOR_SIGNAL,
            wire_color_ground: WIRE_COLOR_GROUND,
            wire_color_data: WIRE_COLOR_DATA,
            wire_color_preview: WIRE_COLOR_PREVIEW,
            wire_color_selected: WIRE_COLOR_SELECTED,
            transition_marker_color: TRANSITION_MARKER_COLOR,
            hanging_end_marker_color: HANGING_END_MARKER_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("enclosure-wiring"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("enclosure_wiring.toml")
    }

    /// Farbe einer Leitungsart.
    pub fn wire_color(&self, wire_type: WireType) -> [f32; 4] {
        match wire_type {
            WireType::Power => self.wire_color_power,
            WireType::Signal => self.wire_color_signal,
            WireType::Ground => self.wire_color_ground,
            WireType::Data => self.wire_color_data,
        }
    }

    /// Klemmt einen Maßstab auf den erlaubten Bereich.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.view_scale_min, self.view_scale_max)
    }
}
