//! Raster-Snapping für Leitungs-Koordinaten.

use super::InvalidGridPitch;
use glam::DVec3;

/// Standard-Rasterweite in Millimetern.
pub const DEFAULT_GRID_PITCH: f64 = 10.0;

/// Quantisiert Koordinaten auf ein Raster mit konfigurierbarer Weite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSystem {
    pitch: f64,
}

impl GridSystem {
    /// Erstellt ein Raster mit der gegebenen Weite.
    pub fn new(pitch: f64) -> Result<Self, InvalidGridPitch> {
        let mut grid = Self::default();
        grid.set_pitch(pitch)?;
        Ok(grid)
    }

    /// Aktuelle Rasterweite in Millimetern.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Ersetzt die Rasterweite. Bei ungültigem Wert bleibt die alte erhalten.
    pub fn set_pitch(&mut self, mm: f64) -> Result<(), InvalidGridPitch> {
        if !mm.is_finite() || mm <= 0.0 {
            return Err(InvalidGridPitch(mm));
        }
        self.pitch = mm;
        log::debug!("Rasterweite gesetzt: {} mm", mm);
        Ok(())
    }

    /// Rundet auf das nächste Vielfache der Rasterweite.
    pub fn snap_scalar(&self, v: f64) -> f64 {
        (v / self.pitch).round() * self.pitch
    }

    /// Rastet einen Punkt komponentenweise ein.
    pub fn snap_point(&self, p: DVec3) -> DVec3 {
        DVec3::new(
            self.snap_scalar(p.x),
            self.snap_scalar(p.y),
            self.snap_scalar(p.z),
        )
    }
}

impl Default for GridSystem {
    fn default() -> Self {
        Self {
            pitch: DEFAULT_GRID_PITCH,
        }
    }
}
