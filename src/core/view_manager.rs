//! Verwaltung der orthographischen Ansichten (Draufsicht, Front, Seiten).

use super::{Axis, Projection, ProjectionId, UnknownProjection};
use glam::{DVec2, DVec3};

/// ID der Draufsicht (X-Z-Ebene, Y konstant)
pub const VIEW_TOP: &str = "top";
/// ID der Frontansicht (X-Y-Ebene, Z konstant)
pub const VIEW_FRONT: &str = "front";
/// ID der linken Seitenansicht (Z-Y-Ebene, X konstant)
pub const VIEW_SIDE_LEFT: &str = "side-left";
/// ID der rechten Seitenansicht (Z-Y-Ebene, X konstant)
pub const VIEW_SIDE_RIGHT: &str = "side-right";

/// Registry aller Ansichten plus die aktuell aktive.
///
/// Es ist immer genau eine Ansicht aktiv; nach der Konstruktion ist das die
/// Draufsicht.
#[derive(Debug, Clone)]
pub struct ViewManager {
    projections: Vec<Projection>,
    active: usize,
}

impl ViewManager {
    /// Erstellt den ViewManager mit den vier Standard-Ansichten.
    pub fn new() -> Self {
        let projections = vec![
            // Blick von oben: Bildschirm-Y folgt direkt Z
            standard(VIEW_TOP, "Draufsicht", Axis::X, Axis::Z, false, false),
            standard(VIEW_FRONT, "Frontansicht", Axis::X, Axis::Y, false, true),
            standard(VIEW_SIDE_LEFT, "Seitenansicht (links)", Axis::Z, Axis::Y, false, true),
            standard(VIEW_SIDE_RIGHT, "Seitenansicht (rechts)", Axis::Z, Axis::Y, false, true),
        ];
        Self {
            projections,
            active: 0,
        }
    }

    /// Registriert eine Ansicht. Eine vorhandene Ansicht mit gleicher ID wird ersetzt.
    pub fn register(&mut self, projection: Projection) {
        if let Some(existing) = self
            .projections
            .iter_mut()
            .find(|p| p.id() == projection.id())
        {
            *existing = projection;
        } else {
            self.projections.push(projection);
        }
    }

    /// Aktiviert eine Ansicht. Bei unbekannter ID bleibt die bisherige aktiv.
    pub fn set_active(&mut self, projection_id: &str) -> Result<(), UnknownProjection> {
        let Some(index) = self
            .projections
            .iter()
            .position(|p| p.id().as_str() == projection_id)
        else {
            return Err(UnknownProjection(projection_id.to_string()));
        };
        self.active = index;
        log::info!(
            "Ansicht gewechselt: {}",
            self.projections[index].display_name()
        );
        Ok(())
    }

    /// Die aktive Ansicht.
    pub fn active(&self) -> &Projection {
        &self.projections[self.active]
    }

    /// ID der aktiven Ansicht.
    pub fn active_id(&self) -> &ProjectionId {
        self.active().id()
    }

    /// Sucht eine Ansicht per ID.
    pub fn projection(&self, projection_id: &str) -> Option<&Projection> {
        self.projections
            .iter()
            .find(|p| p.id().as_str() == projection_id)
    }

    /// Alle registrierten Ansichten in Registrierungsreihenfolge.
    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// Achse senkrecht zur aktiven Ansicht (beim Verlegen eingefroren).
    pub fn constant_axis(&self) -> Axis {
        self.active().constant_axis()
    }

    /// Weltpunkt → Bildschirmkoordinaten der aktiven Ansicht.
    ///
    /// Die konstante Achse wird ignoriert. Der Welt-Ursprung liegt in der
    /// Viewport-Mitte, verschoben um `pan`.
    pub fn world_to_screen(&self, p: DVec3, viewport: DVec2, scale: f64, pan: DVec2) -> DVec2 {
        let plane = self.active().to_screen_plane(p);
        plane * scale + viewport * 0.5 + pan
    }

    /// Bildschirmkoordinaten → Weltpunkt in der aktiven Ansicht.
    ///
    /// `constant_value` belegt die konstante Achse, üblicherweise mit der
    /// entsprechenden Koordinate des letzten Wegpunkts.
    pub fn screen_to_world(
        &self,
        s: DVec2,
        viewport: DVec2,
        scale: f64,
        pan: DVec2,
        constant_value: f64,
    ) -> DVec3 {
        let plane = (s - viewport * 0.5 - pan) / scale;
        self.active().from_screen_plane(plane, constant_value)
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::new()
    }
}

fn standard(
    id: &str,
    name: &str,
    horizontal: Axis,
    vertical: Axis,
    invert_horizontal: bool,
    invert_vertical: bool,
) -> Projection {
    match Projection::new(id, name, horizontal, vertical) {
        Ok(p) => p.with_inversion(invert_horizontal, invert_vertical),
        // Standard-Ansichten haben immer verschiedene Achsen
        Err(_) => unreachable!("Standard-Ansicht {id} mit identischen Achsen"),
    }
}
