//! Orthographische Ansichten: Achsen, Projektions-IDs und Ebenen-Abbildung.

use super::InvalidProjection;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Welt-Achse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Breite
    X,
    /// Höhe
    Y,
    /// Tiefe
    Z,
}

impl Axis {
    /// Alle Achsen in fester Reihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Komponenten-Index in einem `DVec3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Liest die Komponente dieser Achse.
    pub fn get(self, v: DVec3) -> f64 {
        v[self.index()]
    }

    /// Schreibt die Komponente dieser Achse.
    pub fn set(self, v: &mut DVec3, value: f64) {
        v[self.index()] = value;
    }

    /// Die dritte Achse, die weder `a` noch `b` ist (None bei `a == b`).
    pub fn remaining(a: Axis, b: Axis) -> Option<Axis> {
        if a == b {
            return None;
        }
        Axis::ALL.into_iter().find(|&axis| axis != a && axis != b)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

/// Stabile ID einer Ansicht (z.B. `"top"`, `"front"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectionId(String);

impl ProjectionId {
    /// Erstellt eine ID aus einem beliebigen String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Orthographische Abbildung des 3D-Raums auf eine 2D-Ebene.
///
/// Die horizontale Achse ist Ebenen-Achse `a`, die vertikale Achse `b`.
/// Die dritte Achse (`constant_axis`) wird beim Verlegen in dieser Ansicht
/// festgehalten.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    id: ProjectionId,
    display_name: String,
    horizontal: Axis,
    vertical: Axis,
    constant_axis: Axis,
    invert_horizontal: bool,
    invert_vertical: bool,
}

impl Projection {
    /// Erstellt eine Ansicht. Die konstante Achse wird aus den Ebenen-Achsen abgeleitet.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        horizontal: Axis,
        vertical: Axis,
    ) -> Result<Self, InvalidProjection> {
        let id = id.into();
        let Some(constant_axis) = Axis::remaining(horizontal, vertical) else {
            return Err(InvalidProjection { id });
        };
        Ok(Self {
            id: ProjectionId::new(id),
            display_name: display_name.into(),
            horizontal,
            vertical,
            constant_axis,
            invert_horizontal: false,
            invert_vertical: false,
        })
    }

    /// Bildschirm-Vorzeichen der Achsen setzen (true = gespiegelt).
    pub fn with_inversion(mut self, horizontal: bool, vertical: bool) -> Self {
        self.invert_horizontal = horizontal;
        self.invert_vertical = vertical;
        self
    }

    /// ID der Ansicht
    pub fn id(&self) -> &ProjectionId {
        &self.id
    }

    /// Anzeigename für die UI
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Ebenen-Achsen `(a, b)` = (horizontal, vertikal)
    pub fn plane_axes(&self) -> (Axis, Axis) {
        (self.horizontal, self.vertical)
    }

    /// Achse senkrecht zur Ebene
    pub fn constant_axis(&self) -> Axis {
        self.constant_axis
    }

    /// Ob die horizontale Achse auf dem Bildschirm gespiegelt ist
    pub fn invert_horizontal(&self) -> bool {
        self.invert_horizontal
    }

    /// Ob die vertikale Achse auf dem Bildschirm gespiegelt ist
    pub fn invert_vertical(&self) -> bool {
        self.invert_vertical
    }

    /// Projiziert einen Weltpunkt in Ebenen-Koordinaten `(a, b)` ohne Bildschirm-Vorzeichen.
    ///
    /// Grundlage aller Abstandsberechnungen in der aktiven Ansicht.
    pub fn project(&self, p: DVec3) -> DVec2 {
        DVec2::new(self.horizontal.get(p), self.vertical.get(p))
    }

    /// Ebenen-Koordinaten mit Bildschirm-Vorzeichen (Y wächst nach unten).
    pub(crate) fn to_screen_plane(&self, p: DVec3) -> DVec2 {
        let plane = self.project(p);
        DVec2::new(
            if self.invert_horizontal { -plane.x } else { plane.x },
            if self.invert_vertical { -plane.y } else { plane.y },
        )
    }

    /// Inverse zu `to_screen_plane`; die konstante Achse erhält `constant_value`.
    pub(crate) fn from_screen_plane(&self, plane: DVec2, constant_value: f64) -> DVec3 {
        let mut p = DVec3::ZERO;
        let h = if self.invert_horizontal { -plane.x } else { plane.x };
        let v = if self.invert_vertical { -plane.y } else { plane.y };
        self.horizontal.set(&mut p, h);
        self.vertical.set(&mut p, v);
        self.constant_axis.set(&mut p, constant_value);
        p
    }
}
