//! Core-Domänentypen: Ansichten, Raster, Ports, Leitungen und der Routing-Kern.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod port;
pub mod projection;
/// Routing-Kern mit Session, Leitungsmenge und Selektion
///
/// - `WireRoutingCore`: Zustandsautomat Idle ↔ Routing
/// - `RoutingSession`: die gerade verlegte Leitung samt Vorschau
/// - Treffer-Tests für Selektion und hängende Enden
pub mod router;
pub mod view_manager;
pub mod wire;

pub use error::{InvalidGridPitch, InvalidProjection, RoutingError, UnknownProjection};
pub use grid::{GridSystem, DEFAULT_GRID_PITCH};
pub use port::{Port, PortId};
pub use projection::{Axis, Projection, ProjectionId};
pub use router::{
    RoutingSession, WireRoutingCore, WireSelection, WireSet, DEFAULT_HANGING_END_FACTOR,
    DEFAULT_HIT_THRESHOLD,
};
pub use view_manager::{ViewManager, VIEW_FRONT, VIEW_SIDE_LEFT, VIEW_SIDE_RIGHT, VIEW_TOP};
pub use wire::{PlaneTransition, Wire, WireGauge, WireId, WireType};
