//! Enclosure Wiring Library.
//! Orthogonaler Leitungs-Router für Schaltschrank-Layouts, als Library
//! exportiert für Tests, Replay und Wiederverwendung in einer Oberfläche.

pub mod app;
pub mod core;
pub mod shared;
pub mod wire_list;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    GridSystem, PlaneTransition, Port, PortId, Projection, ProjectionId, RoutingError,
    ViewManager, Wire, WireGauge, WireId, WireRoutingCore, WireSelection, WireType,
};
pub use shared::{EditorOptions, RenderScene};
pub use wire_list::{parse_wire_list, read_wire_list_file, write_wire_list, write_wire_list_file};
