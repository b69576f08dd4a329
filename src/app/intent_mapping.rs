//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use glam::DVec3;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportClicked { screen_pos, port } => {
            let world_pos = state.screen_to_world(screen_pos);

            if state.core.is_routing() {
                return match port {
                    Some(end_port) => vec![AppCommand::CompleteWire { end_port }],
                    None => vec![
                        AppCommand::UpdatePreview { cursor: world_pos },
                        AppCommand::AddWaypoint,
                    ],
                };
            }

            // Idle: hängendes Ende hat Vorrang vor Port und Selektion
            if let Some(wire_id) = state.core.find_hanging_end(world_pos) {
                vec![AppCommand::ResumeWire { wire_id }]
            } else if let Some(port) = port {
                vec![AppCommand::StartWire {
                    port,
                    seed: world_pos,
                }]
            } else {
                vec![AppCommand::SelectWire { world_pos }]
            }
        }
        AppIntent::PortClicked { port } => {
            if state.core.is_routing() {
                vec![AppCommand::CompleteWire { end_port: port }]
            } else {
                let seed = port.world_position.unwrap_or(DVec3::ZERO);
                vec![AppCommand::StartWire { port, seed }]
            }
        }
        AppIntent::PointerMoved { screen_pos } => {
            if state.core.is_routing() {
                vec![AppCommand::UpdatePreview {
                    cursor: state.screen_to_world(screen_pos),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::HangRequested => vec![AppCommand::HangWire],
        AppIntent::CancelRequested => vec![AppCommand::CancelWire],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedWire],
        AppIntent::ClearAllWiresRequested => vec![AppCommand::ClearAllWires],
        AppIntent::ProjectionChangeRequested { projection_id } => {
            vec![AppCommand::SetActiveProjection { projection_id }]
        }
        AppIntent::GridPitchChanged { pitch } => vec![AppCommand::SetGridPitch { pitch }],
        AppIntent::WireTypeChanged { wire_type } => {
            let (_, wire_gauge) = state.core.wire_class();
            vec![AppCommand::SetWireClass {
                wire_type,
                wire_gauge,
            }]
        }
        AppIntent::WireGaugeChanged { wire_gauge } => {
            let (wire_type, _) = state.core.wire_class();
            vec![AppCommand::SetWireClass {
                wire_type,
                wire_gauge,
            }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ViewPanned { delta } => vec![AppCommand::PanView { delta }],
        AppIntent::ViewZoomed {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomView {
            factor,
            focus_screen,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomView {
            factor: state.options.view_zoom_step,
            focus_screen: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomView {
            factor: 1.0 / state.options.view_zoom_step,
            focus_screen: None,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExportWiresRequested { path } => vec![AppCommand::ExportWires { path }],
        AppIntent::ImportWiresRequested { path } => vec![AppCommand::ImportWires { path }],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
