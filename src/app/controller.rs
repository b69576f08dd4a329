//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Eingabe-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Fehler des Zustandsautomaten werden geloggt und verworfen; nur
    /// Datei- und Optionsfehler werden an den Aufrufer gereicht.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Verlegen ===
            AppCommand::StartWire { port, seed } => handlers::routing::start_wire(state, port, seed),
            AppCommand::ResumeWire { wire_id } => handlers::routing::resume_wire(state, wire_id),
            AppCommand::UpdatePreview { cursor } => {
                handlers::routing::update_preview(state, cursor)
            }
            AppCommand::AddWaypoint => handlers::routing::add_waypoint(state),
            AppCommand::CompleteWire { end_port } => {
                handlers::routing::complete_wire(state, end_port)
            }
            AppCommand::HangWire => handlers::routing::hang_wire(state),
            AppCommand::CancelWire => handlers::routing::cancel_wire(state),

            // === Selektion ===
            AppCommand::SelectWire { world_pos } => {
                handlers::selection::select_wire(state, world_pos)
            }
            AppCommand::DeleteSelectedWire => handlers::selection::delete_selected(state),
            AppCommand::ClearAllWires => handlers::selection::clear_all(state),

            // === Ansicht & Raster ===
            AppCommand::SetActiveProjection { projection_id } => {
                handlers::view::set_active_projection(state, &projection_id)
            }
            AppCommand::SetGridPitch { pitch } => handlers::view::set_grid_pitch(state, pitch),
            AppCommand::SetWireClass {
                wire_type,
                wire_gauge,
            } => handlers::view::set_wire_class(state, wire_type, wire_gauge),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomView {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Datei-I/O ===
            AppCommand::ExportWires { path } => handlers::file_io::export_wires(state, path)?,
            AppCommand::ImportWires { path } => handlers::file_io::import_wires(state, path)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
