//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{PreviewPolyline, RenderScene, WirePolyline};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Liest nur; funktioniert im Idle- wie im Routing-Zustand.
pub fn build(state: &AppState) -> RenderScene {
    let core = &state.core;
    let options = &state.options;
    let selected = core.selected_wire();

    let wires = core
        .wires()
        .values()
        .map(|wire| WirePolyline {
            wire_id: wire.id(),
            points: wire.waypoints().to_vec(),
            color: if selected == Some(wire.id()) {
                options.wire_color_selected
            } else {
                options.wire_color(wire.wire_type())
            },
            hanging: wire.is_hanging(),
            transition_points: wire
                .plane_transitions()
                .iter()
                .map(|t| t.at_point)
                .collect(),
        })
        .collect();

    let preview = core.preview_polyline().map(|points| PreviewPolyline {
        points,
        color: options.wire_color_preview,
    });

    RenderScene {
        projection: core.views().active().clone(),
        viewport_size: state.view.viewport_size,
        scale: state.view.scale,
        pan: state.view.pan,
        wires,
        preview,
        hanging_ends: core.hanging_ends(),
        hanging_end_color: options.hanging_end_marker_color,
        transition_color: options.transition_marker_color,
        selection: core.selection(),
        grid_pitch: core.grid().pitch(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{Port, WireType};
    use glam::DVec3;

    #[test]
    fn build_colors_wires_by_type_and_selection() {
        let mut state = AppState::new();
        state.core.set_wire_class(WireType::Power, Default::default());
        state
            .core
            .start_wire(&Port::new("A", "", DVec3::ZERO), DVec3::ZERO)
            .unwrap();
        state.core.update_preview(DVec3::new(40.0, 0.0, 0.0)).unwrap();
        let id = state.core.hang_wire().unwrap();

        let scene = build(&state);
        assert_eq!(scene.wire_count(), 1);
        assert_eq!(scene.wires[0].color, state.options.wire_color_power);
        assert!(scene.wires[0].hanging);
        assert_eq!(scene.hanging_ends, vec![(id, DVec3::new(40.0, 0.0, 0.0))]);
        assert!(!scene.is_routing());

        state.core.select_wire(DVec3::new(10.0, 0.0, 0.0));
        let scene = build(&state);
        assert_eq!(scene.wires[0].color, state.options.wire_color_selected);
    }

    #[test]
    fn build_contains_preview_only_while_routing() {
        let mut state = AppState::new();
        assert!(build(&state).preview.is_none());

        state
            .core
            .start_wire(&Port::new("A", "", DVec3::ZERO), DVec3::ZERO)
            .unwrap();
        state.core.update_preview(DVec3::new(0.0, 0.0, 30.0)).unwrap();

        let scene = build(&state);
        let preview = scene.preview.expect("Vorschau erwartet");
        assert_eq!(preview.points, vec![DVec3::ZERO, DVec3::new(0.0, 0.0, 30.0)]);
        assert_eq!(preview.color, state.options.wire_color_preview);
        assert!(scene.wires.is_empty(), "Session zählt nicht als fertige Leitung");
    }
}
