//! Handler für Ansicht, Raster, Leitungsklasse und Viewport.

use crate::app::AppState;
use crate::core::{WireGauge, WireType};
use glam::DVec2;

/// Wechselt die aktive Ansicht. Eine laufende Session bleibt erhalten.
pub fn set_active_projection(state: &mut AppState, projection_id: &str) {
    if let Err(e) = state.core.views_mut().set_active(projection_id) {
        log::warn!("{}", e);
    }
}

/// Setzt die Rasterweite; ungültige Werte werden verworfen.
pub fn set_grid_pitch(state: &mut AppState, pitch: f64) {
    match state.core.grid_mut().set_pitch(pitch) {
        Ok(()) => log::info!("Rasterweite: {} mm", pitch),
        Err(e) => log::warn!("{}", e),
    }
}

/// Setzt Leitungsart und Querschnitt für neue Leitungen.
pub fn set_wire_class(state: &mut AppState, wire_type: WireType, wire_gauge: WireGauge) {
    state.core.set_wire_class(wire_type, wire_gauge);
    log::debug!("Leitungsklasse: {} / {}", wire_type.label(), wire_gauge);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: DVec2) {
    state.view.viewport_size = size.max(DVec2::ZERO);
}

/// Verschiebt die Ansicht um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.pan += delta;
}

/// Zoomt um `factor`; der Ebenenpunkt unter `focus_screen` bleibt stehen.
///
/// Ohne Fokus wird auf die Viewport-Mitte gezoomt.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_screen: Option<DVec2>) {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Zoomfaktor {} ignoriert", factor);
        return;
    }
    let view = &mut state.view;
    let old_scale = view.scale;
    let new_scale = state.options.clamp_scale(old_scale * factor);
    let half = view.viewport_size * 0.5;
    let focus = focus_screen.unwrap_or(half);

    let plane_point = (focus - half - view.pan) / old_scale;
    view.pan = focus - half - plane_point * new_scale;
    view.scale = new_scale;
}

/// Setzt Maßstab und Verschiebung zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.scale = state.options.clamp_scale(1.0);
    state.view.pan = DVec2::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn zoom_keeps_world_point_under_focus() {
        let mut state = AppState::new();
        state.view.viewport_size = DVec2::new(400.0, 300.0);
        state.view.pan = DVec2::new(15.0, -5.0);
        let focus = DVec2::new(310.0, 90.0);
        let before = state.screen_to_world(focus);

        zoom_towards(&mut state, 2.0, Some(focus));

        assert_relative_eq!(state.view.scale, 2.0);
        let after = state.screen_to_world(focus);
        assert_relative_eq!(after.x, before.x, epsilon = 1e-9);
        assert_relative_eq!(after.z, before.z, epsilon = 1e-9);
    }

    #[test]
    fn zoom_is_clamped_by_options() {
        let mut state = AppState::new();
        for _ in 0..50 {
            zoom_towards(&mut state, 1.5, None);
        }
        assert_relative_eq!(state.view.scale, state.options.view_scale_max);

        zoom_towards(&mut state, 0.0, None);
        assert_relative_eq!(state.view.scale, state.options.view_scale_max);
    }

    #[test]
    fn pan_and_reset() {
        let mut state = AppState::new();
        state.view.viewport_size = DVec2::new(100.0, 100.0);
        pan(&mut state, DVec2::new(10.0, 20.0));
        assert_eq!(state.world_to_screen(DVec3::ZERO), DVec2::new(60.0, 70.0));

        zoom_towards(&mut state, 3.0, None);
        reset_view(&mut state);
        assert_eq!(state.view.pan, DVec2::ZERO);
        assert_relative_eq!(state.view.scale, 1.0);
    }

    #[test]
    fn invalid_grid_pitch_keeps_previous() {
        let mut state = AppState::new();
        set_grid_pitch(&mut state, 0.0);
        assert_relative_eq!(state.core.grid().pitch(), 10.0);
        set_grid_pitch(&mut state, 2.5);
        assert_relative_eq!(state.core.grid().pitch(), 2.5);
    }
}
