use super::*;
use crate::core::{PortId, VIEW_FRONT, VIEW_TOP};
use approx::assert_relative_eq;

fn port_a() -> Port {
    Port::new("A", "X1:1", DVec3::new(0.0, 0.0, 0.0))
}

fn port_b() -> Port {
    Port::new("B", "K1:A1", DVec3::new(30.0, 40.0, 20.0))
}

/// Szenario 1+2: Leitung von A über (30,0,0) nach (30,0,20) aufhängen.
fn hang_sample_wire(core: &mut WireRoutingCore) -> WireId {
    core.start_wire(&port_a(), DVec3::ZERO)
        .expect("Start erwartet");
    core.update_preview(DVec3::new(30.0, 0.0, 5.0))
        .expect("Vorschau erwartet");
    assert!(core.add_waypoint().expect("Routing aktiv"));
    core.update_preview(DVec3::new(30.0, 0.0, 20.0))
        .expect("Vorschau erwartet");
    core.hang_wire().expect("Aufhängen erwartet")
}

#[test]
fn test_scenario_first_waypoint_follows_larger_delta() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();

    let preview = core.update_preview(DVec3::new(30.0, 0.0, 5.0)).unwrap();
    // Z=5 rastet auf 10 ein, X-Abstand bleibt größer
    assert_eq!(preview, DVec3::new(30.0, 0.0, 0.0));
    assert!(core.add_waypoint().unwrap());

    let session = core.session().expect("Session erwartet");
    assert_eq!(
        session.waypoints(),
        &[DVec3::new(0.0, 0.0, 0.0), DVec3::new(30.0, 0.0, 0.0)]
    );
}

#[test]
fn test_scenario_hang_produces_hanging_wire() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);

    assert!(!core.is_routing());
    let wire = core.wire(id).expect("Leitung erwartet");
    assert!(wire.is_hanging());
    assert_eq!(
        wire.waypoints(),
        &[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(30.0, 0.0, 0.0),
            DVec3::new(30.0, 0.0, 20.0)
        ]
    );
    assert_relative_eq!(wire.length(), 50.0);
    assert_eq!(wire.projection().as_str(), VIEW_TOP);
}

#[test]
fn test_scenario_resume_in_other_view_records_transition() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);

    core.views_mut().set_active(VIEW_FRONT).unwrap();
    core.resume_wire(id).expect("Fortsetzen erwartet");

    assert!(core.wire(id).is_none(), "Leitung verlässt die Menge");
    let session = core.session().expect("Session erwartet");
    assert!(session.is_resumed());
    assert_eq!(session.waypoints().len(), 3);
    assert_eq!(
        session.pending_transition(),
        Some(&PlaneTransition {
            waypoint_index: 2,
            from_projection: ProjectionId::from(VIEW_TOP),
            to_projection: ProjectionId::from(VIEW_FRONT),
            at_point: DVec3::new(30.0, 0.0, 20.0),
        })
    );
}

#[test]
fn test_scenario_complete_after_resume() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    core.views_mut().set_active(VIEW_FRONT).unwrap();
    core.resume_wire(id).unwrap();

    let completed = core.complete_wire(&port_b()).expect("Abschluss erwartet");
    assert_eq!(completed, id, "fortgesetzte Leitung behält ihre ID");

    let wire = core.wire(id).expect("Leitung erwartet");
    assert_eq!(wire.end_port(), Some(&port_b()));
    assert_eq!(wire.last_waypoint(), DVec3::new(30.0, 40.0, 20.0));
    assert_relative_eq!(wire.length(), 90.0);
    assert_eq!(wire.plane_transitions().len(), 1);
    assert_eq!(wire.projection().as_str(), VIEW_FRONT);
}

#[test]
fn test_scenario_select_hanging_wire_in_top_view() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);

    assert_eq!(core.select_wire(DVec3::new(30.0, 0.0, 10.0)), Some(id));
    assert_eq!(core.selected_segment(), Some(1));
}

#[test]
fn test_scenario_second_start_fails_without_touching_session() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    core.update_preview(DVec3::new(50.0, 0.0, 0.0)).unwrap();
    core.add_waypoint().unwrap();
    let before = core.session().unwrap().waypoints().to_vec();

    assert_eq!(
        core.start_wire(&port_b(), DVec3::ZERO),
        Err(RoutingError::AlreadyRouting)
    );
    assert_eq!(core.session().unwrap().waypoints(), before.as_slice());
}

#[test]
fn test_start_without_port_position_uses_snapped_seed() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&Port::unplaced("P", "lose"), DVec3::new(11.0, 4.0, 26.0))
        .unwrap();
    assert_eq!(
        core.session().unwrap().last_waypoint(),
        DVec3::new(10.0, 0.0, 30.0)
    );
}

#[test]
fn test_operations_while_idle_fail() {
    let mut core = WireRoutingCore::new();
    assert_eq!(core.add_waypoint(), Err(RoutingError::NotRouting));
    assert_eq!(core.hang_wire(), Err(RoutingError::NotRouting));
    assert_eq!(core.cancel_wire(), Err(RoutingError::NotRouting));
    assert_eq!(
        core.complete_wire(&port_b()),
        Err(RoutingError::NotRouting)
    );
    assert_eq!(
        core.update_preview(DVec3::ZERO),
        Err(RoutingError::NotRouting)
    );
    assert_eq!(
        core.delete_selected_wire(),
        Err(RoutingError::NothingSelected)
    );
}

#[test]
fn test_self_connection_is_rejected_and_session_stays() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(
        core.complete_wire(&port_a()),
        Err(RoutingError::SelfConnection(PortId::from("A")))
    );
    assert!(core.is_routing());
    assert!(core.wires().is_empty());
}

#[test]
fn test_complete_with_unplaced_port_is_rejected() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(
        core.complete_wire(&Port::unplaced("C", "")),
        Err(RoutingError::PortWithoutPosition(PortId::from("C")))
    );
    assert!(core.is_routing());
}

#[test]
fn test_hang_requires_preview() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(core.hang_wire(), Err(RoutingError::NoPreviewPoint));
    assert!(core.is_routing());
}

#[test]
fn test_add_waypoint_grows_by_at_most_one() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    // Ohne Vorschau: keine Änderung
    assert_eq!(core.add_waypoint(), Ok(false));

    let cursors = [
        DVec3::new(40.0, 0.0, 0.0),
        DVec3::new(41.0, 0.0, 2.0),
        DVec3::new(40.0, 0.0, 60.0),
        DVec3::new(-20.0, 0.0, 61.0),
    ];
    for cursor in cursors {
        let before = core.session().unwrap().waypoints().len();
        let length_before = core.session().unwrap().wire().length();
        core.update_preview(cursor).unwrap();
        let added = core.add_waypoint().unwrap();
        let after = core.session().unwrap().waypoints().len();
        assert_eq!(after, before + usize::from(added));
        assert!(core.session().unwrap().wire().length() >= length_before);
    }
    // (41,0,2) rastet auf (40,0,0) ein und ist damit degeneriert
    assert_eq!(core.session().unwrap().waypoints().len(), 4);
}

#[test]
fn test_every_segment_is_axis_aligned_in_its_plane() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    for cursor in [
        DVec3::new(33.0, 7.0, 12.0),
        DVec3::new(-8.0, 2.0, 47.0),
        DVec3::new(25.0, 0.0, 25.0),
    ] {
        core.update_preview(cursor).unwrap();
        core.add_waypoint().unwrap();
    }
    let waypoints = core.session().unwrap().waypoints();
    for pair in waypoints.windows(2) {
        let delta = pair[1] - pair[0];
        let moved_axes = [delta.x, delta.y, delta.z]
            .iter()
            .filter(|d| d.abs() > 1e-9)
            .count();
        assert_eq!(moved_axes, 1);
        assert_relative_eq!(delta.y, 0.0);
    }
}

#[test]
fn test_hang_skips_duplicate_preview_point() {
    let mut core = WireRoutingCore::new();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    core.update_preview(DVec3::new(30.0, 0.0, 0.0)).unwrap();
    core.add_waypoint().unwrap();
    let id = core.hang_wire().unwrap();
    assert_eq!(core.wire(id).unwrap().waypoints().len(), 2);
}

#[test]
fn test_hang_then_find_hanging_end_returns_same_wire() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    let last = core.wire(id).unwrap().last_waypoint();
    assert_eq!(core.find_hanging_end(last), Some(id));
    // Radius ist dreifacher Trefferradius (15 mm)
    assert_eq!(core.find_hanging_end(last + DVec3::new(14.0, 0.0, 0.0)), Some(id));
    assert_eq!(core.find_hanging_end(last + DVec3::new(16.0, 0.0, 0.0)), None);
}

#[test]
fn test_find_hanging_end_ignores_connected_wires_and_prefers_nearest() {
    let mut core = WireRoutingCore::new();
    let far = hang_sample_wire(&mut core);

    core.start_wire(&Port::new("C", "", DVec3::new(40.0, 0.0, 30.0)), DVec3::ZERO)
        .unwrap();
    core.update_preview(DVec3::new(40.0, 0.0, 20.0)).unwrap();
    let near = core.hang_wire().unwrap();
    assert_ne!(far, near);

    assert_eq!(core.find_hanging_end(DVec3::new(38.0, 0.0, 20.0)), Some(near));

    core.resume_wire(near).unwrap();
    core.complete_wire(&port_b()).unwrap();
    assert_eq!(core.find_hanging_end(DVec3::new(38.0, 0.0, 20.0)), Some(far));
}

#[test]
fn test_resume_then_cancel_restores_wire_without_residue() {
    let mut core = WireRoutingCore::new();
    let first = hang_sample_wire(&mut core);
    core.start_wire(&port_b(), DVec3::ZERO).unwrap();
    core.update_preview(DVec3::new(90.0, 40.0, 20.0)).unwrap();
    let second = core.hang_wire().unwrap();

    let before: Vec<Wire> = core.wires().values().cloned().collect();
    core.views_mut().set_active(VIEW_FRONT).unwrap();
    core.resume_wire(first).unwrap();
    core.update_preview(DVec3::new(30.0, 80.0, 20.0)).unwrap();
    core.add_waypoint().unwrap();
    core.cancel_wire().unwrap();

    let after: Vec<Wire> = core.wires().values().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(
        core.wires().keys().copied().collect::<Vec<_>>(),
        vec![first, second]
    );
    assert!(core.wire(first).unwrap().plane_transitions().is_empty());
}

#[test]
fn test_resume_in_same_view_has_no_transition() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    core.resume_wire(id).unwrap();
    assert!(core.session().unwrap().pending_transition().is_none());
}

#[test]
fn test_resume_guards() {
    let mut core = WireRoutingCore::new();
    assert_eq!(
        core.resume_wire(WireId(99)),
        Err(RoutingError::WireNotFound(WireId(99)))
    );

    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    core.update_preview(DVec3::new(30.0, 0.0, 0.0)).unwrap();
    let connected = core.complete_wire(&port_b()).unwrap();
    assert_eq!(
        core.resume_wire(connected),
        Err(RoutingError::WireNotHanging(connected))
    );

    let hanging = hang_sample_wire(&mut core);
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(core.resume_wire(hanging), Err(RoutingError::AlreadyRouting));
}

#[test]
fn test_completed_wires_never_loop_to_start_port() {
    let mut core = WireRoutingCore::new();
    hang_sample_wire(&mut core);
    core.start_wire(&port_b(), DVec3::ZERO).unwrap();
    let _ = core.complete_wire(&port_b());
    core.complete_wire(&port_a()).unwrap();

    for wire in core.wires().values() {
        if let Some(end) = wire.end_port() {
            assert_ne!(end.id, wire.start_port().id);
        }
    }
}

#[test]
fn test_selection_threshold_boundary() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    let eps = 1e-6;

    // Segment (0,0,0)-(30,0,0) liegt auf der X-Achse der Draufsicht
    assert_eq!(core.select_wire(DVec3::new(15.0, 0.0, -(5.0 - eps))), Some(id));
    assert_eq!(core.select_wire(DVec3::new(15.0, 0.0, -(5.0 + eps))), None);
    assert_eq!(core.selected_wire(), None);
}

#[test]
fn test_select_ignores_constant_axis() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    assert_eq!(core.select_wire(DVec3::new(15.0, 250.0, 1.0)), Some(id));
}

#[test]
fn test_select_tie_prefers_first_wire() {
    let mut core = WireRoutingCore::new();
    for port in [
        Port::new("P1", "", DVec3::new(0.0, 0.0, 0.0)),
        Port::new("P2", "", DVec3::new(0.0, 0.0, 20.0)),
    ] {
        core.start_wire(&port, DVec3::ZERO).unwrap();
        core.update_preview(port.world_position.unwrap() + DVec3::X * 40.0)
            .unwrap();
        core.hang_wire().unwrap();
    }
    let first = *core.wires().keys().next().unwrap();
    assert_eq!(core.select_wire(DVec3::new(20.0, 0.0, 10.0)), None);
    core.set_hit_threshold(20.0);
    assert_eq!(core.select_wire(DVec3::new(20.0, 0.0, 10.0)), Some(first));
}

#[test]
fn test_delete_selected_wire() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    core.select_wire(DVec3::new(10.0, 0.0, 0.0));
    assert_eq!(core.delete_selected_wire(), Ok(id));
    assert!(core.wires().is_empty());
    assert_eq!(core.selected_wire(), None);
    assert_eq!(
        core.delete_selected_wire(),
        Err(RoutingError::NothingSelected)
    );
}

#[test]
fn test_clear_all_keeps_session() {
    let mut core = WireRoutingCore::new();
    hang_sample_wire(&mut core);
    core.start_wire(&port_b(), DVec3::ZERO).unwrap();
    assert_eq!(core.clear_all_wires(), 1);
    assert!(core.wires().is_empty());
    assert!(core.is_routing());
}

#[test]
fn test_wire_ids_are_never_reused() {
    let mut core = WireRoutingCore::new();
    let first = hang_sample_wire(&mut core);
    core.select_wire(DVec3::new(10.0, 0.0, 0.0));
    core.delete_selected_wire().unwrap();
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    core.cancel_wire().unwrap();
    let third = hang_sample_wire(&mut core);
    assert!(third > first);
    assert_eq!(third, WireId(3));
}

#[test]
fn test_preview_polyline_only_while_routing() {
    let mut core = WireRoutingCore::new();
    assert!(core.preview_polyline().is_none());
    core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(core.preview_polyline(), Some(vec![DVec3::ZERO]));
    core.update_preview(DVec3::new(0.0, 0.0, 40.0)).unwrap();
    assert_eq!(
        core.preview_polyline(),
        Some(vec![DVec3::ZERO, DVec3::new(0.0, 0.0, 40.0)])
    );
}

#[test]
fn test_snapshot_restore_roundtrip() {
    let mut core = WireRoutingCore::new();
    let id = hang_sample_wire(&mut core);
    let snapshot = core.wires_snapshot();
    core.clear_all_wires();
    core.restore_wires(
        snapshot,
        Some(WireSelection {
            wire_id: id,
            segment_index: 0,
        }),
    );
    assert!(core.wire(id).is_some());
    assert_eq!(core.selected_wire(), Some(id));

    core.restore_wires(
        Arc::new(WireSet::new()),
        Some(WireSelection {
            wire_id: id,
            segment_index: 0,
        }),
    );
    assert_eq!(core.selected_wire(), None, "Selektion auf fehlende Leitung");
}

#[test]
fn test_replace_wires_advances_id_counter() {
    let mut core = WireRoutingCore::new();
    let imported = Wire::from_parts(
        WireId(41),
        port_a(),
        Some(port_b()),
        vec![DVec3::ZERO, DVec3::new(30.0, 40.0, 20.0)],
        Vec::new(),
        WireType::Power,
        WireGauge(10),
        ProjectionId::from(VIEW_TOP),
    )
    .expect("gültige Leitung");
    assert_eq!(core.replace_wires(vec![imported]), Ok(1));

    let next = core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(next, WireId(42));
    assert_eq!(
        core.replace_wires(Vec::new()),
        Err(RoutingError::AlreadyRouting)
    );
}

fn imported_wire(id: u64) -> Wire {
    Wire::from_parts(
        WireId(id),
        port_a(),
        None,
        vec![DVec3::ZERO, DVec3::new(30.0, 0.0, 0.0)],
        Vec::new(),
        WireType::Signal,
        WireGauge::default(),
        ProjectionId::from(VIEW_TOP),
    )
    .expect("gültige Leitung")
}

#[test]
fn test_replace_wires_rejects_duplicates_and_keeps_state() {
    let mut core = WireRoutingCore::new();
    core.replace_wires(vec![imported_wire(3)]).unwrap();

    assert_eq!(
        core.replace_wires(vec![imported_wire(7), imported_wire(7)]),
        Err(RoutingError::DuplicateWireId(WireId(7)))
    );
    let ids: Vec<WireId> = core.wires().keys().copied().collect();
    assert_eq!(ids, vec![WireId(3)]);
}

#[test]
fn test_replace_wires_rejects_last_id_without_panic() {
    let mut core = WireRoutingCore::new();
    assert_eq!(
        core.replace_wires(vec![imported_wire(1), imported_wire(u64::MAX)]),
        Err(RoutingError::WireIdsExhausted)
    );
    assert!(core.wires().is_empty());

    let id = core.start_wire(&port_a(), DVec3::ZERO).unwrap();
    assert_eq!(id, WireId(1));
}

#[test]
fn test_start_wire_fails_when_ids_are_exhausted() {
    let mut core = WireRoutingCore::new();
    core.replace_wires(vec![imported_wire(u64::MAX - 1)]).unwrap();

    assert_eq!(
        core.start_wire(&port_a(), DVec3::ZERO),
        Err(RoutingError::WireIdsExhausted)
    );
    assert!(!core.is_routing());
    assert!(core.wire(WireId(u64::MAX - 1)).is_some());
}

#[test]
fn test_invalid_tunables_are_ignored() {
    let mut core = WireRoutingCore::new();
    core.set_hit_threshold(-1.0);
    core.set_waypoint_epsilon(0.0);
    core.set_hanging_end_factor(0.5);
    assert_relative_eq!(core.hit_threshold(), DEFAULT_HIT_THRESHOLD);
    assert_relative_eq!(core.waypoint_epsilon(), DEFAULT_WAYPOINT_EPSILON);
    assert_relative_eq!(core.hanging_end_threshold(), 15.0);
}

#[test]
fn test_wire_class_applies_to_new_wires() {
    let mut core = WireRoutingCore::new();
    core.set_wire_class(WireType::Ground, WireGauge(10));
    let id = hang_sample_wire(&mut core);
    let wire = core.wire(id).unwrap();
    assert_eq!(wire.wire_type(), WireType::Ground);
    assert_eq!(wire.wire_gauge(), WireGauge(10));
}
