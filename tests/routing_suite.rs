use std::path::Path;

use steproute::config::RoutingConfig;
use steproute::edge::{Diagram, EdgeKind};
use steproute::geometry::{Point, parse_points, point_at_t};
use steproute::interaction::{EdgeInteraction, Viewport};
use steproute::route::route_edge;

fn load_fixture(name: &str) -> Diagram {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let contents = std::fs::read_to_string(&path).expect("fixture read failed");
    Diagram::parse(&contents).expect("fixture parse failed")
}

#[test]
fn route_all_fixtures() {
    let config = RoutingConfig::default();

    // Keep this list explicit so new fixtures must be added intentionally.
    let fixtures = ["basic.json", "offsets.json", "degenerate.json"];

    for name in fixtures {
        let diagram = load_fixture(name);
        assert!(!diagram.edges.is_empty(), "{name}: fixture has no edges");

        for edge in &diagram.edges {
            let routed = route_edge(edge, &config);

            // Step routes stay orthogonal, offsets included.
            if edge.kind == EdgeKind::Step {
                for pair in routed.points.windows(2) {
                    let dx = (pair[1].x - pair[0].x).abs();
                    let dy = (pair[1].y - pair[0].y).abs();
                    assert!(
                        dx < config.axis_epsilon || dy < config.axis_epsilon,
                        "{name}/{}: diagonal segment {:?} -> {:?}",
                        edge.id,
                        pair[0],
                        pair[1]
                    );
                }
            }

            // The path description reproduces the polyline exactly.
            assert_eq!(
                parse_points(&routed.path),
                routed.points,
                "{name}/{}: path round trip",
                edge.id
            );

            // Label derivation is the pure point_at_t of the stored position.
            let expected = point_at_t(&routed.points, edge.data.label_t());
            assert_eq!(
                routed.label_point, expected,
                "{name}/{}: label point",
                edge.id
            );
            assert!(
                routed.label_point.x.is_finite() && routed.label_point.y.is_finite(),
                "{name}/{}: label point not finite",
                edge.id
            );

            // Handles only ever sit on interior segments.
            assert!(
                routed.segments.len() <= routed.points.len().saturating_sub(3),
                "{name}/{}: too many draggable segments",
                edge.id
            );
        }
    }
}

#[test]
fn stored_offsets_bend_only_matching_routes() {
    let config = RoutingConfig::default();
    let diagram = load_fixture("offsets.json");

    let bent = diagram.edges.iter().find(|e| e.id == "bent").unwrap();
    let routed = route_edge(bent, &config);
    assert_ne!(routed.points, routed.base_points, "offset must apply");

    // A stale list (length mismatch after an anchor move) is ignored whole.
    let stale = diagram.edges.iter().find(|e| e.id == "stale").unwrap();
    let routed = route_edge(stale, &config);
    assert_eq!(routed.points, routed.base_points);
}

#[test]
fn routing_state_survives_a_save_load_cycle() {
    let config = RoutingConfig::default();
    let diagram = load_fixture("offsets.json");

    let serialized = serde_json::to_string_pretty(&diagram).expect("serialize failed");
    let reloaded = Diagram::parse(&serialized).expect("reload failed");
    assert_eq!(diagram.edges.len(), reloaded.edges.len());

    for (before, after) in diagram.edges.iter().zip(&reloaded.edges) {
        assert_eq!(before.data, after.data, "{}: state drifted", before.id);
        let a = route_edge(before, &config);
        let b = route_edge(after, &config);
        assert_eq!(a.points, b.points, "{}: geometry drifted", before.id);
    }
}

#[test]
fn drag_session_round_trips_through_the_document() {
    let config = RoutingConfig::default();
    let viewport = Viewport::default();
    let mut diagram = load_fixture("offsets.json");

    let idx = diagram
        .edges
        .iter()
        .position(|e| e.id == "loopback")
        .unwrap();
    let routed = route_edge(&diagram.edges[idx], &config);
    assert_eq!(routed.base_segments.len(), 1);
    let midpoint = routed.base_segments[0].midpoint;

    // Drag the single vertical channel segment 24 units further out.
    let mut interaction = EdgeInteraction::new();
    assert!(interaction.press_segment_handle(&routed, 0));
    interaction.pointer_moved(
        Point::new(midpoint.x + 24.0, midpoint.y),
        &viewport,
        &routed,
        &config,
        &mut diagram.edges[idx].data,
    );
    interaction.pointer_released();
    assert_eq!(diagram.edges[idx].data.segment_offsets, Some(vec![24.0]));

    // Persist, reload, and re-route: the dragged geometry is reproduced.
    let dragged = route_edge(&diagram.edges[idx], &config);
    let serialized = serde_json::to_string(&diagram).expect("serialize failed");
    let reloaded = Diagram::parse(&serialized).expect("reload failed");
    let restored = route_edge(&reloaded.edges[idx], &config);
    assert_eq!(restored.points, dragged.points);
    assert_ne!(restored.points, dragged.base_points);
}
