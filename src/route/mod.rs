//! The routing pipeline: anchors to base polyline, classification, offset
//! application, path string, label point. Pure derivation; the persisted
//! state is only read here, never written.

pub mod segments;
pub mod step_path;

pub use segments::{DragSegment, SegmentDirection, apply_offsets, classify_segments};
pub use step_path::{compress_path, step_path};

use crate::config::RoutingConfig;
use crate::edge::{EdgeKind, EdgeRoutingState, EdgeSpec};
use crate::geometry::{Point, build_path, point_at_t};

/// Everything derived for one edge on a route pass. `base_*` reflect the
/// anchors alone; `points`/`segments` have the stored offsets applied and
/// are what gets displayed.
#[derive(Debug, Clone)]
pub struct RoutedEdge {
    pub base_points: Vec<Point>,
    pub base_segments: Vec<DragSegment>,
    pub points: Vec<Point>,
    pub segments: Vec<DragSegment>,
    /// Renderable path description for the displayed polyline.
    pub path: String,
    /// Label anchor on the displayed polyline.
    pub label_point: Point,
}

/// Run the full pipeline for one edge. Step edges route orthogonally with
/// draggable interior segments; straight edges are the two-point polyline
/// with nothing to drag. Total over its input: degenerate anchors produce a
/// degenerate (possibly empty-path) route, never an error.
pub fn route_edge(edge: &EdgeSpec, config: &RoutingConfig) -> RoutedEdge {
    let base_points = match edge.kind {
        EdgeKind::Step => step_path(&edge.source, &edge.target, config.stub_length),
        EdgeKind::Straight => vec![edge.source.position, edge.target.position],
    };
    route_points(base_points, &edge.data, config)
}

/// Pipeline tail shared by [`route_edge`] and callers that already hold a
/// base polyline (e.g. one recovered from a path description).
pub fn route_points(
    base_points: Vec<Point>,
    state: &EdgeRoutingState,
    config: &RoutingConfig,
) -> RoutedEdge {
    let base_segments = classify_segments(&base_points, config.axis_epsilon);
    let offsets = state.segment_offsets.as_deref().unwrap_or(&[]);
    // apply_offsets discards a length-mismatched list whole (self-heal).
    let points = apply_offsets(&base_points, &base_segments, offsets);
    let segments = classify_segments(&points, config.axis_epsilon);
    let path = build_path(&points);
    let label_point = point_at_t(&points, state.label_t());
    RoutedEdge {
        base_points,
        base_segments,
        points,
        segments,
        path,
        label_point,
    }
}
