use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DiagramError;
use crate::geometry::Point;

/// Which side of its node an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// Fixed endpoint of an edge, owned by the connected node. The routing
/// engine reads anchors and never moves them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Point,
    pub side: AnchorSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowMarker {
    #[default]
    None,
    Arrow,
}

/// How an edge is routed: an orthogonal step path with draggable interior
/// segments, or a plain straight line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[default]
    Step,
    Straight,
}

fn is_solid(style: &LineStyle) -> bool {
    *style == LineStyle::Solid
}

fn is_no_marker(marker: &ArrowMarker) -> bool {
    *marker == ArrowMarker::None
}

/// Routing state persisted per edge. Field names stay camelCase in JSON so
/// documents written by the editor's exporter load unchanged; fields at
/// their defaults are skipped so persisted state stays minimal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeRoutingState {
    /// One offset per draggable segment of the base polyline, in base
    /// segment order. Absent (or stale after an anchor move changed the
    /// segment count) means no offsets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_offsets: Option<Vec<f32>>,
    /// Normalized arc-length position of the label along the offset-applied
    /// polyline; absent means the path midpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_position: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "is_solid")]
    pub line_style: LineStyle,
}

impl EdgeRoutingState {
    /// Label position with the default and the [0, 1] clamp applied.
    pub fn label_t(&self) -> f32 {
        self.label_position.unwrap_or(0.5).clamp(0.0, 1.0)
    }

    /// Store an offset for one segment, materializing the offsets list at
    /// the current segment count on first use. A stale list (wrong length)
    /// is replaced by a fresh all-zero one rather than partially reused.
    pub fn set_segment_offset(&mut self, index: usize, segment_count: usize, offset: f32) {
        if index >= segment_count {
            return;
        }
        let mut offsets = match self.segment_offsets.take() {
            Some(list) if list.len() == segment_count => list,
            _ => vec![0.0; segment_count],
        };
        offsets[index] = offset;
        self.segment_offsets = Some(offsets);
    }

    /// Clear one segment's offset back to exactly 0. When every entry is 0
    /// the list is removed entirely, returning to the absent default.
    pub fn reset_segment_offset(&mut self, index: usize) {
        let Some(offsets) = self.segment_offsets.as_mut() else {
            return;
        };
        if index < offsets.len() {
            offsets[index] = 0.0;
        }
        if offsets.iter().all(|o| *o == 0.0) {
            self.segment_offsets = None;
        }
    }

    pub fn toggle_line_style(&mut self) {
        self.line_style = match self.line_style {
            LineStyle::Solid => LineStyle::Dashed,
            LineStyle::Dashed => LineStyle::Solid,
        };
    }
}

/// One edge of a diagram document: identity, anchors supplied by the anchor
/// provider, markers, and the persisted routing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSpec {
    pub id: String,
    #[serde(default)]
    pub kind: EdgeKind,
    pub source: Anchor,
    pub target: Anchor,
    #[serde(default, skip_serializing_if = "is_no_marker")]
    pub marker_start: ArrowMarker,
    #[serde(default, skip_serializing_if = "is_no_marker")]
    pub marker_end: ArrowMarker,
    #[serde(default)]
    pub data: EdgeRoutingState,
}

impl EdgeSpec {
    /// A freshly drawn edge: default routing state, arrowhead at the target.
    pub fn new(id: impl Into<String>, source: Anchor, target: Anchor) -> Self {
        EdgeSpec {
            id: id.into(),
            kind: EdgeKind::Step,
            source,
            target,
            marker_start: ArrowMarker::None,
            marker_end: ArrowMarker::Arrow,
            data: EdgeRoutingState::default(),
        }
    }

    /// Flip the edge's visual direction by swapping its markers. Anchors and
    /// routing state are untouched.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.marker_start, &mut self.marker_end);
    }
}

/// A diagram document as consumed at this core's boundary: just the edges,
/// with anchors already resolved by the anchor provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub edges: Vec<EdgeSpec>,
}

impl Diagram {
    /// Decode a diagram document. Strict JSON is tried first; JSON5 accepted
    /// as a fallback for hand-written documents. The strict parser's error
    /// is the one reported when both fail.
    pub fn parse(input: &str) -> Result<Diagram, DiagramError> {
        match serde_json::from_str(input) {
            Ok(diagram) => Ok(diagram),
            Err(json_err) => {
                json5::from_str(input).map_err(|_| DiagramError::Parse(json_err))
            }
        }
    }

    pub fn load(path: &Path) -> Result<Diagram, DiagramError> {
        let contents = std::fs::read_to_string(path)?;
        Diagram::parse(&contents)
    }
}
