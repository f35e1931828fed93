//! Per-edge interaction: dragging a segment handle to offset the segment,
//! dragging the label along the path, and the modal label-text editor.
//!
//! All state lives in explicit values transitioned by discrete input events
//! (press / move / release / tick), so gestures are unit-testable without a
//! real pointer device. Every edge owns its own [`EdgeInteraction`]; two
//! edges' gestures never coordinate.

use crate::config::RoutingConfig;
use crate::edge::EdgeRoutingState;
use crate::geometry::{Point, nearest_t};
use crate::route::{RoutedEdge, SegmentDirection};

/// Screen-to-diagram transform supplied by the rendering surface.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Diagram-space coordinate that appears at the screen origin.
    pub pan: Point,
    /// Screen pixels per diagram unit.
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            pan: Point::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn to_diagram(&self, screen: Point) -> Point {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        Point::new(self.pan.x + screen.x / zoom, self.pan.y + screen.y / zoom)
    }
}

/// What the user is currently dragging on this edge.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// Dragging a segment handle to offset that segment.
    Segment {
        /// Index into the base segment list.
        index: usize,
        direction: SegmentDirection,
        /// Midpoint of the base segment captured at drag start. Every move
        /// is measured against this fixed reference; recomputing it from
        /// the displayed geometry would feed the applied offset back into
        /// itself.
        base_midpoint: Point,
    },
    /// Dragging the label along the path. Stays unengaged until the pointer
    /// travels past the movement threshold, so a press-release without
    /// movement remains a click.
    Label { press: Point, engaged: bool },
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

/// Modal label-text editing, orthogonal to dragging.
#[derive(Debug, Default)]
struct LabelEditor {
    active: bool,
    buffer: String,
}

/// Interaction state machine for one edge.
#[derive(Debug, Default)]
pub struct EdgeInteraction {
    drag: DragState,
    /// Keeps the label observable as "dragging" for one tick after release
    /// so the release is not misread as the double-activation that opens
    /// text editing.
    settling: bool,
    editor: LabelEditor,
}

impl EdgeInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// True while the label is being dragged or is settling after release.
    pub fn label_dragging(&self) -> bool {
        self.settling || matches!(self.drag, DragState::Label { engaged: true, .. })
    }

    /// Press on a segment handle: enter segment drag, capturing the base
    /// midpoint as the fixed drag reference. Returns false (and stays idle)
    /// for an out-of-range handle.
    pub fn press_segment_handle(&mut self, routed: &RoutedEdge, index: usize) -> bool {
        if !matches!(self.drag, DragState::Idle) || self.editor.active {
            return false;
        }
        let Some(segment) = routed.base_segments.get(index) else {
            return false;
        };
        self.drag = DragState::Segment {
            index,
            direction: segment.direction,
            base_midpoint: segment.midpoint,
        };
        true
    }

    /// Press on the label: arm a potential label drag. Ignored while the
    /// text editor is open.
    pub fn press_label(&mut self, screen: Point) {
        if self.editor.active || !matches!(self.drag, DragState::Idle) {
            return;
        }
        self.drag = DragState::Label {
            press: screen,
            engaged: false,
        };
    }

    /// Pointer move during a gesture. Writes through to `state` on every
    /// qualifying move so the edge re-routes immediately; `state` must be
    /// the latest persisted value, and the caller re-routes after each call.
    pub fn pointer_moved(
        &mut self,
        screen: Point,
        viewport: &Viewport,
        routed: &RoutedEdge,
        config: &RoutingConfig,
        state: &mut EdgeRoutingState,
    ) {
        match &mut self.drag {
            DragState::Idle => {}
            DragState::Segment {
                index,
                direction,
                base_midpoint,
            } => {
                let pointer = viewport.to_diagram(screen);
                let offset = match direction {
                    SegmentDirection::Horizontal => pointer.y - base_midpoint.y,
                    SegmentDirection::Vertical => pointer.x - base_midpoint.x,
                };
                // No snapping or rounding; the raw offset is stored as-is.
                state.set_segment_offset(*index, routed.base_segments.len(), offset);
            }
            DragState::Label { press, engaged } => {
                if !*engaged {
                    let dx = screen.x - press.x;
                    let dy = screen.y - press.y;
                    if dx * dx + dy * dy <= config.label_drag_threshold {
                        return;
                    }
                    *engaged = true;
                }
                let pointer = viewport.to_diagram(screen);
                state.label_position = Some(nearest_t(&routed.points, pointer));
            }
        }
    }

    /// Pointer release ends whatever gesture was running. An engaged label
    /// drag settles for one tick before `label_dragging` clears.
    pub fn pointer_released(&mut self) {
        if matches!(self.drag, DragState::Label { engaged: true, .. }) {
            self.settling = true;
        }
        self.drag = DragState::Idle;
    }

    /// One scheduling tick (the host calls this on the next paint cycle).
    /// Only clears the settle flag; not a correctness dependency.
    pub fn tick(&mut self) {
        self.settling = false;
    }

    /// Double-activation on a segment handle: clear that segment's offset.
    /// Ignored mid-drag.
    pub fn reset_segment(&mut self, index: usize, state: &mut EdgeRoutingState) {
        if !matches!(self.drag, DragState::Idle) {
            return;
        }
        state.reset_segment_offset(index);
    }

    // ── label text editing ──────────────────────────────────────────

    pub fn is_editing(&self) -> bool {
        self.editor.active
    }

    /// Double-activation on the label opens the editor with the current
    /// label text, unless the activation is the tail of a label drag.
    pub fn begin_label_edit(&mut self, state: &EdgeRoutingState) -> bool {
        if self.label_dragging() || !matches!(self.drag, DragState::Idle) {
            return false;
        }
        self.editor.active = true;
        self.editor.buffer = state.label.clone().unwrap_or_default();
        true
    }

    pub fn edit_buffer(&self) -> &str {
        &self.editor.buffer
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if self.editor.active {
            self.editor.buffer = text.into();
        }
    }

    /// Submit gesture: commit the buffer. An empty buffer clears the label
    /// entirely, keeping persisted state minimal.
    pub fn commit_label_edit(&mut self, state: &mut EdgeRoutingState) {
        if !self.editor.active {
            return;
        }
        state.label = if self.editor.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.editor.buffer))
        };
        self.editor.active = false;
        self.editor.buffer.clear();
    }

    /// Escape gesture: discard the buffer, restore the prior label.
    pub fn cancel_label_edit(&mut self) {
        self.editor.active = false;
        self.editor.buffer.clear();
    }

    /// Focus loss commits, matching submit.
    pub fn blur_label_edit(&mut self, state: &mut EdgeRoutingState) {
        self.commit_label_edit(state);
    }
}
