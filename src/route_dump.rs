use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::config::RoutingConfig;
use crate::edge::Diagram;
use crate::route::route_edge;

/// JSON-serializable snapshot of every routed edge in a diagram. Developer
/// tooling output; the editor's own persistence never goes through here.
#[derive(Debug, Serialize)]
pub struct RouteDump {
    pub edges: Vec<EdgeRouteDump>,
}

#[derive(Debug, Serialize)]
pub struct EdgeRouteDump {
    pub id: String,
    pub kind: String,
    pub points: Vec<[f32; 2]>,
    pub path: String,
    pub label_point: [f32; 2],
    pub label: Option<String>,
    pub line_style: String,
    pub draggable_segments: usize,
}

impl RouteDump {
    pub fn from_diagram(diagram: &Diagram, config: &RoutingConfig) -> Self {
        let edges = diagram
            .edges
            .iter()
            .map(|edge| {
                let routed = route_edge(edge, config);
                EdgeRouteDump {
                    id: edge.id.clone(),
                    kind: format!("{:?}", edge.kind),
                    points: routed.points.iter().map(|p| [p.x, p.y]).collect(),
                    path: routed.path,
                    label_point: [routed.label_point.x, routed.label_point.y],
                    label: edge.data.label.clone(),
                    line_style: format!("{:?}", edge.data.line_style),
                    draggable_segments: routed.segments.len(),
                }
            })
            .collect();
        RouteDump { edges }
    }
}

pub fn write_route_dump(path: &Path, dump: &RouteDump) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_mirrors_the_routed_geometry() {
        let doc = r#"{
            "edges": [{
                "id": "e1",
                "source": { "position": { "x": 0, "y": 0 }, "side": "right" },
                "target": { "position": { "x": 100, "y": 80 }, "side": "left" },
                "data": { "label": "ok", "lineStyle": "dashed" }
            }]
        }"#;
        let diagram = Diagram::parse(doc).unwrap();
        let dump = RouteDump::from_diagram(&diagram, &RoutingConfig::default());
        assert_eq!(dump.edges.len(), 1);
        let edge = &dump.edges[0];
        assert_eq!(edge.kind, "Step");
        assert_eq!(edge.points.first(), Some(&[0.0, 0.0]));
        assert_eq!(edge.points.last(), Some(&[100.0, 80.0]));
        assert!(edge.path.starts_with("M 0,0"));
        assert_eq!(edge.label.as_deref(), Some("ok"));
        assert_eq!(edge.line_style, "Dashed");
        assert_eq!(edge.draggable_segments, 1);
    }
}
