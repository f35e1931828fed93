use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ── Arc-length walk tolerance ───────────────────────────────────────
/// Forward tolerance when walking cumulative arc length in [`point_at_t`].
/// Guards against floating-point flicker at segment joins; tunable, carries
/// no semantic meaning beyond numeric stability.
const ARC_EPSILON: f32 = 0.01;

/// A position in diagram-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

static PATH_CMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ML]\s*([0-9.eE+-]+)[,\s]\s*([0-9.eE+-]+)").unwrap());

/// Extract the ordered coordinate pairs from a move-to/line-to path
/// description. Curves are not supported; anything unrecognized is skipped,
/// so malformed input degrades to an empty sequence rather than an error.
pub fn parse_points(path: &str) -> Vec<Point> {
    let mut points = Vec::new();
    for caps in PATH_CMD_RE.captures_iter(path) {
        let x = caps[1].parse::<f32>();
        let y = caps[2].parse::<f32>();
        if let (Ok(x), Ok(y)) = (x, y) {
            points.push(Point { x, y });
        }
    }
    points
}

/// Inverse of [`parse_points`]: first point emits a move-to, the rest emit
/// line-to commands, in order.
pub fn build_path(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push(' ');
        out.push_str(&format!("{},{}", p.x, p.y));
    }
    out
}

/// Euclidean length of each consecutive pair; 0 for coincident points.
pub fn segment_lengths(points: &[Point]) -> Vec<f32> {
    points
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            (dx * dx + dy * dy).sqrt()
        })
        .collect()
}

/// Point at normalized arc-length position `t` (clamped to [0, 1]) along the
/// polyline. Degenerate inputs return documented defaults: the single point
/// (or origin) for fewer than 2 points, the first point for zero total
/// length.
pub fn point_at_t(points: &[Point], t: f32) -> Point {
    if points.len() < 2 {
        return points.first().copied().unwrap_or(Point::ZERO);
    }
    let lens = segment_lengths(points);
    let total: f32 = lens.iter().sum();
    if total == 0.0 {
        return points[0];
    }

    let target = t.clamp(0.0, 1.0) * total;
    let mut walked = 0.0f32;
    for (i, len) in lens.iter().enumerate() {
        if walked + len >= target - ARC_EPSILON {
            let seg_t = if *len > 0.0 { (target - walked) / len } else { 0.0 };
            return Point {
                x: points[i].x + seg_t * (points[i + 1].x - points[i].x),
                y: points[i].y + seg_t * (points[i + 1].y - points[i].y),
            };
        }
        walked += len;
    }
    points[points.len() - 1]
}

/// Normalized arc-length position of the closest point on the polyline to
/// `p`: clamped scalar projection onto every segment, minimum squared
/// distance wins. Returns 0 for degenerate input. Inverse of [`point_at_t`]
/// for positions away from segment joins.
pub fn nearest_t(points: &[Point], p: Point) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let lens = segment_lengths(points);
    let total: f32 = lens.iter().sum();
    if total == 0.0 {
        return 0.0;
    }

    let mut best_dist = f32::INFINITY;
    let mut best_len = 0.0f32;
    let mut walked = 0.0f32;

    for (i, seg_len) in lens.iter().enumerate() {
        let a = points[i];
        let dx = points[i + 1].x - a.x;
        let dy = points[i + 1].y - a.y;

        let mut t = 0.0f32;
        if *seg_len > 0.0 {
            t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / (seg_len * seg_len)).clamp(0.0, 1.0);
        }
        let cx = a.x + t * dx;
        let cy = a.y + t * dy;
        let dist = (p.x - cx) * (p.x - cx) + (p.y - cy) * (p.y - cy);

        if dist < best_dist {
            best_dist = dist;
            best_len = walked + t * seg_len;
        }
        walked += seg_len;
    }

    best_len / total
}
