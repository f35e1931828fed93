use crate::edge::{Anchor, AnchorSide};
use crate::geometry::Point;

/// Coordinates closer than this are merged when compressing a route.
const COMPRESS_EPSILON: f32 = 1e-4;

fn side_is_horizontal(side: AnchorSide) -> bool {
    matches!(side, AnchorSide::Left | AnchorSide::Right)
}

/// Outward unit direction for an anchor side.
fn outward(side: AnchorSide) -> (f32, f32) {
    match side {
        AnchorSide::Left => (-1.0, 0.0),
        AnchorSide::Right => (1.0, 0.0),
        AnchorSide::Top => (0.0, -1.0),
        AnchorSide::Bottom => (0.0, 1.0),
    }
}

/// Orthogonal step route between two anchors, corner radius 0. Picks the
/// mid-axis channel when it leaves both sides in their outward direction,
/// otherwise detours through per-side stubs. The result always alternates
/// horizontal and vertical segments; collinear and coincident points are
/// removed by [`compress_path`].
pub fn step_path(source: &Anchor, target: &Anchor, stub: f32) -> Vec<Point> {
    let points = match (side_is_horizontal(source.side), side_is_horizontal(target.side)) {
        (true, true) => route_along_x(source, target, stub),
        (false, false) => route_along_y(source, target, stub),
        (true, false) => route_mixed_from_x(source, target, stub),
        (false, true) => route_mixed_from_y(source, target, stub),
    };
    compress_path(&points)
}

fn route_along_x(source: &Anchor, target: &Anchor, stub: f32) -> Vec<Point> {
    let (s, t) = (source.position, target.position);
    let dir_s = outward(source.side).0;
    let dir_t = outward(target.side).0;

    if dir_s == dir_t {
        // Both anchors face the same way: share one channel past the outer
        // anchor.
        let channel = if dir_s > 0.0 {
            (s.x + stub).max(t.x + stub)
        } else {
            (s.x - stub).min(t.x - stub)
        };
        return vec![
            s,
            Point::new(channel, s.y),
            Point::new(channel, t.y),
            t,
        ];
    }

    let mid = (s.x + t.x) / 2.0;
    if (mid - s.x) * dir_s >= stub && (mid - t.x) * dir_t >= stub {
        return vec![s, Point::new(mid, s.y), Point::new(mid, t.y), t];
    }

    // Target lies behind the source side: go out through both stubs and
    // cross on the mid-y channel.
    let s_out = s.x + dir_s * stub;
    let t_out = t.x + dir_t * stub;
    let mid_y = (s.y + t.y) / 2.0;
    vec![
        s,
        Point::new(s_out, s.y),
        Point::new(s_out, mid_y),
        Point::new(t_out, mid_y),
        Point::new(t_out, t.y),
        t,
    ]
}

fn route_along_y(source: &Anchor, target: &Anchor, stub: f32) -> Vec<Point> {
    let (s, t) = (source.position, target.position);
    let dir_s = outward(source.side).1;
    let dir_t = outward(target.side).1;

    if dir_s == dir_t {
        let channel = if dir_s > 0.0 {
            (s.y + stub).max(t.y + stub)
        } else {
            (s.y - stub).min(t.y - stub)
        };
        return vec![
            s,
            Point::new(s.x, channel),
            Point::new(t.x, channel),
            t,
        ];
    }

    let mid = (s.y + t.y) / 2.0;
    if (mid - s.y) * dir_s >= stub && (mid - t.y) * dir_t >= stub {
        return vec![s, Point::new(s.x, mid), Point::new(t.x, mid), t];
    }

    let s_out = s.y + dir_s * stub;
    let t_out = t.y + dir_t * stub;
    let mid_x = (s.x + t.x) / 2.0;
    vec![
        s,
        Point::new(s.x, s_out),
        Point::new(mid_x, s_out),
        Point::new(mid_x, t_out),
        Point::new(t.x, t_out),
        t,
    ]
}

fn route_mixed_from_x(source: &Anchor, target: &Anchor, stub: f32) -> Vec<Point> {
    let (s, t) = (source.position, target.position);
    let dir_s = outward(source.side).0;
    let dir_t = outward(target.side).1;

    let corner = Point::new(t.x, s.y);
    if (corner.x - s.x) * dir_s >= 0.0 && (corner.y - t.y) * dir_t >= 0.0 {
        return vec![s, corner, t];
    }

    let s_out = s.x + dir_s * stub;
    let t_out = t.y + dir_t * stub;
    vec![
        s,
        Point::new(s_out, s.y),
        Point::new(s_out, t_out),
        Point::new(t.x, t_out),
        t,
    ]
}

fn route_mixed_from_y(source: &Anchor, target: &Anchor, stub: f32) -> Vec<Point> {
    let (s, t) = (source.position, target.position);
    let dir_s = outward(source.side).1;
    let dir_t = outward(target.side).0;

    let corner = Point::new(s.x, t.y);
    if (corner.y - s.y) * dir_s >= 0.0 && (corner.x - t.x) * dir_t >= 0.0 {
        return vec![s, corner, t];
    }

    let s_out = s.y + dir_s * stub;
    let t_out = t.x + dir_t * stub;
    vec![
        s,
        Point::new(s.x, s_out),
        Point::new(t_out, s_out),
        Point::new(t_out, t.y),
        t,
    ]
}

/// Drop coincident points and merge runs of collinear axis-aligned
/// segments so every remaining interior point is a genuine bend.
pub fn compress_path(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    out.push(points[0]);
    for idx in 1..points.len() - 1 {
        let prev = out[out.len() - 1];
        let curr = points[idx];
        if (curr.x - prev.x).abs() <= COMPRESS_EPSILON && (curr.y - prev.y).abs() <= COMPRESS_EPSILON
        {
            continue;
        }
        let next = points[idx + 1];
        let dx1 = curr.x - prev.x;
        let dy1 = curr.y - prev.y;
        let dx2 = next.x - curr.x;
        let dy2 = next.y - curr.y;
        if (dx1.abs() <= COMPRESS_EPSILON && dx2.abs() <= COMPRESS_EPSILON)
            || (dy1.abs() <= COMPRESS_EPSILON && dy2.abs() <= COMPRESS_EPSILON)
        {
            continue;
        }
        out.push(curr);
    }
    let last = points[points.len() - 1];
    let tail = out[out.len() - 1];
    if (last.x - tail.x).abs() > COMPRESS_EPSILON || (last.y - tail.y).abs() > COMPRESS_EPSILON {
        out.push(last);
    }
    out
}
