use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use steproute::config::RoutingConfig;
use steproute::edge::{Anchor, AnchorSide, Diagram, EdgeSpec};
use steproute::geometry::{Point, nearest_t, point_at_t};
use steproute::route::route_edge;

fn dense_diagram(count: usize) -> Diagram {
    let mut edges = Vec::with_capacity(count);
    for i in 0..count {
        let col = (i % 12) as f32;
        let row = (i / 12) as f32;
        let source = Anchor {
            position: Point::new(col * 140.0, row * 90.0),
            side: AnchorSide::Right,
        };
        // Every third edge points backwards to exercise the stub detour.
        let target_x = if i % 3 == 0 {
            col * 140.0 - 80.0
        } else {
            col * 140.0 + 120.0
        };
        let target = Anchor {
            position: Point::new(target_x, row * 90.0 + 60.0),
            side: AnchorSide::Left,
        };
        let mut edge = EdgeSpec::new(format!("e{i}"), source, target);
        if i % 4 == 0 {
            edge.data.set_segment_offset(0, 1, 25.0);
        }
        edges.push(edge);
    }
    Diagram { edges }
}

fn long_polyline(bends: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(bends * 2 + 2);
    points.push(Point::new(0.0, 0.0));
    for i in 0..bends {
        let x = (i + 1) as f32 * 40.0;
        let y = if i % 2 == 0 { 60.0 } else { 0.0 };
        points.push(Point::new(x, y));
        points.push(Point::new(x + 20.0, y));
    }
    points
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_edges");
    let config = RoutingConfig::default();
    for count in [50usize, 200, 800] {
        let diagram = dense_diagram(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &diagram,
            |b, diagram| {
                b.iter(|| {
                    let mut total_points = 0usize;
                    for edge in &diagram.edges {
                        total_points += route_edge(black_box(edge), &config).points.len();
                    }
                    black_box(total_points);
                });
            },
        );
    }
    group.finish();
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline");
    for bends in [8usize, 64, 512] {
        let points = long_polyline(bends);
        group.bench_with_input(
            BenchmarkId::new("point_at_t", bends),
            &points,
            |b, points| {
                b.iter(|| {
                    for i in 0..32 {
                        let t = i as f32 / 31.0;
                        black_box(point_at_t(black_box(points), t));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("nearest_t", bends),
            &points,
            |b, points| {
                b.iter(|| {
                    for i in 0..32 {
                        let probe = Point::new(i as f32 * 17.0, 30.0);
                        black_box(nearest_t(black_box(points), probe));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_route, bench_polyline);
criterion_main!(benches);
