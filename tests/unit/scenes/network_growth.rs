use super::*;
use crate::{
    data::table::GrowthRow,
    foundation::core::FrameIndex,
    scene::eval::Evaluator,
};

fn render() -> RenderConfig {
    RenderConfig {
        width: 160,
        height: 90,
        fps: 2,
    }
}

// Node 1 attaches to 0; node 2 attaches to 0 and 1.
fn triangle_table() -> GrowthTable {
    let p = [
        Point::new(-5.0, -3.0),
        Point::new(5.0, 3.0),
        Point::new(0.0, 0.0),
    ];
    GrowthTable {
        rows: vec![
            GrowthRow {
                node_id: 0,
                position: p[0],
                degrees: vec![0, 0, 0],
                targets: vec![],
            },
            GrowthRow {
                node_id: 1,
                position: p[1],
                degrees: vec![1, 1, 0],
                targets: vec![p[0]],
            },
            GrowthRow {
                node_id: 2,
                position: p[2],
                degrees: vec![2, 2, 2],
                targets: vec![p[0], p[1]],
            },
        ],
        target_pairs: 2,
    }
}

#[test]
fn timeline_follows_rows() {
    let scene = network_growth_scene(&triangle_table(), &render(), &NetworkConfig::default()).unwrap();
    // Fade (2 frames) per row, lines (2 frames) for rows with targets, final wait (4 frames).
    assert_eq!(scene.duration, FrameIndex(2 + 4 + 4 + 4));

    let dots: Vec<Point> = scene
        .objects
        .iter()
        .filter_map(|o| match o.shape {
            Shape::Circle { center, .. } => Some(center),
            _ => None,
        })
        .collect();
    assert_eq!(
        dots,
        vec![
            Point::new(0.25, 0.5),
            Point::new(8.25, 8.5),
            Point::new(4.25, 4.5)
        ]
    );

    let edges = scene.objects.iter().filter(|o| o.z == -1).count();
    assert_eq!(edges, 3);
}

#[test]
fn histogram_shows_latest_step() {
    let scene = network_growth_scene(&triangle_table(), &render(), &NetworkConfig::default()).unwrap();
    let last = FrameIndex(scene.duration.0 - 1);
    let eval = Evaluator::eval_frame(&scene, last).unwrap();
    let bars: Vec<&Shape> = eval
        .items
        .iter()
        .map(|item| item.shape)
        .filter(|s| matches!(s, Shape::Polygon { .. }))
        .collect();
    // All three nodes have degree 2.
    assert_eq!(bars.len(), 1);
}

#[test]
fn animated_node_cap_limits_rows() {
    let network = NetworkConfig {
        animated_nodes: Some(1),
        ..NetworkConfig::default()
    };
    let scene = network_growth_scene(&triangle_table(), &render(), &network).unwrap();
    assert_eq!(scene.duration, FrameIndex(2 + 4));
}

#[test]
fn bars_scale_and_clip() {
    let bars = degree_bars(&[(0, 1), (2, 3), (30, 1)]);
    assert_eq!(bars.len(), 2);
    let Shape::Polygon { points, fill, .. } = &bars[1] else {
        panic!("expected polygon");
    };
    assert_eq!(*fill, BAR_COLOR);
    assert!((points[2].y - (0.5 + 3.0 * 0.32)).abs() < 1e-9);
    assert!((points[0].x - (10.25 + 0.4 - 0.08)).abs() < 1e-9);
}
