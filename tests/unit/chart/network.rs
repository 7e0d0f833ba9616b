use super::*;

fn triangle_with_tail() -> (Graph, Vec<Point>) {
    let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
    let positions = vec![
        Point::new(-1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, -0.5),
        Point::new(1.0, 0.0),
    ];
    (graph, positions)
}

#[test]
fn draws_every_node_and_edge() {
    let (graph, positions) = triangle_with_tail();
    let svg = network_chart(&graph, &positions).unwrap().finish();

    assert_eq!(svg.matches("<circle").count(), 4);
    assert!(svg.contains("Barabási-Albert Network"));
    assert!(svg.contains("Degree Distribution"));
    // Degrees 2, 2, 3, 1: three distinct bars plus the background rect.
    assert_eq!(svg.matches("<rect").count(), 1 + 3);
    assert!(svg.contains(r##"fill="#e79e16""##));
}

#[test]
fn position_count_must_match() {
    let (graph, mut positions) = triangle_with_tail();
    positions.pop();
    assert!(network_chart(&graph, &positions).is_err());
}
