use super::*;

#[test]
fn add_edge_rejects_self_loops_and_unknown_nodes() {
    let mut g = Graph::with_nodes(3);
    assert!(g.add_edge(1, 1).is_err());
    assert!(g.add_edge(0, 3).is_err());
    assert!(g.add_edge(0, 1).unwrap());
    assert!(!g.add_edge(1, 0).unwrap());
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(1, 0));
}

#[test]
fn edges_are_listed_once_in_order() {
    let g = Graph::from_edges(4, &[(2, 0), (3, 1), (1, 0)]).unwrap();
    let edges: Vec<_> = g.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3)]);
    assert_eq!(g.degrees(), vec![2, 2, 1, 1]);
    assert_eq!(g.max_degree(), 2);
    assert_eq!(g.neighbors(9).count(), 0);
}

#[test]
fn neighbors_come_back_ascending_whatever_the_insert_order() {
    let g = Graph::from_edges(5, &[(2, 4), (2, 0), (2, 3), (1, 2)]).unwrap();
    assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0, 1, 3, 4]);
    assert_eq!(g.degree(2), 4);
    assert_eq!(g.degree(7), 0);
    assert!(!g.has_edge(2, 9));
}

#[test]
fn equality_ignores_edge_insertion_order() {
    let a = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
    let b = Graph::from_edges(3, &[(2, 1), (1, 0)]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Graph::from_edges(4, &[(0, 1), (1, 2)]).unwrap());
}

#[test]
fn degree_distribution_counts_and_sorts() {
    assert_eq!(
        degree_distribution(&[3, 1, 2, 1, 3, 3]),
        vec![(1, 2), (2, 1), (3, 3)]
    );
    assert!(degree_distribution(&[]).is_empty());
}

#[test]
fn barabasi_albert_has_expected_shape() {
    let (n, m) = (60, 2);
    let g = barabasi_albert(n, m, 1).unwrap();
    assert_eq!(g.node_count(), n);
    assert_eq!(g.edge_count(), m * (n - m));
    // Every node after the seed star attaches to exactly m earlier nodes.
    for node in (m + 1)..n {
        assert_eq!(g.neighbors(node).filter(|&nb| nb < node).count(), m);
    }
    assert!(g.degrees().iter().all(|&d| d >= 1));
}

#[test]
fn barabasi_albert_is_deterministic_per_seed() {
    let a = barabasi_albert(40, 3, 7).unwrap();
    let b = barabasi_albert(40, 3, 7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn barabasi_albert_validates_parameters() {
    assert!(barabasi_albert(5, 0, 1).is_err());
    assert!(barabasi_albert(5, 5, 1).is_err());
    assert!(barabasi_albert(2, 1, 1).is_ok());
}
