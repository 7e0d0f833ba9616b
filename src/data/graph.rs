use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{NodeIndex, UnGraph};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::error::{ReelError, ReelResult};

/// Undirected simple graph over dense node ids `0..n`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    inner: UnGraph<(), ()>,
}

impl Graph {
    pub fn with_nodes(n: usize) -> Self {
        let mut inner = UnGraph::with_capacity(n, 0);
        for _ in 0..n {
            inner.add_node(());
        }
        Self { inner }
    }

    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> ReelResult<Self> {
        let mut g = Self::with_nodes(n);
        for &(a, b) in edges {
            g.add_edge(a, b)?;
        }
        Ok(g)
    }

    pub fn add_node(&mut self) -> usize {
        self.inner.add_node(()).index()
    }

    /// Insert an undirected edge. Returns `false` when it was already present.
    pub fn add_edge(&mut self, a: usize, b: usize) -> ReelResult<bool> {
        let n = self.node_count();
        if a >= n || b >= n {
            return Err(ReelError::validation(format!(
                "edge ({a}, {b}) references a node outside 0..{n}"
            )));
        }
        if a == b {
            return Err(ReelError::validation(format!(
                "self-loop on node {a} is not allowed"
            )));
        }
        let (a, b) = (NodeIndex::new(a), NodeIndex::new(b));
        if self.inner.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.inner.add_edge(a, b, ());
        Ok(true)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn degree(&self, node: usize) -> usize {
        if node >= self.node_count() {
            return 0;
        }
        self.inner.neighbors(NodeIndex::new(node)).count()
    }

    pub fn degrees(&self) -> Vec<usize> {
        (0..self.node_count()).map(|v| self.degree(v)).collect()
    }

    pub fn max_degree(&self) -> usize {
        (0..self.node_count())
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Neighbours of `node` in ascending id order; empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let mut out: Vec<usize> = if node < self.node_count() {
            self.inner
                .neighbors(NodeIndex::new(node))
                .map(NodeIndex::index)
                .collect()
        } else {
            Vec::new()
        };
        out.sort_unstable();
        out.into_iter()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        let n = self.node_count();
        a < n
            && b < n
            && self
                .inner
                .find_edge(NodeIndex::new(a), NodeIndex::new(b))
                .is_some()
    }

    /// Every edge once, as `(lower, higher)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut out: Vec<(usize, usize)> = self
            .inner
            .raw_edges()
            .iter()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                (a.min(b), a.max(b))
            })
            .collect();
        out.sort_unstable();
        out.into_iter()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count() && self.edges().eq(other.edges())
    }
}

impl Eq for Graph {}

/// Sorted `(degree, node count)` pairs.
pub fn degree_distribution(degrees: &[usize]) -> Vec<(usize, usize)> {
    let mut counts = BTreeMap::<usize, usize>::new();
    for &d in degrees {
        *counts.entry(d).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Preferential-attachment (Barabasi-Albert) graph on `n` nodes.
///
/// Starts from a star on `m + 1` nodes (hub 0). Every later node attaches to `m` distinct
/// existing nodes drawn from a list in which each node appears once per incident edge, so a
/// node's chance of being picked is proportional to its degree.
#[tracing::instrument]
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> ReelResult<Graph> {
    if m < 1 || m >= n {
        return Err(ReelError::validation(format!(
            "barabasi_albert requires 1 <= m < n (got n={n}, m={m})"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_nodes(m + 1);
    let mut repeated = Vec::with_capacity(2 * m * n);
    for leaf in 1..=m {
        graph.add_edge(0, leaf)?;
        repeated.push(0);
        repeated.push(leaf);
    }

    for source in (m + 1)..n {
        let mut targets = BTreeSet::new();
        while targets.len() < m {
            targets.insert(repeated[rng.random_range(0..repeated.len())]);
        }

        let added = graph.add_node();
        debug_assert_eq!(added, source);
        for &t in &targets {
            graph.add_edge(source, t)?;
            repeated.push(t);
            repeated.push(source);
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated preferential-attachment graph"
    );
    Ok(graph)
}

#[cfg(test)]
#[path = "../../tests/unit/data/graph.rs"]
mod tests;
