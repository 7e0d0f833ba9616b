//! Replays a finished graph node by node to recover how it grew.

use crate::{
    data::graph::Graph,
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
};

/// Network state right after node `node` was inserted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrowthStep {
    pub node: usize,
    /// Display position of the inserted node.
    pub position: Point,
    /// Degree of every node at this step; nodes not yet inserted are 0.
    pub degrees: Vec<usize>,
    /// Lower-indexed neighbors the new node connected to, ascending.
    pub targets: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrowthHistory {
    pub positions: Vec<Point>,
    pub steps: Vec<GrowthStep>,
}

/// Rebuild the per-step degree sequence of `graph`, inserting nodes in id order.
///
/// An edge `(a, b)` with `a < b` is formed (and recorded) exactly once, at step `b`.
#[tracing::instrument(skip_all, fields(nodes = graph.node_count()))]
pub fn replay(graph: &Graph, positions: &[Point]) -> ReelResult<GrowthHistory> {
    let n = graph.node_count();
    if positions.len() != n {
        return Err(ReelError::validation(format!(
            "growth replay needs one position per node (nodes={n}, positions={})",
            positions.len()
        )));
    }

    let mut degrees = vec![0usize; n];
    let mut steps = Vec::with_capacity(n);
    for node in 0..n {
        let targets: Vec<usize> = graph.neighbors(node).filter(|&nb| nb < node).collect();
        for &t in &targets {
            degrees[node] += 1;
            degrees[t] += 1;
        }
        tracing::trace!(node, formed = targets.len(), "replayed insertion");
        steps.push(GrowthStep {
            node,
            position: positions[node],
            degrees: degrees.clone(),
            targets,
        });
    }

    Ok(GrowthHistory {
        positions: positions.to_vec(),
        steps,
    })
}

impl GrowthHistory {
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Degree of `node` at every step, zero before its insertion.
    pub fn degree_sequence(&self, node: usize) -> Vec<usize> {
        self.steps
            .iter()
            .map(|s| s.degrees.get(node).copied().unwrap_or(0))
            .collect()
    }

    /// Largest degree reached by any node; sizes the target columns of the table.
    pub fn max_degree(&self) -> usize {
        self.steps
            .last()
            .and_then(|s| s.degrees.iter().copied().max())
            .unwrap_or(0)
    }

    /// Number of edge-formation events across all steps (equals the final edge count).
    pub fn formed_edge_count(&self) -> usize {
        self.steps.iter().map(|s| s.targets.len()).sum()
    }

    /// Display positions of the nodes the inserted node connected to at `step`.
    pub fn target_positions(&self, step: usize) -> Vec<Point> {
        self.steps
            .get(step)
            .map(|s| s.targets.iter().map(|&t| self.positions[t]).collect())
            .unwrap_or_default()
    }
}

/// `(degree, count)` over the nodes inserted up to and including `step`.
///
/// Nodes inserted at this step or earlier count even when their degree is still zero.
pub fn step_degree_histogram(degrees: &[usize], step: usize) -> Vec<(usize, usize)> {
    let present = degrees.len().min(step + 1);
    crate::data::graph::degree_distribution(&degrees[..present])
}

#[cfg(test)]
#[path = "../../tests/unit/data/growth.rs"]
mod tests;
