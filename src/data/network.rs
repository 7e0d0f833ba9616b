//! End-to-end network preparation: generate, lay out, normalize, replay.

use crate::{
    config::NetworkConfig,
    data::{
        graph::{Graph, barabasi_albert, degree_distribution},
        growth::{GrowthHistory, replay},
        layout::spring_layout,
        normalize::Normalizer,
        table::GrowthTable,
    },
    foundation::core::Point,
    foundation::error::ReelResult,
};

#[derive(Clone, Debug)]
pub struct NetworkData {
    pub graph: Graph,
    /// Raw force-directed layout, centred with max |coordinate| 1.
    pub layout: Vec<Point>,
    /// Layout mapped into the display rectangle.
    pub display: Vec<Point>,
    pub history: GrowthHistory,
}

impl NetworkData {
    pub fn table(&self) -> GrowthTable {
        GrowthTable::from_history(&self.history)
    }
}

#[tracing::instrument(skip_all, fields(nodes = cfg.nodes, m = cfg.edges_per_node))]
pub fn prepare_network(cfg: &NetworkConfig) -> ReelResult<NetworkData> {
    let graph = barabasi_albert(cfg.nodes, cfg.edges_per_node, cfg.seed)?;
    let layout = spring_layout(&graph, &cfg.layout);
    let display = Normalizer::fit(&layout, cfg.display).apply_all(&layout);
    let history = replay(&graph, &display)?;

    let degrees = graph.degrees();
    let min = degrees.iter().copied().min().unwrap_or(0);
    let max = degrees.iter().copied().max().unwrap_or(0);
    let mean = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
    };
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        min_degree = min,
        max_degree = max,
        mean_degree = format_args!("{mean:.2}"),
        "network generated"
    );
    tracing::info!(distribution = ?degree_distribution(&degrees), "degree distribution");

    Ok(NetworkData {
        graph,
        layout,
        display,
        history,
    })
}
