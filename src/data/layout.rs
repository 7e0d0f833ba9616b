//! Force-directed (Fruchterman-Reingold) graph layout.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{data::graph::Graph, foundation::core::Point};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringParams {
    /// Optimal distance between nodes.
    pub k: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            k: 1.0,
            iterations: 50,
            seed: 1,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Lay `graph` out in 2D. Output is centred on the origin with max |coordinate| == 1.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn spring_layout(graph: &Graph, params: &SpringParams) -> Vec<Point> {
    let n = graph.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![Point::ORIGIN],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect();

    let extent = |pos: &[Point]| {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in pos {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        (x_max - x_min).max(y_max - y_min)
    };

    let k = params.k;
    let mut temperature = extent(&pos) * 0.1;
    let cooling = temperature / (params.iterations as f64 + 1.0);

    for iteration in 0..params.iterations {
        let mut displacement = vec![kurbo::Vec2::ZERO; n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = pos[i] - pos[j];
                let dist = delta.hypot().max(MIN_DISTANCE);
                let attraction = if graph.has_edge(i, j) { 1.0 } else { 0.0 };
                // Repulsion k^2/d along delta, attraction d^2/k against it.
                let coeff = k * k / (dist * dist) - attraction * dist / k;
                displacement[i] += delta * coeff;
            }
        }

        let mut moved = 0.0;
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let mut length = d.hypot();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step = *d * (temperature / length);
            *p += step;
            moved += step.hypot();
        }

        temperature -= cooling;
        if moved / (n as f64) < CONVERGENCE_THRESHOLD {
            tracing::debug!(iteration, "spring layout converged");
            break;
        }
    }

    rescale_layout(&mut pos);
    pos
}

/// Centre on the mean and scale so the largest absolute coordinate becomes 1.
pub fn rescale_layout(pos: &mut [Point]) {
    if pos.is_empty() {
        return;
    }
    let n = pos.len() as f64;
    let mean = pos
        .iter()
        .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.to_vec2())
        / n;
    let mut lim: f64 = 0.0;
    for p in pos.iter_mut() {
        *p -= mean;
        lim = lim.max(p.x.abs()).max(p.y.abs());
    }
    if lim > 0.0 {
        for p in pos.iter_mut() {
            *p = Point::new(p.x / lim, p.y / lim);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/layout.rs"]
mod tests;
