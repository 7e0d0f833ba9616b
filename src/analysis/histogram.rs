use crate::foundation::error::{ReelError, ReelResult};

/// Counts over consecutive half-open bins `[edges[i], edges[i+1])`; the last bin is closed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn new(samples: &[f64], edges: Vec<f64>) -> ReelResult<Self> {
        if edges.len() < 2 {
            return Err(ReelError::validation("histogram needs at least two edges"));
        }
        if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ReelError::validation(
                "histogram edges must be finite and strictly increasing",
            ));
        }

        let bins = edges.len() - 1;
        let lo = edges[0];
        let hi = edges[bins];
        let mut counts = vec![0usize; bins];
        for &v in samples {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            // First edge strictly greater than v closes v's bin.
            let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
            counts[idx] += 1;
        }
        Ok(Self { edges, counts })
    }

    /// Equal-width bins covering `[lo, lo + bins * width]`.
    pub fn uniform(samples: &[f64], lo: f64, width: f64, bins: usize) -> ReelResult<Self> {
        if !(width > 0.0) || bins == 0 {
            return Err(ReelError::validation(
                "uniform histogram needs width > 0 and at least one bin",
            ));
        }
        let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();
        Self::new(samples, edges)
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn populated_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

/// Bin edges for integer-valued measurements: from `floor(min - 0.5)` in steps of `width`, up
/// to (but excluding) `ceil(max + 0.5) + 1`.
pub fn measurement_edges(min: f64, max: f64, width: f64) -> ReelResult<Vec<f64>> {
    if !(width > 0.0) || !min.is_finite() || !max.is_finite() || max < min {
        return Err(ReelError::validation(format!(
            "invalid measurement range {min}..{max} with bin width {width}"
        )));
    }
    let start = (min - 0.5).floor();
    let stop = (max + 0.5).ceil() + 1.0;
    let n = ((stop - start) / width).ceil() as usize;
    let edges: Vec<f64> = (0..n).map(|i| start + i as f64 * width).collect();
    if edges.len() < 2 {
        return Err(ReelError::validation(format!(
            "bin width {width} is wider than the measurement range"
        )));
    }
    Ok(edges)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Adjusted Fisher-Pearson skewness; `None` with fewer than three samples.
    pub skew: Option<f64>,
}

impl SampleSummary {
    pub fn of(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / n;
        let m2 = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let m3 = samples.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;

        let skew = (samples.len() >= 3).then(|| {
            if m2 == 0.0 {
                0.0
            } else {
                let g1 = m3 / m2.powf(1.5);
                (n * (n - 1.0)).sqrt() / (n - 2.0) * g1
            }
        });

        Some(Self {
            count: samples.len(),
            min,
            max,
            mean,
            std: m2.sqrt(),
            skew,
        })
    }

    pub fn of_ints(samples: &[i64]) -> Option<Self> {
        let as_f64: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        Self::of(&as_f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/histogram.rs"]
mod tests;
