use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::foundation::error::{ReelError, ReelResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeightSampleParams {
    pub count: usize,
    pub mean: f64,
    pub sd: f64,
    pub seed: u64,
}

impl Default for HeightSampleParams {
    fn default() -> Self {
        Self {
            count: 100,
            mean: 172.0,
            sd: 10.0,
            seed: 42,
        }
    }
}

/// Draw `count` normal values and round each to the nearest integer.
#[tracing::instrument]
pub fn synthetic_heights(params: &HeightSampleParams) -> ReelResult<Vec<i64>> {
    let normal = Normal::new(params.mean, params.sd)
        .map_err(|e| ReelError::validation(format!("height distribution: {e}")))?;
    let mut rng = StdRng::seed_from_u64(params.seed);
    let values: Vec<i64> = (0..params.count)
        .map(|_| normal.sample(&mut rng).round() as i64)
        .collect();

    if let Some(summary) = crate::analysis::histogram::SampleSummary::of_ints(&values) {
        tracing::info!(
            count = summary.count,
            mean = format_args!("{:.2}", summary.mean),
            std = format_args!("{:.2}", summary.std),
            min = summary.min,
            max = summary.max,
            "generated synthetic measurements"
        );
    }
    Ok(values)
}
