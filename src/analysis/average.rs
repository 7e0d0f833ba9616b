//! Noisy repeated trials of a smooth curve and their running average.

use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::{
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
    foundation::math::linspace,
};

/// `count` copies of `base` sampled at `samples` x values over `domain`, each with independent
/// normal noise on y.
#[tracing::instrument(skip(base))]
pub fn noisy_trials(
    base: impl Fn(f64) -> f64,
    domain: (f64, f64),
    samples: usize,
    count: usize,
    noise_sd: f64,
    seed: u64,
) -> ReelResult<Vec<Vec<Point>>> {
    if samples < 2 {
        return Err(ReelError::validation("trials need at least two samples"));
    }
    let noise = Normal::new(0.0, noise_sd)
        .map_err(|e| ReelError::validation(format!("trial noise: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);
    let xs = linspace(domain.0, domain.1, samples);

    Ok((0..count)
        .map(|_| {
            xs.iter()
                .map(|&x| Point::new(x, base(x) + noise.sample(&mut rng)))
                .collect()
        })
        .collect())
}

/// Pointwise mean of equally sampled curves.
pub fn mean_curve(curves: &[Vec<Point>]) -> ReelResult<Vec<Point>> {
    let Some(first) = curves.first() else {
        return Err(ReelError::validation("cannot average zero curves"));
    };
    if curves.iter().any(|c| c.len() != first.len()) {
        return Err(ReelError::validation("curves must have the same number of points"));
    }

    let n = curves.len() as f64;
    Ok((0..first.len())
        .map(|i| {
            let y = curves.iter().map(|c| c[i].y).sum::<f64>() / n;
            Point::new(first[i].x, y)
        })
        .collect())
}

/// Mean of the first `k` curves, for every `k` in `1..=curves.len()`.
pub fn running_means(curves: &[Vec<Point>]) -> ReelResult<Vec<Vec<Point>>> {
    (1..=curves.len()).map(|k| mean_curve(&curves[..k])).collect()
}
