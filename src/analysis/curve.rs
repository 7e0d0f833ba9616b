//! Smooth distribution curve through histogram counts.

use crate::{
    analysis::{histogram::Histogram, spline::NaturalCubicSpline},
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
    foundation::math::linspace,
};

const EDGE_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveEstimator {
    /// Inclusive `(lo, hi)` range that is binned and resampled.
    pub domain: (f64, f64),
    pub bin_width: f64,
    /// Number of points in every returned curve.
    pub resample_len: usize,
}

impl CurveEstimator {
    pub fn new(domain: (f64, f64), bin_width: f64, resample_len: usize) -> ReelResult<Self> {
        let est = Self {
            domain,
            bin_width,
            resample_len,
        };
        est.validate()?;
        Ok(est)
    }

    pub fn validate(&self) -> ReelResult<()> {
        let (lo, hi) = self.domain;
        if !(lo.is_finite() && hi.is_finite() && hi > lo) {
            return Err(ReelError::validation(format!(
                "curve domain must be finite with lo < hi (got {lo}..{hi})"
            )));
        }
        if !(self.bin_width > 0.0) {
            return Err(ReelError::validation("curve bin_width must be > 0"));
        }
        Ok(())
    }

    /// Number of bins; the last one ends at `hi` and may be narrower than `bin_width`.
    ///
    /// Interior edges within a hair of `hi` are dropped so the edges stay strictly increasing.
    pub fn bin_count(&self) -> usize {
        let (lo, hi) = self.domain;
        let limit = hi - EDGE_TOLERANCE * self.bin_width;
        1 + (1..)
            .take_while(|&i| lo + i as f64 * self.bin_width < limit)
            .count()
    }

    /// Bin counts of `samples` over the domain; values outside it are ignored.
    pub fn histogram(&self, samples: &[f64]) -> ReelResult<Histogram> {
        self.validate()?;
        let (lo, hi) = self.domain;
        let bins = self.bin_count();
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * self.bin_width).collect();
        edges.push(hi);
        Histogram::new(samples, edges)
    }

    /// Re-estimate the curve from scratch for the current samples.
    ///
    /// Returns exactly `resample_len` points. With fewer than two populated bins every point has
    /// `y == 0`.
    pub fn estimate(&self, samples: &[f64]) -> ReelResult<Vec<Point>> {
        let hist = self.histogram(samples)?;
        let (lo, hi) = self.domain;
        let xs = linspace(lo, hi, self.resample_len);

        if hist.populated_bins() < 2 {
            return Ok(xs.into_iter().map(|x| Point::new(x, 0.0)).collect());
        }

        let centers = hist.centers();
        let (first, last) = (centers[0], centers[centers.len() - 1]);
        let counts: Vec<f64> = hist.counts.iter().map(|&c| c as f64).collect();
        let spline = NaturalCubicSpline::new(centers, counts)?;

        Ok(xs
            .into_iter()
            .map(|x| Point::new(x, spline.eval(x.clamp(first, last)).max(0.0)))
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/curve.rs"]
mod tests;
