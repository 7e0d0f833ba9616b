use crate::foundation::error::{ReelError, ReelResult};

/// Natural cubic spline (zero second derivative at both ends) through a set of knots.
#[derive(Clone, Debug, PartialEq)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot.
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> ReelResult<Self> {
        if xs.len() != ys.len() {
            return Err(ReelError::validation(format!(
                "spline knots need matching x/y lengths ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(ReelError::validation("spline needs at least two knots"));
        }
        if xs.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(ReelError::validation(
                "spline knot x values must be strictly increasing",
            ));
        }

        let m = second_derivatives(&xs, &ys);
        Ok(Self { xs, ys, m })
    }

    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    /// Evaluate at `x`. Outside the knot range the end cubic is extrapolated.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        let i = self
            .xs
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(last - 1);

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;

        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}

// Tridiagonal system for the interior second derivatives, solved with the Thomas algorithm.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let interior = n - 2;
    let mut diag = vec![0.0; interior];
    let mut upper = vec![0.0; interior];
    let mut rhs = vec![0.0; interior];
    for k in 0..interior {
        let i = k + 1;
        let h_prev = xs[i] - xs[i - 1];
        let h_next = xs[i + 1] - xs[i];
        diag[k] = 2.0 * (h_prev + h_next);
        upper[k] = h_next;
        rhs[k] = 6.0 * ((ys[i + 1] - ys[i]) / h_next - (ys[i] - ys[i - 1]) / h_prev);
    }

    // Forward sweep. The sub-diagonal entry of row k is h_prev of that row, i.e. upper[k - 1].
    for k in 1..interior {
        let w = upper[k - 1] / diag[k - 1];
        diag[k] -= w * upper[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }

    m[interior] = rhs[interior - 1] / diag[interior - 1];
    for k in (0..interior - 1).rev() {
        m[k + 1] = (rhs[k] - upper[k] * m[k + 2]) / diag[k];
    }
    m
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/spline.rs"]
mod tests;
