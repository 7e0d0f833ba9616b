//! Shared pieces of the hand-drawn coordinate systems used by the scene drivers.

use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::{ReelError, ReelResult},
    scene::model::{Shape, StrokeStyle},
};

pub const AXIS_WIDTH: f64 = 2.0;
pub const TICK_WIDTH: f64 = 1.5;

/// White lines at `0, step, .., max` in both directions, spanning `[0, max]`.
pub fn grid_lines(max: f64, step: f64, width_px: f64) -> Vec<Shape> {
    let stroke = StrokeStyle::new(Rgba8::WHITE, width_px);
    let n = (max / step).round() as usize;
    let horizontal = (0..=n).map(|i| {
        let y = i as f64 * step;
        Shape::line(Point::new(0.0, y), Point::new(max, y), stroke)
    });
    let vertical = (0..=n).map(|i| {
        let x = i as f64 * step;
        Shape::line(Point::new(x, 0.0), Point::new(x, max), stroke)
    });
    horizontal.chain(vertical).collect()
}

pub fn axis_line(from: Point, to: Point) -> Shape {
    Shape::line(from, to, StrokeStyle::new(Rgba8::WHITE, AXIS_WIDTH))
}

/// Tick marks and labels along a horizontal axis.
#[derive(Clone, Debug)]
pub struct TickRow<'a> {
    pub positions: &'a [f64],
    pub labels: &'a [String],
    /// Where the tick starts (the axis) and ends.
    pub tick: (f64, f64),
    /// Label centre coordinate across the axis.
    pub label_at: f64,
    pub font_size_px: f64,
    pub color: Rgba8,
}

impl TickRow<'_> {
    /// Ticks below a horizontal axis: positions are x, `tick` and `label_at` are y.
    pub fn horizontal(&self) -> ReelResult<Vec<Shape>> {
        self.shapes(|along, across| Point::new(along, across))
    }

    /// Ticks left of a vertical axis: positions are y, `tick` and `label_at` are x.
    pub fn vertical(&self) -> ReelResult<Vec<Shape>> {
        self.shapes(|along, across| Point::new(across, along))
    }

    fn shapes(&self, at: impl Fn(f64, f64) -> Point) -> ReelResult<Vec<Shape>> {
        if self.positions.len() != self.labels.len() {
            return Err(ReelError::validation(format!(
                "{} tick positions for {} labels",
                self.positions.len(),
                self.labels.len()
            )));
        }
        let stroke = StrokeStyle::new(Rgba8::WHITE, TICK_WIDTH);
        let mut out = Vec::with_capacity(self.positions.len() * 2);
        for (&p, label) in self.positions.iter().zip(self.labels) {
            out.push(Shape::line(at(p, self.tick.0), at(p, self.tick.1), stroke));
            out.push(Shape::label(
                label.clone(),
                at(p, self.label_at),
                self.font_size_px,
                self.color,
            ));
        }
        Ok(out)
    }
}

/// `cm` in feet and inches, e.g. `145` -> `4'9"`.
///
/// Inches are rounded after splitting off whole feet, so values just under a foot boundary
/// print as `12"`.
pub fn cm_to_imperial(cm: f64) -> String {
    let inches = cm / 2.54;
    let feet = (inches / 12.0).floor();
    let rest = (inches - feet * 12.0).round();
    format!("{}'{}\"", feet as i64, rest as i64)
}
