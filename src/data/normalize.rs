use crate::foundation::core::{Point, Vec2};

/// Axis-aligned box given by its min and max corners.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_coords(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self::new(Point::new(x_min, y_min), Point::new(x_max, y_max))
    }

    /// Bounding box of `points`, or `None` when empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = *it.next()?;
        Some(it.fold(Self::new(first, first), |b, p| Self {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Per-axis affine map from one box onto another.
///
/// Axes scale independently, so angles are not preserved. A zero-extent source axis uses a scale
/// of 1, which sends a constant coordinate to the target minimum on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    src: Bounds,
    dst: Bounds,
    scale: Vec2,
}

impl Normalizer {
    pub fn new(src: Bounds, dst: Bounds) -> Self {
        let axis_scale = |dst_extent: f64, src_extent: f64| {
            if src_extent != 0.0 {
                dst_extent / src_extent
            } else {
                1.0
            }
        };
        Self {
            src,
            dst,
            scale: Vec2::new(
                axis_scale(dst.width(), src.width()),
                axis_scale(dst.height(), src.height()),
            ),
        }
    }

    /// Normalizer whose source is the bounding box of `points`.
    pub fn fit(points: &[Point], dst: Bounds) -> Self {
        let src = Bounds::from_points(points).unwrap_or(dst);
        Self::new(src, dst)
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            map_axis(p.x, self.src.min.x, self.src.width(), self.dst.min.x, self.dst.max.x),
            map_axis(p.y, self.src.min.y, self.src.height(), self.dst.min.y, self.dst.max.y),
        )
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}

// Interpolating between the target ends keeps source min/max exact on the boundary.
fn map_axis(v: f64, src_min: f64, src_extent: f64, dst_min: f64, dst_max: f64) -> f64 {
    if src_extent == 0.0 {
        return dst_min + (v - src_min);
    }
    let t = (v - src_min) / src_extent;
    dst_min * (1.0 - t) + dst_max * t
}

#[cfg(test)]
#[path = "../../tests/unit/data/normalize.rs"]
mod tests;
