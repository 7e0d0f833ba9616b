use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Deepest subdivision accepted; 3 * 4^8 corners is already far below pixel size.
pub const MAX_DEPTH: u32 = 8;

/// Equilateral triangle with side `side`, centroid at the origin, flat edge at the bottom.
///
/// Vertices run counter-clockwise from the bottom-left corner.
pub fn initial_triangle(side: f64) -> [Point; 3] {
    let h = side * 3f64.sqrt() / 2.0;
    [
        Point::new(-side / 2.0, -h / 3.0),
        Point::new(side / 2.0, -h / 3.0),
        Point::new(0.0, 2.0 * h / 3.0),
    ]
}

/// Corners of the Koch snowflake at `depth`, without repeating the first point.
///
/// Each iteration replaces every edge with four, so the result has `3 * 4^depth` points.
pub fn koch_points(side: f64, depth: u32) -> ReelResult<Vec<Point>> {
    if depth > MAX_DEPTH {
        return Err(ReelError::validation(format!(
            "koch depth {depth} exceeds maximum {MAX_DEPTH}"
        )));
    }
    if !(side.is_finite() && side > 0.0) {
        return Err(ReelError::validation("koch side length must be > 0"));
    }

    let mut points = initial_triangle(side).to_vec();
    for _ in 0..depth {
        let mut next = Vec::with_capacity(points.len() * 4);
        for (i, &p1) in points.iter().enumerate() {
            let p2 = points[(i + 1) % points.len()];
            next.extend(bump(p1, p2));
        }
        points = next;
    }
    Ok(points)
}

// Outward bump for a counter-clockwise outline: the normal is the edge direction turned clockwise.
fn bump(p1: Point, p2: Point) -> [Point; 4] {
    let v = p2 - p1;
    let a = p1 + v / 3.0;
    let b = p1 + v * (2.0 / 3.0);
    let mid = a.midpoint(b);

    let s = (b - a).hypot();
    let dir = (b - a) / s;
    let normal = Vec2::new(dir.y, -dir.x);
    let peak = mid + normal * (s * 3f64.sqrt() / 2.0);
    [p1, a, peak, b]
}

/// Closed outline: the corners followed by the first corner again.
pub fn closed_outline(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    if let Some(&first) = points.first() {
        out.push(first);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/koch.rs"]
mod tests;
