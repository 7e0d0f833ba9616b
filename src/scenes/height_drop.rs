//! Height drop: measurements fall one at a time into 5 cm bins over a grid, and the smoothed
//! distribution curve is re-estimated after every landing.

use crate::{
    analysis::curve::CurveEstimator,
    config::{HeightsConfig, RenderConfig},
    foundation::core::{Point, Rgba8, Vec2},
    foundation::error::{ReelError, ReelResult},
    foundation::math::linspace,
    scene::{
        model::{Camera, ObjectId, Scene, Shape, StrokeStyle},
        timeline::{Animation, SceneBuilder},
    },
    scenes::axes::{TickRow, axis_line, cm_to_imperial, grid_lines},
};

pub const BACKGROUND: Rgba8 = Rgba8::opaque(0x1a, 0x1a, 0x1a);
pub const IMPERIAL_COLOR: Rgba8 = Rgba8::opaque(0xAF, 0xCB, 0xCF);
pub const CURVE_COLOR: Rgba8 = Rgba8::opaque(0xE7, 0x9E, 0x16);

/// Height range covered by the x axis, in cm.
pub const DOMAIN_CM: (f64, f64) = (145.0, 200.0);
const COUNT_MAX: f64 = 10.0;

const ORIGIN: Point = Point::new(1.0, 1.0);
const X_END: f64 = 12.0;
const Y_END: f64 = 8.0;
const DROP_FROM_Y: f64 = 9.5;

/// Data (cm, count) to world coordinates of the chart.
#[derive(Clone, Copy, Debug)]
pub struct ChartMap;

impl ChartMap {
    pub fn unit_x() -> f64 {
        (X_END - ORIGIN.x) / (DOMAIN_CM.1 - DOMAIN_CM.0)
    }

    pub fn unit_y() -> f64 {
        (Y_END - ORIGIN.y) / COUNT_MAX
    }

    pub fn point(cm: f64, count: f64) -> Point {
        Point::new(
            ORIGIN.x + (cm - DOMAIN_CM.0) * Self::unit_x(),
            ORIGIN.y + count * Self::unit_y(),
        )
    }
}

#[tracing::instrument(skip_all, fields(samples = heights.len()))]
pub fn height_drop_scene(
    heights: &[i64],
    render: &RenderConfig,
    cfg: &HeightsConfig,
) -> ReelResult<Scene> {
    if heights.is_empty() {
        return Err(ReelError::data("height drop needs at least one measurement"));
    }
    let estimator = CurveEstimator::new(DOMAIN_CM, cfg.bin_width, cfg.curve_samples)?;

    let mut b = SceneBuilder::new(
        render.fps()?,
        render.canvas(),
        Camera::new(Point::new(6.0, 6.0), 14.0),
        BACKGROUND,
    );
    b.add_all(grid_lines(12.0, 2.0, 2.0));
    add_axes(&mut b)?;

    let bin_count = estimator.bin_count();
    let mut stacks = vec![0usize; bin_count];
    let mut landed: Vec<f64> = Vec::new();
    let mut curve: Option<ObjectId> = None;
    let radius = 0.45 * ChartMap::unit_y();

    for &h in heights.iter().take(cfg.drop_count) {
        let cm = h as f64;
        let Some(bin) = bin_index(cm, cfg.bin_width, bin_count) else {
            tracing::debug!(height = h, "measurement outside the chart, skipped");
            continue;
        };
        let center_cm = DOMAIN_CM.0 + (bin as f64 + 0.5) * cfg.bin_width;
        let rest = ChartMap::point(center_cm, stacks[bin] as f64 + 0.5);
        stacks[bin] += 1;

        let ball = b.add_at_z(
            Shape::Circle {
                center: Point::new(rest.x, DROP_FROM_Y),
                radius,
                fill: Some(Rgba8::WHITE),
                stroke: None,
            },
            1,
        );
        b.play(0.2, [Animation::fade_in(ball)])?;
        b.play(
            0.5,
            [Animation::shift(ball, Vec2::new(0.0, rest.y - DROP_FROM_Y))],
        )?;

        landed.push(cm);
        if let Some(old) = curve.take() {
            b.remove(old)?;
        }
        curve = add_curve(&mut b, &estimator.estimate(&landed)?);
        b.wait(0.1)?;
    }

    tracing::debug!(landed = landed.len(), "scripted height drop");
    b.wait(2.0)?;
    b.build()
}

/// Bin of `cm` over the chart domain; the upper end belongs to the last bin.
fn bin_index(cm: f64, bin_width: f64, bins: usize) -> Option<usize> {
    if !(DOMAIN_CM.0..=DOMAIN_CM.1).contains(&cm) || bins == 0 {
        return None;
    }
    Some((((cm - DOMAIN_CM.0) / bin_width).floor() as usize).min(bins - 1))
}

fn add_curve(b: &mut SceneBuilder, curve: &[Point]) -> Option<ObjectId> {
    if curve.len() < 2 || curve.iter().all(|p| p.y == 0.0) {
        return None;
    }
    let points = curve
        .iter()
        .map(|p| ChartMap::point(p.x, p.y))
        .collect();
    Some(b.add_at_z(
        Shape::Polyline {
            points,
            closed: false,
            stroke: StrokeStyle::new(CURVE_COLOR, 4.0),
        },
        2,
    ))
}

fn add_axes(b: &mut SceneBuilder) -> ReelResult<()> {
    b.add(axis_line(ORIGIN, Point::new(X_END, ORIGIN.y)));
    b.add(axis_line(ORIGIN, Point::new(ORIGIN.x, Y_END)));

    let cms: Vec<i64> = (0..12).map(|i| 145 + 5 * i).collect();
    let xs = linspace(ORIGIN.x, X_END, cms.len());
    let metric: Vec<String> = cms.iter().map(i64::to_string).collect();
    let imperial: Vec<String> = cms.iter().map(|&c| cm_to_imperial(c as f64)).collect();

    let metric_row = TickRow {
        positions: &xs,
        labels: &metric,
        tick: (ORIGIN.y, 0.85),
        label_at: 0.3,
        font_size_px: 36.0,
        color: Rgba8::WHITE,
    };
    b.add_all(metric_row.horizontal()?);
    b.add_all(xs.iter().zip(&imperial).map(|(&x, text)| {
        Shape::label(text.clone(), Point::new(x, -0.15), 34.0, IMPERIAL_COLOR)
    }));
    b.add(Shape::label("height", Point::new(6.5, -0.3), 40.0, Rgba8::WHITE));

    let counts: Vec<String> = (0..=10).map(|i: i32| i.to_string()).collect();
    let ys = linspace(ORIGIN.y, Y_END, counts.len());
    b.add_all(
        TickRow {
            positions: &ys,
            labels: &counts,
            tick: (ORIGIN.x, 0.85),
            label_at: 0.55,
            font_size_px: 36.0,
            color: Rgba8::WHITE,
        }
        .vertical()?,
    );
    b.add(Shape::Label {
        text: "number of people".to_owned(),
        center: Point::new(-0.5, 4.5),
        font_size_px: 40.0,
        color: Rgba8::WHITE,
        rotation_deg: 90.0,
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/height_drop.rs"]
mod tests;
