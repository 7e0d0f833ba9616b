//! Network growth: nodes fade in one at a time, their new edges draw out behind them, and the
//! degree histogram in the right pane follows along.

use crate::{
    config::{NetworkConfig, RenderConfig},
    data::{
        growth::step_degree_histogram,
        normalize::{Bounds, Normalizer},
        table::GrowthTable,
    },
    foundation::core::{Point, Rgba8},
    foundation::error::ReelResult,
    foundation::math::linspace,
    scene::{
        model::{Camera, ObjectId, Scene, Shape, StrokeStyle},
        timeline::{Animation, SceneBuilder},
    },
    scenes::axes::{TickRow, axis_line},
};

pub const BAR_COLOR: Rgba8 = Rgba8::opaque(0xE7, 0x9E, 0x16);

const LABEL_SIZE: f64 = 28.0;
const DOT_RADIUS: f64 = 0.1;
const STEP_SECS: f64 = 1.0;

/// Left pane: where normalized node positions are drawn.
fn network_pane() -> Bounds {
    Bounds::from_coords(0.25, 0.5, 8.25, 8.5)
}

/// Right pane: degree 0..25 along x, node count 0..25 along y.
const HIST_ORIGIN: Point = Point::new(10.25, 0.5);
const HIST_SIZE: (f64, f64) = (5.0, 8.0);
const HIST_MAX: f64 = 25.0;

#[tracing::instrument(skip_all, fields(rows = table.rows.len()))]
pub fn network_growth_scene(
    table: &GrowthTable,
    render: &RenderConfig,
    network: &NetworkConfig,
) -> ReelResult<Scene> {
    let mut b = SceneBuilder::new(
        render.fps()?,
        render.canvas(),
        Camera::new(Point::new(8.0, 4.5), 16.0),
        Rgba8::BLACK,
    );
    add_network_axes(&mut b)?;
    add_histogram_axes(&mut b)?;

    let to_pane = Normalizer::new(network.display, network_pane());
    let rows = network
        .animated_nodes
        .map_or(table.rows.len(), |cap| cap.min(table.rows.len()));

    let mut bars: Vec<ObjectId> = Vec::new();
    for (step, row) in table.rows.iter().take(rows).enumerate() {
        let at = to_pane.apply(row.position);
        let dot = b.add_at_z(
            Shape::Circle {
                center: at,
                radius: DOT_RADIUS,
                fill: Some(Rgba8::BLACK),
                stroke: Some(StrokeStyle::new(Rgba8::WHITE, 1.5)),
            },
            1,
        );
        b.play(STEP_SECS, [Animation::fade_in(dot)])?;

        if !row.targets.is_empty() {
            let stroke = StrokeStyle::new(Rgba8::WHITE, 1.0);
            let lines: Vec<Animation> = row
                .targets
                .iter()
                .map(|&t| Animation::create(b.add_at_z(Shape::line(at, to_pane.apply(t), stroke), -1)))
                .collect();
            b.play(STEP_SECS, lines)?;
        }

        for id in bars.drain(..) {
            b.remove(id)?;
        }
        for shape in degree_bars(&step_degree_histogram(&row.degrees, step)) {
            bars.push(b.add(shape));
        }
        tracing::debug!(node = row.node_id, targets = row.targets.len(), "scripted growth step");
    }

    b.wait(2.0)?;
    b.build()
}

fn add_network_axes(b: &mut SceneBuilder) -> ReelResult<()> {
    b.add(axis_line(Point::new(0.25, 0.5), Point::new(8.25, 0.5)));
    b.add(axis_line(Point::new(0.25, 0.5), Point::new(0.25, 8.5)));

    let labels: Vec<String> = ["0", "0.5", "1.0", "1.5", "2.0"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let xs = linspace(0.25, 8.25, 5);
    let ys = linspace(0.5, 8.5, 5);
    b.add_all(
        TickRow {
            positions: &xs,
            labels: &labels,
            tick: (0.5, 0.3),
            label_at: 0.05,
            font_size_px: LABEL_SIZE,
            color: Rgba8::WHITE,
        }
        .horizontal()?,
    );
    b.add_all(
        TickRow {
            positions: &ys,
            labels: &labels,
            tick: (0.25, 0.05),
            label_at: -0.45,
            font_size_px: LABEL_SIZE,
            color: Rgba8::WHITE,
        }
        .vertical()?,
    );
    Ok(())
}

fn add_histogram_axes(b: &mut SceneBuilder) -> ReelResult<()> {
    let (x0, y0) = (HIST_ORIGIN.x, HIST_ORIGIN.y);
    b.add(axis_line(HIST_ORIGIN, Point::new(x0 + HIST_SIZE.0, y0)));
    b.add(axis_line(HIST_ORIGIN, Point::new(x0, y0 + HIST_SIZE.1)));

    let labels: Vec<String> = (0..=5).map(|i| (i * 5).to_string()).collect();
    let xs = linspace(x0, x0 + HIST_SIZE.0, 6);
    let ys = linspace(y0, y0 + HIST_SIZE.1, 6);
    b.add_all(
        TickRow {
            positions: &xs,
            labels: &labels,
            tick: (y0, 0.3),
            label_at: 0.05,
            font_size_px: LABEL_SIZE,
            color: Rgba8::WHITE,
        }
        .horizontal()?,
    );
    b.add_all(
        TickRow {
            positions: &ys,
            labels: &labels,
            tick: (x0, 10.05),
            label_at: 9.55,
            font_size_px: LABEL_SIZE,
            color: Rgba8::WHITE,
        }
        .vertical()?,
    );
    Ok(())
}

/// One bar per `(degree, count)`, centred on the degree and clipped to the pane.
pub fn degree_bars(histogram: &[(usize, usize)]) -> Vec<Shape> {
    let unit_x = HIST_SIZE.0 / HIST_MAX;
    let unit_y = HIST_SIZE.1 / HIST_MAX;
    histogram
        .iter()
        .filter(|&&(degree, count)| count > 0 && (degree as f64) <= HIST_MAX)
        .map(|&(degree, count)| {
            let cx = HIST_ORIGIN.x + degree as f64 * unit_x;
            let half = 0.4 * unit_x;
            let top = HIST_ORIGIN.y + (count as f64).min(HIST_MAX) * unit_y;
            Shape::rect(
                (cx - half).max(HIST_ORIGIN.x),
                HIST_ORIGIN.y,
                cx + half,
                top,
                BAR_COLOR,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/network_growth.rs"]
mod tests;
