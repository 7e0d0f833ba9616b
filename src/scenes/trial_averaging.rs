//! Trial averaging: a labelled grid is drawn in, then noisy trials of one smooth curve appear one
//! by one while their running average settles onto the underlying curve.

use std::f64::consts::PI;

use crate::{
    analysis::average::{noisy_trials, running_means},
    config::{RenderConfig, TrialsConfig},
    foundation::core::{Point, Rgba8},
    foundation::error::ReelResult,
    scene::{
        model::{Camera, ObjectId, Scene, Shape, StrokeStyle},
        timeline::{Animation, SceneBuilder},
    },
    scenes::axes::grid_lines,
};

pub const BACKGROUND: Rgba8 = Rgba8::opaque(0x8b, 0xc0, 0x8c);
pub const AVERAGE_COLOR: Rgba8 = Rgba8::opaque(0xE7, 0x9E, 0x16);

const GRID_MAX: f64 = 12.0;
const GRID_STEP: f64 = 2.0;
const LABEL_SIZE: f64 = 24.0;

/// Smooth curve the trials scatter around.
pub fn base_curve(x: f64) -> f64 {
    6.0 + 3.0 * (PI * x / 6.0).sin()
}

#[tracing::instrument(skip(render))]
pub fn trial_averaging_scene(render: &RenderConfig, cfg: &TrialsConfig) -> ReelResult<Scene> {
    let mut b = SceneBuilder::new(
        render.fps()?,
        render.canvas(),
        Camera::new(Point::new(6.0, 6.0), 14.0),
        BACKGROUND,
    );

    let mut intro = b.add_all(grid_lines(GRID_MAX, GRID_STEP, 2.0));
    intro.extend(b.add_all(grid_labels()));
    b.play(1.0, intro.into_iter().map(Animation::create).collect::<Vec<_>>())?;
    b.wait(2.0)?;

    let trials = noisy_trials(
        base_curve,
        (0.0, GRID_MAX),
        cfg.samples,
        cfg.count,
        cfg.noise_sd,
        cfg.seed,
    )?;
    let means = running_means(&trials)?;

    let trial_stroke = StrokeStyle::new(Rgba8::WHITE.with_alpha(150), 2.0);
    let mut average: Option<ObjectId> = None;
    for (trial, mean) in trials.into_iter().zip(means) {
        let id = b.add(Shape::Polyline {
            points: trial,
            closed: false,
            stroke: trial_stroke,
        });
        b.play(0.5, [Animation::create(id)])?;

        if let Some(old) = average.take() {
            b.remove(old)?;
        }
        average = Some(b.add_at_z(
            Shape::Polyline {
                points: mean,
                closed: false,
                stroke: StrokeStyle::new(AVERAGE_COLOR, 6.0),
            },
            1,
        ));
        b.wait(0.3)?;
    }

    b.wait(2.0)?;
    b.build()
}

/// `y=..` above each horizontal line, `x=..` right of each vertical one.
fn grid_labels() -> Vec<Shape> {
    let n = (GRID_MAX / GRID_STEP).round() as usize;
    let values: Vec<f64> = (0..=n).map(|i| i as f64 * GRID_STEP).collect();
    let ys = values.iter().map(|&y| {
        Shape::label(format!("y={y}"), Point::new(5.0, y + 0.4), LABEL_SIZE, Rgba8::WHITE)
    });
    let xs = values.iter().map(|&x| {
        Shape::label(
            format!("x={x}"),
            Point::new(x + 0.4, 10.0 / 3.0),
            LABEL_SIZE,
            Rgba8::WHITE,
        )
    });
    ys.chain(xs).collect()
}
