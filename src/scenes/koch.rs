//! Koch snowflake: each depth cross-fades from orange to pale blue, then the next depth fades in
//! underneath it.

use crate::{
    config::{KochConfig, RenderConfig},
    foundation::core::{Point, Rgba8},
    foundation::error::ReelResult,
    geometry::koch::koch_points,
    scene::{
        model::{Camera, ObjectId, Scene, Shape, StrokeStyle},
        timeline::{Animation, SceneBuilder},
    },
};

pub const WHITE_COLOR: Rgba8 = Rgba8::opaque(0xAF, 0xCB, 0xCF);
pub const ACCENT_COLOR: Rgba8 = Rgba8::opaque(0xE7, 0x9E, 0x16);

fn outline(points: Vec<Point>, color: Rgba8, width_px: f64) -> Shape {
    Shape::Polyline {
        points,
        closed: true,
        stroke: StrokeStyle::new(color, width_px),
    }
}

#[tracing::instrument(skip(render))]
pub fn koch_scene(render: &RenderConfig, cfg: &KochConfig) -> ReelResult<Scene> {
    let depths = (0..=cfg.max_depth)
        .map(|d| koch_points(cfg.side, d))
        .collect::<ReelResult<Vec<_>>>()?;

    let mut b = SceneBuilder::new(
        render.fps()?,
        render.canvas(),
        Camera::new(Point::ORIGIN, 14.0 * 16.0 / 9.0),
        Rgba8::BLACK,
    );

    let first = b.add(outline(depths[0].clone(), ACCENT_COLOR, cfg.line_width));
    b.play(1.0, [Animation::create(first)])?;
    b.wait(0.5)?;

    let mut current: Vec<ObjectId> = vec![first];
    for (i, points) in depths.iter().enumerate() {
        let white = b.add_at_z(outline(points.clone(), WHITE_COLOR, cfg.line_width), 1);
        let fades = current
            .drain(..)
            .map(Animation::fade_out)
            .chain([Animation::fade_in(white)]);
        b.play(1.0, fades.collect::<Vec<_>>())?;
        current.push(white);
        b.wait(0.5)?;

        if let Some(next) = depths.get(i + 1) {
            let accent = b.add_at_z(outline(next.clone(), ACCENT_COLOR, cfg.line_width), 0);
            b.play(1.0, [Animation::fade_in(accent)])?;
            current.push(accent);
            b.wait(0.2)?;
        }
        tracing::debug!(depth = i, corners = points.len(), "scripted koch depth");
    }

    b.wait(2.0)?;
    b.build()
}
