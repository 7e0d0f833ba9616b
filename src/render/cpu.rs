//! CPU rasterizer for evaluated scene frames (vello_cpu).
//!
//! Geometry is mapped to pixel space before drawing so stroke widths stay in pixels. Strokes are
//! expanded to fill outlines with `kurbo::stroke`.

use std::sync::Arc;

use kurbo::{Cap, Join, Shape as _, Stroke, StrokeOpts};

use crate::{
    foundation::core::{Affine, BezPath, Point, Rgba8},
    foundation::error::{ReelError, ReelResult},
    render::{frame::FrameRGBA, label::LabelRasterizer},
    scene::{
        eval::{DrawItem, EvaluatedFrame},
        model::{Scene, Shape, StrokeStyle},
    },
};

const STROKE_TOLERANCE: f64 = 0.1;
const CIRCLE_SEGMENTS: usize = 96;

pub struct CpuRenderer {
    labels: LabelRasterizer,
}

impl CpuRenderer {
    pub fn new() -> Self {
        Self::with_fontdb(crate::render::svg::system_fontdb())
    }

    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            labels: LabelRasterizer::new(fontdb),
        }
    }

    pub fn render(&mut self, scene: &Scene, eval: &EvaluatedFrame<'_>) -> ReelResult<FrameRGBA> {
        let canvas = scene.canvas;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ReelError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ReelError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(scene.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        let view = ItemView {
            world_to_pixel: scene.camera.world_to_pixel(canvas),
            px_per_unit: scene.camera.pixels_per_unit(canvas),
            ref_scale: scene.px(1.0),
        };
        for item in &eval.items {
            self.draw_item(&mut ctx, &view, item)?;
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_item(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        view: &ItemView,
        item: &DrawItem<'_>,
    ) -> ReelResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let xf = view.world_to_pixel * Affine::translate(item.offset);
        let layered = item.opacity < 1.0;
        if layered {
            ctx.push_opacity_layer(item.opacity as f32);
        }

        match item.shape {
            Shape::Polyline {
                points,
                closed,
                stroke,
            } => {
                let mut pts: Vec<Point> = points.iter().map(|&p| xf * p).collect();
                if *closed && let Some(&first) = pts.first() {
                    pts.push(first);
                }
                stroke_polyline(ctx, &trim_polyline(&pts, item.progress), stroke, view);
            }
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let c = xf * *center;
                let r = radius * view.px_per_unit;
                if let Some(fill) = fill {
                    let path = kurbo::Circle::new(c, r).to_path(STROKE_TOLERANCE);
                    fill_with_progress(ctx, &path, *fill, item.progress);
                }
                if let Some(stroke) = stroke {
                    let outline = circle_outline(c, r);
                    stroke_polyline(ctx, &trim_polyline(&outline, item.progress), stroke, view);
                }
            }
            Shape::Polygon {
                points,
                fill,
                stroke,
            } => {
                let mut pts: Vec<Point> = points.iter().map(|&p| xf * p).collect();
                fill_with_progress(ctx, &polyline_path(&pts, true), *fill, item.progress);
                if let Some(stroke) = stroke {
                    if let Some(&first) = pts.first() {
                        pts.push(first);
                    }
                    stroke_polyline(ctx, &trim_polyline(&pts, item.progress), stroke, view);
                }
            }
            Shape::Label {
                text,
                center,
                font_size_px,
                color,
                rotation_deg,
            } => {
                let size = font_size_px * view.ref_scale;
                let label = self.labels.rasterize(text, size, *color)?;
                let (w, h) = (f64::from(label.width), f64::from(label.height));
                let at = xf * *center;
                // Pixel space has y down, so a counter-clockwise world rotation is negative here.
                let transform = Affine::translate(at.to_vec2())
                    * Affine::rotate(-rotation_deg.to_radians())
                    * Affine::translate((-w / 2.0, -h / 2.0));

                let partial = item.progress < 1.0;
                if partial {
                    ctx.push_opacity_layer(item.progress as f32);
                }
                ctx.set_transform(affine_to_cpu(transform));
                ctx.set_paint(label.image);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
                if partial {
                    ctx.pop_layer();
                }
            }
        }

        if layered {
            ctx.pop_layer();
        }
        Ok(())
    }
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

struct ItemView {
    world_to_pixel: Affine,
    px_per_unit: f64,
    ref_scale: f64,
}

fn stroke_polyline(
    ctx: &mut vello_cpu::RenderContext,
    pts: &[Point],
    style: &StrokeStyle,
    view: &ItemView,
) {
    if pts.len() < 2 {
        return;
    }
    let stroke = Stroke::new(style.width_px * view.ref_scale)
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    let outline = kurbo::stroke(
        polyline_path(pts, false),
        &stroke,
        &StrokeOpts::default(),
        STROKE_TOLERANCE,
    );
    ctx.set_paint(color_to_cpu(style.color));
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn fill_with_progress(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    color: Rgba8,
    progress: f64,
) {
    let partial = progress < 1.0;
    if partial {
        ctx.push_opacity_layer(progress as f32);
    }
    ctx.set_paint(color_to_cpu(color));
    ctx.fill_path(&bezpath_to_cpu(path));
    if partial {
        ctx.pop_layer();
    }
}

fn polyline_path(pts: &[Point], close: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut it = pts.iter();
    if let Some(&first) = it.next() {
        path.move_to(first);
        for &p in it {
            path.line_to(p);
        }
        if close {
            path.close_path();
        }
    }
    path
}

fn circle_outline(center: Point, radius: f64) -> Vec<Point> {
    // Starts at 3 o'clock and runs counter-clockwise on screen.
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = std::f64::consts::TAU * (i as f64) / (CIRCLE_SEGMENTS as f64);
            Point::new(center.x + radius * theta.cos(), center.y - radius * theta.sin())
        })
        .collect()
}

/// Leading part of a polyline covering `progress` of its arc length.
pub(crate) fn trim_polyline(pts: &[Point], progress: f64) -> Vec<Point> {
    if progress >= 1.0 || pts.len() < 2 {
        return pts.to_vec();
    }
    if progress <= 0.0 {
        return Vec::new();
    }

    let total: f64 = pts.windows(2).map(|w| (w[1] - w[0]).hypot()).sum();
    if total <= 0.0 {
        return pts.to_vec();
    }

    let mut remaining = total * progress;
    let mut out = vec![pts[0]];
    for w in pts.windows(2) {
        let seg = (w[1] - w[0]).hypot();
        if seg >= remaining {
            if seg > 0.0 {
                out.push(w[0].lerp(w[1], remaining / seg));
            }
            break;
        }
        remaining -= seg;
        out.push(w[1]);
    }
    out
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

pub(crate) fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> ReelResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ReelError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ReelError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ReelError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
