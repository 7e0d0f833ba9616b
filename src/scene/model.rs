use crate::{
    animation::keyframes::Keyframes,
    foundation::core::{Affine, Canvas, Fps, FrameIndex, Point, Rgba8, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Canvas height that stroke widths and font sizes are expressed against.
pub const REFERENCE_HEIGHT_PX: f64 = 1080.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width_px: f64, // at REFERENCE_HEIGHT_PX
}

impl StrokeStyle {
    pub fn new(color: Rgba8, width_px: f64) -> Self {
        Self { color, width_px }
    }
}

/// Drawable primitive in world coordinates (y up).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    Polyline {
        points: Vec<Point>,
        closed: bool,
        stroke: StrokeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Rgba8>,
        stroke: Option<StrokeStyle>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgba8,
        stroke: Option<StrokeStyle>,
    },
    Label {
        text: String,
        center: Point,
        font_size_px: f64,
        color: Rgba8,
        /// Counter-clockwise rotation about `center`, in degrees.
        rotation_deg: f64,
    },
}

impl Shape {
    pub fn line(a: Point, b: Point, stroke: StrokeStyle) -> Self {
        Self::Polyline {
            points: vec![a, b],
            closed: false,
            stroke,
        }
    }

    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64, fill: Rgba8) -> Self {
        Self::Polygon {
            points: vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            fill,
            stroke: None,
        }
    }

    pub fn label(text: impl Into<String>, center: Point, font_size_px: f64, color: Rgba8) -> Self {
        Self::Label {
            text: text.into(),
            center,
            font_size_px,
            color,
            rotation_deg: 0.0,
        }
    }

    fn validate(&self) -> ReelResult<()> {
        let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
        match self {
            Shape::Polyline { points, stroke, .. } => {
                if points.len() < 2 {
                    return Err(ReelError::validation("polyline needs at least two points"));
                }
                if !points.iter().all(finite) {
                    return Err(ReelError::validation("polyline has non-finite points"));
                }
                validate_stroke(stroke)
            }
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if !finite(center) || !(radius.is_finite() && *radius > 0.0) {
                    return Err(ReelError::validation("circle needs a finite centre and radius > 0"));
                }
                if fill.is_none() && stroke.is_none() {
                    return Err(ReelError::validation("circle needs a fill or a stroke"));
                }
                stroke.as_ref().map_or(Ok(()), validate_stroke)
            }
            Shape::Polygon { points, stroke, .. } => {
                if points.len() < 3 || !points.iter().all(finite) {
                    return Err(ReelError::validation(
                        "polygon needs at least three finite points",
                    ));
                }
                stroke.as_ref().map_or(Ok(()), validate_stroke)
            }
            Shape::Label {
                text,
                center,
                font_size_px,
                ..
            } => {
                if text.is_empty() {
                    return Err(ReelError::validation("label text must be non-empty"));
                }
                if !finite(center) || !(*font_size_px > 0.0) {
                    return Err(ReelError::validation(
                        "label needs a finite centre and font size > 0",
                    ));
                }
                Ok(())
            }
        }
    }
}

fn validate_stroke(stroke: &StrokeStyle) -> ReelResult<()> {
    if !(stroke.width_px.is_finite() && stroke.width_px > 0.0) {
        return Err(ReelError::validation("stroke width must be > 0"));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
    pub z: i32,
    pub appear: FrameIndex,
    pub disappear: Option<FrameIndex>, // exclusive
    pub opacity: Keyframes<f64>,       // 0..1 clamped in eval
    pub progress: Keyframes<f64>,      // drawn fraction of the outline, 0..1
    pub offset: Keyframes<Vec2>,       // world-space translation
}

impl SceneObject {
    pub fn visible_at(&self, frame: FrameIndex) -> bool {
        self.appear.0 <= frame.0 && self.disappear.is_none_or(|end| frame.0 < end.0)
    }
}

/// Visible world rectangle: centre plus width; height follows the canvas aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    pub center: Point,
    pub width: f64,
}

impl Camera {
    pub fn new(center: Point, width: f64) -> Self {
        Self { center, width }
    }

    pub fn height(&self, canvas: Canvas) -> f64 {
        self.width * f64::from(canvas.height) / f64::from(canvas.width)
    }

    pub fn pixels_per_unit(&self, canvas: Canvas) -> f64 {
        f64::from(canvas.width) / self.width
    }

    /// World (y up) to pixel (y down) transform.
    pub fn world_to_pixel(&self, canvas: Canvas) -> Affine {
        let s = self.pixels_per_unit(canvas);
        Affine::translate((f64::from(canvas.width) / 2.0, f64::from(canvas.height) / 2.0))
            * Affine::scale_non_uniform(s, -s)
            * Affine::translate(-self.center.to_vec2())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub fps: Fps,
    pub canvas: Canvas,
    pub camera: Camera,
    pub background: Rgba8,
    pub duration: FrameIndex, // total frames
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn validate(&self) -> ReelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("duration must be > 0 frames"));
        }
        if !(self.camera.width.is_finite() && self.camera.width > 0.0) {
            return Err(ReelError::validation("camera width must be > 0"));
        }

        for (i, obj) in self.objects.iter().enumerate() {
            if obj.id.0 != i {
                return Err(ReelError::validation(format!(
                    "object at index {i} has id {}",
                    obj.id.0
                )));
            }
            if let Some(end) = obj.disappear
                && end.0 < obj.appear.0
            {
                return Err(ReelError::validation(format!(
                    "object {i} disappears before it appears"
                )));
            }
            obj.shape.validate()?;
            obj.opacity.validate()?;
            obj.progress.validate()?;
            obj.offset.validate()?;
        }
        Ok(())
    }

    /// Pixel size of a length given at the reference canvas height.
    pub fn px(&self, reference_px: f64) -> f64 {
        reference_px * f64::from(self.canvas.height) / REFERENCE_HEIGHT_PX
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
