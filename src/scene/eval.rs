use crate::{
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::model::{ObjectId, Scene, Shape},
};

#[derive(Clone, Debug)]
pub struct EvaluatedFrame<'a> {
    pub frame: FrameIndex,
    pub items: Vec<DrawItem<'a>>, // back to front
}

#[derive(Clone, Debug)]
pub struct DrawItem<'a> {
    pub object: ObjectId,
    pub shape: &'a Shape,
    pub z: i32,
    pub opacity: f64,
    pub progress: f64,
    pub offset: Vec2,
}

pub struct Evaluator;

impl Evaluator {
    /// Resolve every visible object's animated properties at `frame`.
    ///
    /// Items are ordered by `(z, insertion order)`. Fully transparent or undrawn items are skipped.
    #[tracing::instrument(skip(scene))]
    pub fn eval_frame(scene: &Scene, frame: FrameIndex) -> ReelResult<EvaluatedFrame<'_>> {
        if frame.0 >= scene.duration.0 {
            return Err(ReelError::render(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, scene.duration.0
            )));
        }

        let mut items = Vec::new();
        for obj in &scene.objects {
            if !obj.visible_at(frame) {
                continue;
            }
            let opacity = obj.opacity.sample(frame)?.clamp(0.0, 1.0);
            let progress = obj.progress.sample(frame)?.clamp(0.0, 1.0);
            if opacity <= 0.0 || progress <= 0.0 {
                continue;
            }
            items.push(DrawItem {
                object: obj.id,
                shape: &obj.shape,
                z: obj.z,
                opacity,
                progress,
                offset: obj.offset.sample(frame)?,
            });
        }

        items.sort_by_key(|item| (item.z, item.object.0));
        Ok(EvaluatedFrame { frame, items })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/eval.rs"]
mod tests;
