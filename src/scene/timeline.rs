//! Imperative scene scripting: add objects, play animations, wait, remove.
//!
//! A [`SceneBuilder`] keeps a cursor on the timeline. `play` schedules every animation over the
//! same window starting at the cursor and then advances it; `wait` only advances it. Objects
//! added with `add` appear at the cursor at full opacity and fully drawn.

use crate::{
    animation::{ease::Ease, keyframes::Keyframes},
    foundation::core::{Canvas, Fps, FrameIndex, Rgba8, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::model::{Camera, ObjectId, Scene, SceneObject, Shape},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationKind {
    /// Opacity 0 -> 1.
    FadeIn,
    /// Opacity 1 -> 0; the object is removed when the animation ends.
    FadeOut,
    /// Draw the outline progressively (progress 0 -> 1).
    Create,
    /// Translate by a world-space delta.
    Shift(Vec2),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub target: ObjectId,
    pub kind: AnimationKind,
    pub ease: Ease,
}

impl Animation {
    pub fn fade_in(target: ObjectId) -> Self {
        Self::new(target, AnimationKind::FadeIn)
    }

    pub fn fade_out(target: ObjectId) -> Self {
        Self::new(target, AnimationKind::FadeOut)
    }

    pub fn create(target: ObjectId) -> Self {
        Self::new(target, AnimationKind::Create)
    }

    pub fn shift(target: ObjectId, delta: Vec2) -> Self {
        Self::new(target, AnimationKind::Shift(delta))
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    fn new(target: ObjectId, kind: AnimationKind) -> Self {
        Self {
            target,
            kind,
            ease: Ease::default(),
        }
    }
}

pub struct SceneBuilder {
    fps: Fps,
    canvas: Canvas,
    camera: Camera,
    background: Rgba8,
    cursor: FrameIndex,
    objects: Vec<SceneObject>,
}

impl SceneBuilder {
    pub fn new(fps: Fps, canvas: Canvas, camera: Camera, background: Rgba8) -> Self {
        Self {
            fps,
            canvas,
            camera,
            background,
            cursor: FrameIndex(0),
            objects: Vec::new(),
        }
    }

    pub fn cursor(&self) -> FrameIndex {
        self.cursor
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Add `shape` at the cursor, visible immediately, at z 0.
    pub fn add(&mut self, shape: Shape) -> ObjectId {
        self.add_at_z(shape, 0)
    }

    pub fn add_at_z(&mut self, shape: Shape, z: i32) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(SceneObject {
            id,
            shape,
            z,
            appear: self.cursor,
            disappear: None,
            opacity: Keyframes::constant(1.0),
            progress: Keyframes::constant(1.0),
            offset: Keyframes::constant(Vec2::ZERO),
        });
        id
    }

    pub fn add_all(&mut self, shapes: impl IntoIterator<Item = Shape>) -> Vec<ObjectId> {
        shapes.into_iter().map(|s| self.add(s)).collect()
    }

    pub fn set_z(&mut self, id: ObjectId, z: i32) -> ReelResult<()> {
        self.object_mut(id)?.z = z;
        Ok(())
    }

    /// Remove `id` from the cursor on.
    pub fn remove(&mut self, id: ObjectId) -> ReelResult<()> {
        let at = self.cursor;
        let obj = self.object_mut(id)?;
        obj.disappear = Some(at);
        Ok(())
    }

    pub fn wait(&mut self, secs: f64) -> ReelResult<()> {
        let frames = self.secs_to_frames(secs)?;
        self.cursor = FrameIndex(self.cursor.0 + frames);
        Ok(())
    }

    /// Run all `animations` together over `run_time` seconds, then advance the cursor.
    pub fn play(
        &mut self,
        run_time: f64,
        animations: impl IntoIterator<Item = Animation>,
    ) -> ReelResult<()> {
        let frames = self.secs_to_frames(run_time)?;
        let start = self.cursor;
        let end = FrameIndex(start.0 + frames);

        for anim in animations {
            let obj = self.object_mut(anim.target)?;
            match anim.kind {
                AnimationKind::FadeIn => {
                    obj.opacity.transition(start, end, 0.0, 1.0, anim.ease)?;
                }
                AnimationKind::FadeOut => {
                    let from = obj.opacity.sample(start)?;
                    obj.opacity.transition(start, end, from, 0.0, anim.ease)?;
                    obj.disappear = Some(end);
                }
                AnimationKind::Create => {
                    obj.progress.transition(start, end, 0.0, 1.0, anim.ease)?;
                }
                AnimationKind::Shift(delta) => {
                    let from = obj.offset.sample(start)?;
                    obj.offset
                        .transition(start, end, from, from + delta, anim.ease)?;
                }
            }
        }

        self.cursor = end;
        Ok(())
    }

    pub fn build(self) -> ReelResult<Scene> {
        let duration = FrameIndex(self.cursor.0.max(1));
        let scene = Scene {
            fps: self.fps,
            canvas: self.canvas,
            camera: self.camera,
            background: self.background,
            duration,
            objects: self.objects,
        };
        scene.validate()?;
        tracing::debug!(
            frames = scene.duration.0,
            objects = scene.objects.len(),
            "built scene"
        );
        Ok(scene)
    }

    fn secs_to_frames(&self, secs: f64) -> ReelResult<u64> {
        if !(secs.is_finite() && secs >= 0.0) {
            return Err(ReelError::validation(format!(
                "durations must be finite and >= 0 (got {secs})"
            )));
        }
        Ok(self.fps.secs_to_frames_round(secs))
    }

    fn object_mut(&mut self, id: ObjectId) -> ReelResult<&mut SceneObject> {
        self.objects
            .get_mut(id.0)
            .ok_or_else(|| ReelError::validation(format!("unknown object id {}", id.0)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/timeline.rs"]
mod tests;
