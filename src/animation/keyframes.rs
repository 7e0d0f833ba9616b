use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{ReelError, ReelResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub frame: FrameIndex,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

/// Absolute-frame keyframe track.
///
/// Several keys may share a frame; the last one wins from that frame on, which is how instant
/// value changes are expressed without disturbing interpolation before them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by frame
    pub mode: InterpMode,
    pub default: Option<T>, // value when no keys exist
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: FrameIndex(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Linear,
            default: None,
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ReelError::validation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(ReelError::validation("Keyframes keys must be sorted by frame"));
        }
        Ok(())
    }

    pub fn sample(&self, frame: FrameIndex) -> ReelResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| ReelError::render("Keyframes has no keys and no default"));
        }

        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }

    /// Hold the current value until `frame`, then jump to `value`.
    pub fn set_at(&mut self, frame: FrameIndex, value: T) -> ReelResult<()> {
        self.truncate_from(frame)?;
        self.keys.push(Keyframe {
            frame,
            value,
            ease: Ease::Linear,
        });
        Ok(())
    }

    /// Hold the current value until `start`, then move from `from` to `to` over `[start, end]`.
    pub fn transition(
        &mut self,
        start: FrameIndex,
        end: FrameIndex,
        from: T,
        to: T,
        ease: Ease,
    ) -> ReelResult<()> {
        if end.0 < start.0 {
            return Err(ReelError::validation("transition end must be >= start"));
        }
        self.truncate_from(start)?;
        self.keys.push(Keyframe {
            frame: start,
            value: from,
            ease,
        });
        self.keys.push(Keyframe {
            frame: end,
            value: to,
            ease: Ease::Linear,
        });
        Ok(())
    }

    fn truncate_from(&mut self, frame: FrameIndex) -> ReelResult<()> {
        if self.keys.is_empty() {
            return Ok(());
        }
        let held = self.sample(frame)?;
        self.keys.retain(|k| k.frame.0 < frame.0);
        self.keys.push(Keyframe {
            frame,
            value: held,
            ease: Ease::Linear,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
