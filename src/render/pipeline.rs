use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    render::{cpu::CpuRenderer, frame::FrameRGBA},
    scene::{eval::Evaluator, model::Scene},
};

/// Evaluate and rasterize a single frame.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    scene: &Scene,
    frame: FrameIndex,
    renderer: &mut CpuRenderer,
) -> ReelResult<FrameRGBA> {
    let eval = Evaluator::eval_frame(scene, frame)?;
    renderer.render(scene, &eval)
}

/// Render a range of frames (inclusive start, exclusive end) into memory.
pub fn render_frames(
    scene: &Scene,
    range: FrameRange,
    renderer: &mut CpuRenderer,
) -> ReelResult<Vec<FrameRGBA>> {
    validate_range(scene, range)?;
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    for f in range.start.0..range.end.0 {
        out.push(render_frame(scene, FrameIndex(f), renderer)?);
    }
    Ok(out)
}

/// Render a range of frames and stream them into `sink` in order.
///
/// Returns the number of frames pushed.
#[tracing::instrument(skip(scene, renderer, sink))]
pub fn render_to_sink(
    scene: &Scene,
    range: FrameRange,
    renderer: &mut CpuRenderer,
    sink: &mut dyn FrameSink,
) -> ReelResult<u64> {
    validate_range(scene, range)?;
    sink.begin(SinkConfig {
        width: scene.canvas.width,
        height: scene.canvas.height,
        fps: scene.fps,
        background: scene.background,
    })?;

    let total = range.len_frames();
    for f in range.start.0..range.end.0 {
        let frame = render_frame(scene, FrameIndex(f), renderer)?;
        sink.push_frame(FrameIndex(f), &frame)?;
        let done = f - range.start.0 + 1;
        if done % 100 == 0 {
            tracing::debug!(done, total, "rendered frames");
        }
    }
    sink.end()?;
    Ok(total)
}

/// Whole timeline, `0..duration`.
pub fn full_range(scene: &Scene) -> FrameRange {
    FrameRange {
        start: FrameIndex(0),
        end: scene.duration,
    }
}

fn validate_range(scene: &Scene, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > scene.duration.0 {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds scene duration {}",
            range.end.0, scene.duration.0
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
