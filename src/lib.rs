//! statreel prepares data for, and renders, the animations of a statistics explainer video.
//!
//! Two stages run independently per animation:
//!
//! - Data preparation: grow a preferential-attachment network, lay it out, replay its growth and
//!   write the growth table; draw a synthetic height sample and write the measurement table.
//! - Rendering: script a [`Scene`] from the prepared data, evaluate it frame by frame, rasterize
//!   on the CPU, and stream frames into a [`FrameSink`] (PNG sequence or `ffmpeg`). Static charts
//!   are built as SVG and rasterized to PNG.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod analysis;
pub(crate) mod animation;
pub(crate) mod chart;
pub(crate) mod config;
pub(crate) mod data;
pub(crate) mod encode;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod scenes;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::foundation::math::linspace;

pub use crate::animation::ease::Ease;
pub use crate::animation::keyframes::{InterpMode, Keyframe, Keyframes, Lerp};

pub use crate::data::graph::{Graph, barabasi_albert, degree_distribution};
pub use crate::data::growth::{GrowthHistory, GrowthStep, replay, step_degree_histogram};
pub use crate::data::heights::{HeightSampleParams, synthetic_heights};
pub use crate::data::layout::{SpringParams, rescale_layout, spring_layout};
pub use crate::data::network::{NetworkData, prepare_network};
pub use crate::data::normalize::{Bounds, Normalizer};
pub use crate::data::table::{
    GrowthRow, GrowthTable, MEASUREMENT_HEADER, parse_measurements, read_measurements,
    write_measurements,
};

pub use crate::analysis::average::{mean_curve, noisy_trials, running_means};
pub use crate::analysis::curve::CurveEstimator;
pub use crate::analysis::histogram::{Histogram, SampleSummary, measurement_edges};
pub use crate::analysis::spline::NaturalCubicSpline;

pub use crate::geometry::koch::{MAX_DEPTH as KOCH_MAX_DEPTH, closed_outline, initial_triangle, koch_points};

pub use crate::scene::eval::{DrawItem, EvaluatedFrame, Evaluator};
pub use crate::scene::model::{
    Camera, ObjectId, REFERENCE_HEIGHT_PX, Scene, SceneObject, Shape, StrokeStyle,
};
pub use crate::scene::timeline::{Animation, AnimationKind, SceneBuilder};

pub use crate::render::cpu::CpuRenderer;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::label::{LabelImage, LabelRasterizer};
pub use crate::render::pipeline::{full_range, render_frame, render_frames, render_to_sink};
pub use crate::render::svg::system_fontdb;

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path, validate_mp4_config};
pub use crate::encode::sink::{
    FrameSink, InMemorySink, PngSequenceSink, SinkConfig, ensure_parent_dir, write_png,
};

pub use crate::chart::heights::{BIN_WIDTHS, height_histogram_chart, write_height_histogram};
pub use crate::chart::network::{network_chart, write_network_chart};
pub use crate::chart::svg::{PlotArea, SvgDoc};

pub use crate::config::{
    HeightsConfig, KochConfig, NetworkConfig, ReelConfig, RenderConfig, TrialsConfig,
};
pub use crate::scenes::axes::cm_to_imperial;
pub use crate::scenes::{SceneInputs, SceneKind, build_scene};
