//! Run configuration, loaded from JSON. Every field has a default, so `{}` is a valid file.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    data::{heights::HeightSampleParams, layout::SpringParams, normalize::Bounds},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    pub render: RenderConfig,
    pub network: NetworkConfig,
    pub heights: HeightsConfig,
    pub koch: KochConfig,
    pub trials: TrialsConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 15,
        }
    }
}

impl RenderConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn fps(&self) -> ReelResult<Fps> {
        Fps::new(self.fps, 1)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub nodes: usize,
    pub edges_per_node: usize,
    /// Seed for the preferential-attachment draw.
    pub seed: u64,
    pub layout: SpringParams,
    /// Rectangle the layout is normalized into before it is written out.
    pub display: Bounds,
    /// Animate only the first N rows of the growth table.
    pub animated_nodes: Option<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            nodes: 60,
            edges_per_node: 2,
            seed: 1,
            layout: SpringParams::default(),
            display: Bounds::from_coords(-5.0, -3.0, 5.0, 3.0),
            animated_nodes: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeightsConfig {
    #[serde(flatten)]
    pub sample: HeightSampleParams,
    /// Samples animated in the drop scene.
    pub drop_count: usize,
    pub bin_width: f64,
    pub curve_samples: usize,
}

impl Default for HeightsConfig {
    fn default() -> Self {
        Self {
            sample: HeightSampleParams::default(),
            drop_count: 40,
            bin_width: 5.0,
            curve_samples: 200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KochConfig {
    pub side: f64,
    pub max_depth: u32,
    pub line_width: f64,
}

impl Default for KochConfig {
    fn default() -> Self {
        Self {
            side: 10.0,
            max_depth: 5,
            line_width: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrialsConfig {
    pub count: usize,
    pub noise_sd: f64,
    pub seed: u64,
    /// Points per trial curve.
    pub samples: usize,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            count: 8,
            noise_sd: 0.6,
            seed: 7,
            samples: 120,
        }
    }
}

impl ReelConfig {
    pub fn from_json_file(path: &Path) -> ReelResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ReelResult<()> {
        let r = &self.render;
        if r.width == 0 || r.height == 0 || r.fps == 0 {
            return Err(ReelError::validation(
                "render width, height and fps must be > 0",
            ));
        }
        if r.width % 2 != 0 || r.height % 2 != 0 {
            return Err(ReelError::validation(format!(
                "render size {}x{} must be even for video output",
                r.width, r.height
            )));
        }
        if r.width > u32::from(u16::MAX) || r.height > u32::from(u16::MAX) {
            return Err(ReelError::validation("render size exceeds 65535 pixels"));
        }

        let n = &self.network;
        if n.edges_per_node == 0 || n.edges_per_node >= n.nodes {
            return Err(ReelError::validation(format!(
                "network needs 1 <= edges_per_node < nodes (got {} and {})",
                n.edges_per_node, n.nodes
            )));
        }
        if !(n.layout.k > 0.0) {
            return Err(ReelError::validation("layout k must be > 0"));
        }
        if !(n.display.width() > 0.0 && n.display.height() > 0.0) {
            return Err(ReelError::validation("network display bounds must be non-empty"));
        }

        let h = &self.heights;
        if h.sample.count == 0 || !(h.sample.sd >= 0.0) {
            return Err(ReelError::validation(
                "height sample needs count > 0 and sd >= 0",
            ));
        }
        if !(h.bin_width > 0.0) || h.curve_samples < 2 {
            return Err(ReelError::validation(
                "height curve needs bin_width > 0 and at least two curve samples",
            ));
        }

        let k = &self.koch;
        if !(k.side > 0.0 && k.line_width > 0.0) {
            return Err(ReelError::validation("koch side and line width must be > 0"));
        }
        if k.max_depth > crate::geometry::koch::MAX_DEPTH {
            return Err(ReelError::validation(format!(
                "koch max_depth {} exceeds {}",
                k.max_depth,
                crate::geometry::koch::MAX_DEPTH
            )));
        }

        let t = &self.trials;
        if t.samples < 2 || !(t.noise_sd >= 0.0) {
            return Err(ReelError::validation(
                "trials need at least two samples and noise_sd >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
