use std::{fmt, str::FromStr};

use crate::{
    config::ReelConfig,
    data::table::GrowthTable,
    foundation::error::{ReelError, ReelResult},
    scene::model::Scene,
};

pub(crate) mod axes;
pub(crate) mod height_drop;
pub(crate) mod koch;
pub(crate) mod network_growth;
pub(crate) mod trial_averaging;

/// The animations this crate can script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    NetworkGrowth,
    HeightDrop,
    Koch,
    TrialAveraging,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::NetworkGrowth,
        SceneKind::HeightDrop,
        SceneKind::Koch,
        SceneKind::TrialAveraging,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::NetworkGrowth => "network-growth",
            SceneKind::HeightDrop => "height-drop",
            SceneKind::Koch => "koch",
            SceneKind::TrialAveraging => "trial-averaging",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                ReelError::validation(format!(
                    "unknown scene '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Prepared data the drivers read. Only the fields a scene needs must be present.
#[derive(Clone, Debug, Default)]
pub struct SceneInputs {
    pub growth: Option<GrowthTable>,
    pub heights: Option<Vec<i64>>,
}

pub fn build_scene(kind: SceneKind, cfg: &ReelConfig, inputs: &SceneInputs) -> ReelResult<Scene> {
    let scene = match kind {
        SceneKind::NetworkGrowth => {
            let table = inputs
                .growth
                .as_ref()
                .ok_or_else(|| ReelError::data("network-growth needs a growth table"))?;
            network_growth::network_growth_scene(table, &cfg.render, &cfg.network)?
        }
        SceneKind::HeightDrop => {
            let heights = inputs
                .heights
                .as_ref()
                .ok_or_else(|| ReelError::data("height-drop needs measurements"))?;
            height_drop::height_drop_scene(heights, &cfg.render, &cfg.heights)?
        }
        SceneKind::Koch => koch::koch_scene(&cfg.render, &cfg.koch)?,
        SceneKind::TrialAveraging => trial_averaging::trial_averaging_scene(&cfg.render, &cfg.trials)?,
    };
    tracing::info!(
        scene = %kind,
        frames = scene.duration.0,
        objects = scene.objects.len(),
        "scripted scene"
    );
    Ok(scene)
}
