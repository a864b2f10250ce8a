use serde::Serialize;

use crate::{
    generations::dtos::generate_video_dto::{SEED_MAX, SEED_MIN},
    seedance::enums::{
        seedance_duration::SeedanceDuration, seedance_model::SeedanceModel,
        seedance_resolution::SeedanceResolution,
    },
};

/// Inputs the host renders for the node.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOptions {
    pub models: Vec<&'static str>,
    pub resolutions: Vec<&'static str>,
    pub durations: Vec<&'static str>,
    pub seed: SeedRange,
    pub defaults: GenerationDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationDefaults {
    pub model: &'static str,
    pub prompt: &'static str,
    pub resolution: &'static str,
    pub duration: &'static str,
    pub camera_fixed: bool,
    pub seed: i64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self {
            models: SeedanceModel::ALL.to_vec(),
            resolutions: SeedanceResolution::ALL.to_vec(),
            durations: SeedanceDuration::ALL.to_vec(),
            seed: SeedRange {
                min: SEED_MIN,
                max: SEED_MAX,
            },
            defaults: GenerationDefaults {
                model: SeedanceModel::DEFAULT,
                prompt: "",
                resolution: SeedanceResolution::DEFAULT,
                duration: SeedanceDuration::DEFAULT,
                camera_fixed: false,
                seed: SEED_MIN,
            },
        }
    }
}
