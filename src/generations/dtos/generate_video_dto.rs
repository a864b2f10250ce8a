use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    app::models::api_error::ApiError,
    generations::errors::GenerationsApiError,
    seedance::enums::{
        seedance_duration::SeedanceDuration, seedance_model::SeedanceModel,
        seedance_resolution::SeedanceResolution,
    },
};

pub const SEED_MIN: i64 = -1;
pub const SEED_MAX: i64 = 2147483647;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_seed", skip_on_field_errors = false))]
pub struct GenerateVideoDto {
    #[validate(custom(function = "validate_model"))]
    pub model: String,
    #[validate(length(max = 2000, message = "prompt must be at most 2000 characters."))]
    pub prompt: String,
    #[validate(custom(function = "validate_resolution"))]
    pub resolution: String,
    #[validate(custom(function = "validate_duration"))]
    pub duration: String,
    pub camera_fixed: bool,
    pub seed: i64,
}

impl Default for GenerateVideoDto {
    fn default() -> Self {
        Self {
            model: SeedanceModel::DEFAULT.to_string(),
            prompt: String::new(),
            resolution: SeedanceResolution::DEFAULT.to_string(),
            duration: SeedanceDuration::DEFAULT.to_string(),
            camera_fixed: false,
            seed: SEED_MIN,
        }
    }
}

impl GenerateVideoDto {
    /// Builds the dto from multipart text fields. Missing fields take the node defaults.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut dto = Self::default();

        if let Some(model) = fields.get("model") {
            dto.model = model.trim().to_string();
        }
        if let Some(prompt) = fields.get("prompt") {
            dto.prompt = prompt.to_string();
        }
        if let Some(resolution) = fields.get("resolution") {
            dto.resolution = resolution.trim().to_string();
        }
        if let Some(duration) = fields.get("duration") {
            dto.duration = duration.trim().to_string();
        }
        if let Some(camera_fixed) = fields.get("camera_fixed") {
            dto.camera_fixed = match camera_fixed.trim().to_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => true,
                "false" | "0" | "off" | "no" | "" => false,
                _ => return Err(GenerationsApiError::InvalidField("camera_fixed").value()),
            };
        }
        if let Some(seed) = fields.get("seed") {
            let Ok(seed) = seed.trim().parse::<i64>() else {
                return Err(GenerationsApiError::InvalidField("seed").value());
            };
            dto.seed = seed;
        }

        Ok(dto)
    }

    pub fn sanitized(&self) -> Self {
        Self {
            prompt: self.prompt.trim().to_string(),
            ..self.clone()
        }
    }
}

fn validate_seed(dto: &GenerateVideoDto) -> Result<(), ValidationError> {
    if !(SEED_MIN..=SEED_MAX).contains(&dto.seed) {
        let mut e = ValidationError::new("validate_seed");
        e.message = Some("seed must be between -1 and 2147483647.".into());
        return Err(e);
    }

    Ok(())
}

fn validate_model(value: &str) -> Result<(), ValidationError> {
    if !SeedanceModel::ALL.contains(&value) {
        return Err(ValidationError::new("validate_model"));
    }

    Ok(())
}

fn validate_resolution(value: &str) -> Result<(), ValidationError> {
    if !SeedanceResolution::ALL.contains(&value) {
        return Err(ValidationError::new("validate_resolution"));
    }

    Ok(())
}

fn validate_duration(value: &str) -> Result<(), ValidationError> {
    if !SeedanceDuration::ALL.contains(&value) {
        return Err(ValidationError::new("validate_duration"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_fields_uses_node_defaults() {
        let dto = GenerateVideoDto::from_fields(&HashMap::new()).unwrap();

        assert_eq!(dto.model, "doubao-seedance-1-0-pro-250528");
        assert_eq!(dto.prompt, "");
        assert_eq!(dto.resolution, "1080p");
        assert_eq!(dto.duration, "5s");
        assert!(!dto.camera_fixed);
        assert_eq!(dto.seed, -1);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn from_fields_reads_every_parameter() {
        let dto = GenerateVideoDto::from_fields(&fields(&[
            ("model", "doubao-seedance-1-0-lite-i2v-250428"),
            ("prompt", "a cat\nwalks"),
            ("resolution", "480p"),
            ("duration", "10s"),
            ("camera_fixed", "True"),
            ("seed", " 1234 "),
        ]))
        .unwrap();

        assert_eq!(dto.model, "doubao-seedance-1-0-lite-i2v-250428");
        assert_eq!(dto.prompt, "a cat\nwalks");
        assert_eq!(dto.resolution, "480p");
        assert_eq!(dto.duration, "10s");
        assert!(dto.camera_fixed);
        assert_eq!(dto.seed, 1234);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn from_fields_rejects_unparseable_values() {
        let e = GenerateVideoDto::from_fields(&fields(&[("seed", "lucky")])).unwrap_err();
        assert_eq!(e.code, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "seed is invalid.");

        let e = GenerateVideoDto::from_fields(&fields(&[("camera_fixed", "maybe")])).unwrap_err();
        assert_eq!(e.message, "camera_fixed is invalid.");
    }

    #[test]
    fn validate_rejects_values_outside_the_node_choices() {
        let bad_model = GenerateVideoDto {
            model: "sora".to_string(),
            ..GenerateVideoDto::default()
        };
        let bad_resolution = GenerateVideoDto {
            resolution: "4k".to_string(),
            ..GenerateVideoDto::default()
        };
        let bad_duration = GenerateVideoDto {
            duration: "7s".to_string(),
            ..GenerateVideoDto::default()
        };
        let bad_seed = GenerateVideoDto {
            seed: -2,
            ..GenerateVideoDto::default()
        };
        let too_big_seed = GenerateVideoDto {
            seed: SEED_MAX + 1,
            ..GenerateVideoDto::default()
        };

        assert!(bad_model.validate().is_err());
        assert!(bad_resolution.validate().is_err());
        assert!(bad_duration.validate().is_err());
        assert!(bad_seed.validate().is_err());
        assert!(too_big_seed.validate().is_err());
    }

    #[test]
    fn sanitized_trims_the_prompt_only() {
        let dto = GenerateVideoDto {
            prompt: "  waves at dusk \n".to_string(),
            seed: 7,
            ..GenerateVideoDto::default()
        };

        let sanitized = dto.sanitized();

        assert_eq!(sanitized.prompt, "waves at dusk");
        assert_eq!(sanitized.seed, 7);
    }
}
