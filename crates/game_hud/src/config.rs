use std::fs;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HudError, HudResult};

/// Extra or overriding biome presentation supplied through config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiomeEntry {
    pub id: String,
    pub label: String,
    /// sRGB components in `[0, 1]`.
    pub color: [f32; 3],
}

impl BiomeEntry {
    pub fn validate(&self) -> HudResult<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id must not be empty"));
        }
        if self.label.trim().is_empty() {
            return Err(self.invalid("label must not be empty"));
        }
        if let Some(component) = self
            .color
            .iter()
            .find(|c| !(0.0..=1.0).contains(*c))
        {
            return Err(self.invalid(format!("color component {component} outside [0, 1]")));
        }
        Ok(())
    }

    fn invalid(&self, reason: impl Into<String>) -> HudError {
        HudError::InvalidBiome {
            id: self.id.clone(),
            reason: reason.into(),
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Font asset path. `None` renders with Bevy's built-in font.
    pub font: Option<String>,
    pub font_size: f32,
    pub margin_px: f32,
    pub gap_px: f32,
    pub synthetic_click_window_ms: u64,
    pub biomes: Vec<BiomeEntry>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_size: 24.0,
            margin_px: 12.0,
            gap_px: 16.0,
            synthetic_click_window_ms: 500,
            biomes: Vec::new(),
        }
    }
}

impl HudConfig {
    pub fn from_json_str(raw: &str) -> HudResult<Self> {
        let config: HudConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| HudError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            biomes = config.biomes.len(),
            "loaded hud config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> HudResult<()> {
        self.biomes.iter().try_for_each(BiomeEntry::validate)
    }

    pub fn synthetic_click_window(&self) -> Duration {
        Duration::from_millis(self.synthetic_click_window_ms)
    }
}
