use bevy::prelude::*;

use crate::activation::ActivationSource;
use crate::biome::BiomeId;

/// Values the host hands the HUD. The host owns and rewrites this resource; HUD
/// systems only read it.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct HudProps {
    /// Non-negative, may be fractional. Displayed truncated.
    pub score: f64,
    pub biome: BiomeId,
    pub is_paused: bool,
}

impl HudProps {
    pub fn new(score: f64, biome: impl Into<BiomeId>, is_paused: bool) -> Self {
        Self {
            score,
            biome: biome.into(),
            is_paused,
        }
    }
}

/// Sent once per activation of the pause control. Whether the game is paused
/// stays the host's business: it reads this event and flips its own flag.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseToggled {
    pub source: ActivationSource,
}
