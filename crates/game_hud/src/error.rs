use std::path::PathBuf;

use thiserror::Error;

pub type HudResult<T> = Result<T, HudError>;

#[derive(Debug, Error)]
pub enum HudError {
    #[error("failed to read hud config at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse hud config")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid biome entry `{id}`: {reason}")]
    InvalidBiome { id: String, reason: String },
}
