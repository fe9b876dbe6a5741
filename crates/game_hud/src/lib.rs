//! Heads-up display overlay for a game: score counter, biome badge and a
//! pause/play control.
//!
//! The host owns every piece of game state. It keeps [`HudProps`] up to date
//! and listens for [`PauseToggled`]; the HUD only draws what the props say and
//! reports activations of its control.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use game_hud::{HudPlugin, HudProps, PauseToggled};
//!
//! fn flip_pause(mut toggles: EventReader<PauseToggled>, mut props: ResMut<HudProps>) {
//!     for _ in toggles.read() {
//!         props.is_paused = !props.is_paused;
//!     }
//! }
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(HudPlugin::default())
//!     .add_systems(Update, flip_pause)
//!     .run();
//! ```

use bevy::prelude::*;
use tracing::warn;

mod activation;
mod biome;
mod config;
mod error;
mod props;
mod ui;
mod view;

pub use activation::{ActivationGate, ActivationSource, PointerPhase, PointerSignal};
pub use biome::{BiomeId, BiomePresentation, BiomeTable};
pub use config::{BiomeEntry, HudConfig};
pub use error::{HudError, HudResult};
pub use props::{HudProps, PauseToggled};
pub use ui::{HudRoot, HudSlot, PauseButton};
pub use view::{format_score, HudView, PauseAffordance};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HudSet {
    /// Raw mouse and touch input becomes [`PointerSignal`]s.
    Input,
    /// Signals go through the gate; activations become [`PauseToggled`].
    Activate,
    /// Props are rendered into the overlay.
    Sync,
}

#[derive(Default)]
pub struct HudPlugin {
    pub config: HudConfig,
}

impl HudPlugin {
    pub fn new(config: HudConfig) -> Self {
        Self { config }
    }
}

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        let table = build_table(&self.config);

        app.insert_resource(self.config.clone())
            .insert_resource(table)
            .insert_resource(ActivationGate::new(self.config.synthetic_click_window()))
            .init_resource::<HudProps>()
            .add_event::<PointerSignal>()
            .add_event::<PauseToggled>()
            .configure_sets(
                Update,
                (HudSet::Input, HudSet::Activate, HudSet::Sync).chain(),
            )
            .add_systems(Startup, ui::spawn_hud)
            .add_systems(
                Update,
                (
                    ui::read_pointer_input.in_set(HudSet::Input),
                    ui::drive_pause_control.in_set(HudSet::Activate),
                    ui::sync_hud.in_set(HudSet::Sync),
                    ui::style_pause_button,
                ),
            );
    }
}

/// Invalid entries are dropped with a warning so a bad config line cannot
/// take the overlay down.
fn build_table(config: &HudConfig) -> BiomeTable {
    let valid: Vec<BiomeEntry> = config
        .biomes
        .iter()
        .filter(|entry| match entry.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(%err, "skipping biome entry");
                false
            }
        })
        .cloned()
        .collect();

    BiomeTable::from_entries(&valid).unwrap_or_else(|err| {
        warn!(%err, "falling back to default biome table");
        BiomeTable::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_entries_are_skipped_not_fatal() {
        let config = HudConfig {
            biomes: vec![
                BiomeEntry {
                    id: "ASPHODELE".to_string(),
                    label: "ASPHODELE".to_string(),
                    color: [0.6, 0.6, 0.5],
                },
                BiomeEntry {
                    id: String::new(),
                    label: "NOWHERE".to_string(),
                    color: [0.0, 0.0, 0.0],
                },
            ],
            ..HudConfig::default()
        };

        let table = build_table(&config);

        assert!(table.contains(&BiomeId::from("ASPHODELE")));
        assert_eq!(table.ids().count(), 3);
    }
}
