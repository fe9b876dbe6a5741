use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use game_hud::{BiomeId, BiomeTable, HudConfig, HudPlugin, HudProps, PauseToggled};
use tracing::info;

/// Small host that drives the HUD: the score climbs while running, the biome
/// rotates through every known entry plus one the table has never heard of.
#[derive(Debug, Parser)]
#[command(name = "hud_desktop")]
struct Args {
    /// JSON hud config. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Points gained per second while not paused.
    #[arg(long, default_value_t = 37.5)]
    score_rate: f64,
    /// Seconds between biome changes.
    #[arg(long, default_value_t = 5.0)]
    biome_interval: f32,
    /// Start paused.
    #[arg(long)]
    paused: bool,
}

#[derive(Resource)]
struct DemoHost {
    score_rate: f64,
    biome_timer: Timer,
    next_biome: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => HudConfig::from_path(path)
            .with_context(|| format!("failed to load hud config from {}", path.display()))?,
        None => HudConfig::default(),
    };

    info!(target: "hud_desktop", ?args, "launching hud demo");

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.08)))
        .insert_resource(HudProps::new(0.0, BiomeId::NORMAL, args.paused))
        .insert_resource(DemoHost {
            score_rate: args.score_rate,
            biome_timer: Timer::new(
                Duration::from_secs_f32(args.biome_interval.max(0.1)),
                TimerMode::Repeating,
            ),
            next_biome: 1,
        })
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_plugins(HudPlugin::new(config))
        .add_systems(Startup, setup_camera)
        .add_systems(Update, (apply_pause_toggles, advance_score, rotate_biome).chain())
        .run();

    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn apply_pause_toggles(mut toggles: EventReader<PauseToggled>, mut props: ResMut<HudProps>) {
    for toggle in toggles.read() {
        props.is_paused = !props.is_paused;
        info!(target: "hud_desktop", source = ?toggle.source, paused = props.is_paused, "pause toggled");
    }
}

fn advance_score(time: Res<Time>, host: Res<DemoHost>, mut props: ResMut<HudProps>) {
    if props.is_paused {
        return;
    }
    props.score += host.score_rate * time.delta_seconds_f64();
}

fn rotate_biome(
    time: Res<Time>,
    table: Res<BiomeTable>,
    mut host: ResMut<DemoHost>,
    mut props: ResMut<HudProps>,
) {
    if props.is_paused {
        return;
    }

    host.biome_timer.tick(time.delta());
    if !host.biome_timer.just_finished() {
        return;
    }

    // One slot past the known ids shows the fallback badge.
    let mut cycle: Vec<BiomeId> = table.ids().cloned().collect();
    cycle.push(BiomeId::from("UNCHARTED"));

    let index = host.next_biome % cycle.len();
    host.next_biome = index + 1;
    props.biome = cycle.swap_remove(index);
    info!(target: "hud_desktop", biome = %props.biome, "biome changed");
}
