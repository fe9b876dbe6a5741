use bevy::prelude::*;
use bevy::time::Real;
use bevy::window::PrimaryWindow;
use tracing::{debug, info, warn};

use crate::activation::{ActivationGate, PointerPhase, PointerSignal};
use crate::biome::BiomeTable;
use crate::config::HudConfig;
use crate::props::{HudProps, PauseToggled};
use crate::view::HudView;

const BUTTON_IDLE: Color = Color::srgb(0.18, 0.18, 0.22);
const BUTTON_HOVERED: Color = Color::srgb(0.24, 0.24, 0.28);
const BUTTON_PRESSED: Color = Color::srgb(0.30, 0.30, 0.35);

#[derive(Component)]
pub struct HudRoot;

/// Which part of the view a text entity shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudSlot {
    Score,
    Biome,
    PauseGlyph,
}

#[derive(Component)]
pub struct PauseButton;

pub(crate) fn spawn_hud(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<HudConfig>,
    props: Res<HudProps>,
    table: Res<BiomeTable>,
) {
    let font: Handle<Font> = config
        .font
        .as_ref()
        .map(|path| asset_server.load(path.clone()))
        .unwrap_or_default();
    let view = HudView::render(&props, &table);

    let text_style = |color: Color| TextStyle {
        font: font.clone(),
        font_size: config.font_size,
        color,
    };

    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    top: Val::Px(config.margin_px),
                    left: Val::Px(config.margin_px),
                    right: Val::Px(config.margin_px),
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(config.gap_px),
                    ..default()
                },
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                TextBundle::from_section(view.score_text.clone(), text_style(Color::WHITE)),
                HudSlot::Score,
            ));

            parent.spawn((
                TextBundle::from_section(view.biome_label.clone(), text_style(view.biome_color)),
                HudSlot::Biome,
            ));

            parent
                .spawn((
                    ButtonBundle {
                        style: Style {
                            margin: UiRect::left(Val::Auto),
                            padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                            ..default()
                        },
                        background_color: BUTTON_IDLE.into(),
                        border_radius: BorderRadius::all(Val::Px(4.0)),
                        ..default()
                    },
                    PauseButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        TextBundle::from_section(view.pause.glyph(), text_style(Color::WHITE)),
                        HudSlot::PauseGlyph,
                    ));
                });
        });

    info!(
        score = %view.score_text,
        biome = %view.biome_label,
        pause = ?view.pause,
        "spawned hud"
    );
}

/// Rewrites the overlay text whenever the host touched its props.
pub(crate) fn sync_hud(
    props: Res<HudProps>,
    table: Res<BiomeTable>,
    mut slots: Query<(&HudSlot, &mut Text)>,
) {
    if !props.is_changed() && !table.is_changed() {
        return;
    }

    let view = HudView::render(&props, &table);
    for (slot, mut text) in &mut slots {
        let Some(section) = text.sections.first_mut() else {
            continue;
        };
        match slot {
            HudSlot::Score => section.value.clone_from(&view.score_text),
            HudSlot::Biome => {
                section.value.clone_from(&view.biome_label);
                section.style.color = view.biome_color;
            }
            HudSlot::PauseGlyph => section.value = view.pause.glyph().to_string(),
        }
    }

    debug!(
        score = %view.score_text,
        biome = %props.biome,
        paused = props.is_paused,
        "hud synced"
    );
}

/// Translates mouse and touch input into hit-tested [`PointerSignal`]s.
pub(crate) fn read_pointer_input(
    time: Res<Time<Real>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Query<(&Node, &GlobalTransform), With<PauseButton>>,
    mut signals: EventWriter<PointerSignal>,
) {
    let at = time.elapsed();
    let over_control = |point: Option<Vec2>| {
        point.is_some_and(|point| {
            buttons
                .iter()
                .any(|(node, transform)| node.logical_rect(transform).contains(point))
        })
    };
    let cursor = windows
        .get_single()
        .ok()
        .and_then(Window::cursor_position);

    if mouse.just_pressed(MouseButton::Left) {
        signals.send(PointerSignal::new(PointerPhase::Down, over_control(cursor), at));
    }
    if mouse.just_released(MouseButton::Left) {
        signals.send(PointerSignal::new(PointerPhase::Up, over_control(cursor), at));
    }

    // Starts before ends: a tap can begin and finish within one frame.
    for touch in touches.iter_just_pressed() {
        signals.send(PointerSignal::new(
            PointerPhase::TouchStart { id: touch.id() },
            over_control(Some(touch.position())),
            at,
        ));
    }
    for touch in touches.iter_just_released() {
        signals.send(PointerSignal::new(
            PointerPhase::TouchEnd { id: touch.id() },
            over_control(Some(touch.position())),
            at,
        ));
    }
    for touch in touches.iter_just_canceled() {
        signals.send(PointerSignal::new(
            PointerPhase::TouchCancel { id: touch.id() },
            false,
            at,
        ));
    }
}

pub(crate) fn drive_pause_control(
    mut gate: ResMut<ActivationGate>,
    touches: Res<Touches>,
    mut signals: EventReader<PointerSignal>,
    mut toggles: EventWriter<PauseToggled>,
) {
    for signal in signals.read() {
        let Some(source) = gate.feed(*signal) else {
            continue;
        };

        info!(
            ?source,
            suppressed_total = gate.suppressed(),
            "pause control activated"
        );
        toggles.send(PauseToggled { source });
    }

    // Ends and cancels can go missing, e.g. when the window loses focus mid-tap.
    let released = gate.release_stale_touches(|id| touches.get_pressed(id).is_some());
    if released > 0 {
        warn!(released, "dropped touches that were never lifted");
    }
}

/// Hover and press tint. Purely cosmetic: toggling goes through the gate.
pub(crate) fn style_pause_button(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<PauseButton>)>,
) {
    for (interaction, mut color) in &mut buttons {
        *color = match *interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => BUTTON_IDLE,
        }
        .into();
    }
}
