use bevy::prelude::*;
use gallery_simulation::ScoreChanged;

use crate::ClientVisuals;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_overlay)
            .add_systems(Update, update_score_text.in_set(ClientVisuals));
    }
}

/// Marker: текст счёта в левом верхнем углу
#[derive(Component)]
pub struct ScoreText;

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

fn spawn_score_overlay(mut commands: Commands) {
    commands.spawn((
        Text::new(score_label(0)),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Score — read-only проекция TargetController на экран
fn update_score_text(
    mut score_changed: EventReader<ScoreChanged>,
    mut texts: Query<&mut Text, With<ScoreText>>,
) {
    let Some(latest) = score_changed.read().last() else {
        return;
    };

    for mut text in texts.iter_mut() {
        text.0 = score_label(latest.score);
    }
}
