//! Target systems (клики + попадания в полёте)

use bevy::prelude::*;

use super::{RemovalCause, ScoreChanged, TargetClicked, TargetController, TargetId, TargetRemoved};
use crate::config::{GalleryConfig, HitTestMode};
use crate::projectile::{DespawnCause, ProjectileDespawned, ProjectileManager};

/// System: TargetClicked → удаление мишени + score
///
/// Клик по уже уничтоженной/неизвестной мишени ничего не меняет.
pub fn process_target_clicks(
    mut clicks: EventReader<TargetClicked>,
    mut targets: ResMut<TargetController>,
    mut removed: EventWriter<TargetRemoved>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    for click in clicks.read() {
        if !targets.click_remove(click.target) {
            crate::logger::log(&format!(
                "Click on unknown target {:?} ignored",
                click.target
            ));
            continue;
        }

        crate::logger::log_info(&format!(
            "Target {:?} removed by click (score: {})",
            click.target,
            targets.score()
        ));

        removed.write(TargetRemoved {
            id: click.target,
            cause: RemovalCause::Click,
        });
        score_changed.write(ScoreChanged {
            score: targets.score(),
        });
    }
}

/// System: hit test по живой позиции снарядов (только Continuous)
///
/// Запускается после advance_projectiles. Проверяется весь отрезок
/// последнего шага, а не только конечная точка. Снаряд, попавший хотя бы
/// в одну мишень, уничтожается (Impact).
pub fn detect_in_flight_hits(
    config: Res<GalleryConfig>,
    mut projectiles: ResMut<ProjectileManager>,
    mut targets: ResMut<TargetController>,
    mut despawned: EventWriter<ProjectileDespawned>,
    mut removed: EventWriter<TargetRemoved>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    if config.hit_test_mode != HitTestMode::Continuous {
        return;
    }
    if projectiles.is_empty() || targets.remaining() == 0 {
        return;
    }

    let in_flight: Vec<_> = projectiles
        .iter()
        .map(|p| (p.id, p.previous_position, p.position))
        .collect();

    for (id, from, to) in in_flight {
        let hits = targets.test_hit_segment(from, to, config.hit_radius);
        if hits.is_empty() {
            continue;
        }

        report_hits(&hits, targets.score(), &mut removed, &mut score_changed);

        projectiles.remove(id);
        despawned.write(ProjectileDespawned {
            id,
            cause: DespawnCause::Impact,
        });

        if targets.remaining() == 0 {
            break;
        }
    }
}

/// Разослать TargetRemoved(Hit) по каждой мишени + один ScoreChanged
pub fn report_hits(
    hits: &[TargetId],
    score: u32,
    removed: &mut EventWriter<TargetRemoved>,
    score_changed: &mut EventWriter<ScoreChanged>,
) {
    for &id in hits {
        crate::logger::log_info(&format!("🎯 Target {:?} hit (score: {})", id, score));
        removed.write(TargetRemoved {
            id,
            cause: RemovalCause::Hit,
        });
    }
    score_changed.write(ScoreChanged { score });
}
