//! Projectile systems (spawn + per-tick advance/cull)

use bevy::prelude::*;

use super::{DespawnCause, FireIntent, ProjectileDespawned, ProjectileManager, ProjectileSpawned};
use crate::config::{GalleryConfig, HitTestMode};
use crate::player::PlayerView;
use crate::target::{report_hits, ScoreChanged, TargetController, TargetRemoved};

/// System: FireIntent → новый снаряд + hit test по позиции спавна
///
/// SpawnOnly: снаряд летит дальше даже после попадания.
/// Continuous: попавший снаряд сразу уничтожается (Impact).
pub fn process_fire_intents(
    mut intents: EventReader<FireIntent>,
    config: Res<GalleryConfig>,
    mut projectiles: ResMut<ProjectileManager>,
    mut targets: ResMut<TargetController>,
    mut spawned: EventWriter<ProjectileSpawned>,
    mut despawned: EventWriter<ProjectileDespawned>,
    mut removed: EventWriter<TargetRemoved>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    for intent in intents.read() {
        let id = projectiles.spawn(intent.origin, intent.direction);
        spawned.write(ProjectileSpawned {
            id,
            position: intent.origin,
        });

        crate::logger::log(&format!(
            "Projectile {:?} fired from {:?} dir {:?}",
            id, intent.origin, intent.direction
        ));

        let hits = targets.test_hit(intent.origin, config.hit_radius);
        if hits.is_empty() {
            continue;
        }

        report_hits(&hits, targets.score(), &mut removed, &mut score_changed);

        if config.hit_test_mode == HitTestMode::Continuous && projectiles.remove(id).is_some() {
            despawned.write(ProjectileDespawned {
                id,
                cause: DespawnCause::Impact,
            });
        }
    }
}

/// System: один тик полёта
///
/// Reference point для cull — текущая позиция камеры (PlayerView),
/// а не origin снаряда: игрок может идти следом за пулей.
pub fn advance_projectiles(
    config: Res<GalleryConfig>,
    view: Res<PlayerView>,
    mut projectiles: ResMut<ProjectileManager>,
    mut despawned: EventWriter<ProjectileDespawned>,
) {
    if projectiles.is_empty() {
        return;
    }

    let culled = projectiles.tick(
        view.position,
        config.projectile_step,
        config.max_projectile_distance,
    );

    for projectile in culled {
        crate::logger::log(&format!(
            "Projectile {:?} culled at {:?} after {} ticks",
            projectile.id, projectile.position, projectile.ticks_alive
        ));

        despawned.write(ProjectileDespawned {
            id: projectile.id,
            cause: DespawnCause::OutOfRange,
        });
    }
}
