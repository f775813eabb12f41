//! Scene systems — загрузка/перезагрузка сцены

use bevy::prelude::*;

use super::{ActiveScene, LoadScene, SceneLayout, SceneLoaded};
use crate::projectile::{DespawnCause, ProjectileDespawned, ProjectileManager};
use crate::target::{ScoreChanged, TargetController, TargetSpawned};
use crate::{DeterministicRng, GalleryConfig};

/// Startup: запросить сцену из конфига
pub fn request_initial_scene(config: Res<GalleryConfig>, mut requests: EventWriter<LoadScene>) {
    requests.write(LoadScene {
        variant: config.scene,
    });
}

/// System: обработка LoadScene
///
/// Несколько запросов за кадр → применяется последний.
/// 1. Снаряды в полёте удаляются (SceneReset)
/// 2. Раскладка строится заново (камни Mars из DeterministicRng)
/// 3. Мишени и счёт сбрасываются
pub fn apply_scene_requests(
    mut commands: Commands,
    mut requests: EventReader<LoadScene>,
    mut rng: ResMut<DeterministicRng>,
    mut projectiles: ResMut<ProjectileManager>,
    mut targets: ResMut<TargetController>,
    mut despawned: EventWriter<ProjectileDespawned>,
    mut target_spawned: EventWriter<TargetSpawned>,
    mut score_changed: EventWriter<ScoreChanged>,
    mut loaded: EventWriter<SceneLoaded>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    for projectile in projectiles.clear() {
        despawned.write(ProjectileDespawned {
            id: projectile.id,
            cause: DespawnCause::SceneReset,
        });
    }

    let layout = SceneLayout::build(request.variant, &mut rng.rng);

    targets.initialize(layout.targets.iter().copied());
    for target in targets.targets() {
        target_spawned.write(TargetSpawned {
            id: target.id,
            position: target.position,
        });
    }
    score_changed.write(ScoreChanged { score: 0 });

    crate::logger::log_info(&format!(
        "Scene {} loaded: {} targets, {} rocks",
        request.variant.title(),
        layout.targets.len(),
        layout.rocks.len()
    ));

    loaded.write(SceneLoaded {
        variant: request.variant,
        layout: layout.clone(),
    });
    commands.insert_resource(ActiveScene {
        variant: request.variant,
        layout,
    });
}
