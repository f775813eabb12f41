use bevy::prelude::*;
use gallery_simulation::scene::{PROJECTILE_COLOR, PROJECTILE_RADIUS, TARGET_COLOR, TARGET_SIZE};
use gallery_simulation::{
    ProjectileDespawned, ProjectileId, ProjectileManager, ProjectileSpawned, SceneLoaded, TargetId,
    TargetRemoved, TargetSpawned,
};
use std::collections::HashMap;

use crate::ClientVisuals;

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualRegistry>()
            .add_systems(Startup, load_visual_assets)
            .add_systems(
                Update,
                (
                    sync_target_visuals,
                    sync_projectile_visuals,
                    sync_projectile_transforms,
                )
                    .chain()
                    .in_set(ClientVisuals),
            );
    }
}

/// Link: visual entity → target id
#[derive(Component)]
pub struct TargetVisual(pub TargetId);

/// Link: visual entity → projectile id
#[derive(Component)]
pub struct ProjectileVisual(pub ProjectileId);

/// Registry: simulation id → visual entity
#[derive(Resource, Default)]
pub struct VisualRegistry {
    pub projectiles: HashMap<ProjectileId, Entity>,
    pub targets: HashMap<TargetId, Entity>,
}

/// Общие меши/материалы (одна копия на все снаряды и мишени)
#[derive(Resource)]
struct VisualAssets {
    projectile_mesh: Handle<Mesh>,
    projectile_material: Handle<StandardMaterial>,
    target_mesh: Handle<Mesh>,
    target_material: Handle<StandardMaterial>,
}

pub fn srgb([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}

fn load_visual_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(VisualAssets {
        projectile_mesh: meshes.add(Sphere::new(PROJECTILE_RADIUS).mesh().uv(32, 32)),
        // Снаряд светится сам (без освещения)
        projectile_material: materials.add(StandardMaterial {
            base_color: srgb(PROJECTILE_COLOR),
            unlit: true,
            ..default()
        }),
        target_mesh: meshes.add(Cuboid::from_length(TARGET_SIZE)),
        target_material: materials.add(StandardMaterial {
            base_color: srgb(TARGET_COLOR),
            ..default()
        }),
    });
}

/// SceneLoaded → старые кубы убираются, TargetSpawned → новые, TargetRemoved → despawn
///
/// SceneLoaded и TargetSpawned приходят в одном кадре: сначала чистка.
fn sync_target_visuals(
    mut commands: Commands,
    assets: Res<VisualAssets>,
    mut registry: ResMut<VisualRegistry>,
    mut scene_loaded: EventReader<SceneLoaded>,
    mut spawned: EventReader<TargetSpawned>,
    mut removed: EventReader<TargetRemoved>,
) {
    if scene_loaded.read().count() > 0 {
        for (_, visual) in registry.targets.drain() {
            commands.entity(visual).despawn();
        }
    }

    for event in spawned.read() {
        let visual = commands
            .spawn((
                Mesh3d(assets.target_mesh.clone()),
                MeshMaterial3d(assets.target_material.clone()),
                Transform::from_translation(event.position),
                TargetVisual(event.id),
            ))
            .id();
        registry.targets.insert(event.id, visual);
    }

    for event in removed.read() {
        if let Some(visual) = registry.targets.remove(&event.id) {
            commands.entity(visual).despawn();
        }
    }
}

/// ProjectileSpawned → сфера, ProjectileDespawned → despawn
///
/// Спавн и удаление могут прийти в одном кадре (попадание при спавне).
fn sync_projectile_visuals(
    mut commands: Commands,
    assets: Res<VisualAssets>,
    mut registry: ResMut<VisualRegistry>,
    mut spawned: EventReader<ProjectileSpawned>,
    mut despawned: EventReader<ProjectileDespawned>,
) {
    for event in spawned.read() {
        let visual = commands
            .spawn((
                Mesh3d(assets.projectile_mesh.clone()),
                MeshMaterial3d(assets.projectile_material.clone()),
                Transform::from_translation(event.position),
                ProjectileVisual(event.id),
            ))
            .id();
        registry.projectiles.insert(event.id, visual);
    }

    for event in despawned.read() {
        if let Some(visual) = registry.projectiles.remove(&event.id) {
            commands.entity(visual).despawn();
        }
    }
}

/// Sync simulation positions → visual transforms
fn sync_projectile_transforms(
    manager: Res<ProjectileManager>,
    registry: Res<VisualRegistry>,
    mut visuals: Query<&mut Transform, With<ProjectileVisual>>,
) {
    if !manager.is_changed() {
        return;
    }

    for projectile in manager.iter() {
        let Some(&visual) = registry.projectiles.get(&projectile.id) else {
            continue;
        };
        if let Ok(mut transform) = visuals.get_mut(visual) {
            transform.translation = projectile.position;
        }
    }
}
