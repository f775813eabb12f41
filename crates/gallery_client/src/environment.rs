//! Окружение сцены: камера, небо, туман, свет, земля, камни
//!
//! Строится из SceneLayout (приходит в SceneLoaded). При смене
//! варианта всё, что помечено SceneScenery, удаляется и строится заново.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use gallery_simulation::scene::{CameraSpec, RockSpec};
use gallery_simulation::SceneLoaded;

use crate::camera::FirstPersonCamera;
use crate::rendering::srgb;
use crate::rock_mesh::dodecahedron;
use crate::ClientVisuals;

/// Масштаб интенсивностей раскладки в единицы Bevy
const AMBIENT_BRIGHTNESS_SCALE: f32 = 400.0;
const DIRECTIONAL_LUX_SCALE: f32 = 10_000.0;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, apply_scene_environment.in_set(ClientVisuals));
    }
}

/// Marker: entity принадлежит декорациям текущей сцены
#[derive(Component)]
pub struct SceneScenery;

fn perspective(spec: &CameraSpec) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: spec.fov_degrees.to_radians(),
        near: spec.near,
        far: spec.far,
        ..default()
    })
}

fn spawn_camera(mut commands: Commands) {
    let spec = CameraSpec::default();
    commands.spawn((
        Camera3d::default(),
        perspective(&spec),
        Transform::from_translation(spec.position),
        FirstPersonCamera::default(),
    ));
}

fn apply_scene_environment(
    mut commands: Commands,
    mut scene_loaded: EventReader<SceneLoaded>,
    scenery: Query<Entity, With<SceneScenery>>,
    mut cameras: Query<(Entity, &mut Projection), With<FirstPersonCamera>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(loaded) = scene_loaded.read().last() else {
        return;
    };
    let layout = &loaded.layout;

    for entity in scenery.iter() {
        commands.entity(entity).despawn();
    }

    // Небо + туман
    commands.insert_resource(ClearColor(srgb(layout.sky.background)));
    if let Ok((camera, mut projection)) = cameras.single_mut() {
        *projection = perspective(&layout.camera);
        match layout.sky.fog {
            Some(fog) => {
                commands.entity(camera).insert(DistanceFog {
                    color: srgb(fog.color),
                    falloff: FogFalloff::Linear {
                        start: fog.start,
                        end: fog.end,
                    },
                    ..default()
                });
            }
            None => {
                commands.entity(camera).remove::<DistanceFog>();
            }
        }
    }

    // Свет
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: layout.lighting.ambient_intensity * AMBIENT_BRIGHTNESS_SCALE,
        affects_lightmapped_meshes: false,
    });
    commands.spawn((
        DirectionalLight {
            illuminance: layout.lighting.directional_intensity * DIRECTIONAL_LUX_SCALE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(layout.lighting.directional_from).looking_at(Vec3::ZERO, Vec3::Y),
        SceneScenery,
    ));

    // Земля
    let ground = &layout.ground;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(ground.size * 0.5)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(ground.color),
            base_color_texture: ground.texture.map(|path| asset_server.load(path)),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, ground.height, 0.0),
        SceneScenery,
    ));

    // Камни (только Mars)
    if layout.rocks.is_empty() {
        return;
    }
    let rock_material = materials.add(StandardMaterial {
        base_color: srgb(RockSpec::COLOR),
        perceptual_roughness: RockSpec::ROUGHNESS,
        ..default()
    });
    for rock in &layout.rocks {
        commands.spawn((
            Mesh3d(meshes.add(dodecahedron(rock.radius))),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(rock.position),
            SceneScenery,
        ));
    }
}
