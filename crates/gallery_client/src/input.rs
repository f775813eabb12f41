//! Player input → события симуляции
//!
//! Flow:
//! 1. ЛКМ без захвата → pointer lock (выстрела нет)
//! 2. ЛКМ с захватом → FireIntent из камеры + луч из центра экрана
//! 3. Луч первым попал в куб мишени → TargetClicked
//! 4. Tab → LoadScene (Mars ↔ Sky)

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use gallery_simulation::{ActiveScene, FireIntent, LoadScene, PlayerView, TargetClicked};

use crate::camera::{publish_player_view, set_pointer_lock, FirstPersonCamera, PointerLock};
use crate::rendering::{ProjectileVisual, TargetVisual};
use crate::ClientInput;

pub struct GalleryInputPlugin;

impl Plugin for GalleryInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (shoot_on_click.after(publish_player_view), toggle_scene).in_set(ClientInput),
        );
    }
}

fn shoot_on_click(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut lock: ResMut<PointerLock>,
    view: Res<PlayerView>,
    cameras: Query<&GlobalTransform, With<FirstPersonCamera>>,
    target_visuals: Query<&TargetVisual>,
    projectile_visuals: Query<(), With<ProjectileVisual>>,
    mut ray_cast: MeshRayCast,
    mut fire_events: EventWriter<FireIntent>,
    mut click_events: EventWriter<TargetClicked>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }

    if !lock.locked {
        let Ok(mut window) = windows.single_mut() else {
            return;
        };
        set_pointer_lock(&mut window, &mut lock, true);
        return;
    }

    fire_events.write(FireIntent::from_view(&view));

    let Ok(camera) = cameras.single() else {
        return;
    };

    // Снаряды не перекрывают луч клика
    let filter = |entity: Entity| !projectile_visuals.contains(entity);
    let settings = MeshRayCastSettings::default().with_filter(&filter);
    let ray = Ray3d::new(camera.translation(), camera.forward());

    let Some((entity, _)) = ray_cast.cast_ray(ray, &settings).first() else {
        return;
    };
    if let Ok(target) = target_visuals.get(*entity) {
        click_events.write(TargetClicked { target: target.0 });
    }
}

fn toggle_scene(
    keys: Res<ButtonInput<KeyCode>>,
    scene: Option<Res<ActiveScene>>,
    mut requests: EventWriter<LoadScene>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }
    let Some(scene) = scene else {
        return;
    };

    requests.write(LoadScene {
        variant: scene.variant.toggled(),
    });
}
