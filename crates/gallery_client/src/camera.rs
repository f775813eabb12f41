use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use gallery_simulation::PlayerView;

use crate::ClientInput;

pub struct FirstPersonCameraPlugin;

impl Plugin for FirstPersonCameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerLock>().add_systems(
            Update,
            (
                release_pointer_lock,
                mouse_look,
                update_camera_transform,
                publish_player_view,
            )
                .chain()
                .in_set(ClientInput),
        );
    }
}

/// Pointer lock state (курсор захвачен окном)
#[derive(Resource, Debug, Default)]
pub struct PointerLock {
    pub locked: bool,
}

#[derive(Component)]
pub struct FirstPersonCamera {
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
        }
    }
}

/// Захватить/отпустить курсор
pub fn set_pointer_lock(window: &mut Window, lock: &mut PointerLock, locked: bool) {
    window.cursor_options.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    window.cursor_options.visible = !locked;
    lock.locked = locked;
}

/// Escape отпускает курсор (захват — по клику, см. input.rs)
fn release_pointer_lock(
    keys: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut lock: ResMut<PointerLock>,
) {
    if !lock.locked || !keys.just_pressed(KeyCode::Escape) {
        return;
    }

    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    set_pointer_lock(&mut window, &mut lock, false);
}

/// Handle mouse motion → yaw/pitch (только при захваченном курсоре)
fn mouse_look(
    lock: Res<PointerLock>,
    mut query: Query<&mut FirstPersonCamera>,
    mut mouse_motion: EventReader<MouseMotion>,
) {
    let Ok(mut camera) = query.single_mut() else {
        mouse_motion.clear();
        return;
    };

    if !lock.locked {
        // Consume motion events even when not looking
        mouse_motion.clear();
        return;
    }

    for motion in mouse_motion.read() {
        camera.yaw -= motion.delta.x * camera.sensitivity;
        camera.pitch -= motion.delta.y * camera.sensitivity;

        // Clamp pitch: нельзя перевернуться через зенит
        camera.pitch = camera.pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + 0.01,
            std::f32::consts::FRAC_PI_2 - 0.01,
        );
    }
}

/// Update camera rotation based on yaw/pitch (позиция не меняется)
fn update_camera_transform(
    mut query: Query<(&FirstPersonCamera, &mut Transform), Changed<FirstPersonCamera>>,
) {
    for (camera, mut transform) in query.iter_mut() {
        transform.rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    }
}

/// Камера → PlayerView (origin выстрела + reference point для cull)
pub fn publish_player_view(
    query: Query<&Transform, With<FirstPersonCamera>>,
    mut view: ResMut<PlayerView>,
) {
    let Ok(transform) = query.single() else {
        return;
    };

    let next = PlayerView::new(transform.translation, *transform.forward());
    if *view != next {
        *view = next;
    }
}
