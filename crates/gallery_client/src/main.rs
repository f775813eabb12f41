use bevy::prelude::*;
use gallery_simulation::{GalleryConfig, GalleryPlugin, GalleryTick};

mod camera;
mod environment;
mod hud;
mod input;
mod logger;
mod rendering;
mod rock_mesh;

use camera::FirstPersonCameraPlugin;
use environment::EnvironmentPlugin;
use hud::HudPlugin;
use input::GalleryInputPlugin;
use rendering::RenderingSyncPlugin;

fn main() {
    gallery_simulation::set_logger(Box::new(logger::BevyLogger));

    App::new()
        // Bevy defaults (rendering, input, picking, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Shooting Gallery".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(GalleryPlugin::new(GalleryConfig::default()))
        // Камера → PlayerView, ввод → FireIntent/TargetClicked, всё до тика симуляции
        .configure_sets(Update, ClientInput.before(GalleryTick))
        .configure_sets(Update, ClientVisuals.after(GalleryTick))
        .add_plugins((
            FirstPersonCameraPlugin,
            GalleryInputPlugin,
            EnvironmentPlugin,
            RenderingSyncPlugin,
            HudPlugin,
        ))
        .run();
}

/// Клиентские системы, которые пишут ввод в симуляцию
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientInput;

/// Клиентские системы, которые читают результаты тика
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientVisuals;
