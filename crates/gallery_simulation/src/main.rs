//! Headless прогон галереи
//!
//! Загружает Mars сцену, стреляет по каждой мишени из стартовой
//! позиции камеры и прогоняет тики до очистки снарядов.

use bevy::prelude::*;
use gallery_simulation::{
    create_headless_app, FireIntent, GalleryConfig, GalleryPlugin, PlayerView, ProjectileManager,
    TargetController,
};

fn main() {
    let config = GalleryConfig::default();
    println!(
        "Starting shooting gallery headless run (seed: {}, scene: {})",
        config.seed,
        config.scene.title()
    );

    let ticks = config.ticks_to_cull() + 10;
    let mut app = create_headless_app(config.seed);
    app.add_plugins(GalleryPlugin::new(config));

    // Первый тик: Startup + загрузка сцены
    app.update();

    let eye = app.world().resource::<PlayerView>().position;
    let aims: Vec<Vec3> = app
        .world()
        .resource::<TargetController>()
        .targets()
        .iter()
        .map(|target| target.position)
        .collect();

    for aim in aims {
        let view = PlayerView::looking_at(eye, aim);
        app.world_mut().send_event(FireIntent::from_view(&view));
    }

    for tick in 1..=ticks {
        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            println!(
                "Tick {}: {} projectiles, {} targets left, score {}",
                tick,
                world.resource::<ProjectileManager>().len(),
                world.resource::<TargetController>().remaining(),
                world.resource::<TargetController>().score()
            );
        }
    }

    let score = app.world().resource::<TargetController>().score();
    println!("Run complete! Final score: {}", score);
}
