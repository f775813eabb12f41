//! Gallery integration test
//!
//! Headless App: загрузка сцены, выстрелы, клики, cull, перезагрузка.
//!
//! Проверяем:
//! - Hit test при спавне (SpawnOnly) и в полёте (Continuous)
//! - Cull снаряда ровно на 500-м тике
//! - score == initial - remaining на каждом тике

use bevy::prelude::*;
use gallery_simulation::*;

/// Собранные за прогон события (для проверок границы с рендером)
#[derive(Resource, Default)]
struct Recorded {
    spawned: Vec<ProjectileId>,
    despawned: Vec<(ProjectileId, DespawnCause)>,
    targets_spawned: Vec<TargetId>,
    targets_removed: Vec<(TargetId, RemovalCause)>,
    scores: Vec<u32>,
    scenes: Vec<SceneVariant>,
}

fn record_events(
    mut recorded: ResMut<Recorded>,
    mut spawned: EventReader<ProjectileSpawned>,
    mut despawned: EventReader<ProjectileDespawned>,
    mut targets_spawned: EventReader<TargetSpawned>,
    mut targets_removed: EventReader<TargetRemoved>,
    mut scores: EventReader<ScoreChanged>,
    mut scenes: EventReader<SceneLoaded>,
) {
    recorded.spawned.extend(spawned.read().map(|e| e.id));
    recorded
        .despawned
        .extend(despawned.read().map(|e| (e.id, e.cause)));
    recorded
        .targets_spawned
        .extend(targets_spawned.read().map(|e| e.id));
    recorded
        .targets_removed
        .extend(targets_removed.read().map(|e| (e.id, e.cause)));
    recorded.scores.extend(scores.read().map(|e| e.score));
    recorded.scenes.extend(scenes.read().map(|e| e.variant));
}

/// Helper: App с GalleryPlugin, сцена уже загружена (1 тик)
fn create_gallery_app(config: GalleryConfig) -> App {
    let mut app = create_headless_app(config.seed);
    app.add_plugins(GalleryPlugin::new(config))
        .init_resource::<Recorded>()
        .add_systems(Update, record_events.after(GalleryTick));

    app.update();
    app
}

fn spawn_only_config() -> GalleryConfig {
    GalleryConfig {
        hit_test_mode: HitTestMode::SpawnOnly,
        ..default()
    }
}

fn fire(app: &mut App, origin: Vec3, direction: Vec3) {
    app.world_mut().send_event(FireIntent { origin, direction });
}

fn fire_from_eye_at(app: &mut App, aim: Vec3) {
    let eye = app.world().resource::<PlayerView>().position;
    let view = PlayerView::looking_at(eye, aim);
    app.world_mut().send_event(FireIntent::from_view(&view));
}

fn targets(app: &App) -> &TargetController {
    app.world().resource::<TargetController>()
}

fn projectiles(app: &App) -> &ProjectileManager {
    app.world().resource::<ProjectileManager>()
}

fn recorded(app: &App) -> &Recorded {
    app.world().resource::<Recorded>()
}

fn assert_score_invariant(app: &App, tick: u32) {
    let targets = targets(app);
    assert_eq!(
        targets.score() as usize,
        targets.initial_count() - targets.remaining(),
        "Tick {}: score invariant broken",
        tick
    );
}

#[test]
fn test_scene_loaded_on_startup() {
    let app = create_gallery_app(GalleryConfig::default());

    assert_eq!(targets(&app).remaining(), 3);
    assert_eq!(targets(&app).score(), 0);

    let scene = app.world().resource::<ActiveScene>();
    assert_eq!(scene.variant, SceneVariant::Mars);
    assert_eq!(scene.layout.rocks.len(), 50);

    let recorded = recorded(&app);
    assert_eq!(
        recorded.targets_spawned,
        vec![TargetId(1), TargetId(2), TargetId(3)]
    );
    assert_eq!(recorded.scenes, vec![SceneVariant::Mars]);
}

#[test]
fn test_spawn_time_hit_removes_target() {
    let mut app = create_gallery_app(spawn_only_config());

    fire(&mut app, Vec3::new(14.6, 0.3, -15.0), Vec3::NEG_Z);
    app.update();

    assert_eq!(targets(&app).score(), 1);
    assert_eq!(targets(&app).remaining(), 2);
    assert!(!targets(&app).contains(TargetId(1)));
    assert_eq!(
        recorded(&app).targets_removed,
        vec![(TargetId(1), RemovalCause::Hit)]
    );
    assert_eq!(recorded(&app).scores.last(), Some(&1));

    // SpawnOnly: снаряд летит дальше
    assert_eq!(projectiles(&app).len(), 1);
}

#[test]
fn test_spawn_time_hit_consumes_projectile_when_continuous() {
    let mut app = create_gallery_app(GalleryConfig::default());

    fire(&mut app, Vec3::new(14.6, 0.3, -15.0), Vec3::NEG_Z);
    app.update();

    assert_eq!(targets(&app).score(), 1);
    assert!(projectiles(&app).is_empty());

    let recorded = recorded(&app);
    assert_eq!(recorded.spawned.len(), 1);
    assert_eq!(
        recorded.despawned,
        vec![(recorded.spawned[0], DespawnCause::Impact)]
    );
}

/// Выстрел из камеры в мишень не засчитывается в SpawnOnly:
/// проверяется только позиция спавна (у камеры), а не траектория.
#[test]
fn test_spawn_only_misses_shot_aimed_from_camera() {
    let mut app = create_gallery_app(spawn_only_config());

    fire_from_eye_at(&mut app, Vec3::new(15.0, 0.0, -15.0));
    for _ in 0..510 {
        app.update();
    }

    assert_eq!(targets(&app).score(), 0);
    assert_eq!(targets(&app).remaining(), 3);
    assert!(projectiles(&app).is_empty());
    assert_eq!(recorded(&app).despawned[0].1, DespawnCause::OutOfRange);
}

#[test]
fn test_continuous_hits_target_in_flight() {
    let mut app = create_gallery_app(GalleryConfig::default());

    fire_from_eye_at(&mut app, Vec3::new(15.0, 0.0, -15.0));

    // ~21.3 до центра мишени, радиус 1.0, шаг 0.2 → попадание на ~102 тике
    for tick in 0..150 {
        app.update();
        assert_score_invariant(&app, tick);
    }

    assert_eq!(targets(&app).score(), 1);
    assert!(!targets(&app).contains(TargetId(1)));
    assert!(projectiles(&app).is_empty());
    assert_eq!(recorded(&app).despawned[0].1, DespawnCause::Impact);
}

/// Шаг больше диаметра мишени: hit test по отрезку не даёт пролететь насквозь
#[test]
fn test_continuous_large_step_does_not_tunnel() {
    let mut app = create_gallery_app(GalleryConfig {
        projectile_step: 5.0,
        ..default()
    });

    fire_from_eye_at(&mut app, Vec3::new(15.0, 0.0, -15.0));
    for tick in 0..40 {
        app.update();
        assert_score_invariant(&app, tick);
    }

    assert_eq!(targets(&app).score(), 1);
    assert!(!targets(&app).contains(TargetId(1)));
    assert_eq!(recorded(&app).despawned[0].1, DespawnCause::Impact);
}

#[test]
fn test_continuous_clears_all_targets() {
    let mut app = create_gallery_app(GalleryConfig::default());

    let aims: Vec<Vec3> = targets(&app).targets().iter().map(|t| t.position).collect();
    for aim in aims {
        fire_from_eye_at(&mut app, aim);
    }

    for tick in 0..200 {
        app.update();
        assert_score_invariant(&app, tick);
    }

    assert!(targets(&app).is_cleared());
    assert_eq!(targets(&app).score(), 3);
    assert_eq!(recorded(&app).targets_removed.len(), 3);
}

#[test]
fn test_projectile_culled_on_tick_500() {
    let mut app = create_gallery_app(GalleryConfig::default());

    // Вдоль -Z из камеры мишеней нет (ближайшая в 3.4 от оси)
    let eye = app.world().resource::<PlayerView>().position;
    fire(&mut app, eye, Vec3::NEG_Z);

    // Тик выстрела = первый шаг полёта
    for _ in 0..499 {
        app.update();
    }
    assert_eq!(projectiles(&app).len(), 1);
    assert!(recorded(&app).despawned.is_empty());

    app.update();
    assert!(projectiles(&app).is_empty());
    assert_eq!(recorded(&app).despawned.len(), 1);
    assert_eq!(recorded(&app).despawned[0].1, DespawnCause::OutOfRange);

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(recorded(&app).despawned.len(), 1);
    assert_eq!(targets(&app).score(), 0);
}

#[test]
fn test_cull_follows_moving_camera() {
    let mut app = create_gallery_app(GalleryConfig::default());

    fire(&mut app, Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z);
    app.update();
    assert_eq!(projectiles(&app).len(), 1);

    // Камера ушла на 150 в противоположную сторону
    app.world_mut().resource_mut::<PlayerView>().position = Vec3::new(0.0, 1.6, 150.0);
    app.update();

    assert!(projectiles(&app).is_empty());
}

#[test]
fn test_click_removes_target() {
    let mut app = create_gallery_app(GalleryConfig::default());

    app.world_mut().send_event(TargetClicked {
        target: TargetId(3),
    });
    app.update();

    assert_eq!(targets(&app).score(), 1);
    assert!(!targets(&app).contains(TargetId(3)));
    assert_eq!(
        recorded(&app).targets_removed,
        vec![(TargetId(3), RemovalCause::Click)]
    );
}

#[test]
fn test_click_unknown_target_no_change() {
    let mut app = create_gallery_app(GalleryConfig::default());
    let scores_before = recorded(&app).scores.len();

    app.world_mut().send_event(TargetClicked {
        target: TargetId(99),
    });
    app.update();

    assert_eq!(targets(&app).score(), 0);
    assert_eq!(targets(&app).remaining(), 3);
    assert!(recorded(&app).targets_removed.is_empty());
    assert_eq!(recorded(&app).scores.len(), scores_before);
}

#[test]
fn test_removed_target_never_reappears() {
    let mut app = create_gallery_app(spawn_only_config());

    app.world_mut().send_event(TargetClicked {
        target: TargetId(1),
    });
    app.update();

    // Повторный клик + выстрел в упор по месту мишени
    app.world_mut().send_event(TargetClicked {
        target: TargetId(1),
    });
    fire(&mut app, Vec3::new(15.0, 0.0, -15.0), Vec3::NEG_Z);
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(targets(&app).score(), 1);
    assert!(!targets(&app).contains(TargetId(1)));
    assert_eq!(recorded(&app).targets_removed.len(), 1);
}

#[test]
fn test_scene_reload_resets_state() {
    let mut app = create_gallery_app(spawn_only_config());

    app.world_mut().send_event(TargetClicked {
        target: TargetId(2),
    });
    fire(&mut app, Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z);
    app.update();
    assert_eq!(targets(&app).score(), 1);
    assert_eq!(projectiles(&app).len(), 1);

    app.world_mut().send_event(LoadScene {
        variant: SceneVariant::Sky,
    });
    app.update();

    assert_eq!(targets(&app).score(), 0);
    assert_eq!(targets(&app).remaining(), 3);
    assert!(projectiles(&app).is_empty());

    let scene = app.world().resource::<ActiveScene>();
    assert_eq!(scene.variant, SceneVariant::Sky);
    assert!(scene.layout.rocks.is_empty());

    let recorded = recorded(&app);
    assert!(recorded
        .despawned
        .iter()
        .any(|(_, cause)| *cause == DespawnCause::SceneReset));
    assert_eq!(recorded.scenes, vec![SceneVariant::Mars, SceneVariant::Sky]);
    assert_eq!(recorded.scores.last(), Some(&0));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let app = create_gallery_app(GalleryConfig {
        projectile_step: -1.0,
        ..default()
    });

    let config = app.world().resource::<GalleryConfig>();
    assert_eq!(config.projectile_step, GalleryConfig::DEFAULT_STEP);
}
