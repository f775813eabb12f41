//! Shooting Gallery Simulation Core
//!
//! ECS-симуляция на Bevy 0.16, без рендера.
//!
//! Разделение ответственности:
//! - Simulation = снаряды, мишени, счёт, раскладка сцены
//! - Client = меши, свет, камера, pointer lock, HUD
//!
//! Один тик = один `app.update()` (один кадр). Снаряд сдвигается на
//! фиксированный шаг за тик, поэтому скорость полёта зависит от FPS.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod config;
pub mod logger;
pub mod player;
pub mod projectile;
pub mod scene;
pub mod target;

pub use config::{ConfigError, GalleryConfig, HitTestMode};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use player::PlayerView;
pub use projectile::{
    DespawnCause, FireIntent, Projectile, ProjectileDespawned, ProjectileId, ProjectileManager,
    ProjectileSpawned,
};
pub use scene::{ActiveScene, LoadScene, SceneLayout, SceneLoaded, SceneVariant};
pub use target::{
    RemovalCause, ScoreChanged, Target, TargetClicked, TargetController, TargetId, TargetRemoved,
    TargetSpawned,
};

/// Все системы одного тика галереи (клиент ставит ввод до, визуалы после)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GalleryTick;

/// Главный plugin симуляции
///
/// Порядок выполнения (Update, chain):
/// 1. apply_scene_requests — загрузка/сброс сцены
/// 2. process_fire_intents — спавн снарядов + hit test при спавне
/// 3. process_target_clicks — прямые клики по мишеням
/// 4. advance_projectiles — шаг + cull
/// 5. detect_in_flight_hits — hit test по живой позиции (Continuous)
#[derive(Default)]
pub struct GalleryPlugin {
    pub config: GalleryConfig,
}

impl GalleryPlugin {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                log_error(&format!("Invalid gallery config ({}), using defaults", err));
                GalleryConfig::default()
            }
        };

        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(config.seed));
        }

        app.insert_resource(config)
            .init_resource::<PlayerView>()
            .init_resource::<ProjectileManager>()
            .init_resource::<TargetController>();

        app.add_event::<FireIntent>()
            .add_event::<ProjectileSpawned>()
            .add_event::<ProjectileDespawned>()
            .add_event::<TargetSpawned>()
            .add_event::<TargetClicked>()
            .add_event::<TargetRemoved>()
            .add_event::<ScoreChanged>()
            .add_event::<LoadScene>()
            .add_event::<SceneLoaded>();

        app.add_systems(Startup, scene::request_initial_scene);
        app.add_systems(
            Update,
            (
                scene::apply_scene_requests,
                projectile::process_fire_intents,
                target::process_target_clicks,
                projectile::advance_projectiles,
                target::detect_in_flight_hits,
            )
                .chain()
                .in_set(GalleryTick),
        );
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot resource для сравнения детерминизма
///
/// Сериализуем через Debug (простейший способ). Нет resource → пустой вектор.
pub fn resource_snapshot<R>(world: &World) -> Vec<u8>
where
    R: Resource + std::fmt::Debug,
{
    world
        .get_resource::<R>()
        .map(|resource| format!("{:?}", resource).into_bytes())
        .unwrap_or_default()
}

/// Snapshot всего состояния галереи (сцена + снаряды + мишени/счёт)
pub fn gallery_snapshot(world: &World) -> Vec<u8> {
    let mut snapshot = resource_snapshot::<ActiveScene>(world);
    snapshot.extend(resource_snapshot::<ProjectileManager>(world));
    snapshot.extend(resource_snapshot::<TargetController>(world));
    snapshot
}
