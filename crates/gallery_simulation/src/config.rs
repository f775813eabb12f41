//! Gallery tuning (projectile step, cull distance, hit radius)
//!
//! Один `GalleryConfig` resource на App. Скорость снаряда задаётся
//! в единицах за тик, а не за секунду: частота тиков = частота кадров.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::SceneVariant;

/// Когда проверять попадание снаряда в мишень
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum HitTestMode {
    /// Одна проверка в момент выстрела, по позиции спавна.
    /// Снаряд летит дальше независимо от результата.
    SpawnOnly,

    /// Проверка при спавне и после каждого шага (живая позиция).
    /// Попавший снаряд уничтожается.
    #[default]
    Continuous,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
pub struct GalleryConfig {
    /// Сдвиг снаряда за один тик
    pub projectile_step: f32,

    /// Снаряд удаляется, когда расстояние до камеры >= этого значения
    pub max_projectile_distance: f32,

    /// Попадание: расстояние до центра мишени строго меньше радиуса
    pub hit_radius: f32,

    pub hit_test_mode: HitTestMode,

    /// Сцена, загружаемая на Startup
    pub scene: SceneVariant,

    /// Seed для раскладки декораций
    pub seed: u64,
}

impl GalleryConfig {
    pub const DEFAULT_STEP: f32 = 0.2;
    pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;
    pub const DEFAULT_HIT_RADIUS: f32 = 1.0;

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("projectile_step", self.projectile_step)?;
        check_positive("max_projectile_distance", self.max_projectile_distance)?;
        check_positive("hit_radius", self.hit_radius)?;
        Ok(())
    }

    /// Сколько тиков нужно снаряду из reference point до cull
    pub fn ticks_to_cull(&self) -> u32 {
        (self.max_projectile_distance / self.projectile_step).ceil() as u32
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            projectile_step: Self::DEFAULT_STEP,
            max_projectile_distance: Self::DEFAULT_MAX_DISTANCE,
            hit_radius: Self::DEFAULT_HIT_RADIUS,
            hit_test_mode: HitTestMode::default(),
            scene: SceneVariant::default(),
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}
