//! Projectile events — ввод (FireIntent) и граница с рендером

use bevy::prelude::*;

use super::ProjectileId;
use crate::player::PlayerView;

/// Event: игрок выстрелил
///
/// Клиент заполняет origin/direction из камеры (`from_view`).
#[derive(Event, Debug, Clone)]
pub struct FireIntent {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl FireIntent {
    pub fn from_view(view: &PlayerView) -> Self {
        Self {
            origin: view.position,
            direction: view.forward,
        }
    }
}

/// Event: снаряд создан → рендер добавляет визуал
#[derive(Event, Debug, Clone)]
pub struct ProjectileSpawned {
    pub id: ProjectileId,
    pub position: Vec3,
}

/// Почему снаряд исчез
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DespawnCause {
    /// Дальше max_projectile_distance от камеры
    OutOfRange,
    /// Попал в мишень (только HitTestMode::Continuous)
    Impact,
    /// Сцена перезагружена
    SceneReset,
}

/// Event: снаряд удалён → рендер убирает визуал
#[derive(Event, Debug, Clone)]
pub struct ProjectileDespawned {
    pub id: ProjectileId,
    pub cause: DespawnCause,
}
