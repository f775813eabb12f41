//! Player viewpoint (камера = игрок)
//!
//! Источник истины для позиции/направления — камера клиента,
//! она пишет сюда каждый кадр. Headless: остаётся default.

use bevy::prelude::*;

/// Позиция и взгляд камеры игрока
///
/// - position: origin выстрела и reference point для cull снарядов
/// - forward: направление выстрела (единичный вектор)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PlayerView {
    pub position: Vec3,
    pub forward: Vec3,
}

impl PlayerView {
    /// Высота глаз над землёй
    pub const EYE_HEIGHT: f32 = 1.6;

    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self {
            position,
            forward: forward.normalize_or_zero(),
        }
    }

    /// Направить взгляд на точку
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self::new(position, target - position)
    }
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, Self::EYE_HEIGHT, 0.0),
            forward: Vec3::NEG_Z,
        }
    }
}
