//! Target events

use bevy::prelude::*;

use super::TargetId;

/// Event: мишень появилась (загрузка сцены) → рендер добавляет куб
#[derive(Event, Debug, Clone)]
pub struct TargetSpawned {
    pub id: TargetId,
    pub position: Vec3,
}

/// Event: клик по визуалу мишени (ввод от клиента)
#[derive(Event, Debug, Clone)]
pub struct TargetClicked {
    pub target: TargetId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// Снаряд в радиусе попадания
    Hit,
    /// Прямой клик по мишени
    Click,
}

/// Event: мишень уничтожена → рендер убирает куб
#[derive(Event, Debug, Clone)]
pub struct TargetRemoved {
    pub id: TargetId,
    pub cause: RemovalCause,
}

/// Event: счёт изменился → HUD перерисовывает текст
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub score: u32,
}
