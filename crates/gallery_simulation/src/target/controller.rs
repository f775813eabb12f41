//! TargetController — живые мишени и счёт

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub id: TargetId,
    pub position: Vec3,
}

impl Target {
    pub fn new(id: u32, position: Vec3) -> Self {
        Self {
            id: TargetId(id),
            position,
        }
    }
}

/// Владелец мишеней и счёта
///
/// Инвариант: `score == initial_count - remaining` после любой операции.
/// Каждое удаление мишени даёт ровно +1 к счёту.
#[derive(Resource, Debug, Default)]
pub struct TargetController {
    targets: Vec<Target>,
    initial_count: usize,
    score: u32,
}

impl TargetController {
    /// Загрузить стартовый набор мишеней, score → 0
    pub fn initialize(&mut self, targets: impl IntoIterator<Item = Target>) {
        self.targets = targets.into_iter().collect();
        self.initial_count = self.targets.len();
        self.score = 0;
    }

    /// Hit test: убрать все живые мишени ближе `radius` к `position`
    ///
    /// Возвращает id убранных мишеней (пусто = промах).
    pub fn test_hit(&mut self, position: Vec3, radius: f32) -> Vec<TargetId> {
        let mut hits = Vec::new();
        self.targets.retain(|target| {
            if target.position.distance(position) < radius {
                hits.push(target.id);
                false
            } else {
                true
            }
        });

        self.score += hits.len() as u32;
        hits
    }

    /// Hit test по отрезку полёта `from → to` за один тик
    ///
    /// Мишень поражена, если ближайшая к ней точка отрезка ближе `radius`.
    /// Верно при любом шаге, в том числе больше диаметра мишени.
    pub fn test_hit_segment(&mut self, from: Vec3, to: Vec3, radius: f32) -> Vec<TargetId> {
        let mut hits = Vec::new();
        self.targets.retain(|target| {
            if segment_distance(from, to, target.position) < radius {
                hits.push(target.id);
                false
            } else {
                true
            }
        });

        self.score += hits.len() as u32;
        hits
    }

    /// Прямое удаление (клик), без проверки расстояния
    ///
    /// Неизвестный id → no-op, `false`.
    pub fn click_remove(&mut self, id: TargetId) -> bool {
        let Some(index) = self.targets.iter().position(|t| t.id == id) else {
            return false;
        };

        self.targets.remove(index);
        self.score += 1;
        true
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.targets.len()
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.targets.iter().any(|t| t.id == id)
    }

    /// Все мишени уничтожены
    pub fn is_cleared(&self) -> bool {
        self.initial_count > 0 && self.targets.is_empty()
    }
}

/// Расстояние от точки до отрезка `from → to`
pub fn segment_distance(from: Vec3, to: Vec3, point: Vec3) -> f32 {
    let segment = to - from;
    let length_squared = segment.length_squared();
    if length_squared == 0.0 {
        return from.distance(point);
    }

    let t = ((point - from).dot(segment) / length_squared).clamp(0.0, 1.0);
    (from + segment * t).distance(point)
}
