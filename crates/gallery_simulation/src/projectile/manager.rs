//! ProjectileManager — список снарядов в полёте
//!
//! Каждый тик: сдвиг на `direction * step`, затем cull по расстоянию
//! от reference point (позиция камеры на момент тика).
//!
//! Позиция считается от origin по числу прожитых тиков, а не накапливается:
//! пройденное расстояние строго монотонно, без дрейфа f32.

use bevy::prelude::*;

/// Уникальный id снаряда (не переиспользуется)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,

    /// Позиция в момент выстрела
    pub origin: Vec3,

    /// Единичный вектор (или ZERO, если при спавне пришёл вырожденный)
    pub direction: Vec3,

    /// Текущая позиция
    pub position: Vec3,

    /// Позиция до последнего шага (для hit test по отрезку)
    pub previous_position: Vec3,

    /// Сколько тиков снаряд уже прожил
    pub ticks_alive: u32,
}

impl Projectile {
    /// Расстояние, пройденное от origin
    pub fn traveled(&self) -> f32 {
        self.origin.distance(self.position)
    }

    fn advance(&mut self, step: f32) {
        self.previous_position = self.position;
        self.ticks_alive += 1;
        self.position = self.origin + self.direction * (step * self.ticks_alive as f32);
    }
}

#[derive(Resource, Debug, Default)]
pub struct ProjectileManager {
    projectiles: Vec<Projectile>,
    next_id: u64,
}

impl ProjectileManager {
    /// Создать снаряд в `origin`, летящий по `direction`
    ///
    /// Direction нормализуется. Нулевой/NaN вектор не ошибка:
    /// снаряд остаётся на месте, пока его не отрежет cull.
    pub fn spawn(&mut self, origin: Vec3, direction: Vec3) -> ProjectileId {
        let normalized = direction.normalize_or_zero();
        if normalized == Vec3::ZERO {
            crate::logger::log_warning(&format!(
                "Projectile spawned with degenerate direction {:?} at {:?}",
                direction, origin
            ));
        }

        self.next_id += 1;
        let id = ProjectileId(self.next_id);

        self.projectiles.push(Projectile {
            id,
            origin,
            direction: normalized,
            position: origin,
            previous_position: origin,
            ticks_alive: 0,
        });

        id
    }

    /// Один тик: сдвиг всех снарядов + cull (distance >= max_distance)
    ///
    /// Возвращает удалённые снаряды (их визуалы должен убрать рендер).
    pub fn tick(&mut self, reference: Vec3, step: f32, max_distance: f32) -> Vec<Projectile> {
        for projectile in self.projectiles.iter_mut() {
            projectile.advance(step);
        }

        let mut culled = Vec::new();
        self.projectiles.retain(|projectile| {
            if projectile.position.distance(reference) >= max_distance {
                culled.push(projectile.clone());
                false
            } else {
                true
            }
        });

        culled
    }

    pub fn remove(&mut self, id: ProjectileId) -> Option<Projectile> {
        let index = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(index))
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Удалить все снаряды (смена сцены). Счётчик id не сбрасывается.
    pub fn clear(&mut self) -> Vec<Projectile> {
        std::mem::take(&mut self.projectiles)
    }
}
