//! Projectile domain — снаряды в полёте
//!
//! Содержит:
//! - ProjectileManager (владеет списком снарядов, шаг + cull)
//! - FireIntent / ProjectileSpawned / ProjectileDespawned (граница с рендером)
//! - Системы: process_fire_intents, advance_projectiles
//!
//! Позицию снаряда меняет только ProjectileManager.

pub mod events;
pub mod manager;
pub mod systems;


pub use events::*;
pub use manager::*;
pub use systems::*;
