//! Target domain — мишени и счёт
//!
//! Содержит:
//! - TargetController (живые мишени + score, единственный владелец)
//! - TargetSpawned / TargetClicked / TargetRemoved / ScoreChanged
//! - Системы: process_target_clicks, detect_in_flight_hits
//!
//! Жизненный цикл мишени: alive → removed, без респавна
//! (кроме полной перезагрузки сцены через initialize).

pub mod controller;
pub mod events;
pub mod systems;

#[cfg(test)]
mod controller_tests;

pub use controller::*;
pub use events::*;
pub use systems::*;
