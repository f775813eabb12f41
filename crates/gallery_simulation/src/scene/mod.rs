//! Scene composition — два варианта галереи (Mars / Sky)
//!
//! Симуляция хранит только данные раскладки (SceneLayout).
//! Меши, материалы, свет и туман строит клиент.

pub mod layout;
pub mod systems;


pub use layout::*;
pub use systems::*;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum SceneVariant {
    /// Пустыня: текстурированная поверхность, камни, оранжевый туман
    #[default]
    Mars,
    /// Чистое небо, без декораций
    Sky,
}

impl SceneVariant {
    pub fn toggled(self) -> Self {
        match self {
            SceneVariant::Mars => SceneVariant::Sky,
            SceneVariant::Sky => SceneVariant::Mars,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneVariant::Mars => "Mars",
            SceneVariant::Sky => "Sky",
        }
    }
}

/// Текущая загруженная сцена
#[derive(Resource, Debug, Clone)]
pub struct ActiveScene {
    pub variant: SceneVariant,
    pub layout: SceneLayout,
}

/// Event: загрузить (перезагрузить) сцену
#[derive(Event, Debug, Clone, Copy)]
pub struct LoadScene {
    pub variant: SceneVariant,
}

/// Event: сцена загружена, мишени и счёт сброшены
///
/// Несёт раскладку целиком: клиент строит окружение прямо из события.
#[derive(Event, Debug, Clone)]
pub struct SceneLoaded {
    pub variant: SceneVariant,
    pub layout: SceneLayout,
}
