//! SceneLayout — данные сцены (мишени, камера, свет, небо, земля, камни)
//!
//! Цвета в sRGB байтах: симуляция собирается без bevy_color.

use bevy::prelude::*;
use rand::Rng;

use super::SceneVariant;
use crate::player::PlayerView;
use crate::target::Target;

pub type Rgb = [u8; 3];

/// Стартовые мишени (одинаковые в обоих вариантах)
pub const TARGET_POSITIONS: [Vec3; 3] = [
    Vec3::new(15.0, 0.0, -15.0),
    Vec3::new(-15.0, 0.0, -15.0),
    Vec3::new(0.0, 5.0, -20.0),
];

/// Ребро куба мишени
pub const TARGET_SIZE: f32 = 1.0;
pub const TARGET_COLOR: Rgb = [255, 0, 0];

/// Радиус визуала снаряда
pub const PROJECTILE_RADIUS: f32 = 0.1;
pub const PROJECTILE_COLOR: Rgb = [255, 255, 0];

pub const MARS_SKY: Rgb = [0xFF, 0xA0, 0x7A];
pub const MARS_ROCK_COLOR: Rgb = [0x8B, 0x45, 0x13];
pub const MARS_SURFACE_TEXTURE: &str = "mars-surface.jpg";
pub const MARS_ROCK_COUNT: usize = 50;
/// Камни разбросаны по квадрату [-HALF, HALF) по x/z
pub const MARS_ROCK_SPREAD_HALF: f32 = 50.0;

pub const CLEAR_SKY: Rgb = [0x87, 0xCE, 0xEB];
pub const PLAIN_GROUND_COLOR: Rgb = [0x6B, 0x8E, 0x23];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpec {
    /// Вертикальный FOV (градусы)
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: PlayerView::default().position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingSpec {
    pub ambient_intensity: f32,
    /// Откуда светит направленный свет (смотрит в начало координат)
    pub directional_from: Vec3,
    pub directional_intensity: f32,
}

impl Default for LightingSpec {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.2,
            directional_from: Vec3::ONE,
            directional_intensity: 0.8,
        }
    }
}

/// Линейный туман: от start до end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogSpec {
    pub color: Rgb,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySpec {
    pub background: Rgb,
    pub fog: Option<FogSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSpec {
    /// Сторона квадратной плоскости
    pub size: f32,
    /// Высота плоскости (y)
    pub height: f32,
    pub color: Rgb,
    pub texture: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockSpec {
    pub position: Vec3,
    pub radius: f32,
}

impl RockSpec {
    pub const COLOR: Rgb = MARS_ROCK_COLOR;
    pub const ROUGHNESS: f32 = 0.8;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub variant: SceneVariant,
    pub targets: Vec<Target>,
    pub camera: CameraSpec,
    pub lighting: LightingSpec,
    pub sky: SkySpec,
    pub ground: GroundSpec,
    pub rocks: Vec<RockSpec>,
}

impl SceneLayout {
    /// Собрать раскладку варианта
    ///
    /// RNG нужен только Mars (камни). Одинаковый seed → одинаковая раскладка.
    pub fn build(variant: SceneVariant, rng: &mut impl Rng) -> Self {
        let targets = default_targets();

        match variant {
            SceneVariant::Mars => Self {
                variant,
                targets,
                camera: CameraSpec::default(),
                lighting: LightingSpec::default(),
                sky: SkySpec {
                    background: MARS_SKY,
                    fog: Some(FogSpec {
                        color: MARS_SKY,
                        start: 10.0,
                        end: 50.0,
                    }),
                },
                ground: GroundSpec {
                    size: 1000.0,
                    height: -1.0,
                    color: [255, 255, 255],
                    texture: Some(MARS_SURFACE_TEXTURE),
                },
                rocks: scatter_rocks(rng),
            },
            SceneVariant::Sky => Self {
                variant,
                targets,
                camera: CameraSpec::default(),
                lighting: LightingSpec::default(),
                sky: SkySpec {
                    background: CLEAR_SKY,
                    fog: None,
                },
                ground: GroundSpec {
                    size: 1000.0,
                    height: -1.0,
                    color: PLAIN_GROUND_COLOR,
                    texture: None,
                },
                rocks: Vec::new(),
            },
        }
    }
}

pub fn default_targets() -> Vec<Target> {
    TARGET_POSITIONS
        .iter()
        .enumerate()
        .map(|(index, &position)| Target::new(index as u32 + 1, position))
        .collect()
}

fn scatter_rocks(rng: &mut impl Rng) -> Vec<RockSpec> {
    (0..MARS_ROCK_COUNT)
        .map(|_| {
            let x = rng.gen_range(-MARS_ROCK_SPREAD_HALF..MARS_ROCK_SPREAD_HALF);
            let z = rng.gen_range(-MARS_ROCK_SPREAD_HALF..MARS_ROCK_SPREAD_HALF);
            RockSpec {
                position: Vec3::new(x, 0.0, z),
                radius: rng.gen_range(1.0..3.0),
            }
        })
        .collect()
}
