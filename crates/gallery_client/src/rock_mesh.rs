//! Low-poly камень: додекаэдр с плоскими гранями

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

const PHI: f32 = 1.618_034;

/// 20 вершин на сфере радиуса sqrt(3)
fn unit_vertices() -> Vec<Vec3> {
    let inv = 1.0 / PHI;
    let mut vertices = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                vertices.push(Vec3::new(x, y, z));
            }
        }
    }
    for a in [-1.0, 1.0] {
        for b in [-1.0, 1.0] {
            vertices.push(Vec3::new(0.0, a * inv, b * PHI));
            vertices.push(Vec3::new(a * inv, b * PHI, 0.0));
            vertices.push(Vec3::new(a * PHI, 0.0, b * inv));
        }
    }
    vertices
}

/// Нормали 12 граней: (0, ±φ, ±1) и циклические перестановки
fn face_normals() -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-1.0, 1.0] {
            let n = Vec3::new(0.0, a * PHI, b);
            normals.push(n.normalize());
            normals.push(Vec3::new(n.z, n.x, n.y).normalize());
            normals.push(Vec3::new(n.y, n.z, n.x).normalize());
        }
    }
    normals
}

/// Додекаэдр, вписанный в сферу `radius`
///
/// Вершины дублируются по граням (60 шт.), чтобы нормали были плоскими.
pub fn dodecahedron(radius: f32) -> Mesh {
    let scale = radius / 3.0_f32.sqrt();
    let vertices = unit_vertices();

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(60);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(60);
    let mut indices: Vec<u32> = Vec::with_capacity(108);

    for normal in face_normals() {
        // 5 вершин грани — самые дальние вдоль нормали
        let mut ranked: Vec<Vec3> = vertices.clone();
        ranked.sort_by(|a, b| b.dot(normal).total_cmp(&a.dot(normal)));
        let mut face: Vec<Vec3> = ranked.into_iter().take(5).collect();

        // CCW вокруг нормали (снаружи)
        let center = face.iter().copied().sum::<Vec3>() / 5.0;
        let u = (face[0] - center).normalize();
        let w = normal.cross(u);
        let angle = |v: &Vec3| {
            let d = *v - center;
            d.dot(w).atan2(d.dot(u))
        };
        face.sort_by(|a, b| angle(a).total_cmp(&angle(b)));

        let base = positions.len() as u32;
        for vertex in &face {
            positions.push((*vertex * scale).to_array());
            normals.push(normal.to_array());
        }
        for i in 1..4 {
            indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}
