//! CPU-side triangle meshes and procedural primitives.
//!
//! Primitives follow the usual Y-up convention: cylinders and cones are
//! centered on the origin with their axis along +Y.

use crate::constants::rgb_from_hex;
use glam::{Mat3, Mat4, Vec3};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Every index refers to an existing vertex and the index count is a multiple of 3.
    pub fn is_well_formed(&self) -> bool {
        let n = self.vertices.len() as u32;
        self.indices.len() % 3 == 0 && self.indices.iter().all(|&i| i < n)
    }

    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    pub fn transformed(&self, transform: Mat4) -> MeshData {
        let normal_mat = Mat3::from_mat4(transform).inverse().transpose();
        let vertices = self
            .vertices
            .iter()
            .map(|v| Vertex {
                position: transform
                    .transform_point3(Vec3::from_array(v.position))
                    .to_array(),
                normal: (normal_mat * Vec3::from_array(v.normal))
                    .normalize_or_zero()
                    .to_array(),
                color: v.color,
            })
            .collect();
        MeshData {
            vertices,
            indices: self.indices.clone(),
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    pub fn center(&self) -> Vec3 {
        self.bounds()
            .map(|(lo, hi)| (lo + hi) * 0.5)
            .unwrap_or(Vec3::ZERO)
    }

    /// Half the diagonal of the bounding box.
    pub fn bounding_radius(&self) -> f32 {
        self.bounds()
            .map(|(lo, hi)| (hi - lo).length() * 0.5)
            .unwrap_or(0.0)
    }
}

/// Open-ended side plus caps; a zero `radius_top` makes a cone.
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
    color: u32,
) -> MeshData {
    let segments = segments.max(3);
    let rgb = rgb_from_hex(color);
    let half = height * 0.5;
    let slope = if height.abs() > f32::EPSILON {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = MeshData::default();

    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = Vec3::new(sin, slope, cos).normalize().to_array();
        mesh.vertices.push(Vertex {
            position: [radius_top * sin, half, radius_top * cos],
            normal,
            color: rgb,
        });
        mesh.vertices.push(Vertex {
            position: [radius_bottom * sin, -half, radius_bottom * cos],
            normal,
            color: rgb,
        });
    }
    for i in 0..segments {
        let a = 2 * i;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        mesh.indices.extend_from_slice(&[a, b, d, a, d, c]);
    }

    for (y, r, ny) in [(half, radius_top, 1.0_f32), (-half, radius_bottom, -1.0)] {
        if r <= 0.0 {
            continue;
        }
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
            color: rgb,
        });
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices.push(Vertex {
                position: [r * sin, y, r * cos],
                normal: [0.0, ny, 0.0],
                color: rgb,
            });
        }
        for i in 0..segments {
            let a = center + 1 + i;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, a + 1]);
            } else {
                mesh.indices.extend_from_slice(&[center, a + 1, a]);
            }
        }
    }
    mesh
}

pub fn cone(radius: f32, height: f32, segments: u32, color: u32) -> MeshData {
    cylinder(0.0, radius, height, segments, color)
}

pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32, color: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let rgb = rgb_from_hex(color);
    let mut mesh = MeshData::default();
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let phi = v * PI;
        for x in 0..=ws {
            let u = x as f32 / ws as f32;
            let theta = u * TAU;
            let n = Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos());
            mesh.vertices.push(Vertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
                color: rgb,
            });
        }
    }
    let row = ws + 1;
    for y in 0..hs {
        for x in 0..ws {
            let a = y * row + x;
            let b = a + row;
            let c = a + 1;
            let d = b + 1;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, c]);
            }
            if y != hs - 1 {
                mesh.indices.extend_from_slice(&[c, b, d]);
            }
        }
    }
    mesh
}
