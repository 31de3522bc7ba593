//! glTF / GLB decoding into flat, pre-transformed [`MeshData`].

use crate::mesh::{MeshData, Vertex};
use glam::{Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("primitive {primitive} of mesh {mesh} has no positions")]
    MissingPositions { mesh: usize, primitive: usize },
    #[error("model contains no triangle geometry")]
    NoGeometry,
}

/// Where a resized model's origin ends up relative to its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Centered on X/Z and resting on the ground plane (min Y = 0).
    Ground,
    /// Bounding box centered on the origin.
    Center,
}

/// Decode a GLB container or a self-contained glTF JSON document.
///
/// The default scene (or the first one) is flattened with node transforms
/// applied. Non-triangle primitives are skipped.
pub fn mesh_from_gltf_bytes(bytes: &[u8]) -> Result<MeshData, ModelError> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let mut out = MeshData::default();
    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                append_node(&node, Mat4::IDENTITY, &buffers, &mut out)?;
            }
        }
        None => {
            for mesh in document.meshes() {
                append_mesh(&mesh, Mat4::IDENTITY, &buffers, &mut out)?;
            }
        }
    }
    if out.is_empty() {
        return Err(ModelError::NoGeometry);
    }
    Ok(out)
}

fn append_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
) -> Result<(), ModelError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        append_mesh(&mesh, world, buffers, out)?;
    }
    for child in node.children() {
        append_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn append_mesh(
    mesh: &gltf::Mesh,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut MeshData,
) -> Result<(), ModelError> {
    for prim in mesh.primitives() {
        if prim.mode() != gltf::mesh::Mode::Triangles {
            log::debug!(
                "[model] skipping {:?} primitive {} of mesh {}",
                prim.mode(),
                prim.index(),
                mesh.index()
            );
            continue;
        }
        let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or(ModelError::MissingPositions {
                mesh: mesh.index(),
                primitive: prim.index(),
            })?
            .collect();
        let normals: Vec<[f32; 3]> = reader
            .read_normals()
            .map(|n| n.collect())
            .unwrap_or_default();
        let colors: Vec<[f32; 3]> = reader
            .read_colors(0)
            .map(|c| c.into_rgb_f32().collect())
            .unwrap_or_default();
        let base = prim.material().pbr_metallic_roughness().base_color_factor();

        let vertices = positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let tint = colors.get(i).copied().unwrap_or([1.0, 1.0, 1.0]);
                Vertex {
                    position: *p,
                    normal: normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                    color: [base[0] * tint[0], base[1] * tint[1], base[2] * tint[2]],
                }
            })
            .collect();
        let indices = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let part = MeshData { vertices, indices };
        if !part.is_well_formed() {
            log::warn!(
                "[model] dropping malformed primitive {} of mesh {}",
                prim.index(),
                mesh.index()
            );
            continue;
        }
        out.append(&part.transformed(world));
    }
    Ok(())
}

/// Uniformly rescale `mesh` to `target_height` and move its origin per `anchor`.
pub fn fit_height(mesh: &MeshData, target_height: f32, anchor: Anchor) -> MeshData {
    let Some((lo, hi)) = mesh.bounds() else {
        return mesh.clone();
    };
    let height = hi.y - lo.y;
    let scale = if height > f32::EPSILON {
        target_height / height
    } else {
        1.0
    };
    let center = (lo + hi) * 0.5;
    let pivot = match anchor {
        Anchor::Ground => Vec3::new(center.x, lo.y, center.z),
        Anchor::Center => center,
    };
    mesh.transformed(Mat4::from_scale(Vec3::splat(scale)) * Mat4::from_translation(-pivot))
}
