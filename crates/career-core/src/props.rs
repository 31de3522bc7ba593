//! Procedural scene content: the axis cross and placeholder models.

use crate::constants::*;
use crate::mesh::{cone, cylinder, uv_sphere, MeshData};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_4;

/// Mesh in local space plus the rigid transform that places it.
#[derive(Clone, Debug)]
pub struct PropPart {
    pub mesh: MeshData,
    pub position: Vec3,
    pub rotation: Quat,
}

#[inline]
fn axis_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_arc(Vec3::Y, direction.normalize())
}

/// Shaft of one axis, centered halfway along its direction.
pub fn axis_shaft(spec: &AxisSpec) -> PropPart {
    let dir = Vec3::from_array(spec.direction);
    PropPart {
        mesh: cylinder(
            AXIS_THICKNESS,
            AXIS_THICKNESS,
            AXIS_LENGTH,
            RADIAL_SEGMENTS,
            spec.color,
        ),
        position: dir * (AXIS_LENGTH * 0.5),
        rotation: axis_rotation(dir),
    }
}

/// Arrow tip at the end of an axis, apex pointing outward.
pub fn axis_tip(spec: &AxisSpec) -> PropPart {
    let dir = Vec3::from_array(spec.direction);
    PropPart {
        mesh: cone(AXIS_TIP_RADIUS, AXIS_TIP_HEIGHT, RADIAL_SEGMENTS, spec.color),
        position: dir * AXIS_LENGTH,
        rotation: axis_rotation(dir),
    }
}

pub fn origin_marker() -> PropPart {
    PropPart {
        mesh: uv_sphere(ORIGIN_SPHERE_RADIUS, 16, 16, 0xffffff),
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    }
}

/// World position of an axis label.
pub fn label_anchor(spec: &AxisSpec) -> Vec3 {
    Vec3::from_array(spec.direction) * AXIS_LABEL_DISTANCE
}

/// Stand-in humanoid used when no person model could be loaded.
pub fn fallback_person() -> MeshData {
    let mut person = cylinder(0.3, 0.4, 1.5, RADIAL_SEGMENTS, BODY_COLOR)
        .transformed(Mat4::from_translation(Vec3::new(0.0, 0.75, 0.0)));
    person.append(
        &uv_sphere(0.25, 16, 16, SKIN_COLOR)
            .transformed(Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0))),
    );
    let arm = cylinder(0.1, 0.1, 0.8, RADIAL_SEGMENTS, SKIN_COLOR);
    for (x, angle) in [(-0.4_f32, FRAC_PI_4), (0.4, -FRAC_PI_4)] {
        let placed = arm.transformed(Mat4::from_rotation_translation(
            Quat::from_rotation_z(angle),
            Vec3::new(x, 1.0, 0.0),
        ));
        person.append(&placed);
    }
    person
}

/// Stand-in for the `index`-th model of the cloud variant.
pub fn fallback_model(index: usize) -> MeshData {
    let color = CLOUD_FALLBACK_COLORS[index % CLOUD_FALLBACK_COLORS.len()];
    uv_sphere(CLOUD_MODEL_HEIGHT * 0.4, 24, 16, color)
}
