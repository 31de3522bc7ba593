// Host-side tests for procedural meshes, placeholder props and glTF decoding.

use career_core::mesh::{cone, cylinder, uv_sphere};
use career_core::props::{self, fallback_model, fallback_person};
use career_core::{
    fit_height, mesh_from_gltf_bytes, Anchor, MeshData, ModelError, Vertex, CAREER_AXES,
    CLOUD_FALLBACK_COLORS, CLOUD_MODEL_HEIGHT,
};
use glam::{Mat4, Vec3};

// One triangle (0,0,0) (1,0,0) (0,1,0) under a node translated by +2 on Y.
const TRIANGLE_GLTF: &str = r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"mesh":0,"translation":[0,2,0]}],"meshes":[{"primitives":[{"attributes":{"POSITION":0},"indices":1}]}],"buffers":[{"byteLength":44,"uri":"data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIAAAA="}],"bufferViews":[{"buffer":0,"byteOffset":0,"byteLength":36},{"buffer":0,"byteOffset":36,"byteLength":6}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]},{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}]}"#;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn primitives_are_well_formed() {
    for mesh in [
        cylinder(0.1, 0.1, 6.0, 8, 0xff0000),
        cone(0.3, 0.8, 8, 0x00ff00),
        uv_sphere(0.2, 16, 16, 0x0000ff),
    ] {
        assert!(!mesh.is_empty());
        assert!(mesh.is_well_formed());
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-3, "normal {:?}", n);
        }
    }
}

#[test]
fn cylinder_is_centered_on_its_axis() {
    let (lo, hi) = cylinder(0.5, 0.5, 2.0, 16, 0xffffff)
        .bounds()
        .expect("has vertices");
    assert!(approx(lo, Vec3::new(-0.5, -1.0, -0.5)));
    assert!(approx(hi, Vec3::new(0.5, 1.0, 0.5)));
}

#[test]
fn cone_has_no_top_cap() {
    let cyl = cylinder(0.3, 0.3, 1.0, 8, 0);
    let tip = cone(0.3, 1.0, 8, 0);
    assert_eq!(cyl.triangle_count() - tip.triangle_count(), 8);
}

#[test]
fn sphere_radius_matches_bounds() {
    let sphere = uv_sphere(2.0, 16, 8, 0);
    let (lo, hi) = sphere.bounds().expect("has vertices");
    assert!((hi.y - lo.y - 4.0).abs() < 1e-4);
    assert!(sphere.center().length() < 1e-4);
}

#[test]
fn colors_come_from_hex() {
    let mesh = uv_sphere(1.0, 8, 4, 0xff0000);
    assert!(mesh.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0]));
}

#[test]
fn append_offsets_indices() {
    let mut a = cone(1.0, 1.0, 4, 0);
    let b = cone(1.0, 1.0, 4, 0);
    let (va, ta) = (a.vertices.len(), a.triangle_count());
    a.append(&b);
    assert_eq!(a.vertices.len(), va * 2);
    assert_eq!(a.triangle_count(), ta * 2);
    assert!(a.is_well_formed());
}

#[test]
fn transformed_moves_positions_and_keeps_normals_unit() {
    let mesh = cylinder(0.5, 0.5, 1.0, 8, 0)
        .transformed(Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 1.0, 1.0),
            glam::Quat::from_rotation_z(0.5),
            Vec3::new(0.0, 3.0, 0.0),
        ));
    assert!(approx(mesh.center(), Vec3::new(0.0, 3.0, 0.0)));
    for v in &mesh.vertices {
        assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-3);
    }
}

#[test]
fn empty_mesh_has_no_bounds() {
    let mesh = MeshData::default();
    assert!(mesh.bounds().is_none());
    assert_eq!(mesh.bounding_radius(), 0.0);
    assert!(mesh.is_well_formed());
}

#[test]
fn fallback_person_stands_on_the_ground() {
    let person = fallback_person();
    assert!(person.is_well_formed());
    let (lo, hi) = person.bounds().expect("has vertices");
    assert!(lo.y.abs() < 1e-4, "feet at {}", lo.y);
    // Head sphere of radius 0.25 centered at 1.5.
    assert!((hi.y - 1.75).abs() < 1e-3, "top at {}", hi.y);
    // Arms reach out on both sides.
    assert!(lo.x < -0.5 && hi.x > 0.5);
}

#[test]
fn fallback_models_cycle_colors() {
    let first = fallback_model(0);
    let wrapped = fallback_model(CLOUD_FALLBACK_COLORS.len());
    assert_eq!(first.vertices[0].color, wrapped.vertices[0].color);
    assert_ne!(first.vertices[0].color, fallback_model(1).vertices[0].color);
    let (lo, hi) = first.bounds().expect("has vertices");
    assert!((hi.y - lo.y) <= CLOUD_MODEL_HEIGHT + 1e-4);
}

#[test]
fn axis_parts_point_along_their_direction() {
    for spec in &CAREER_AXES {
        let dir = Vec3::from_array(spec.direction);
        let shaft = props::axis_shaft(spec);
        assert!(approx(shaft.position, dir * 3.0));
        assert!(approx(shaft.rotation * Vec3::Y, dir));

        let tip = props::axis_tip(spec);
        assert!(approx(tip.position, dir * 6.0));
        assert!(approx(tip.rotation * Vec3::Y, dir));

        assert!(approx(props::label_anchor(spec), dir * 7.0));
    }
}

#[test]
fn origin_marker_sits_at_origin() {
    let marker = props::origin_marker();
    assert_eq!(marker.position, Vec3::ZERO);
    assert!((marker.mesh.bounding_radius() - 0.2 * 3f32.sqrt()).abs() < 1e-3);
}

#[test]
fn gltf_triangle_decodes_with_node_transform() {
    let mesh = mesh_from_gltf_bytes(TRIANGLE_GLTF.as_bytes()).expect("valid document");
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    let (lo, hi) = mesh.bounds().expect("has vertices");
    assert!(approx(lo, Vec3::new(0.0, 2.0, 0.0)));
    assert!(approx(hi, Vec3::new(1.0, 3.0, 0.0)));
    // No COLOR_0 and the default material: white.
    assert_eq!(mesh.vertices[0].color, [1.0, 1.0, 1.0]);
    // Missing normals default to +Y.
    assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = mesh_from_gltf_bytes(b"definitely not a model").unwrap_err();
    assert!(matches!(err, ModelError::Gltf(_)));
}

#[test]
fn fit_height_rescales_and_anchors() {
    let tall = cylinder(0.5, 0.5, 4.0, 8, 0)
        .transformed(Mat4::from_translation(Vec3::new(1.0, 5.0, 0.0)));

    let grounded = fit_height(&tall, 2.0, Anchor::Ground);
    let (lo, hi) = grounded.bounds().expect("has vertices");
    assert!((hi.y - lo.y - 2.0).abs() < 1e-4);
    assert!(lo.y.abs() < 1e-4);
    assert!(approx(Vec3::new(lo.x + hi.x, 0.0, lo.z + hi.z), Vec3::ZERO));

    let centered = fit_height(&tall, 1.6, Anchor::Center);
    let (lo, hi) = centered.bounds().expect("has vertices");
    assert!((hi.y - lo.y - 1.6).abs() < 1e-4);
    assert!(centered.center().length() < 1e-4);
}

#[test]
fn fit_height_leaves_flat_meshes_unscaled() {
    let vertex = |x: f32, z: f32| Vertex {
        position: [x, 0.0, z],
        normal: [0.0, 1.0, 0.0],
        color: [1.0, 1.0, 1.0],
    };
    let flat = MeshData {
        vertices: vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0)],
        indices: vec![0, 1, 2],
    };
    let fitted = fit_height(&flat, 5.0, Anchor::Center);
    let (lo, hi) = fitted.bounds().expect("has vertices");
    assert!((hi.x - lo.x - 1.0).abs() < 1e-4);
    assert_eq!(hi.y - lo.y, 0.0);
}
