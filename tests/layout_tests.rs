// Host-side tests for overlap relaxation and initial arrangements.

use career_core::layout::{overlapping_pairs, random_unit_vector};
use career_core::{Arrangement, LayoutBody, LayoutPacker, ObjectId, PackerConfig};
use glam::Vec3;
use rand::prelude::*;

fn body(id: u32, position: Vec3, radius: f32) -> LayoutBody {
    LayoutBody {
        id: ObjectId(id),
        position,
        radius,
    }
}

fn packer() -> LayoutPacker {
    LayoutPacker::new(PackerConfig::default(), 7)
}

fn assert_separated(bodies: &[LayoutBody], tolerance: f32) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let d = bodies[i].position.distance(bodies[j].position);
            let min = bodies[i].radius + bodies[j].radius - tolerance;
            assert!(d >= min, "bodies {} and {} at {} < {}", i, j, d, min);
        }
    }
}

#[test]
fn overlapping_pair_is_pushed_apart() {
    let mut bodies = [body(0, Vec3::ZERO, 1.0), body(1, Vec3::new(0.5, 0.0, 0.0), 1.0)];
    let report = packer().relax(&mut bodies);

    assert!(report.converged);
    assert!(report.corrections >= 1);
    assert_separated(&bodies, 0.01);
    // Symmetric push along the line of centers.
    assert!(bodies[0].position.x < 0.0);
    assert!(bodies[1].position.x > 0.5);
    assert!(bodies[0].position.y.abs() < 1e-6 && bodies[1].position.z.abs() < 1e-6);
}

#[test]
fn default_config_matches_documented_tuning() {
    let packer = packer();
    let config = packer.config();
    assert_eq!(config.correction_factor, 0.55);
    assert_eq!(config.safety_buffer, 0.05);
}

#[test]
fn separated_bodies_are_left_untouched() {
    let original = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::new(5.0, 0.0, 0.0), 1.0),
        body(2, Vec3::new(0.0, 0.0, 5.0), 1.5),
    ];
    let mut bodies = original;
    let report = packer().relax(&mut bodies);

    assert_eq!(report.corrections, 0);
    assert_eq!(report.passes, 1);
    assert!(report.converged);
    assert_eq!(bodies, original);
}

#[test]
fn pair_inside_the_buffer_band_is_not_moved() {
    // Apart by more than the sum of radii but less than the safety buffer beyond it.
    let original = [body(0, Vec3::ZERO, 1.0), body(1, Vec3::new(2.02, 0.0, 0.0), 1.0)];
    let mut bodies = original;
    let report = packer().relax(&mut bodies);

    assert_eq!(report.corrections, 0);
    assert_eq!(report.passes, 1);
    assert!(report.converged);
    assert_eq!(bodies, original);
}

#[test]
fn corrected_pair_ends_beyond_the_safety_buffer() {
    let mut bodies = [body(0, Vec3::ZERO, 1.0), body(1, Vec3::new(1.9, 0.0, 0.0), 1.0)];
    let report = packer().relax(&mut bodies);

    assert_eq!((report.passes, report.corrections), (2, 1));
    let gap = bodies[0].position.distance(bodies[1].position);
    assert!(gap >= 2.0 + PackerConfig::default().safety_buffer, "gap {}", gap);
}

#[test]
fn coincident_centers_are_separated() {
    let mut bodies = [body(0, Vec3::ONE, 1.0), body(1, Vec3::ONE, 1.0)];
    let report = packer().relax(&mut bodies);

    assert!(report.converged);
    assert!(bodies[0].position.is_finite() && bodies[1].position.is_finite());
    assert_ne!(bodies[0].position, bodies[1].position);
    assert_separated(&bodies, 0.01);
}

#[test]
fn same_seed_reproduces_the_same_layout() {
    let start = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::ZERO, 1.0),
        body(2, Vec3::new(0.2, 0.0, 0.0), 0.5),
    ];
    let mut a = start;
    let mut b = start;
    LayoutPacker::new(PackerConfig::default(), 42).relax(&mut a);
    LayoutPacker::new(PackerConfig::default(), 42).relax(&mut b);
    assert_eq!(a, b);
}

#[test]
fn relaxing_a_settled_layout_is_a_no_op() {
    let mut bodies = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::new(0.3, 0.1, 0.0), 0.8),
        body(2, Vec3::new(-0.2, 0.0, 0.4), 1.2),
    ];
    let mut p = packer();
    let first = p.relax(&mut bodies);
    assert!(first.converged);

    let settled = bodies;
    let second = p.relax(&mut bodies);
    assert_eq!(second.corrections, 0);
    assert_eq!(second.passes, 1);
    assert_eq!(bodies, settled);
}

#[test]
fn three_coincident_bodies_settle_with_a_larger_budget() {
    let config = PackerConfig {
        max_iterations: 200,
        ..PackerConfig::default()
    };
    let mut bodies = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::ZERO, 1.0),
        body(2, Vec3::ZERO, 1.0),
    ];
    let report = LayoutPacker::new(config, 3).relax(&mut bodies);

    assert!(report.converged, "{:?}", report);
    assert!(overlapping_pairs(&bodies, 0.0).is_empty());
}

#[test]
fn exhausted_budget_is_reported() {
    let config = PackerConfig {
        max_iterations: 1,
        ..PackerConfig::default()
    };
    let mut bodies = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::new(0.1, 0.0, 0.0), 1.0),
        body(2, Vec3::new(0.2, 0.0, 0.0), 1.0),
    ];
    let report = LayoutPacker::new(config, 1).relax(&mut bodies);

    assert_eq!(report.passes, 1);
    assert!(!report.converged);
    assert!(report.corrections > 0);
}

#[test]
fn empty_and_single_inputs_converge_in_one_pass() {
    let mut p = packer();
    let mut none: [LayoutBody; 0] = [];
    let report = p.relax(&mut none);
    assert_eq!((report.passes, report.corrections, report.converged), (1, 0, true));

    let mut one = [body(0, Vec3::new(1.0, 2.0, 3.0), 4.0)];
    let report = p.relax(&mut one);
    assert_eq!((report.passes, report.corrections, report.converged), (1, 0, true));
    assert_eq!(one[0].position, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn relax_keeps_ids_with_their_slots() {
    let mut bodies = [
        body(10, Vec3::ZERO, 1.0),
        body(20, Vec3::new(0.5, 0.0, 0.0), 1.0),
    ];
    packer().relax(&mut bodies);
    assert_eq!(bodies[0].id, ObjectId(10));
    assert_eq!(bodies[1].id, ObjectId(20));
}

#[test]
fn overlapping_pairs_respects_tolerance() {
    let bodies = [
        body(0, Vec3::ZERO, 1.0),
        body(1, Vec3::new(1.95, 0.0, 0.0), 1.0),
        body(2, Vec3::new(10.0, 0.0, 0.0), 1.0),
    ];
    assert_eq!(overlapping_pairs(&bodies, 0.0), vec![(0, 1)]);
    assert!(overlapping_pairs(&bodies, 0.1).is_empty());
}

#[test]
fn random_unit_vectors_have_unit_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let v = random_unit_vector(&mut rng);
        assert!((v.length() - 1.0).abs() < 1e-4, "{:?}", v);
    }
}

#[test]
fn ring_places_models_evenly_at_radius() {
    let mut rng = StdRng::seed_from_u64(0);
    let ring = Arrangement::Ring {
        radius: 4.0,
        height: 1.0,
    };
    let points = ring.positions(4, &mut rng);
    assert_eq!(points.len(), 4);
    for p in &points {
        assert!((Vec3::new(p.x, 0.0, p.z).length() - 4.0).abs() < 1e-4);
        assert!((p.y - 1.0).abs() < 1e-6);
    }
    assert!((points[0] - Vec3::new(4.0, 1.0, 0.0)).length() < 1e-4);
    assert!((points[1] - Vec3::new(0.0, 1.0, 4.0)).length() < 1e-4);
}

#[test]
fn row_is_centered_on_origin() {
    let mut rng = StdRng::seed_from_u64(0);
    let row = Arrangement::Row {
        spacing: 2.0,
        height: 0.0,
    };
    let xs: Vec<f32> = row.positions(3, &mut rng).iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![-2.0, 0.0, 2.0]);
}

#[test]
fn cloud_stays_within_extent() {
    let mut rng = StdRng::seed_from_u64(9);
    let cloud = Arrangement::Cloud {
        extent: 3.0,
        height: 1.0,
    };
    for p in cloud.positions(50, &mut rng) {
        assert!(p.x.abs() <= 3.0 && p.z.abs() <= 3.0);
        assert!(p.y >= -0.5 && p.y <= 2.5);
    }
}

#[test]
fn arrangement_names_parse() {
    assert_eq!(Arrangement::from_name("ring"), Some(Arrangement::default()));
    assert!(matches!(
        Arrangement::from_name(" Row "),
        Some(Arrangement::Row { .. })
    ));
    assert!(matches!(
        Arrangement::from_name("CLOUD"),
        Some(Arrangement::Cloud { .. })
    ));
    assert_eq!(Arrangement::from_name("spiral"), None);
}

#[test]
fn stacked_bodies_settle_within_the_default_budget() {
    for seed in 0..20 {
        let mut bodies: Vec<LayoutBody> = (0..5)
            .map(|i| body(i, Vec3::new(0.0, 1.0, 0.0), 0.866))
            .collect();
        let report = LayoutPacker::new(PackerConfig::default(), seed).relax(&mut bodies);

        assert!(report.converged, "seed {}: {:?}", seed, report);
        assert!(overlapping_pairs(&bodies, 0.0).is_empty(), "seed {}", seed);
    }
}
