//! Initial arrangements and overlap relaxation for groups of placed objects.

use crate::constants::{
    CLOUD_EXTENT, CLOUD_FLOAT_HEIGHT, CLOUD_RING_RADIUS, CLOUD_ROW_SPACING,
    PACKER_COINCIDENCE_EPSILON, PACKER_CORRECTION_FACTOR, PACKER_JITTER, PACKER_MAX_ITERATIONS,
    PACKER_SAFETY_BUFFER,
};
use crate::scene::ObjectId;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Transient per-object state used while relaxing a layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBody {
    pub id: ObjectId,
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackerConfig {
    pub max_iterations: usize,
    /// Extra clearance a corrected pair is pushed out to, beyond the sum of radii.
    pub safety_buffer: f32,
    /// Fraction of the overlap each body of a pair moves per correction.
    pub correction_factor: f32,
    pub coincidence_epsilon: f32,
    /// Length of the random nudge applied to coincident centers.
    pub jitter: f32,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_iterations: PACKER_MAX_ITERATIONS,
            safety_buffer: PACKER_SAFETY_BUFFER,
            correction_factor: PACKER_CORRECTION_FACTOR,
            coincidence_epsilon: PACKER_COINCIDENCE_EPSILON,
            jitter: PACKER_JITTER,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelaxReport {
    pub passes: usize,
    pub corrections: usize,
    pub converged: bool,
}

/// Pairwise repulsion relaxation, O(N^2) per pass.
pub struct LayoutPacker {
    config: PackerConfig,
    rng: StdRng,
}

impl LayoutPacker {
    pub fn new(config: PackerConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Run relaxation passes until one makes no correction or the budget runs out.
    pub fn relax(&mut self, bodies: &mut [LayoutBody]) -> RelaxReport {
        let mut report = RelaxReport::default();
        for _ in 0..self.config.max_iterations {
            report.passes += 1;
            let corrected = self.relaxation_pass(bodies);
            report.corrections += corrected;
            if corrected == 0 {
                report.converged = true;
                break;
            }
        }
        if report.converged {
            log::debug!(
                "[layout] {} bodies settled after {} pass(es), {} correction(s)",
                bodies.len(),
                report.passes,
                report.corrections
            );
        } else {
            log::warn!(
                "[layout] budget of {} passes exhausted with {} overlapping pair(s)",
                self.config.max_iterations,
                overlapping_pairs(bodies, 0.0).len()
            );
        }
        report
    }

    fn relaxation_pass(&mut self, bodies: &mut [LayoutBody]) -> usize {
        let n = bodies.len();
        let mut corrected = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let contact = bodies[i].radius + bodies[j].radius;
                let delta = bodies[j].position - bodies[i].position;
                let dist = delta.length();
                if dist >= contact {
                    continue;
                }
                let (dir, dist) = if dist < self.config.coincidence_epsilon {
                    let nudge = random_unit_vector(&mut self.rng);
                    bodies[j].position += nudge * self.config.jitter;
                    let dist = (bodies[j].position - bodies[i].position).length();
                    (nudge, dist)
                } else {
                    (delta / dist, dist)
                };
                // Overlapping pairs are pushed out past contact to the buffered distance.
                let push =
                    (contact + self.config.safety_buffer - dist) * self.config.correction_factor;
                bodies[i].position -= dir * push;
                bodies[j].position += dir * push;
                corrected += 1;
            }
        }
        corrected
    }
}

/// Index pairs `(i, j)`, `i < j`, closer than the sum of their radii minus `tolerance`.
pub fn overlapping_pairs(bodies: &[LayoutBody], tolerance: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let dist = bodies[i].position.distance(bodies[j].position);
            if dist < bodies[i].radius + bodies[j].radius - tolerance {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Uniformly distributed direction on the unit sphere.
pub fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let theta: f32 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

/// Starting placement for a group of objects, before relaxation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arrangement {
    Ring { radius: f32, height: f32 },
    Row { spacing: f32, height: f32 },
    Cloud { extent: f32, height: f32 },
}

impl Default for Arrangement {
    fn default() -> Self {
        Arrangement::Ring {
            radius: CLOUD_RING_RADIUS,
            height: CLOUD_FLOAT_HEIGHT,
        }
    }
}

impl Arrangement {
    /// Parse a layout name as used in the page's `data-layout` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ring" => Some(Self::default()),
            "row" => Some(Arrangement::Row {
                spacing: CLOUD_ROW_SPACING,
                height: CLOUD_FLOAT_HEIGHT,
            }),
            "cloud" => Some(Arrangement::Cloud {
                extent: CLOUD_EXTENT,
                height: CLOUD_FLOAT_HEIGHT,
            }),
            _ => None,
        }
    }

    pub fn position(&self, index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
        match *self {
            Arrangement::Ring { radius, height } => {
                let angle = index as f32 / count.max(1) as f32 * TAU;
                Vec3::new(radius * angle.cos(), height, radius * angle.sin())
            }
            Arrangement::Row { spacing, height } => {
                let center = (count.max(1) - 1) as f32 * 0.5;
                Vec3::new((index as f32 - center) * spacing, height, 0.0)
            }
            Arrangement::Cloud { extent, height } => Vec3::new(
                rng.gen_range(-extent..=extent),
                height + rng.gen_range(-extent..=extent) * 0.5,
                rng.gen_range(-extent..=extent),
            ),
        }
    }

    pub fn positions(&self, count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
        (0..count).map(|i| self.position(i, count, rng)).collect()
    }
}
