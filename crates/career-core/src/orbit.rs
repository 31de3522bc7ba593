//! Orbit/pan/zoom camera controls with damping and auto-rotate.
//!
//! The eye is stored in spherical coordinates around a target point: `radius`,
//! azimuth `theta` measured around +Y from +Z, and polar angle `phi` from +Y.
//! Input handlers accumulate deltas; [`OrbitControls::update`] applies a
//! damped fraction of them each frame.

use crate::constants::{
    home_eye, CAMERA_FOVY_DEG, ORBIT_AUTO_ROTATE_SPEED, ORBIT_DAMPING, ORBIT_FOCUS_EASE_PER_SEC,
    ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE,
};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::TAU;

const POLAR_EPSILON: f32 = 1e-6;
const FOCUS_SNAP_DISTANCE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub damping: f32,
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    pub fovy_radians: f32,
    pub focus_ease_per_sec: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            focus_ease_per_sec: ORBIT_FOCUS_EASE_PER_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub config: OrbitConfig,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub auto_rotate: bool,
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
    focus: Option<Vec3>,
    home_eye: Vec3,
    home_target: Vec3,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(OrbitConfig::default(), home_eye(), Vec3::ZERO)
    }
}

impl OrbitControls {
    pub fn new(config: OrbitConfig, eye: Vec3, target: Vec3) -> Self {
        let mut controls = Self {
            config,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            auto_rotate: false,
            target,
            radius: 1.0,
            theta: 0.0,
            phi: 0.0,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            focus: None,
            home_eye: eye,
            home_target: target,
        };
        controls.look_from(eye, target);
        controls
    }

    fn look_from(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.radius = offset.length().max(POLAR_EPSILON);
        self.theta = offset.x.atan2(offset.z);
        self.phi = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;
        self.focus = None;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth_angle(&self) -> f32 {
        self.theta
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        let mut cam = Camera::new(self.eye(), self.target, aspect);
        cam.fovy_radians = self.config.fovy_radians;
        cam
    }

    /// Orbit by a pointer drag of `(dx, dy)` pixels on a viewport `height` pixels tall.
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Pan the target in the camera plane by a pointer drag in pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        let eye = self.eye();
        let forward = (self.target - eye).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let target_distance = self.radius * (self.config.fovy_radians * 0.5).tan();
        let left = 2.0 * dx * target_distance / h;
        let upward = 2.0 * dy * target_distance / h;
        self.pan_offset += -right * left + up * upward;
        self.focus = None;
    }

    /// Dolly in for negative wheel deltas, out for positive ones.
    pub fn zoom(&mut self, wheel_delta_y: f32) {
        if wheel_delta_y == 0.0 {
            return;
        }
        let zoom_scale = 0.95_f32.powf(self.zoom_speed);
        if wheel_delta_y < 0.0 {
            self.scale *= zoom_scale;
        } else {
            self.scale /= zoom_scale;
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        let s = if speed.is_finite() { speed.max(0.0) } else { 1.0 };
        self.rotate_speed = s;
        self.zoom_speed = s;
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Ease the orbit target toward `point` over the next frames.
    pub fn focus_on(&mut self, point: Vec3) {
        self.focus = Some(point);
    }

    pub fn reset(&mut self) {
        let (eye, target) = (self.home_eye, self.home_target);
        self.look_from(eye, target);
    }

    /// Advance by `dt_sec` and return the new eye position.
    pub fn update(&mut self, dt_sec: f32) -> Vec3 {
        let dt = dt_sec.max(0.0);
        if self.auto_rotate {
            self.delta_theta -= TAU / 60.0 * self.config.auto_rotate_speed * dt;
        }

        // Frame-rate independent equivalent of applying `damping` once per 60 Hz frame.
        let apply = if self.config.damping > 0.0 {
            1.0 - (1.0 - self.config.damping.clamp(0.0, 1.0)).powf(dt * 60.0)
        } else {
            1.0
        };

        self.theta += self.delta_theta * apply;
        self.phi += self.delta_phi * apply;
        self.phi = self
            .phi
            .clamp(POLAR_EPSILON, self.config.max_polar.min(std::f32::consts::PI - POLAR_EPSILON));
        self.theta = self.theta.rem_euclid(TAU);

        self.radius = (self.radius * self.scale)
            .clamp(self.config.min_distance, self.config.max_distance);
        self.scale = 1.0;

        self.target += self.pan_offset * apply;
        if let Some(focus) = self.focus {
            let alpha = 1.0 - (-self.config.focus_ease_per_sec * dt).exp();
            self.target = self.target.lerp(focus, alpha);
            if self.target.distance(focus) < FOCUS_SNAP_DISTANCE {
                self.target = focus;
                self.focus = None;
            }
        }

        let keep = 1.0 - apply;
        self.delta_theta *= keep;
        self.delta_phi *= keep;
        self.pan_offset *= keep;
        self.eye()
    }
}
