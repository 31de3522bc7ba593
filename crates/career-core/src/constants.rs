use glam::Vec3;

// Shared scene/camera tuning constants used by the web frontend and tests.

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_HOME_EYE: [f32; 3] = [8.0, 6.0, 8.0];

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending motion applied per 60 Hz frame
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.5; // one turn per 60 s at 1.0
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 20.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_FOCUS_EASE_PER_SEC: f32 = 4.0;

// Axis cross on the ground plane
pub const AXIS_LENGTH: f32 = 6.0;
pub const AXIS_THICKNESS: f32 = 0.1;
pub const AXIS_LABEL_DISTANCE: f32 = 7.0;
pub const AXIS_TIP_RADIUS: f32 = 0.3;
pub const AXIS_TIP_HEIGHT: f32 = 0.8;
pub const AXIS_PULSE_AMOUNT: f32 = 0.05;
pub const ORIGIN_SPHERE_RADIUS: f32 = 0.2;
pub const RADIAL_SEGMENTS: u32 = 8;

/// One arm of the ground-plane cross.
#[derive(Clone, Copy, Debug)]
pub struct AxisSpec {
    pub direction: [f32; 3],
    pub color: u32,
    pub label: &'static str,
}

pub const CAREER_AXES: [AxisSpec; 4] = [
    AxisSpec {
        direction: [1.0, 0.0, 0.0],
        color: 0xff6b6b,
        label: "Tech/Product",
    },
    AxisSpec {
        direction: [0.0, 0.0, 1.0],
        color: 0x4ecdc4,
        label: "Design",
    },
    AxisSpec {
        direction: [-1.0, 0.0, 0.0],
        color: 0x45b7d1,
        label: "AI",
    },
    AxisSpec {
        direction: [0.0, 0.0, -1.0],
        color: 0x96ceb4,
        label: "Fabrication",
    },
];

// Person model
pub const PERSON_SCALE: f32 = 0.5;
pub const PERSON_SPIN_PER_FRAME: f32 = 0.005; // radians per 60 Hz frame
pub const BODY_COLOR: u32 = 0x8b4513;
pub const SKIN_COLOR: u32 = 0xffdbb5;

pub const PERSON_CANDIDATES: &[&str] = &[
    "C:/Dev/whoisshraddha/assets/shraddhaghuge.glb",
    "../whoisshraddha/assets/shraddhaghuge.glb",
    "./assets/shraddhaghuge.glb",
    "assets/shraddhaghuge.glb",
];

// Model cloud
pub const CLOUD_MODEL_HEIGHT: f32 = 1.6; // loaded models are normalized to this height
pub const CLOUD_RING_RADIUS: f32 = 4.0;
pub const CLOUD_ROW_SPACING: f32 = 2.5;
pub const CLOUD_EXTENT: f32 = 3.0;
pub const CLOUD_FLOAT_HEIGHT: f32 = 1.0;
pub const CLOUD_LAYOUT_SEED: u64 = 7;

pub const CLOUD_MODELS: &[&[&str]] = &[
    &["./assets/models/laptop.glb", "assets/models/laptop.glb"],
    &["./assets/models/sketchbook.glb", "assets/models/sketchbook.glb"],
    &["./assets/models/robot_arm.glb", "assets/models/robot_arm.glb"],
    &["./assets/models/chip.glb", "assets/models/chip.glb"],
    &["./assets/models/printer.glb", "assets/models/printer.glb"],
];

pub const CLOUD_FALLBACK_COLORS: [u32; 5] = [0xff6b6b, 0x4ecdc4, 0x45b7d1, 0x96ceb4, 0xf7d794];

// Layout relaxation
pub const PACKER_MAX_ITERATIONS: usize = 64;
pub const PACKER_SAFETY_BUFFER: f32 = 0.05;
pub const PACKER_CORRECTION_FACTOR: f32 = 0.55;
pub const PACKER_COINCIDENCE_EPSILON: f32 = 1e-5;
pub const PACKER_JITTER: f32 = 1e-3;

#[inline]
pub fn home_eye() -> Vec3 {
    Vec3::from_array(CAMERA_HOME_EYE)
}

/// Convert a packed 0xRRGGBB color into linear-ish RGB floats.
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
