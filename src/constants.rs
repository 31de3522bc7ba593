// Front-end tuning constants: DOM ids, lighting and interaction thresholds.
// Scene geometry and camera defaults live in `career_core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_ID: &str = "loading";
pub const RESET_CAMERA_ID: &str = "resetCamera";
pub const AUTO_ROTATE_ID: &str = "toggleAutoRotate";
pub const CAMERA_SPEED_ID: &str = "cameraSpeed";
pub const LABEL_LAYER_ID: &str = "label-layer";
pub const AXIS_ITEM_SELECTOR: &str = ".axis-item";

pub const AUTO_ROTATE_ON_TEXT: &str = "Stop Auto Rotate";
pub const AUTO_ROTATE_OFF_TEXT: &str = "Auto Rotate";

// Background and fog (0x1a1a2e)
pub const CLEAR_RGB: [f32; 3] = [0.102, 0.102, 0.180];
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;

// Lights
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 5.0];
pub const ACCENT_LIGHT_POSITION: [f32; 3] = [0.0, 5.0, 0.0];
pub const ACCENT_LIGHT_RANGE: f32 = 30.0;
pub const HOVER_EMISSIVE: f32 = 0.2; // 0x333333

// Pointer interaction
pub const CLICK_MAX_TRAVEL_PX: f32 = 5.0; // pointer travel below this counts as a click
pub const WHEEL_LINE_PX: f32 = 16.0; // deltaMode=1 lines to pixels
