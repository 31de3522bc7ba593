use glam::Vec2;
use web_sys as web;

/// What a pointer drag currently controls.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Orbit,
    Pan,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: DragMode,
    pub last: Vec2,
    pub origin: Vec2,
    pub travel: f32,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, at: Vec2) {
        self.mode = mode;
        self.last = at;
        self.origin = at;
        self.travel = 0.0;
    }

    /// Record a move and return the delta since the previous position.
    pub fn advance(&mut self, at: Vec2) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        self.travel += delta.length();
        delta
    }

    /// End the drag; true when an orbit press barely moved and should count as a click.
    /// Pan presses never count, so a right or shift click does not refocus.
    pub fn end(&mut self, click_max_travel: f32) -> bool {
        let was_click = self.mode == DragMode::Orbit && self.travel <= click_max_travel;
        self.mode = DragMode::None;
        was_click
    }
}

/// Left button orbits unless shift is held; right or middle button pans.
#[inline]
pub fn drag_mode_for(button: i16, shift: bool) -> DragMode {
    match button {
        0 if shift => DragMode::Pan,
        0 => DragMode::Orbit,
        1 | 2 => DragMode::Pan,
        _ => DragMode::None,
    }
}

/// Normalize a wheel delta to pixels (`delta_mode` 0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        1 => d * line_px,
        2 => d * page_px,
        _ => d,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_backing_px(
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset inside an element to its backing-store pixels.
#[inline]
pub fn css_to_backing_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        css / css_size * backing_size
    } else {
        css
    }
}
