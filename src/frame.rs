use crate::overlay::AxisLabels;
use crate::render;
use career_core::{OrbitControls, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (tab in background) should not fling the camera or the drift clock.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub labels: Option<AxisLabels>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        self.scene.borrow_mut().advance(dt_sec);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let camera = {
            let mut controls = self.controls.borrow_mut();
            controls.update(dt_sec);
            controls.camera(w as f32 / h.max(1) as f32)
        };

        if let Some(labels) = &self.labels {
            let rect = self.canvas.get_bounding_client_rect();
            labels.update(&camera, rect.width() as f32, rect.height() as f32);
        }

        self.gpu.resize_if_needed(w, h);
        let scene = self.scene.borrow();
        self.gpu.sync_meshes(&scene);
        match self.gpu.render(&scene, &camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
