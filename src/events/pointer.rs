use crate::constants::{CLICK_MAX_TRAVEL_PX, WHEEL_LINE_PX};
use crate::dom;
use crate::input;
use career_core::{OrbitControls, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    pub focus_on_click: bool,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "pointerdown", move |ev: web::PointerEvent| {
        let mode = input::drag_mode_for(ev.button(), ev.shift_key());
        if mode == input::DragMode::None {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.drag_state.borrow_mut().begin(mode, pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        let mode = w.drag_state.borrow().mode;
        if mode == input::DragMode::None {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let delta = w.drag_state.borrow_mut().advance(pos);
        let height = w.canvas.height() as f32;
        let mut controls = w.controls.borrow_mut();
        match mode {
            input::DragMode::Orbit => controls.rotate(delta.x, delta.y, height),
            input::DragMode::Pan => controls.pan(delta.x, delta.y, height),
            input::DragMode::None => {}
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "pointerup", move |ev: web::PointerEvent| {
        let dpr = web::window()
            .map(|wnd| wnd.device_pixel_ratio() as f32)
            .unwrap_or(1.0);
        let was_click = w.drag_state.borrow_mut().end(CLICK_MAX_TRAVEL_PX * dpr);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if was_click && w.focus_on_click {
            focus_at(&w, input::pointer_canvas_px(&ev, &w.canvas));
        }
    });
}

fn focus_at(w: &InputWiring, pos: glam::Vec2) {
    let width = w.canvas.width() as f32;
    let height = w.canvas.height() as f32;
    let camera = w.controls.borrow().camera(width / height.max(1.0));
    let (ro, rd) = camera.screen_ray(pos.x, pos.y, width, height);
    let scene = w.scene.borrow();
    match scene.pick(ro, rd) {
        Some(id) => {
            if let Some(object) = scene.get(id) {
                let center = object.center_at(scene.time());
                log::info!("[input] focus on {:?} at {:?}", object.kind, center);
                w.controls.borrow_mut().focus_on(center);
            }
        }
        None => log::debug!("[input] click hit nothing"),
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::listen(&target, "wheel", move |ev: web::WheelEvent| {
        let page_px = w.canvas.client_height() as f32;
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, page_px);
        w.controls.borrow_mut().zoom(dy);
        ev.prevent_default();
    });
}

fn wire_contextmenu(w: &InputWiring) {
    dom::listen(&w.canvas, "contextmenu", |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}
