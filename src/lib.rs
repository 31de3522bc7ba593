#![cfg(target_arch = "wasm32")]
use career_core::{OrbitControls, Scene, CAREER_AXES};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;
mod setup;
mod variant;

use constants::CANVAS_ID;
use variant::Variant;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("career-graph-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_error(&doc, &format!("Could not start the 3D view: {}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let variant = Variant::from_attributes(
        dom::data_attribute(&canvas, "variant").as_deref(),
        dom::data_attribute(&canvas, "layout").as_deref(),
    );
    log::info!("[init] variant {:?}", variant);

    let gpu = render::GpuState::new(&canvas).await?;

    let scene = Rc::new(RefCell::new(Scene::new()));
    setup::build_scene(variant, &scene);

    let controls = Rc::new(RefCell::new(OrbitControls::default()));
    let labels = variant
        .shows_axes()
        .then(|| overlay::AxisLabels::create(&document, &CAREER_AXES));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        controls: controls.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
        focus_on_click: variant.focus_on_click(),
    });
    events::wire_camera_controls(&document, &controls);
    if variant.shows_axes() {
        events::wire_axis_legend(&document, &scene);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        controls,
        canvas,
        gpu,
        labels,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
