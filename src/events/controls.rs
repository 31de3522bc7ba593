use crate::constants::{
    AUTO_ROTATE_ID, AUTO_ROTATE_OFF_TEXT, AUTO_ROTATE_ON_TEXT, AXIS_ITEM_SELECTOR,
    CAMERA_SPEED_ID, RESET_CAMERA_ID,
};
use crate::dom;
use career_core::{OrbitControls, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook up the control panel: reset, auto-rotate toggle and speed slider.
pub fn wire_camera_controls(document: &web::Document, controls: &Rc<RefCell<OrbitControls>>) {
    let reset = controls.clone();
    dom::add_click_listener(document, RESET_CAMERA_ID, move || {
        reset.borrow_mut().reset();
        log::info!("[controls] camera reset");
    });

    if let Some(button) = document.get_element_by_id(AUTO_ROTATE_ID) {
        let toggle = controls.clone();
        let label = button.clone();
        dom::add_click_listener(document, AUTO_ROTATE_ID, move || {
            let on = toggle.borrow_mut().toggle_auto_rotate();
            label.set_text_content(Some(if on {
                AUTO_ROTATE_ON_TEXT
            } else {
                AUTO_ROTATE_OFF_TEXT
            }));
        });
    }

    if let Some(slider) = document
        .get_element_by_id(CAMERA_SPEED_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let speed = controls.clone();
        let input = slider.clone();
        dom::listen(&slider, "input", move |_: web::Event| {
            match input.value().trim().parse::<f32>() {
                Ok(v) => speed.borrow_mut().set_speed(v),
                Err(_) => log::warn!("[controls] ignoring speed {:?}", input.value()),
            }
        });
    }
}

/// Highlight an axis while its legend entry is hovered.
///
/// Entries map to axes by `data-axis` when present, otherwise by document order.
pub fn wire_axis_legend(document: &web::Document, scene: &Rc<RefCell<Scene>>) {
    let Ok(items) = document.query_selector_all(AXIS_ITEM_SELECTOR) else {
        return;
    };
    for n in 0..items.length() {
        let Some(item) = items
            .get(n)
            .and_then(|node| node.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let index = dom::data_attribute(&item, "axis")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(n as usize);

        let enter = scene.clone();
        dom::listen(&item, "mouseenter", move |_: web::MouseEvent| {
            enter.borrow_mut().set_axis_highlight(index, true);
        });
        let leave = scene.clone();
        dom::listen(&item, "mouseleave", move |_: web::MouseEvent| {
            leave.borrow_mut().set_axis_highlight(index, false);
        });
    }
}
