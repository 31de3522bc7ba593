use crate::constants::{LABEL_LAYER_ID, LOADING_ID};
use career_core::props::label_anchor;
use career_core::{rgb_from_hex, AxisSpec, Camera};
use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Replace the loading indicator with a user-visible error.
pub fn show_error(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        el.set_text_content(Some(message));
        _ = el.set_attribute("style", "");
        _ = el.class_list().add_1("error");
    }
}

/// HTML labels pinned to 3D anchor points.
pub struct AxisLabels {
    labels: Vec<(web::HtmlElement, Vec3)>,
}

impl AxisLabels {
    /// Create one `.axis-label` element per axis inside `#label-layer` (or `<body>`).
    pub fn create(document: &web::Document, axes: &[AxisSpec]) -> Self {
        let parent: Option<web::Element> = document
            .get_element_by_id(LABEL_LAYER_ID)
            .or_else(|| document.body().map(Into::into));
        let mut labels = Vec::with_capacity(axes.len());
        for spec in axes {
            let Some(el) = document
                .create_element("div")
                .ok()
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            el.set_class_name("axis-label");
            el.set_text_content(Some(spec.label));
            let [r, g, b] = rgb_from_hex(spec.color);
            let style = el.style();
            _ = style.set_property("position", "absolute");
            _ = style.set_property("pointer-events", "none");
            _ = style.set_property("transform", "translate(-50%, -50%)");
            _ = style.set_property(
                "color",
                &format!(
                    "rgb({}, {}, {})",
                    (r * 255.0) as u8,
                    (g * 255.0) as u8,
                    (b * 255.0) as u8
                ),
            );
            if let Some(p) = &parent {
                _ = p.append_child(&el);
            }
            labels.push((el, label_anchor(spec)));
        }
        Self { labels }
    }

    /// Position labels for the current camera; `width`/`height` are CSS pixels.
    pub fn update(&self, camera: &Camera, width: f32, height: f32) {
        for (el, anchor) in &self.labels {
            let style = el.style();
            match camera.project(*anchor, width, height) {
                Some(p) => {
                    _ = style.set_property("display", "block");
                    _ = style.set_property("left", &format!("{:.1}px", p.x));
                    _ = style.set_property("top", &format!("{:.1}px", p.y));
                }
                None => {
                    _ = style.set_property("display", "none");
                }
            }
        }
    }
}
