use crate::dom;
use crate::loader::FetchLoader;
use crate::overlay;
use crate::variant::Variant;
use career_core::motion::{spin_rate_per_sec, MotionParams};
use career_core::props::{self, PropPart};
use career_core::{
    fit_height, Anchor, Arrangement, AssetResolver, LayoutPacker, ObjectKind, PackerConfig,
    PlacedObject, Scene, CAREER_AXES, CLOUD_LAYOUT_SEED, CLOUD_MODELS, CLOUD_MODEL_HEIGHT,
    PERSON_CANDIDATES, PERSON_SCALE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

fn place(kind: ObjectKind, part: PropPart) -> PlacedObject {
    PlacedObject::new(kind, part.mesh)
        .with_position(part.position)
        .with_rotation(part.rotation)
}

/// Ground-plane cross: pulsing shafts, arrow tips and the origin marker.
pub fn build_axes(scene: &mut Scene) {
    for (i, spec) in CAREER_AXES.iter().enumerate() {
        scene.insert(place(ObjectKind::AxisShaft(i), props::axis_shaft(spec)).with_pulse(i));
        scene.insert(place(ObjectKind::AxisTip(i), props::axis_tip(spec)));
    }
    scene.insert(place(ObjectKind::Origin, props::origin_marker()));
}

/// Populate the scene for `variant`; asset loads continue in the background.
pub fn build_scene(variant: Variant, scene: &Rc<RefCell<Scene>>) {
    match variant {
        Variant::CareerGraph => {
            build_axes(&mut scene.borrow_mut());
            spawn_person(scene.clone());
        }
        Variant::ModelCloud(arrangement) => spawn_cloud(scene.clone(), arrangement),
    }
}

fn spawn_person(scene: Rc<RefCell<Scene>>) {
    spawn_local(async move {
        let resolver = AssetResolver::new("person", PERSON_CANDIDATES.iter().copied());
        let person = resolver
            .resolve_with(
                &mut FetchLoader,
                |mesh| PlacedObject::new(ObjectKind::Person, mesh).with_scale(PERSON_SCALE),
                || PlacedObject::new(ObjectKind::Person, props::fallback_person()),
            )
            .await
            .with_spin(spin_rate_per_sec());
        scene.borrow_mut().insert(person);
        if let Some(doc) = dom::window_document() {
            overlay::hide_loading(&doc);
        }
    });
}

fn spawn_cloud(scene: Rc<RefCell<Scene>>, arrangement: Arrangement) {
    let count = CLOUD_MODELS.len();
    let packer = Rc::new(RefCell::new(LayoutPacker::new(
        PackerConfig::default(),
        CLOUD_LAYOUT_SEED,
    )));
    // Slots and drift are drawn up front so they do not depend on load order.
    let slots = {
        let mut packer = packer.borrow_mut();
        let rng = packer.rng_mut();
        let mut slots = Vec::with_capacity(count);
        for i in 0..count {
            slots.push((arrangement.position(i, count, rng), MotionParams::drift(rng)));
        }
        slots
    };
    log::info!("[layout] placing {} models in {:?}", count, arrangement);

    for (i, (candidates, (slot, drift))) in CLOUD_MODELS.iter().zip(slots).enumerate() {
        let scene = scene.clone();
        let packer = packer.clone();
        spawn_local(async move {
            let resolver = AssetResolver::new(format!("model {}", i), candidates.iter().copied());
            let mesh = resolver
                .resolve_or_else(&mut FetchLoader, || props::fallback_model(i))
                .await;
            let object = PlacedObject::new(
                ObjectKind::Model(i),
                fit_height(&mesh, CLOUD_MODEL_HEIGHT, Anchor::Center),
            )
            .with_position(slot)
            .with_motion(drift)
            .with_spin(spin_rate_per_sec() * 0.5);

            let mut scene = scene.borrow_mut();
            scene.insert(object);
            if scene.model_count() > 1 {
                let report = scene.relax_models(&mut packer.borrow_mut());
                log::info!(
                    "[layout] {} models relaxed: {} pass(es), {} correction(s), converged={}",
                    scene.model_count(),
                    report.passes,
                    report.corrections,
                    report.converged
                );
            }
            if let Some(doc) = dom::window_document() {
                overlay::hide_loading(&doc);
            }
        });
    }
}
