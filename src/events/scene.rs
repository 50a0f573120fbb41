use crate::app::{dispatch, AppHandle};
use crate::constants::{CLICKABLE_CLASS, MODEL_SELECTOR};
use crate::core::{Admission, GestureEvent, SceneLifecycle};
use crate::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Subscribe to the scene root's lifecycle. The first `loaded`/`renderstart`
/// binds the model; later ones are ignored by the controller.
pub fn wire_scene_lifecycle(scene: &web::Element, document: &web::Document, app: &AppHandle) {
    log::info!("[scene] wiring lifecycle events");
    for name in SceneLifecycle::EVENT_NAMES {
        let Some(event) = SceneLifecycle::from_event_name(name) else {
            continue;
        };
        let app = app.clone();
        let document = document.clone();
        dom::add_listener(scene, name, move |_ev: web::Event| {
            on_lifecycle(event, &document, &app);
        });
    }

    // The scene may have finished loading before we subscribed.
    let has_loaded = js_sys::Reflect::get(scene, &JsValue::from_str("hasLoaded"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if has_loaded {
        on_lifecycle(SceneLifecycle::Loaded, document, app);
    }
}

fn on_lifecycle(event: SceneLifecycle, document: &web::Document, app: &AppHandle) {
    if dispatch(app, |c, _| c.scene_event(event)) != Some(Admission::Initialize) {
        return;
    }
    let document = document.clone();
    let app = app.clone();
    spawn_local(async move {
        match dom::element_mounted(&document, MODEL_SELECTOR).await {
            Ok(model) => {
                wire_model(&model, &app);
                wire_gestures(&model, &app);
            }
            Err(e) => log::error!("[scene] model lookup failed: {:?}", e),
        }
    });
}

fn wire_model(model: &web::Element, app: &AppHandle) {
    log::info!("[tap] binding penguin interactions");
    _ = model.class_list().add_1(CLICKABLE_CLASS);

    let app_click = app.clone();
    dom::add_listener(model, "click", move |ev: web::Event| {
        ev.prevent_default();
        ev.stop_propagation();
        ev.stop_immediate_propagation();
        dispatch(&app_click, |c, io| c.tap_model(io));
    });

    let app_enter = app.clone();
    dom::add_listener(model, "mouseenter", move |_ev: web::Event| {
        dispatch(&app_enter, |c, io| c.hover_enter(io));
    });

    let app_leave = app.clone();
    dom::add_listener(model, "mouseleave", move |_ev: web::Event| {
        dispatch(&app_leave, |c, io| c.hover_leave(io));
    });
}

fn wire_gestures(model: &web::Element, app: &AppHandle) {
    log::info!("[gesture] binding gesture listeners");
    for name in GestureEvent::EVENT_NAMES {
        let Some(gesture) = GestureEvent::from_event_name(name) else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(model, name, move |_ev: web::Event| {
            dispatch(&app, |c, _| c.gesture(gesture));
        });
    }
}
