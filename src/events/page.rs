use crate::app::{dispatch, AppHandle};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Visibility pauses the penguin call; orientation changes re-apply the rest pose.
pub fn wire_page_signals(document: &web::Document, app: &AppHandle) {
    let app_vis = app.clone();
    let doc = document.clone();
    dom::add_listener(document, "visibilitychange", move |_ev: web::Event| {
        let hidden = doc.hidden();
        dispatch(&app_vis, |c, io| c.visibility_changed(hidden, io));
    });

    if let Some(window) = web::window() {
        let app_orient = app.clone();
        dom::add_listener(&window, "orientationchange", move |_ev: web::Event| {
            dispatch(&app_orient, |c, io| c.orientation_changed(io));
        });
    }
}

pub fn wire_sample_events(app: &AppHandle) {
    let Some(sample) = app.borrow().io.sample_element() else {
        return;
    };
    dom::add_listener(&sample, "canplaythrough", |_ev: web::Event| {
        log::info!("[audio] penguin sample loaded");
    });
    dom::add_listener(&sample, "error", |ev: web::Event| {
        log::error!("[audio] penguin sample failed to load: {:?}", ev.type_());
    });
    let app = app.clone();
    dom::add_listener(&sample, "ended", move |_ev: web::Event| {
        dispatch(&app, |c, _| c.sample_ended());
    });
}

/// Log uncaught errors instead of surfacing them.
pub fn wire_error_logging() {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "error", |ev: web::Event| {
        match ev.dyn_ref::<web::ErrorEvent>() {
            Some(err) => log::error!(
                "application error: {} ({}:{})",
                err.message(),
                err.filename(),
                err.lineno()
            ),
            None => log::error!("application error: {:?}", ev.type_()),
        }
    });
}
