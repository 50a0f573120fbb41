use crate::app::{dispatch, AppHandle, WebIo};
use crate::constants::*;
use crate::core::InteractionController;
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Buttons, navigation and the panel backdrop.
pub fn wire_controls(document: &web::Document, app: &AppHandle) {
    wire_command(document, INFO_BUTTON_ID, app, |c, io| c.info_button(io));
    wire_command(document, RESET_BUTTON_ID, app, |c, io| c.reset_button(io));
    wire_command(document, ROTATE_BUTTON_ID, app, |c, io| c.rotate_button(io));
    wire_command(document, CLOSE_BUTTON_ID, app, |c, io| c.close_button(io));
    wire_backdrop(app);
    wire_nav_buttons(app);
}

fn wire_command(
    document: &web::Document,
    element_id: &'static str,
    app: &AppHandle,
    command: impl Fn(&mut InteractionController, &mut WebIo) + 'static,
) {
    let app = app.clone();
    dom::add_click_listener(document, element_id, move |ev: web::Event| {
        ev.prevent_default();
        ev.stop_propagation();
        log::info!("[ui] #{} clicked", element_id);
        dispatch(&app, |c, io| command(c, io));
    });
}

// Only clicks landing on the backdrop itself close the panel.
fn wire_backdrop(app: &AppHandle) {
    let Some(panel) = app.borrow().io.panel().panel().cloned() else {
        log::warn!("[panel] #{} not found", INFO_PANEL_ID);
        return;
    };
    let backdrop: JsValue = panel.clone().into();
    let app = app.clone();
    dom::add_listener(&panel, "click", move |ev: web::Event| {
        let on_backdrop = ev.target().map(JsValue::from).as_ref() == Some(&backdrop);
        dispatch(&app, |c, io| c.panel_clicked(on_backdrop, io));
    });
}

fn wire_nav_buttons(app: &AppHandle) {
    let buttons: Vec<(String, web::Element)> = app
        .borrow()
        .io
        .panel()
        .nav_buttons()
        .iter()
        .map(|b| (b.topic.clone(), b.element.clone()))
        .collect();
    for (topic, element) in buttons {
        let app = app.clone();
        dom::add_listener(&element, "click", move |ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
            log::info!("[ui] nav '{}' clicked", topic);
            dispatch(&app, |c, io| c.nav_button(&topic, io));
        });
    }
}
