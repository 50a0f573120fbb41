#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod panel;
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("penguin-ar starting");
    events::wire_error_logging();

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let app = app::App::create(&document);
    events::wire_sample_events(&app);
    events::wire_controls(&document, &app);
    events::wire_page_signals(&document, &app);
    app::dispatch(&app, |c, io| c.boot(io));

    // Scene markup may be injected after this module starts.
    let waiting_since = Instant::now();
    let scene = dom::element_mounted(&document, constants::SCENE_SELECTOR).await?;
    log::info!("[scene] mounted after {:?}", waiting_since.elapsed());
    events::wire_scene_lifecycle(&scene, &document, &app);
    Ok(())
}
