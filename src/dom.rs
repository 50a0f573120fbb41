use crate::core::constants::MOUNT_RETRY_MS;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Attach a listener for the page lifetime.
pub fn add_listener(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[dom] cannot listen for '{}': {:?}", event, e);
    }
    closure.forget();
}

/// Attach a click handler to `#element_id`. Returns false when the element is missing.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            add_listener(&el, "click", handler);
            true
        }
        None => {
            log::warn!("[dom] #{} not found; click handler not attached", element_id);
            false
        }
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(js_error)
}

pub async fn sleep_ms(delay_ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if set_timeout(delay_ms, move || {
            _ = resolve.call0(&JsValue::NULL);
        })
        .is_err()
        {
            log::error!("[dom] timer unavailable");
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Resolve once the document has finished parsing.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let resolve_now = resolve.clone();
        let cb = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            cb.unchecked_ref(),
            &opts,
        ) {
            log::error!("[dom] cannot wait for DOMContentLoaded: {:?}", e);
            _ = resolve_now.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

#[inline]
fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Resolve with the first element matching `selector`, waiting for it to be
/// inserted if necessary. Never times out.
pub async fn element_mounted(document: &web::Document, selector: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = query(document, selector) {
        return Ok(el);
    }
    log::info!("[dom] waiting for {}", selector);

    let doc = document.clone();
    let sel = selector.to_string();
    let mut observed = false;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let doc_cb = doc.clone();
        let sel_cb = sel.clone();
        let on_mutation = Closure::wrap(Box::new(
            move |_records: js_sys::Array, observer: web::MutationObserver| {
                if let Some(el) = query(&doc_cb, &sel_cb) {
                    observer.disconnect();
                    _ = resolve.call1(&JsValue::NULL, &el);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);

        if let Ok(observer) = web::MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
            let init = web::MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            observed = observer.observe_with_options(&doc, &init).is_ok();
        }
        on_mutation.forget();
    });

    if !observed {
        log::warn!("[dom] MutationObserver unavailable; polling for {}", selector);
        loop {
            if let Some(el) = query(document, selector) {
                return Ok(el);
            }
            sleep_ms(MOUNT_RETRY_MS).await;
        }
    }

    // The node may have landed between the first check and observer setup.
    if let Some(el) = query(document, selector) {
        return Ok(el);
    }
    let found = JsFuture::from(promise).await.map_err(js_error)?;
    found
        .dyn_into::<web::Element>()
        .map_err(|v| anyhow!("mounted value is not an element: {:?}", v))
}
