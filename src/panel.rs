use crate::constants::*;
use crate::core::{ContentEntry, Overlay, ViewerError, ViewerResult};
use crate::scene::js_to_viewer;
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navigation button and the topic key it selects.
pub struct NavButton {
    pub topic: String,
    pub element: web::Element,
}

/// Cached handles onto the info panel, its navigation and the start-up overlays.
pub struct DomPanel {
    panel: Option<web::Element>,
    content: Option<web::Element>,
    text: Option<web::Element>,
    nav: SmallVec<[NavButton; 4]>,
    loading_screen: Option<web::Element>,
    instructions: Option<web::Element>,
}

impl DomPanel {
    pub fn locate(document: &web::Document) -> Self {
        Self {
            panel: document.get_element_by_id(INFO_PANEL_ID),
            content: document.get_element_by_id(INFO_CONTENT_ID),
            text: document.get_element_by_id(INFO_TEXT_ID),
            nav: collect_nav_buttons(document),
            loading_screen: document.get_element_by_id(LOADING_SCREEN_ID),
            instructions: document.get_element_by_id(INSTRUCTIONS_ID),
        }
    }

    pub fn panel(&self) -> Option<&web::Element> {
        self.panel.as_ref()
    }

    pub fn nav_buttons(&self) -> &[NavButton] {
        &self.nav
    }

    pub fn render_entry(&self, entry: &ContentEntry) -> ViewerResult<()> {
        if self.panel.is_none() {
            return Err(ViewerError::MissingElement(INFO_PANEL_ID));
        }
        if let Some(title) = self
            .content
            .as_ref()
            .and_then(|c| c.query_selector(INFO_TITLE_SELECTOR).ok().flatten())
        {
            title.set_text_content(Some(entry.title));
        }
        if let Some(text) = &self.text {
            text.set_inner_html(entry.body_markup);
        }
        Ok(())
    }

    pub fn set_active(&self, active: bool) -> ViewerResult<()> {
        let panel = self
            .panel
            .as_ref()
            .ok_or(ViewerError::MissingElement(INFO_PANEL_ID))?;
        let cl = panel.class_list();
        if active {
            cl.add_1(ACTIVE_CLASS).map_err(js_to_viewer)
        } else {
            cl.remove_1(ACTIVE_CLASS).map_err(js_to_viewer)
        }
    }

    pub fn highlight_nav(&self, topic: &str) {
        for b in &self.nav {
            _ = b
                .element
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, b.topic == topic);
        }
    }

    pub fn set_overlay_visible(&self, overlay: Overlay, visible: bool) -> ViewerResult<()> {
        let (el, id) = match overlay {
            Overlay::LoadingScreen => (&self.loading_screen, LOADING_SCREEN_ID),
            Overlay::Instructions => (&self.instructions, INSTRUCTIONS_ID),
        };
        let el = el.as_ref().ok_or(ViewerError::MissingElement(id))?;
        let style = if visible { "" } else { "display:none" };
        el.set_attribute("style", style).map_err(js_to_viewer)
    }
}

fn collect_nav_buttons(document: &web::Document) -> SmallVec<[NavButton; 4]> {
    let mut out = SmallVec::new();
    let Ok(list) = document.query_selector_all(NAV_BUTTON_SELECTOR) else {
        return out;
    };
    for i in 0..list.length() {
        let Some(element) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        match element.get_attribute(NAV_TOPIC_ATTR) {
            Some(topic) => out.push(NavButton { topic, element }),
            None => log::warn!("[panel] nav button without {}", NAV_TOPIC_ATTR),
        }
    }
    out
}
