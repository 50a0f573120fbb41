use crate::core::{format_vec3, parse_vec3, Animation, AnimationSlot, SceneNode, ViewerError, ViewerResult};
use glam::Vec3;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Adapter onto A-Frame entities. Entities accept component values as
/// attribute strings and hand parsed component data back from `getAttribute`.
pub struct AframeScene {
    document: web::Document,
}

#[inline]
pub(crate) fn js_to_viewer(e: JsValue) -> ViewerError {
    ViewerError::Js(format!("{:?}", e))
}

impl AframeScene {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn node(&self, node: SceneNode) -> ViewerResult<web::Element> {
        self.document
            .get_element_by_id(node.element_id())
            .ok_or(ViewerError::MissingElement(node.element_id()))
    }

    pub fn rotation(&self, node: SceneNode) -> ViewerResult<Vec3> {
        let el = self.node(node)?;
        // Go through the entity's own getAttribute: it returns an {x,y,z} object.
        let get_attribute = js_sys::Reflect::get(&el, &JsValue::from_str("getAttribute"))
            .map_err(js_to_viewer)?
            .dyn_into::<js_sys::Function>()
            .map_err(js_to_viewer)?;
        let value = get_attribute
            .call1(&el, &JsValue::from_str("rotation"))
            .map_err(js_to_viewer)?;
        Ok(component_vec3(&value))
    }

    pub fn set_rotation(&self, node: SceneNode, degrees: Vec3) -> ViewerResult<()> {
        self.node(node)?
            .set_attribute("rotation", &format_vec3(degrees))
            .map_err(js_to_viewer)
    }

    pub fn set_scale(&self, node: SceneNode, scale: Vec3) -> ViewerResult<()> {
        self.node(node)?
            .set_attribute("scale", &format_vec3(scale))
            .map_err(js_to_viewer)
    }

    pub fn animate(&self, node: SceneNode, animation: &Animation) -> ViewerResult<()> {
        self.node(node)?
            .set_attribute(animation.slot.attribute_name(), &animation.to_attribute_value())
            .map_err(js_to_viewer)
    }

    pub fn clear_animation(&self, node: SceneNode, slot: AnimationSlot) -> ViewerResult<()> {
        self.node(node)?
            .remove_attribute(slot.attribute_name())
            .map_err(js_to_viewer)
    }
}

/// Read a vec3 component value. Unset components read as zero.
fn component_vec3(value: &JsValue) -> Vec3 {
    if let Some(s) = value.as_string() {
        return parse_vec3(&s).unwrap_or(Vec3::ZERO);
    }
    if !value.is_object() {
        return Vec3::ZERO;
    }
    let axis = |name: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    };
    Vec3::new(axis("x"), axis("y"), axis("z"))
}
