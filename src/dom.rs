use crate::constants::*;
use crate::support;
use parallax_core::{
    AttrValue, Capabilities, Config, ConfigKey, Layer, Limit, ParallaxError, TransformSupport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Read and deserialize `data-<name>` from an element.
#[inline]
pub fn data(element: &web::Element, name: &str) -> AttrValue {
    let raw = element.get_attribute(&format!("{DATA_PREFIX}{name}"));
    AttrValue::from_attribute(raw.as_deref())
}

/// Every config attribute present on the scene root.
pub fn config_attributes(element: &web::Element) -> Vec<(String, AttrValue)> {
    ConfigKey::ALL
        .into_iter()
        .map(|key| (key.attribute().to_string(), data(element, key.attribute())))
        .filter(|(_, v)| !v.is_null())
        .collect()
}

/// Caller-supplied options, split into config entries and the ready callback.
#[derive(Default)]
pub struct Options {
    pub entries: Vec<(String, AttrValue)>,
    pub on_ready: Option<js_sys::Function>,
}

pub fn read_options(options: &JsValue) -> Result<Options, ParallaxError> {
    let mut out = Options::default();
    if options.is_undefined() || options.is_null() {
        return Ok(out);
    }
    if !options.is_object() {
        return Err(ParallaxError::invalid_argument("options must be an object"));
    }
    let entries = js_sys::Object::entries(options.unchecked_ref());
    for entry in entries.iter() {
        let pair: js_sys::Array = entry.unchecked_into();
        let key = pair.get(0).as_string().unwrap_or_default();
        let value = pair.get(1);
        if key == ON_READY_OPTION {
            out.on_ready = Some(callback(&value)?);
        } else {
            out.entries.push((key, attr_value(&value)));
        }
    }
    Ok(out)
}

/// Accept only callable handlers.
pub fn callback(value: &JsValue) -> Result<js_sys::Function, ParallaxError> {
    value
        .dyn_ref::<js_sys::Function>()
        .cloned()
        .ok_or_else(|| ParallaxError::invalid_argument("expected function"))
}

fn attr_value(value: &JsValue) -> AttrValue {
    if value.is_undefined() || value.is_null() {
        AttrValue::Null
    } else if let Some(b) = value.as_bool() {
        AttrValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        AttrValue::Number(n)
    } else if let Some(s) = value.as_string() {
        AttrValue::Str(s)
    } else {
        AttrValue::Str(format!("{:?}", value))
    }
}

/// `limit(x, y)` argument: `undefined` leaves the axis alone, `false`
/// removes the bound, a number sets it.
pub fn limit_arg(value: &JsValue) -> Option<Limit> {
    match attr_value(value) {
        AttrValue::Null => None,
        AttrValue::Bool(false) => Some(Limit::Unbounded),
        other => match other.as_number() {
            Some(n) => Some(Limit::Bounded(n as f32)),
            None => {
                log::warn!("[limit] ignoring {:?}", value);
                None
            }
        },
    }
}

/// Style the scene root once at construction.
pub fn prepare_root(
    window: &web::Window,
    element: &web::HtmlElement,
    config: &Config,
    capabilities: Capabilities,
) -> anyhow::Result<()> {
    if capabilities.transform == TransformSupport::ThreeD {
        support::accelerate(element);
    }
    let position = window
        .get_computed_style(element)
        .map_err(js_error)?
        .and_then(|s| s.get_property_value("position").ok())
        .unwrap_or_default();
    let style = element.style();
    if position == "static" {
        style.set_property("position", "relative").map_err(js_error)?;
    }
    if !config.pointer_events {
        style.set_property("pointer-events", "none").map_err(js_error)?;
    }
    Ok(())
}

/// Collect and style the scene's layers in document order, reading each
/// layer's depth attributes.
pub fn collect_layers(
    element: &web::HtmlElement,
    capabilities: Capabilities,
) -> (Vec<web::HtmlElement>, Vec<Layer>) {
    let collection = element.get_elements_by_class_name(LAYER_CLASS);
    let mut nodes = Vec::with_capacity(collection.length() as usize);
    let mut layers = Vec::with_capacity(nodes.capacity());
    for i in 0..collection.length() {
        let Some(node) = collection
            .item(i)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        if capabilities.transform == TransformSupport::ThreeD {
            support::accelerate(&node);
        }
        let style = node.style();
        let position = if nodes.is_empty() { "relative" } else { "absolute" };
        for (property, value) in [
            ("position", position),
            ("display", "block"),
            ("left", "0"),
            ("top", "0"),
        ] {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("[layers] failed to set {}: {:?}", property, e);
            }
        }
        layers.push(Layer::from_attributes(
            &data(&node, DEPTH_ATTR),
            &data(&node, DEPTH_X_ATTR),
            &data(&node, DEPTH_Y_ATTR),
        ));
        nodes.push(node);
    }
    (nodes, layers)
}
