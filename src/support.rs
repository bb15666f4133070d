//! Page-wide capability detection and vendor-prefixed style writes.
//!
//! Both are computed once per page and shared by every scene: the capability
//! descriptor is injected into each effect, and the property-name cache maps
//! a CSS property to the style key that actually exists in this browser.

use crate::constants::{ACCELERATE_STYLES, MOTION_API, ORIENTATION_API, TRANSFORM_PROBE_VALUE};
use crate::dom::js_error;
use crate::style;
use anyhow::Context;
use fnv::FnvHashMap;
use parallax_core::{is_desktop_agent, Capabilities, TransformSupport};
use std::cell::{OnceCell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static CAPABILITIES: OnceCell<Capabilities> = const { OnceCell::new() };
    static PROPERTY_CACHE: RefCell<FnvHashMap<String, String>> =
        RefCell::new(FnvHashMap::default());
}

pub fn capabilities(window: &web::Window) -> Capabilities {
    CAPABILITIES.with(|cell| *cell.get_or_init(|| detect(window)))
}

fn detect(window: &web::Window) -> Capabilities {
    let desktop = window
        .navigator()
        .user_agent()
        .map(|ua| is_desktop_agent(&ua))
        .unwrap_or(true);
    let has_api =
        |name: &str| js_sys::Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false);
    let transform = detect_transform(window).unwrap_or_else(|e| {
        log::warn!("[support] transform probe failed: {:?}", e);
        TransformSupport::None
    });
    let caps = Capabilities {
        desktop,
        orientation_events: has_api(ORIENTATION_API),
        motion_events: has_api(MOTION_API),
        transform,
    };
    log::info!(
        "[support] desktop={} orientation={} motion={} transform={:?}",
        caps.desktop,
        caps.orientation_events,
        caps.motion_events,
        caps.transform
    );
    caps
}

fn detect_transform(window: &web::Window) -> anyhow::Result<TransformSupport> {
    let document = window.document().context("no document")?;
    let probe: web::HtmlElement = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let found = style::transform_candidates()
        .into_iter()
        .find(|(_, js)| has_style_key(&probe.style(), js));
    let Some((css_name, js_name)) = found else {
        return Ok(TransformSupport::None);
    };

    // A 3D transform only shows up in computed style once the probe is attached.
    let root = document.document_element().context("no document element")?;
    let (body, created_body) = match document.body() {
        Some(b) => (b, false),
        None => {
            let b: web::HtmlElement = document
                .create_element("body")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            root.append_child(&b).map_err(js_error)?;
            (b, true)
        }
    };

    body.append_child(&probe).map_err(js_error)?;
    js_sys::Reflect::set(
        &probe.style(),
        &JsValue::from_str(&js_name),
        &JsValue::from_str(TRANSFORM_PROBE_VALUE),
    )
    .map_err(js_error)?;
    let computed = window
        .get_computed_style(&probe)
        .map_err(js_error)?
        .map(|s| s.get_property_value(&css_name).unwrap_or_default())
        .unwrap_or_default();
    body.remove_child(&probe).map_err(js_error)?;
    if created_body {
        root.remove_child(&body).map_err(js_error)?;
    }

    if !computed.is_empty() && computed != "none" {
        Ok(TransformSupport::ThreeD)
    } else {
        Ok(TransformSupport::TwoD)
    }
}

#[inline]
fn has_style_key(style: &web::CssStyleDeclaration, key: &str) -> bool {
    js_sys::Reflect::get(style, &JsValue::from_str(key))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Resolve the style key for `property` (hyphenated CSS name), probing the
/// vendor table on first use.
fn resolve_property(style: &web::CssStyleDeclaration, property: &str) -> String {
    if let Some(hit) = PROPERTY_CACHE.with(|c| c.borrow().get(property).cloned()) {
        return hit;
    }
    let candidates = style::property_candidates(property);
    match candidates.iter().find(|key| has_style_key(style, key)) {
        Some(key) => {
            PROPERTY_CACHE.with(|c| c.borrow_mut().insert(property.to_string(), key.clone()));
            key.clone()
        }
        // Not cached: a later element may expose the property.
        None => candidates.into_iter().next().unwrap_or_default(),
    }
}

/// Write a style property through the vendor-resolved key.
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let key = resolve_property(&style, property);
    if let Err(e) =
        js_sys::Reflect::set(&style, &JsValue::from_str(&key), &JsValue::from_str(value))
    {
        log::warn!("[style] failed to set {}: {:?}", key, e);
    }
}

pub fn accelerate(element: &web::HtmlElement) {
    for (property, value) in ACCELERATE_STYLES {
        set_style(element, property, value);
    }
}
