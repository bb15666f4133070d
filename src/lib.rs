#![cfg(target_arch = "wasm32")]
use parallax_core::{ConfigBuilder, Parallax};
use std::cell::{RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod host;
mod style;
mod support;

use host::{DomHost, SharedEffect};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web loaded");
}

#[inline]
fn to_js(e: anyhow::Error) -> JsError {
    JsError::new(&format!("{:#}", e))
}

/// A parallax scene bound to one root element. Exported to JS as `Parallax`.
///
/// Freeing it from JS without `destroy()` still detaches every listener,
/// frame and timer: dropping the effect disables it while the host's
/// callbacks are alive.
#[wasm_bindgen(js_name = Parallax)]
pub struct Scene {
    effect: SharedEffect,
}

impl Scene {
    fn effect(&self) -> Result<RefMut<'_, Parallax<DomHost>>, JsError> {
        self.effect
            .try_borrow_mut()
            .map_err(|_| JsError::new("scene is busy"))
    }
}

#[wasm_bindgen(js_class = Parallax)]
impl Scene {
    /// Build a scene over `element` and its `.layer` children, then enable it.
    ///
    /// `options` is a plain object whose keys use either naming convention
    /// (`calibrateX` or `calibrate-x`); `data-*` attributes on the element
    /// take precedence. An `onReady` entry must be a function.
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, options: JsValue) -> Result<Scene, JsError> {
        let options = dom::read_options(&options)?;
        let window = web::window().ok_or_else(|| JsError::new("no window"))?;
        let capabilities = support::capabilities(&window);

        let config = ConfigBuilder::new()
            .options(options.entries)
            .attributes(dom::config_attributes(&element))
            .build();
        dom::prepare_root(&window, &element, &config, capabilities).map_err(to_js)?;
        let (nodes, layers) = dom::collect_layers(&element, capabilities);
        log::info!("[scene] {} layers", layers.len());

        let effect: SharedEffect = Rc::new_cyclic(|weak| {
            let host = DomHost::new(window, element, nodes, weak);
            RefCell::new(Parallax::new(config, capabilities, host))
        });
        {
            let mut fx = effect.borrow_mut();
            fx.set_layers(layers);
            fx.initialise();
        }

        if let Some(on_ready) = options.on_ready {
            if let Err(e) = on_ready.call0(&JsValue::NULL) {
                log::warn!("[scene] onReady threw: {:?}", e);
            }
        }
        Ok(Scene { effect })
    }

    pub fn enable(&self) -> Result<(), JsError> {
        self.effect()?.enable();
        Ok(())
    }

    pub fn disable(&self) -> Result<(), JsError> {
        self.effect()?.disable();
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.effect
            .try_borrow()
            .map(|fx| fx.is_enabled())
            .unwrap_or(false)
    }

    pub fn calibrate(&self, x: Option<bool>, y: Option<bool>) -> Result<(), JsError> {
        self.effect()?.calibrate(x, y);
        Ok(())
    }

    pub fn invert(&self, x: Option<bool>, y: Option<bool>) -> Result<(), JsError> {
        self.effect()?.invert(x, y);
        Ok(())
    }

    pub fn friction(&self, x: Option<f32>, y: Option<f32>) -> Result<(), JsError> {
        self.effect()?.friction(x, y);
        Ok(())
    }

    pub fn scalar(&self, x: Option<f32>, y: Option<f32>) -> Result<(), JsError> {
        self.effect()?.scalar(x, y);
        Ok(())
    }

    /// `false` removes the bound on an axis; `undefined` leaves it unchanged.
    pub fn limit(&self, x: JsValue, y: JsValue) -> Result<(), JsError> {
        self.effect()?.limit(dom::limit_arg(&x), dom::limit_arg(&y));
        Ok(())
    }

    pub fn origin(&self, x: Option<f32>, y: Option<f32>) -> Result<(), JsError> {
        self.effect()?.origin(x, y);
        Ok(())
    }

    /// Re-read the `.layer` children after the markup changed.
    #[wasm_bindgen(js_name = updateLayers)]
    pub fn update_layers(&self) -> Result<(), JsError> {
        let mut fx = self.effect()?;
        let element = fx.host().element().clone();
        let (nodes, layers) = dom::collect_layers(&element, fx.capabilities());
        log::info!("[scene] {} layers after update", layers.len());
        fx.host_mut().set_layer_nodes(nodes);
        fx.set_layers(layers);
        Ok(())
    }

    /// Disable for good and release every listener. The scene is inert afterwards.
    pub fn destroy(&self) -> Result<(), JsError> {
        let mut fx = self.effect()?;
        fx.destroy();
        fx.host_mut().release();
        Ok(())
    }
}
