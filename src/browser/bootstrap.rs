//! Bootstrap Widgets
//!
//! Bindings to the page's global `bootstrap` bundle.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{CarouselOptions, Widgets};
use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Carousel;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<Carousel, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Toast;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Toast) -> Result<(), JsValue>;
}

fn report(widget: &str, err: JsValue) {
    log::warn!("bootstrap {} failed: {}", widget, UiError::from(err));
}

/// Widgets backed by Bootstrap 5
pub struct BootstrapWidgets;

impl Widgets<Element> for BootstrapWidgets {
    fn init_tooltip(&self, element: &Element) {
        if let Err(err) = Tooltip::new(element) {
            report("Tooltip", err);
        }
    }

    fn init_carousel(&self, element: &Element, options: &CarouselOptions) {
        let options = match serde_wasm_bindgen::to_value(options) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("cannot encode carousel options: {}", err);
                return;
            }
        };
        if let Err(err) = Carousel::new(element, &options) {
            report("Carousel", err);
        }
    }

    fn close_alert(&self, element: &Element) {
        if let Err(err) = Alert::new(element).and_then(|alert| alert.close()) {
            report("Alert", err);
        }
    }

    fn show_toast(&self, element: &Element) {
        if let Err(err) = Toast::new(element).and_then(|toast| toast.show()) {
            report("Toast", err);
        }
    }
}
