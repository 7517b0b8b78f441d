//! Browser Document
//!
//! `Dom` implementation over `web_sys`. JavaScript exceptions are logged and
//! swallowed so a broken node never takes the rest of the page down.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, File, FileReader, FormData, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::{Dom, DomEvent, Listener, VisibilityOptions};
use crate::error::{UiError, UiResult};

/// Log a JavaScript exception and carry on
fn warn_on_err<T>(result: Result<T, JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{}: {}", context, UiError::from(err));
            None
        }
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

struct BrowserEvent(Event);

impl DomEvent for BrowserEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn from_window() -> UiResult<Self> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Run `f` once the document has been parsed
    pub fn on_ready(&self, f: impl FnOnce() + 'static) {
        if self.document.ready_state() != "loading" {
            f();
            return;
        }
        let on_loaded = Closure::once(f);
        warn_on_err(
            self.document
                .add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref()),
            "cannot wait for DOMContentLoaded",
        );
        on_loaded.forget();
    }
}

impl Dom for BrowserDom {
    type Element = Element;
    type File = File;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn get_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    // Invalid selectors (a bare "#" href, for instance) simply match nothing
    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .unwrap_or_default()
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn query_all_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        root.query_selector_all(selector).map(elements).unwrap_or_default()
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).ok().flatten()
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        warn_on_err(self.document.create_element(tag), "cannot create element")
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        warn_on_err(parent.append_child(child), "cannot append child");
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn inner_html(&self, element: &Element) -> String {
        element.inner_html()
    }

    fn set_inner_html(&self, element: &Element, html: &str) {
        element.set_inner_html(html);
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        warn_on_err(element.set_attribute(name, value), "cannot set attribute");
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        warn_on_err(element.class_list().add_1(class), "cannot add class");
    }

    fn remove_class(&self, element: &Element, class: &str) {
        warn_on_err(element.class_list().remove_1(class), "cannot remove class");
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            warn_on_err(html.style().set_property(property, value), "cannot set style");
        }
    }

    fn value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            element.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_disabled(&self, element: &Element, disabled: bool) {
        if disabled {
            warn_on_err(element.set_attribute("disabled", ""), "cannot disable element");
        } else {
            warn_on_err(element.remove_attribute("disabled"), "cannot enable element");
        }
    }

    fn focus(&self, element: &Element) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            warn_on_err(html.focus(), "cannot focus element");
        }
    }

    fn check_validity(&self, form: &Element) -> bool {
        form.dyn_ref::<HtmlFormElement>()
            .map(HtmlFormElement::check_validity)
            .unwrap_or(true)
    }

    fn form_entries(&self, form: &Element) -> Vec<(String, String)> {
        let Some(form) = form.dyn_ref::<HtmlFormElement>() else {
            return Vec::new();
        };
        let Some(data) = warn_on_err(FormData::new_with_form(form), "cannot read form") else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                // File values have no string form and are skipped
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn selected_files(&self, input: &Element) -> Vec<File> {
        input
            .dyn_ref::<HtmlInputElement>()
            .and_then(HtmlInputElement::files)
            .map(|list| (0..list.length()).filter_map(|index| list.get(index)).collect())
            .unwrap_or_default()
    }

    fn file_type(&self, file: &File) -> String {
        file.type_()
    }

    fn read_as_data_url(&self, file: File, on_load: Box<dyn FnOnce(String)>) {
        let Some(reader) = warn_on_err(FileReader::new(), "cannot create FileReader") else {
            return;
        };
        let result_reader = reader.clone();
        let onload = Closure::once(move || {
            if let Some(data_url) = result_reader.result().ok().and_then(|result| result.as_string()) {
                on_load(data_url);
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        warn_on_err(reader.read_as_data_url(&file), "cannot read file");
    }

    fn listen(&self, target: &Element, event: &str, listener: Listener) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| listener(&BrowserEvent(event)));
        warn_on_err(
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
            "cannot add event listener",
        );
        callback.forget();
    }

    fn observe_visibility(
        &self,
        targets: &[Element],
        options: &VisibilityOptions,
        on_visible: Rc<dyn Fn(&Element)>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let Some(observer) = warn_on_err(
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
            "cannot create IntersectionObserver",
        ) else {
            return;
        };
        for target in targets {
            observer.observe(target);
        }
        callback.forget();
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn location(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        warn_on_err(self.window.location().set_href(url), "cannot navigate");
    }
}
