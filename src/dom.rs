//! Page Access Traits
//!
//! Everything the handlers need from the browser, behind traits so the
//! binding logic can run against the real DOM or an in-memory document.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Event passed to listeners
pub trait DomEvent {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// Listener callback registered with [`Dom::listen`]
pub type Listener = Rc<dyn Fn(&dyn DomEvent)>;

/// Future spawned on the page's local executor
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Intersection observer settings for the scroll reveal
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Options handed to the carousel widget constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Rotation interval in milliseconds
    pub interval: u32,
    pub wrap: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self { interval: 5000, wrap: true }
    }
}

/// Document queries and mutations.
///
/// Lookups that fail (missing node, invalid selector) return `None` or an
/// empty list; mutations on detached or unsupported nodes are no-ops.
pub trait Dom: 'static {
    type Element: Clone + 'static;
    type File: 'static;

    // ========================
    // Lookup
    // ========================

    fn body(&self) -> Option<Self::Element>;
    fn get_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn query_within(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;
    fn query_all_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    // ========================
    // Tree
    // ========================

    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);
    fn remove(&self, element: &Self::Element);
    fn inner_html(&self, element: &Self::Element) -> String;
    fn set_inner_html(&self, element: &Self::Element, html: &str);

    // ========================
    // Attributes and style
    // ========================

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    /// Set an inline style property, using CSS property names
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    // ========================
    // Forms
    // ========================

    fn value(&self, element: &Self::Element) -> String;
    fn set_disabled(&self, element: &Self::Element, disabled: bool);
    fn focus(&self, element: &Self::Element);
    fn check_validity(&self, form: &Self::Element) -> bool;
    /// Successful controls of a form as (name, value) pairs, in form order
    fn form_entries(&self, form: &Self::Element) -> Vec<(String, String)>;

    // ========================
    // Files
    // ========================

    fn selected_files(&self, input: &Self::Element) -> Vec<Self::File>;
    fn file_type(&self, file: &Self::File) -> String;
    /// Read a file as a data URL; `on_load` runs once the read completes
    fn read_as_data_url(&self, file: Self::File, on_load: Box<dyn FnOnce(String)>);

    // ========================
    // Events, viewport and navigation
    // ========================

    fn listen(&self, target: &Self::Element, event: &str, listener: Listener);
    /// Call `on_visible` each time one of `targets` intersects the viewport
    fn observe_visibility(
        &self,
        targets: &[Self::Element],
        options: &VisibilityOptions,
        on_visible: Rc<dyn Fn(&Self::Element)>,
    );
    fn scroll_into_view(&self, element: &Self::Element);
    fn location(&self) -> String;
    fn navigate(&self, url: &str);
}

/// Timers and local task spawning
pub trait Scheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>);
    fn spawn(&self, task: LocalTask);
}

/// Third-party widget behaviors (tooltips, carousels, alerts, toasts)
pub trait Widgets<E> {
    fn init_tooltip(&self, element: &E);
    fn init_carousel(&self, element: &E, options: &CarouselOptions);
    fn close_alert(&self, element: &E);
    fn show_toast(&self, element: &E);
}
