//! Toast Notifications
//!
//! Transient messages stacked in a fixed container at the top-right corner.

use std::rc::Rc;

use crate::context::PageContext;
use crate::dom::{Dom, DomEvent};
use crate::models::Severity;

pub const TOAST_CONTAINER_ID: &str = "toast-container";
const TOAST_CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
const TOAST_CONTAINER_Z_INDEX: &str = "1055";
/// Fired by the widget library once the hide transition finishes
pub const TOAST_HIDDEN_EVENT: &str = "hidden.bs.toast";

/// Show `message` as a toast. Returns the toast element, or `None` when the
/// page has no body to attach to.
pub fn show_toast<D: Dom>(ctx: &PageContext<D>, message: &str, severity: Severity) -> Option<D::Element> {
    let dom = &ctx.dom;
    let container = toast_container(&**dom)?;
    let toast = dom.create_element("div")?;

    dom.set_attribute(
        &toast,
        "class",
        &format!("toast align-items-center text-white bg-{} border-0", severity.style_class()),
    );
    dom.set_attribute(&toast, "role", "alert");
    dom.set_inner_html(&toast, &toast_markup(message));
    dom.append_child(&container, &toast);

    ctx.widgets.show_toast(&toast);

    let remove_dom = Rc::clone(dom);
    let element = toast.clone();
    dom.listen(
        &toast,
        TOAST_HIDDEN_EVENT,
        Rc::new(move |_: &dyn DomEvent| remove_dom.remove(&element)),
    );

    Some(toast)
}

/// Existing container or a freshly created one appended to the body
fn toast_container<D: Dom>(dom: &D) -> Option<D::Element> {
    if let Some(container) = dom.get_by_id(TOAST_CONTAINER_ID) {
        return Some(container);
    }
    let body = dom.body()?;
    let container = dom.create_element("div")?;
    dom.set_attribute(&container, "id", TOAST_CONTAINER_ID);
    dom.set_attribute(&container, "class", TOAST_CONTAINER_CLASS);
    dom.set_style(&container, "z-index", TOAST_CONTAINER_Z_INDEX);
    dom.append_child(&body, &container);
    Some(container)
}

fn toast_markup(message: &str) -> String {
    format!(
        r#"<div class="d-flex"><div class="toast-body">{}</div><button type="button" class="btn-close btn-close-white me-2 m-auto" data-bs-dismiss="toast"></button></div>"#,
        escape_html(message)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
