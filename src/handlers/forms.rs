//! Form Handlers
//!
//! Search guard, native validation styling, image upload previews and the
//! loading state of submit buttons.

use std::rc::Rc;

use crate::context::PageContext;
use crate::dom::{Dom, DomEvent};

pub const SEARCH_FORM_ID: &str = "searchForm";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const VALIDATED_FORM_SELECTOR: &str = ".needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated";
pub const IMAGE_INPUT_SELECTOR: &str = r#"input[type="file"][accept*="image"]"#;
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

const THUMBNAIL_CLASS: &str = "img-thumbnail me-2 mb-2";
const THUMBNAIL_SIZE: &str = "100px";
pub const LOADING_LABEL: &str = r#"<span class="spinner-border spinner-border-sm me-2"></span>Loading..."#;

/// Block empty searches. Returns whether the search form was found.
pub fn bind_search_guard<D: Dom>(ctx: &PageContext<D>) -> bool {
    let Some(form) = ctx.dom.get_by_id(SEARCH_FORM_ID) else {
        return false;
    };
    let dom = Rc::clone(&ctx.dom);
    ctx.dom.listen(
        &form,
        "submit",
        Rc::new(move |ev: &dyn DomEvent| {
            let Some(input) = dom.get_by_id(SEARCH_INPUT_ID) else {
                return;
            };
            if dom.value(&input).trim().is_empty() {
                ev.prevent_default();
                dom.focus(&input);
            }
        }),
    );
    true
}

/// Bootstrap-style validation on `.needs-validation` forms
pub fn bind_validation<D: Dom>(ctx: &PageContext<D>) -> usize {
    let forms = ctx.dom.query_all(VALIDATED_FORM_SELECTOR);
    for form in &forms {
        let dom = Rc::clone(&ctx.dom);
        let target = form.clone();
        ctx.dom.listen(
            form,
            "submit",
            Rc::new(move |ev: &dyn DomEvent| {
                if !dom.check_validity(&target) {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
                dom.add_class(&target, VALIDATED_CLASS);
            }),
        );
    }
    forms.len()
}

/// Thumbnail previews for image file inputs
pub fn bind_image_previews<D: Dom>(ctx: &PageContext<D>) -> usize {
    let inputs = ctx.dom.query_all(IMAGE_INPUT_SELECTOR);
    for input in &inputs {
        let dom = Rc::clone(&ctx.dom);
        let target = input.clone();
        ctx.dom.listen(
            input,
            "change",
            Rc::new(move |_: &dyn DomEvent| render_previews(&dom, &target)),
        );
    }
    inputs.len()
}

fn render_previews<D: Dom>(dom: &Rc<D>, input: &D::Element) {
    let files = dom.selected_files(input);
    let Some(input_id) = dom.attribute(input, "id").filter(|id| !id.is_empty()) else {
        return;
    };
    let Some(container) = dom.get_by_id(&format!("{}-preview", input_id)) else {
        return;
    };
    if files.is_empty() {
        return;
    }

    dom.set_inner_html(&container, "");
    for file in files {
        if !dom.file_type(&file).starts_with("image/") {
            continue;
        }
        let thumb_dom = Rc::clone(dom);
        let container = container.clone();
        dom.read_as_data_url(
            file,
            Box::new(move |data_url| {
                let Some(img) = thumb_dom.create_element("img") else {
                    return;
                };
                thumb_dom.set_attribute(&img, "src", &data_url);
                thumb_dom.set_attribute(&img, "class", THUMBNAIL_CLASS);
                thumb_dom.set_style(&img, "width", THUMBNAIL_SIZE);
                thumb_dom.set_style(&img, "height", THUMBNAIL_SIZE);
                thumb_dom.set_style(&img, "object-fit", "cover");
                thumb_dom.append_child(&container, &img);
            }),
        );
    }
}

/// Disable submit buttons while their form submits.
///
/// The button comes back after the configured fallback delay whether or not
/// the submission finished; the timer is never cancelled.
pub fn bind_submit_loading<D: Dom>(ctx: &PageContext<D>) -> usize {
    let mut bound = 0;
    for button in ctx.dom.query_all(SUBMIT_BUTTON_SELECTOR) {
        let Some(form) = ctx.dom.closest(&button, "form") else {
            continue;
        };
        let handler_ctx = ctx.clone();
        ctx.dom.listen(
            &form,
            "submit",
            Rc::new(move |_: &dyn DomEvent| show_loading(&handler_ctx, &button)),
        );
        bound += 1;
    }
    bound
}

fn show_loading<D: Dom>(ctx: &PageContext<D>, button: &D::Element) {
    let dom = &ctx.dom;
    dom.set_disabled(button, true);
    let original_label = dom.inner_html(button);
    dom.set_inner_html(button, LOADING_LABEL);

    let restore_dom = Rc::clone(dom);
    let button = button.clone();
    ctx.scheduler.set_timeout(
        ctx.config.submit_fallback(),
        Box::new(move || {
            restore_dom.set_disabled(&button, false);
            restore_dom.set_inner_html(&button, &original_label);
        }),
    );
}
