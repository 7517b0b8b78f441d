//! Page Handlers
//!
//! Each behavior is independent; `bind_page` attaches all of them once the
//! document is ready.

pub mod effects;
pub mod favorite;
pub mod filters;
pub mod forms;
pub mod toast;

pub use filters::update_property_filters;
pub use toast::show_toast;

use crate::context::PageContext;
use crate::dom::Dom;

/// How many elements each behavior attached to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindSummary {
    pub tooltips: usize,
    pub search_form: bool,
    pub reveal_targets: usize,
    pub carousels: usize,
    pub favorite_buttons: usize,
    pub validated_forms: usize,
    pub image_inputs: usize,
    pub alerts: usize,
    pub anchor_links: usize,
    pub submit_buttons: usize,
    pub filter_fields: usize,
}

/// Attach every page behavior.
///
/// Validation is bound before the submit loading state so an invalid form
/// is flagged before its button switches to the spinner.
pub fn bind_page<D: Dom>(ctx: &PageContext<D>) -> BindSummary {
    let tooltips = effects::init_tooltips(ctx);
    effects::fade_in_page(ctx);
    let search_form = forms::bind_search_guard(ctx);
    let reveal_targets = effects::bind_scroll_reveal(ctx);
    let carousels = effects::init_carousels(ctx);
    let favorite_buttons = favorite::bind_favorite_buttons(ctx);
    let validated_forms = forms::bind_validation(ctx);
    let image_inputs = forms::bind_image_previews(ctx);
    let alerts = effects::schedule_alert_dismissal(ctx);
    let anchor_links = effects::bind_smooth_scroll(ctx);
    let submit_buttons = forms::bind_submit_loading(ctx);
    let filter_fields = filters::bind_filter_autosubmit(ctx);

    let summary = BindSummary {
        tooltips,
        search_form,
        reveal_targets,
        carousels,
        favorite_buttons,
        validated_forms,
        image_inputs,
        alerts,
        anchor_links,
        submit_buttons,
        filter_fields,
    };
    log::info!("page bound: {:?}", summary);
    summary
}
