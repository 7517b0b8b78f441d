//! Favorite Toggle
//!
//! Heart buttons on property cards. Each click posts to the toggle endpoint
//! and mirrors the server's answer into the icon and button classes.

use std::rc::Rc;

use crate::context::PageContext;
use crate::dom::{Dom, DomEvent};
use crate::handlers::toast::show_toast;
use crate::models::Severity;

pub const FAVORITE_BUTTON_SELECTOR: &str = ".favorite-btn[data-property-id]";
pub const PROPERTY_ID_ATTR: &str = "data-property-id";
pub const CSRF_META_SELECTOR: &str = "meta[name=csrf-token]";
pub const FAVORITE_ERROR_MESSAGE: &str = "An error occurred";

const ICON_OUTLINE: &str = "far";
const ICON_FILLED: &str = "fas";
const HIGHLIGHT: &str = "text-danger";

/// Attach click handlers to every favorite button. Returns how many were bound.
pub fn bind_favorite_buttons<D: Dom>(ctx: &PageContext<D>) -> usize {
    let buttons = ctx.dom.query_all(FAVORITE_BUTTON_SELECTOR);
    for button in &buttons {
        let handler_ctx = ctx.clone();
        let target = button.clone();
        ctx.dom.listen(
            button,
            "click",
            Rc::new(move |ev: &dyn DomEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_favorite_click(&handler_ctx, &target);
            }),
        );
    }
    buttons.len()
}

fn on_favorite_click<D: Dom>(ctx: &PageContext<D>, button: &D::Element) {
    let Some(property_id) = ctx.dom.attribute(button, PROPERTY_ID_ATTR) else {
        return;
    };

    if ctx.config.guard_duplicate_favorites && !ctx.begin_favorite(&property_id) {
        log::debug!("favorite toggle for property {} already in flight, ignoring click", property_id);
        return;
    }

    let task_ctx = ctx.clone();
    let button = button.clone();
    ctx.scheduler.spawn(Box::pin(async move {
        toggle_favorite(&task_ctx, &button, &property_id).await;
        task_ctx.finish_favorite(&property_id);
    }));
}

/// Post the toggle and apply the outcome to `button`.
///
/// On failure an error toast is shown and the button is left as it was.
async fn toggle_favorite<D: Dom>(ctx: &PageContext<D>, button: &D::Element, property_id: &str) {
    let csrf_token = csrf_token(&*ctx.dom);
    if csrf_token.is_none() {
        log::warn!("no csrf-token meta tag, sending favorite toggle without {}", crate::commands::CSRF_HEADER);
    }

    match ctx.api.toggle_favorite(property_id, csrf_token.as_deref()).await {
        Ok(response) => {
            apply_favorite_state(&*ctx.dom, button, response.is_favorite);
            show_toast(ctx, &response.message, Severity::Success);
        }
        Err(err) => {
            log::error!("favorite toggle for property {} failed: {}", property_id, err);
            show_toast(ctx, FAVORITE_ERROR_MESSAGE, Severity::Error);
        }
    }
}

pub fn csrf_token<D: Dom>(dom: &D) -> Option<String> {
    dom.query(CSRF_META_SELECTOR)
        .and_then(|meta| dom.attribute(&meta, "content"))
}

/// Filled icon and highlighted button when favorited, outline otherwise
pub fn apply_favorite_state<D: Dom>(dom: &D, button: &D::Element, is_favorite: bool) {
    let (from, to) = if is_favorite {
        (ICON_OUTLINE, ICON_FILLED)
    } else {
        (ICON_FILLED, ICON_OUTLINE)
    };
    if let Some(icon) = dom.query_within(button, "i") {
        dom.remove_class(&icon, from);
        dom.add_class(&icon, to);
    }
    if is_favorite {
        dom.add_class(button, HIGHLIGHT);
    } else {
        dom.remove_class(button, HIGHLIGHT);
    }
}
