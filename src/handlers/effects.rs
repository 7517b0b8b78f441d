//! Page Effects
//!
//! Fade-in, scroll reveal, widget initialization, alert auto-dismiss and
//! smooth in-page scrolling.

use std::rc::Rc;

use crate::context::PageContext;
use crate::dom::{Dom, DomEvent};

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const CAROUSEL_SELECTOR: &str = ".property-carousel";
pub const REVEAL_SELECTOR: &str = ".property-card, .stats-card, .card";
pub const AUTO_DISMISS_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";
pub const ANCHOR_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

pub fn init_tooltips<D: Dom>(ctx: &PageContext<D>) -> usize {
    let targets = ctx.dom.query_all(TOOLTIP_SELECTOR);
    for target in &targets {
        ctx.widgets.init_tooltip(target);
    }
    targets.len()
}

pub fn init_carousels<D: Dom>(ctx: &PageContext<D>) -> usize {
    let carousels = ctx.dom.query_all(CAROUSEL_SELECTOR);
    for carousel in &carousels {
        ctx.widgets.init_carousel(carousel, &ctx.config.carousel);
    }
    carousels.len()
}

/// Hide the body, then fade it in after the configured delay
pub fn fade_in_page<D: Dom>(ctx: &PageContext<D>) {
    let Some(body) = ctx.dom.body() else {
        return;
    };
    ctx.dom.set_style(&body, "opacity", "0");

    let dom = Rc::clone(&ctx.dom);
    let transition = ctx.config.fade_in_transition.clone();
    ctx.scheduler.set_timeout(
        ctx.config.fade_in_delay(),
        Box::new(move || {
            dom.set_style(&body, "transition", &transition);
            dom.set_style(&body, "opacity", "1");
        }),
    );
}

/// Slide cards in as they enter the viewport.
///
/// Observation is never stopped, so an element is revealed again each time
/// it intersects.
pub fn bind_scroll_reveal<D: Dom>(ctx: &PageContext<D>) -> usize {
    let reveal = &ctx.config.reveal;
    let targets = ctx.dom.query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return 0;
    }
    for target in &targets {
        ctx.dom.set_style(target, "opacity", "0");
        ctx.dom.set_style(target, "transform", &reveal.hidden_transform);
        ctx.dom.set_style(target, "transition", &reveal.transition);
    }

    let dom = Rc::clone(&ctx.dom);
    ctx.dom.observe_visibility(
        &targets,
        &reveal.visibility_options(),
        Rc::new(move |target: &D::Element| {
            dom.set_style(target, "opacity", "1");
            dom.set_style(target, "transform", "translateY(0)");
        }),
    );
    targets.len()
}

/// Close every non-permanent alert after the configured delay
pub fn schedule_alert_dismissal<D: Dom>(ctx: &PageContext<D>) -> usize {
    let alerts = ctx.dom.query_all(AUTO_DISMISS_ALERT_SELECTOR);
    for alert in &alerts {
        let widgets = Rc::clone(&ctx.widgets);
        let alert = alert.clone();
        ctx.scheduler.set_timeout(
            ctx.config.alert_dismiss_delay(),
            Box::new(move || widgets.close_alert(&alert)),
        );
    }
    alerts.len()
}

/// Smooth scrolling for `#fragment` links whose target exists
pub fn bind_smooth_scroll<D: Dom>(ctx: &PageContext<D>) -> usize {
    let links = ctx.dom.query_all(ANCHOR_LINK_SELECTOR);
    for link in &links {
        let dom = Rc::clone(&ctx.dom);
        let target_link = link.clone();
        ctx.dom.listen(
            link,
            "click",
            Rc::new(move |ev: &dyn DomEvent| {
                let Some(href) = dom.attribute(&target_link, "href") else {
                    return;
                };
                if let Some(target) = dom.query(&href) {
                    ev.prevent_default();
                    dom.scroll_into_view(&target);
                }
            }),
        );
    }
    links.len()
}
