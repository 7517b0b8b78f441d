//! JavaScript Exports
//!
//! Helpers callable from template scripts once the page has been bound.

use std::cell::{Cell, RefCell};

use rolling_logger::RollingLogger;
use wasm_bindgen::prelude::*;

use crate::browser::BrowserDom;
use crate::context::PageContext;
use crate::format;
use crate::handlers;
use crate::models::Severity;

thread_local! {
    static PAGE: RefCell<Option<PageContext<BrowserDom>>> = const { RefCell::new(None) };
    static LOGGER: Cell<Option<&'static RollingLogger>> = const { Cell::new(None) };
}

/// Keep the bound page context alive for the exported helpers
pub fn install(ctx: PageContext<BrowserDom>) {
    PAGE.with(|page| *page.borrow_mut() = Some(ctx));
}

pub fn install_logger(logger: &'static RollingLogger) {
    LOGGER.with(|slot| slot.set(Some(logger)));
}

fn with_page(f: impl FnOnce(&PageContext<BrowserDom>)) {
    PAGE.with(|page| match page.borrow().as_ref() {
        Some(ctx) => f(ctx),
        None => log::warn!("page behaviors are not bound yet"),
    });
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, severity: Option<String>) {
    let severity = match severity.as_deref() {
        None => Severity::Info,
        Some(name) => name.parse().unwrap_or_else(|err| {
            log::warn!("{}, showing as info", err);
            Severity::Info
        }),
    };
    with_page(|ctx| {
        handlers::show_toast(ctx, message, severity);
    });
}

#[wasm_bindgen(js_name = updatePropertyFilters)]
pub fn update_property_filters() {
    with_page(|ctx| {
        handlers::update_property_filters(&*ctx.dom);
    });
}

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    format::format_currency(amount)
}

#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    format::format_number(value)
}

/// Recently logged lines, oldest first
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> Vec<String> {
    LOGGER.with(|slot| slot.get().map(RollingLogger::recent_lines).unwrap_or_default())
}
