//! Settle Space Frontend Entry Point
//!
//! Binds the page behaviors (favorites, toasts, form helpers, scroll
//! effects, filters) to the server-rendered markup once the DOM is ready.

mod browser;
mod commands;
mod config;
mod context;
mod dom;
mod error;
mod exports;
mod format;
mod handlers;
mod models;

#[cfg(test)]
mod testing;

use std::rc::Rc;

use browser::{BootstrapWidgets, BrowserDom, BrowserScheduler};
use commands::FetchFavoriteApi;
use context::PageContext;

const APP_NAME: &str = "SettleSpace";

fn main() {
    console_error_panic_hook::set_once();

    match rolling_logger::init_logger(APP_NAME, log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        Ok(logger) => exports::install_logger(logger),
        Err(err) => web_sys::console::warn_1(&format!("[{}] logger not installed: {}", APP_NAME, err).into()),
    }

    let dom = match BrowserDom::from_window() {
        Ok(dom) => Rc::new(dom),
        Err(err) => {
            log::error!("page behaviors disabled: {}", err);
            return;
        }
    };
    let ready_dom = Rc::clone(&dom);
    dom.on_ready(move || start(ready_dom));
}

fn start(dom: Rc<BrowserDom>) {
    let config = config::load_from_page(&*dom);
    let api = Rc::new(FetchFavoriteApi::new(&config.favorite_endpoint));
    let ctx = PageContext::new(dom, Rc::new(BrowserScheduler), Rc::new(BootstrapWidgets), api, config);
    handlers::bind_page(&ctx);
    exports::install(ctx);
}
