//! Browser Scheduler
//!
//! `setTimeout` through gloo-timers and local futures through
//! wasm-bindgen-futures.

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::dom::{LocalTask, Scheduler};

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }

    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
