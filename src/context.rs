//! Page Context
//!
//! Shared handles every handler needs, cloned into each listener.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::commands::FavoriteApi;
use crate::config::UiConfig;
use crate::dom::{Dom, Scheduler, Widgets};

/// Page-wide collaborators provided to handlers
pub struct PageContext<D: Dom> {
    /// Document access
    pub dom: Rc<D>,
    /// Timers and task spawning
    pub scheduler: Rc<dyn Scheduler>,
    /// Tooltip/carousel/alert/toast widgets
    pub widgets: Rc<dyn Widgets<D::Element>>,
    /// Backend bindings
    pub api: Rc<dyn FavoriteApi>,
    pub config: Rc<UiConfig>,
    /// Property ids with a favorite toggle in flight
    pending_favorites: Rc<RefCell<HashSet<String>>>,
}

impl<D: Dom> Clone for PageContext<D> {
    fn clone(&self) -> Self {
        Self {
            dom: Rc::clone(&self.dom),
            scheduler: Rc::clone(&self.scheduler),
            widgets: Rc::clone(&self.widgets),
            api: Rc::clone(&self.api),
            config: Rc::clone(&self.config),
            pending_favorites: Rc::clone(&self.pending_favorites),
        }
    }
}

impl<D: Dom> PageContext<D> {
    pub fn new(
        dom: Rc<D>,
        scheduler: Rc<dyn Scheduler>,
        widgets: Rc<dyn Widgets<D::Element>>,
        api: Rc<dyn FavoriteApi>,
        config: UiConfig,
    ) -> Self {
        Self {
            dom,
            scheduler,
            widgets,
            api,
            config: Rc::new(config),
            pending_favorites: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Mark a favorite toggle as started; false if one is already running
    pub fn begin_favorite(&self, property_id: &str) -> bool {
        self.pending_favorites.borrow_mut().insert(property_id.to_string())
    }

    pub fn finish_favorite(&self, property_id: &str) {
        self.pending_favorites.borrow_mut().remove(property_id);
    }

    pub fn favorite_in_flight(&self, property_id: &str) -> bool {
        self.pending_favorites.borrow().contains(property_id)
    }
}
