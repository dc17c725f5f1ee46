//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. Navigation is a
//! plain view-switch signal; there is no URL router.

use leptos::prelude::*;

/// Top-level views the app can show
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    Todos,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed view - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Trigger to reload todos from the API - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch the displayed view
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
