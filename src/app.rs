use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::get_page_config;
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The whole portfolio; sections are reached by in-page scrolling
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, page configuration, and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| Rc::new(get_page_config()));
    use_context_provider(|| config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
