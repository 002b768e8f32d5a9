use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use leptos::prelude::*;

/// Single-route app: the tab strip is the navigation, mirrored in `?active=`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    use_app_context().init_router_integration();

    view! { <Shell /> }
}
