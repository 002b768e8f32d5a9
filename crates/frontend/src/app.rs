use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(ApiClient::new(&config));
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! { <AppRoutes /> }
}
