//! CRM and accounting connection settings plus the manual CRM sync.

use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notify::{alert, confirm};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::integrations::{CrmConfig, CRM_CONFIG_PATH, CRM_SYNC_PATH, CRM_SYNC_PROMPT};
use leptos::prelude::*;
use leptos::task::spawn_local;

type Setter = fn(&mut CrmConfig, String);

/// Text field bound to one `CrmConfig` member.
fn config_field(
    config: RwSignal<CrmConfig>,
    label: &'static str,
    get: fn(&CrmConfig) -> String,
    set: Setter,
) -> impl IntoView {
    view! {
        <FormField
            label=label
            value=Signal::derive(move || config.with(get))
            on_input=Callback::new(move |v: String| config.update(|c| set(c, v)))
        />
    }
}

/// Password input with a show/hide toggle.
#[component]
fn SecretField(
    label: &'static str,
    config: RwSignal<CrmConfig>,
    get: fn(&CrmConfig) -> String,
    set: Setter,
) -> impl IntoView {
    let shown = RwSignal::new(false);
    view! {
        <div class="secret-field">
            <FormField
                label=label
                value=Signal::derive(move || config.with(get))
                on_input=Callback::new(move |v: String| config.update(|c| set(c, v)))
                input_type=Signal::derive(move || if shown.get() { "text" } else { "password" })
            />
            <button
                class="button button--icon"
                title=move || if shown.get() { "Hide" } else { "Show" }
                on:click=move |_| shown.update(|s| *s = !*s)
            >
                {move || if shown.get() { icon("eye-off") } else { icon("eye") }}
            </button>
        </div>
    }
}

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let api = use_api();
    let app_config = use_config();
    let config = RwSignal::new(CrmConfig::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let syncing = RwSignal::new(false);
    let sync_enabled = app_config.erp_sync_enabled;

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get::<serde_json::Value>(CRM_CONFIG_PATH).await {
                Ok(value) => config.set(CrmConfig::from_value(value)),
                Err(e) => {
                    log::error!("crm config load failed: {e}");
                    alert(&format!("Error: {}", e.user_message()));
                }
            }
            loading.set(false);
        });
    }

    let save = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let body = config.get_untracked();
            saving.set(true);
            spawn_local(async move {
                match api.post_json::<_, serde_json::Value>(CRM_CONFIG_PATH, &body).await {
                    Ok(_) => alert("Configuration saved."),
                    Err(e) => alert(&format!("Error: {}", e.user_message())),
                }
                saving.set(false);
            });
        }
    };

    let sync = move |_| {
        if !confirm(CRM_SYNC_PROMPT) {
            return;
        }
        let api = api.clone();
        syncing.set(true);
        spawn_local(async move {
            match api.post_empty::<serde_json::Value>(CRM_SYNC_PATH).await {
                Ok(body) => {
                    let message = body
                        .get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("CRM sync started.")
                        .to_string();
                    alert(&message);
                }
                Err(e) => alert(&format!("Sync Failed: {}", e.user_message())),
            }
            syncing.set(false);
        });
    };

    let can_sync = move || sync_enabled && config.with(CrmConfig::crm_ready) && !syncing.get();

    view! {
        <PageFrame
            page_id="integrations--system"
            category=PAGE_CAT_SYSTEM
            title="Integrations"
            subtitle="Credentials for the CRM and accounting connectors."
        >
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading..."</div> }
            >
                <div class="details-form">
                    <h3 class="details-form__section">"MISA CRM"</h3>
                    {config_field(config, "Client ID", |c| c.crm_client_id.clone(), |c, v| c.crm_client_id = v)}
                    <SecretField
                        label="Client Secret"
                        config=config
                        get=|c| c.crm_client_secret.clone()
                        set=|c, v| c.crm_client_secret = v
                    />
                    {config_field(config, "Company Code", |c| c.company_code.clone(), |c, v| c.company_code = v)}

                    <h3 class="details-form__section">"MISA AMIS Accounting"</h3>
                    {config_field(config, "App ID", |c| c.act_app_id.clone(), |c, v| c.act_app_id = v)}
                    <SecretField
                        label="Access Code"
                        config=config
                        get=|c| c.act_access_code.clone()
                        set=|c, v| c.act_access_code = v
                    />
                    {config_field(config, "Base URL", |c| c.act_base_url.clone(), |c, v| c.act_base_url = v)}
                </div>
            </Show>
            <div class="details-actions">
                <button
                    class="button button--secondary"
                    disabled=move || !can_sync()
                    title=move || {
                        if !sync_enabled {
                            "ERP sync is disabled"
                        } else if !config.with(CrmConfig::crm_ready) {
                            "Enter the CRM client id and secret first"
                        } else {
                            "Sync inventory from CRM"
                        }
                    }
                    on:click=sync
                >
                    {icon("refresh")}
                    {move || if syncing.get() { "Syncing..." } else { "Sync from CRM" }}
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || loading.get()
                    on:click=save
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save Configuration" }}
                </button>
            </div>
        </PageFrame>
    }
}
