//! Database health check and connection settings.

use crate::shared::api_client::use_api;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::notify::alert;
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use chrono::Local;
use contracts::system::database::{DatabaseConfig, HealthReport, DB_CONFIG_PATH, HEALTH_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionState {
    Checking,
    Online,
    Offline,
}

impl ConnectionState {
    fn of(report: Option<&HealthReport>) -> Self {
        match report {
            None => ConnectionState::Checking,
            Some(r) if r.is_healthy() => ConnectionState::Online,
            Some(_) => ConnectionState::Offline,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ConnectionState::Checking => "Checking...",
            ConnectionState::Online => "Online",
            ConnectionState::Offline => "Offline",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ConnectionState::Checking => "status status--neutral",
            ConnectionState::Online => "status status--success",
            ConnectionState::Offline => "status status--danger",
        }
    }
}

fn latency_text(report: Option<&HealthReport>) -> String {
    report
        .and_then(|r| r.database().latency_ms)
        .map(|ms| format!("{} ms", format_number_with_decimals(ms, 2)))
        .unwrap_or_else(|| "--".to_string())
}

type Setter = fn(&mut DatabaseConfig, String);

fn config_field(
    form: RwSignal<DatabaseConfig>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&DatabaseConfig) -> String,
    set: Setter,
) -> impl IntoView {
    view! {
        <FormField
            label=label
            placeholder=placeholder
            value=Signal::derive(move || form.with(get))
            on_input=Callback::new(move |v: String| form.update(|f| set(f, v)))
        />
    }
}

#[component]
pub fn DatabaseSettingsPage() -> impl IntoView {
    let api = use_api();
    // None while a check is in flight
    let report = RwSignal::new(None::<HealthReport>);
    let form = RwSignal::new(DatabaseConfig::default());
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let check = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            report.set(None);
            spawn_local(async move {
                let result = match api.get::<HealthReport>(HEALTH_PATH).await {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("health check failed: {e}");
                        HealthReport::unreachable(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
                    }
                };
                form.update(|f| f.prefill(&result));
                report.set(Some(result));
            });
        }
    });
    check.run(());

    let save = move |_| {
        let payload = match form.with_untracked(DatabaseConfig::to_payload) {
            Ok(p) => p,
            Err(e) => {
                alert(&e.user_message());
                return;
            }
        };
        let api = api.clone();
        saving.set(true);
        spawn_local(async move {
            match api.post_json::<_, serde_json::Value>(DB_CONFIG_PATH, &payload).await {
                Ok(_) => {
                    alert("Configuration Saved & Reloaded!");
                    editing.set(false);
                    check.run(());
                }
                Err(e) => alert(&format!("Failed: {}", e.user_message())),
            }
            saving.set(false);
        });
    };

    let state = move || report.with(|r| ConnectionState::of(r.as_ref()));
    let detail = move |get: fn(&HealthReport) -> Option<String>| {
        move || {
            report
                .with(|r| r.as_ref().and_then(get))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "--".to_string())
        }
    };

    view! {
        <PageFrame
            page_id="database_settings--system"
            category=PAGE_CAT_SYSTEM
            title="Database Status"
            subtitle="Connection to SQL Server and system health."
            actions=move || view! {
                <button class="button button--secondary" on:click=move |_| editing.update(|e| *e = !*e)>
                    {move || if editing.get() { "Cancel" } else { "Edit Connection" }}
                </button>
                <button
                    class="button button--primary"
                    disabled=move || state() == ConnectionState::Checking
                    on:click=move |_| check.run(())
                >
                    {icon("refresh")}
                    "Test Connection"
                </button>
            }
        >
            <div class="dashboard-kpis">
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Connection Status"</span>
                    <span class=move || state().css_class()>{move || state().label()}</span>
                    <span class="dashboard-kpi__hint">
                        "Last Checked: " {detail(|r| Some(r.timestamp.clone()))}
                    </span>
                </div>
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Latency"</span>
                    <span class="dashboard-kpi__value">{move || report.with(|r| latency_text(r.as_ref()))}</span>
                    <span class="dashboard-kpi__hint">"Round-trip time to SQL Server"</span>
                </div>
                <div class="dashboard-kpi">
                    <span class="dashboard-kpi__label">"Configuration"</span>
                    <span class="dashboard-kpi__hint">"Database: " {detail(|r| r.database().name.clone())}</span>
                    <span class="dashboard-kpi__hint">"Server: " {detail(|r| r.database().server.clone())}</span>
                </div>
            </div>

            <Show when=move || editing.get()>
                <div class="details-form">
                    <h3 class="details-form__section">"Update Connection Details"</h3>
                    <p class="page__subtitle">"Saved to the backend environment file, then reconnected."</p>
                    {config_field(form, "Server Address", "localhost", |f| f.db_server.clone(), |f, v| f.db_server = v)}
                    {config_field(form, "Database Name", "PlanningPurchaseDB", |f| f.db_name.clone(), |f, v| f.db_name = v)}
                    {config_field(form, "Username", "sa", |f| f.username.clone(), |f, v| f.username = v)}
                    <FormField
                        label="Password"
                        placeholder="Enter new password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                        input_type=Signal::stored("password")
                    />
                    <div class="details-actions">
                        <button
                            class="button button--primary"
                            disabled=move || saving.get()
                            on:click=save.clone()
                        >
                            {icon("save")}
                            {move || if saving.get() { "Saving..." } else { "Save & Reconnect" }}
                        </button>
                    </div>
                </div>
            </Show>

            {move || {
                report.with(|r| match r {
                    Some(r) if !r.is_healthy() => Some(view! {
                        <div class="alert alert--error">
                            <strong>"Connection Error: "</strong>
                            <span class="table__cell--mono">{r.error_text().to_string()}</span>
                        </div>
                    }),
                    _ => None,
                })
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state() {
        assert_eq!(ConnectionState::of(None), ConnectionState::Checking);
        let healthy = HealthReport {
            status: "healthy".into(),
            ..Default::default()
        };
        assert_eq!(ConnectionState::of(Some(&healthy)), ConnectionState::Online);
        let down = HealthReport::unreachable("now".into());
        assert_eq!(ConnectionState::of(Some(&down)), ConnectionState::Offline);
        assert_eq!(latency_text(Some(&down)), "--");
    }
}
