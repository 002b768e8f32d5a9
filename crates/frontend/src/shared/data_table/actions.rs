//! Toolbar actions shared by the master-data pages.

use std::future::Future;
use std::pin::Pin;

use contracts::shared::api::ImportResponse;
use contracts::shared::csv_export::CsvExportable;
use contracts::system::sync::{ImportType, SyncTarget, CANCEL_REQUESTED, CANCEL_SYNC_PATH};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::shared::api_client::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::export::export_rows;
use crate::shared::notify::alert;

/// Completion of an async toolbar or row action. The table awaits it only to
/// clear its in-flight state; the action reports its own outcome.
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Triggers a backend sync job, then reloads after a fixed delay. The job
/// itself is never observed.
pub fn sync_action(
    api: ApiClient,
    config: &AppConfig,
    target: SyncTarget,
    reload: Callback<()>,
) -> Callback<(), ActionFuture> {
    trigger_action(
        api,
        target.endpoint(),
        target.started_message(),
        config.refetch_delay_ms(target.refetch_delay()),
        reload,
    )
}

/// Fire-and-forget POST to `endpoint`; on acceptance shows `started` and
/// reloads after `delay_ms`.
pub fn trigger_action(
    api: ApiClient,
    endpoint: String,
    started: &'static str,
    delay_ms: u32,
    reload: Callback<()>,
) -> Callback<(), ActionFuture> {
    Callback::new(move |_| {
        let api = api.clone();
        let endpoint = endpoint.clone();
        Box::pin(async move {
            match api.post_empty::<serde_json::Value>(&endpoint).await {
                Ok(_) => {
                    log::info!("🔄 job started: {endpoint}");
                    alert(started);
                    schedule_refetch(delay_ms, reload);
                    Ok(())
                }
                Err(e) => {
                    log::error!("{endpoint} failed: {e}");
                    alert("Sync Failed");
                    Err(e.user_message())
                }
            }
        }) as ActionFuture
    })
}

pub fn cancel_sync_action(api: ApiClient) -> Callback<(), ActionFuture> {
    Callback::new(move |_| {
        let api = api.clone();
        Box::pin(async move {
            api.post_empty::<serde_json::Value>(CANCEL_SYNC_PATH)
                .await
                .map(|_| alert(CANCEL_REQUESTED))
                .map_err(|e| {
                    log::warn!("cancel sync failed: {e}");
                    e.user_message()
                })
        }) as ActionFuture
    })
}

/// Uploads the chosen file to the typed import endpoint and reloads on success.
pub fn import_action(
    api: ApiClient,
    import_type: ImportType,
    reload: Callback<()>,
) -> Callback<File, ActionFuture> {
    upload_action(api, import_type.endpoint(), reload)
}

pub fn upload_action(api: ApiClient, endpoint: String, reload: Callback<()>) -> Callback<File, ActionFuture> {
    Callback::new(move |file: File| {
        let api = api.clone();
        let endpoint = endpoint.clone();
        Box::pin(async move {
            match api.upload::<ImportResponse>(&endpoint, &file).await {
                Ok(response) => {
                    log::info!("📥 imported {} via {endpoint}", file.name());
                    alert(&response.summary());
                    reload.run(());
                    Ok(())
                }
                Err(e) => {
                    let message = e.user_message();
                    alert(&format!("Upload Failed: {message}"));
                    Err(message)
                }
            }
        }) as ActionFuture
    })
}

/// Deletes the row addressed by `path_of` and reloads. Confirmation is asked
/// by the table before this runs.
pub fn delete_action<T, F>(api: ApiClient, path_of: F, reload: Callback<()>) -> Callback<T, ActionFuture>
where
    T: 'static,
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    Callback::new(move |row: T| {
        let api = api.clone();
        let path = path_of(&row);
        Box::pin(async move {
            match api.delete(&path).await {
                Ok(()) => {
                    log::info!("🗑️ deleted {path}");
                    reload.run(());
                    Ok(())
                }
                Err(e) => {
                    let message = e.user_message();
                    alert(&format!("Error: {message}"));
                    Err(message)
                }
            }
        }) as ActionFuture
    })
}

/// Client-side CSV of the currently loaded rows.
pub fn export_action<T>(rows: RwSignal<Vec<T>>, prefix: &'static str) -> Callback<()>
where
    T: CsvExportable + Send + Sync + 'static,
{
    Callback::new(move |_| {
        rows.with_untracked(|items| {
            if let Err(e) = export_rows(items, prefix) {
                alert(&e.to_string());
            }
        })
    })
}

pub fn schedule_refetch(delay_ms: u32, reload: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        reload.run(());
    });
}
