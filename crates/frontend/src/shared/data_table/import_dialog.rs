use contracts::system::sync::IMPORT_ACCEPT;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::actions::ActionFuture;
use crate::shared::modal_frame::ModalFrame;

/// Two-step upload: pick one file, then confirm. `on_upload` runs only on
/// confirm; the dialog closes when it succeeds and stays open on failure.
#[component]
pub fn ImportDialog(
    #[prop(into)] title: String,
    on_upload: Callback<File, ActionFuture>,
    on_close: Callback<()>,
    #[prop(optional)] accept: Option<&'static str>,
) -> impl IntoView {
    let file = RwSignal::new_local(None::<File>);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        error.set(None);
        file.set(picked);
    };

    let confirm = move |_| {
        let Some(selected) = file.get_untracked() else {
            return;
        };
        uploading.set(true);
        error.set(None);
        let pending = on_upload.run(selected);
        spawn_local(async move {
            let result = pending.await;
            uploading.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <ModalFrame on_close=on_close title=title modal_class="import-dialog">
            <div class="modal__body">
                <input
                    type="file"
                    class="import-dialog__input"
                    accept=accept.unwrap_or(IMPORT_ACCEPT)
                    on:change=on_file_change
                />
                {move || file.with(|f| f.as_ref().map(|f| f.name())).map(|name| view! {
                    <div class="import-dialog__file">{name}</div>
                })}
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || file.with(Option::is_none) || uploading.get())
                    on_click=confirm
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
