use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Overlay, header and surface shared by the form and import dialogs.
///
/// Closes on Escape and on a click that both starts and ends on the overlay.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(into)] title: String,
    /// Extra class for `div.modal`.
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let on_overlay = |e: &ev::MouseEvent| match (e.target(), e.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };
    let handle_mouse_down = move |e: ev::MouseEvent| pressed_on_overlay.set(on_overlay(&e));
    let handle_click = move |e: ev::MouseEvent| {
        let close = pressed_on_overlay.get() && on_overlay(&e);
        pressed_on_overlay.set(false);
        if close {
            // after the current dispatch, the overlay is removed by the close
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = modal_class.map_or_else(|| "modal".to_string(), |c| format!("modal {c}"));

    view! {
        <div class="modal-overlay" on:mousedown=handle_mouse_down on:click=handle_click>
            <div class=class on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
