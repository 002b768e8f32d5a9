use super::model;
use contracts::domain::a001_product::aggregate::ProductForm;
use contracts::domain::common::EntityForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiClient;
use crate::shared::notify::alert;

/// ViewModel of the product add/edit dialog
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(initial: ProductForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.save_mode().is_edit())
    }

    pub fn save_command(&self, api: ApiClient, on_saved: Callback<()>) {
        let (mode, payload) = self.form.with_untracked(|f| (f.save_mode(), f.to_payload()));
        let payload = match payload {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            match model::save_form(&api, &mode, &payload).await {
                Ok(()) => {
                    log::info!("product {} saved", payload.sku_id);
                    alert(if mode.is_edit() { "Product Updated" } else { "Product Created" });
                    on_saved.run(());
                }
                Err(e) => {
                    let message = e.user_message();
                    alert(&format!("Error: {message}"));
                    this.error.set(Some(message));
                }
            }
            this.saving.set(false);
        });
    }
}
