use contracts::projections::p903_inventory::dto::InventoryForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiClient;
use crate::shared::notify::alert;

pub const INVENTORY_UPDATE_PATH: &str = "/api/data/inventory/update";

#[derive(Clone, Copy)]
pub struct InventoryDetailsViewModel {
    pub form: RwSignal<InventoryForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InventoryDetailsViewModel {
    pub fn new(initial: InventoryForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, api: ApiClient, on_saved: Callback<()>) {
        let request = match self.form.with_untracked(InventoryForm::to_request) {
            Ok(r) => r,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match api
                .post_json::<_, serde_json::Value>(INVENTORY_UPDATE_PATH, &request)
                .await
            {
                Ok(_) => {
                    log::info!("inventory {} @ {} updated", request.sku_id, request.warehouse_id);
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
