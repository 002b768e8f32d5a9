use super::model;
use contracts::domain::a005_vendor::aggregate::VendorForm;
use contracts::domain::common::EntityForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::ApiClient;
use crate::shared::notify::alert;

#[derive(Clone, Copy)]
pub struct VendorDetailsViewModel {
    pub form: RwSignal<VendorForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl VendorDetailsViewModel {
    pub fn new(initial: VendorForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.save_mode().is_edit())
    }

    /// Text field setter for the form inputs.
    pub fn setter(&self, apply: fn(&mut VendorForm, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value| form.update(|f| apply(f, value)))
    }

    pub fn save_command(&self, api: ApiClient, on_saved: Callback<()>) {
        let (mode, vendor) = self.form.with_untracked(|f| (f.save_mode(), f.to_payload()));
        let vendor = match vendor {
            Ok(v) => v,
            Err(e) => {
                self.error.set(Some(e.user_message()));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            match model::save_form(&api, &mode, &vendor).await {
                Ok(()) => {
                    log::info!("vendor {} saved", vendor.vendor_id);
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
