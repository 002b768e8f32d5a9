use contracts::usecases::u503_rolling_plan::{ProductHit, ProductSearchQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_client::use_api;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

const SEARCH_PATH: &str = "/api/planning/rolling/products/search";
const SEARCH_DELAY_MS: u32 = 300;

/// SKU picker backed by the product search endpoint. `value` holds the
/// selected SKUs in pick order.
#[component]
pub fn ProductMultiSelect(value: RwSignal<Vec<String>>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let open = RwSignal::new(false);
    let text = RwSignal::new(String::new());
    let options = RwSignal::new(Vec::<ProductHit>::new());
    let loading = RwSignal::new(false);
    let debouncer = Debouncer::new(SEARCH_DELAY_MS);

    Effect::new(move |_| {
        let Some(query) = ProductSearchQuery::new(&text.get()) else {
            debouncer.cancel();
            options.set(Vec::new());
            return;
        };
        let api = api.get_value();
        debouncer.run(move || {
            loading.set(true);
            spawn_local(async move {
                match api.get_json::<Vec<ProductHit>, _>(SEARCH_PATH, &query).await {
                    Ok(hits) => options.set(hits),
                    Err(e) => log::warn!("product search failed: {e}"),
                }
                loading.set(false);
            });
        });
    });

    let toggle = move |sku: String| {
        value.update(|selected| {
            if let Some(pos) = selected.iter().position(|s| *s == sku) {
                selected.remove(pos);
            } else {
                selected.push(sku);
            }
        });
    };

    view! {
        <div class="product-select">
            <button class="product-select__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {move || match value.with(Vec::len) {
                    0 => "Select Products...".to_string(),
                    n => format!("{n} selected"),
                }}
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="product-select__popover">
                    <Input value=text placeholder="Search SKU or Name..." />
                    <div class="product-select__options">
                        {move || {
                            if loading.get() {
                                return view! { <div class="product-select__hint">"Loading..."</div> }.into_any();
                            }
                            let hits = options.get();
                            if hits.is_empty() {
                                return view! { <div class="product-select__hint">"No products found."</div> }.into_any();
                            }
                            hits.into_iter().map(|hit| {
                                let sku = hit.sku_id.clone();
                                let checked = {
                                    let sku = sku.clone();
                                    move || value.with(|v| v.contains(&sku))
                                };
                                view! {
                                    <div
                                        class="product-select__option"
                                        class:product-select__option--selected=checked
                                        on:click=move |_| toggle(sku.clone())
                                    >
                                        <span class="product-select__sku">{hit.sku_id}</span>
                                        <span class="product-select__name">{hit.product_name}</span>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>
            </Show>
            <div class="product-select__chips">
                {move || value.get().into_iter().map(|sku| {
                    let remove = sku.clone();
                    view! {
                        <span class="badge badge--primary">
                            {sku}
                            <button class="badge__remove" on:click=move |_| toggle(remove.clone())>
                                {icon("x")}
                            </button>
                        </span>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
