use crate::domain::a001_product::ui::details::model::product_path;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::api_client::{use_api, ApiClient};
use crate::shared::config::use_config;
use crate::shared::data_table::{
    cancel_sync_action, delete_action, export_action, import_action, sync_action, ColumnDef,
    StandardDataTable, TableMode,
};
use crate::shared::list_state::{error_banner, ListState};
use crate::shared::number_format::format_quantity;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::aggregate::{Product, ProductForm, ProductRow};
use contracts::domain::a002_unit::aggregate::Unit;
use contracts::domain::a003_product_group::aggregate::ProductGroup;
use contracts::shared::api::{ApiError, ListEnvelope};
use contracts::shared::data_table::DataTableFilter;
use contracts::system::sync::{ImportType, SyncTarget};
use leptos::prelude::*;

async fn fetch_products(
    api: &ApiClient,
    groups: RwSignal<Vec<ProductGroup>>,
    units: RwSignal<Vec<Unit>>,
) -> Result<Vec<ProductRow>, ApiError> {
    let products = api
        .get::<ListEnvelope<Product>>("/api/data/products?limit=2000")
        .await?
        .into_rows();
    // Lookups only improve the display; a failure keeps the denormalized names.
    let group_list = match api.get::<ListEnvelope<ProductGroup>>("/api/data/groups").await {
        Ok(list) => list.into_rows(),
        Err(e) => {
            log::warn!("groups lookup failed: {e}");
            Vec::new()
        }
    };
    let unit_list = match api.get::<ListEnvelope<Unit>>("/api/data/units").await {
        Ok(list) => list.into_rows(),
        Err(e) => {
            log::warn!("units lookup failed: {e}");
            Vec::new()
        }
    };

    let rows = products
        .iter()
        .map(|p| ProductRow::resolve(p, &group_list, &unit_list))
        .collect();
    groups.set(group_list);
    units.set(unit_list);
    Ok(rows)
}

fn columns() -> Vec<ColumnDef<ProductRow>> {
    vec![
        ColumnDef::field("SKU", "sku_id").with_class("table__cell--mono"),
        ColumnDef::field("Product Name", "product_name"),
        ColumnDef::field("Category/Group", "group_name"),
        ColumnDef::field("Unit", "unit_name"),
        ColumnDef::custom("Min Stock", |row: &ProductRow| {
            format_quantity(row.min_stock_level).into_any()
        })
        .with_class("table__cell--number"),
        ColumnDef::custom("Sync Status", |row: &ProductRow| {
            let class = if row.sync_status == "Synced" {
                "badge badge--success"
            } else {
                "badge badge--neutral"
            };
            view! { <span class=class>{row.sync_status.clone()}</span> }.into_any()
        }),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    let api = use_api();
    let config = use_config();
    let state = ListState::<ProductRow>::new();
    let groups = RwSignal::new(Vec::<ProductGroup>::new());
    let units = RwSignal::new(Vec::<Unit>::new());
    let editing = RwSignal::new(None::<ProductForm>);

    let load = Callback::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            state.load(async move { fetch_products(&api, groups, units).await });
        }
    });

    let filters = Signal::derive(move || {
        state.items.with(|rows| {
            vec![
                DataTableFilter::from_values(
                    "group_name",
                    "Category",
                    rows.iter().map(|r| r.group_name.clone()),
                ),
                DataTableFilter::from_values(
                    "unit_name",
                    "Unit",
                    rows.iter().map(|r| r.unit_name.clone()),
                ),
            ]
        })
    });

    let open_form = move |form: ProductForm| {
        let form = groups.with_untracked(|g| units.with_untracked(|u| form.with_lookups(g, u)));
        editing.set(Some(form));
    };
    let on_add = Callback::new(move |_| open_form(ProductForm::default()));
    let on_edit = Callback::new(move |row: ProductRow| open_form(ProductForm::for_edit(&row)));
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load.run(());
    });
    let on_close = Callback::new(move |_| editing.set(None));

    load.run(());

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST title="Products">
            {error_banner(state.error)}
            <StandardDataTable
                description="Product master data synced from the ERP."
                rows=state.items
                columns=columns()
                strategy=TableMode::client(config.client_page_size)
                loading=state.loading
                filters=filters
                search_placeholder="Search SKU or name..."
                on_sync=sync_action(api.clone(), &config, SyncTarget::Products, load)
                on_cancel_sync=cancel_sync_action(api.clone())
                on_import=import_action(api.clone(), ImportType::Products, load)
                import_title="Import Products"
                on_export=export_action(state.items, "Products")
                on_add=on_add
                on_edit=on_edit
                on_delete=delete_action(api.clone(), |row: &ProductRow| product_path(&row.sku_id), load)
            />
            {move || editing.get().map(|form| view! {
                <ProductDetails form=form on_saved=on_saved on_close=on_close />
            })}
        </PageFrame>
    }
}
