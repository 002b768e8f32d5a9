//! Grouped, collapsible navigation menu.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn menu_item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups(erp_sync_enabled: bool) -> Vec<MenuGroup> {
    let mut settings = vec![
        menu_item("sys_planning_settings", "settings"),
        menu_item("sys_seasonal_factors", "calendar"),
        menu_item("sys_database", "database"),
    ];
    if erp_sync_enabled {
        settings.push(menu_item("sys_integrations", "plug"));
    }

    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "dashboard",
            items: vec![
                menu_item("d400_home", "dashboard"),
                menu_item("d401_purchasing_spend", "sales"),
            ],
        },
        MenuGroup {
            id: "master_data",
            label: "Master Data",
            icon: "products",
            items: vec![
                menu_item("a001_product", "products"),
                menu_item("a002_unit", "units"),
                menu_item("a003_product_group", "groups"),
                menu_item("a004_warehouse", "warehouse"),
                menu_item("a005_vendor", "vendors"),
                menu_item("a006_customer", "customers"),
                menu_item("a007_partner_group", "partner-groups"),
            ],
        },
        MenuGroup {
            id: "transactions",
            label: "Transactions",
            icon: "sales",
            items: vec![
                menu_item("p901_sales", "sales"),
                menu_item("p902_purchases", "purchases"),
                menu_item("p903_inventory", "inventory"),
                menu_item("p904_snapshots", "snapshots"),
                menu_item("p905_rolling_inventory", "layers"),
            ],
        },
        MenuGroup {
            id: "planning",
            label: "Planning",
            icon: "forecast",
            items: vec![
                menu_item("u501_demand_forecast", "forecast"),
                menu_item("u502_purchase_plans", "plans"),
                menu_item("u503_rolling_plan", "matrix"),
                menu_item("u504_order_plan", "order"),
                menu_item("u505_vendor_performance", "vendors"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: settings,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();

    let expanded_groups = RwSignal::new(vec!["dashboards".to_string(), "master_data".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups(config.erp_sync_enabled).into_iter().map(|group| {
                let group_id = StoredValue::new(group.id.to_string());
                let is_expanded = move || group_id.with_value(|gid| expanded_groups.with(|g| g.contains(gid)));

                let toggle = move |_| {
                    let gid = group_id.get_value();
                    expanded_groups.update(|items| {
                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                            items.remove(pos);
                        } else {
                            items.push(gid);
                        }
                    });
                };

                view! {
                    <div>
                        <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(id, label, icon_name)| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(id))
                                        style:padding-left="10px"
                                        on:click=move |_| ctx.open_tab(id, label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups(true) {
            for (id, label, _) in group.items {
                assert_ne!(id, label, "missing tab label for {id}");
            }
        }
    }

    #[test]
    fn test_integrations_hidden_without_erp() {
        let settings = get_menu_groups(false).pop().unwrap();
        assert!(settings.items.iter().all(|(id, _, _)| *id != "sys_integrations"));
    }
}
