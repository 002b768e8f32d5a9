pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use center::Tabs;
use global_context::use_app_context;
use left::Sidebar;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +-----------------------------+
/// |          TopHeader          |
/// +-----------------------------+
/// |  Sidebar  |  Tabs           |
/// +-----------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
                    <Sidebar />
                </div>
                <div class="app-main">
                    <div data-zone="center" class="app-tabs">
                        <Tabs />
                    </div>
                </div>
            </div>
        </div>
    }
}
