//! サイドバー付きレイアウト

use cardiorisk_common::content::{is_nav_active, APP_NAME, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

#[component]
pub fn Layout() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="brand">
                    <span class="brand-icon">"♥"</span>
                    <span class="brand-name">{APP_NAME}</span>
                </div>
                <nav class="nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.path
                                    class=move || {
                                        if is_nav_active(item, &pathname.get()) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}
