//! Sidebar with the role's menu items

use crate::layout::global_context::use_global_context;
use crate::routes::routes::menu_items;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    view! {
        <div class="app-sidebar__content">
            {move || {
                let Some(role) = auth_state.get().role() else {
                    return Vec::new();
                };
                menu_items(role)
                    .into_iter()
                    .map(|item| {
                        let page = item.page;
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active.get() == Some(page)
                                on:click=move |_| ctx.navigate(page)
                            >
                                <span class="app-sidebar__icon">{icon(item.icon)}</span>
                                <span class="app-sidebar__label">{item.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
