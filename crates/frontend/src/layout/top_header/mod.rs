//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - User info and logout

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.active.set(None);
        ctx.notify_success("Logged out");
    };

    let user_label = move || {
        auth_state
            .get()
            .session
            .map(|s| format!("{} · {}", s.user.name, s.role().label()))
            .unwrap_or_default()
    };

    view! {
        <div class="top-header no-print">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Pharma Sales"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{user_label}</span>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
