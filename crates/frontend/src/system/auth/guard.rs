use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a specific role
#[component]
pub fn RequireRole(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().role() == Some(role)
            fallback=move || view! {
                <div class="alert alert--warning">
                    {format!("Access denied. {} role required.", role.label())}
                </div>
            }
        >
            {children()}
        </Show>
    }
}
