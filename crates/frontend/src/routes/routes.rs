use contracts::system::auth::UserRole;
use leptos::prelude::*;

use crate::dashboards::d400_sales_analytics::ui::{SalesListing, SalesReport, SalesSummary};
use crate::domain::a001_sale::ui::list::SaleList;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::{login::LoginPage, signup::SignupPage};

/// Pages reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// Sales rep dashboard: metrics, product rollup, top customers
    SalesSummary,
    /// Manager dashboard: every sale plus product/date/rep rollups
    SalesListing,
    /// Manager printable report
    SalesReport,
    /// Sales rep CRUD table
    Sales,
}

impl PageKey {
    pub fn key(&self) -> &'static str {
        match self {
            Self::SalesSummary => "d400_sales_summary",
            Self::SalesListing => "d400_sales_listing",
            Self::SalesReport => "d400_sales_report",
            Self::Sales => "a001_sale",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        [Self::SalesSummary, Self::SalesListing, Self::SalesReport, Self::Sales]
            .into_iter()
            .find(|page| page.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub page: PageKey,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries for a role; the first one is the landing page
pub fn menu_items(role: UserRole) -> Vec<MenuItem> {
    match role {
        UserRole::Manager => vec![
            MenuItem {
                page: PageKey::SalesListing,
                label: "Dashboard",
                icon: "bar-chart",
            },
            MenuItem {
                page: PageKey::SalesReport,
                label: "Reports",
                icon: "file-text",
            },
        ],
        UserRole::Sales => vec![
            MenuItem {
                page: PageKey::SalesSummary,
                label: "Dashboard",
                icon: "bar-chart",
            },
            MenuItem {
                page: PageKey::Sales,
                label: "Sales",
                icon: "cash",
            },
        ],
    }
}

pub fn default_page(role: UserRole) -> PageKey {
    match role {
        UserRole::Manager => PageKey::SalesListing,
        UserRole::Sales => PageKey::SalesSummary,
    }
}

/// Page to show for `requested`; pages outside the role's menu fall back to
/// the landing page
pub fn resolve_page(role: UserRole, requested: Option<PageKey>) -> PageKey {
    match requested {
        Some(page) if menu_items(role).iter().any(|item| item.page == page) => page,
        _ => default_page(role),
    }
}

fn render_page(page: PageKey) -> AnyView {
    match page {
        PageKey::SalesSummary => view! { <SalesSummary /> }.into_any(),
        PageKey::SalesListing => view! {
            <RequireRole role=UserRole::Manager><SalesListing /></RequireRole>
        }
        .into_any(),
        PageKey::SalesReport => view! {
            <RequireRole role=UserRole::Manager><SalesReport /></RequireRole>
        }
        .into_any(),
        PageKey::Sales => view! {
            <RequireRole role=UserRole::Sales><SaleList /></RequireRole>
        }
        .into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, _) = use_auth();

    ctx.init_router_integration();

    // keep the active page inside the role's menu
    Effect::new(move |_| {
        if let Some(role) = auth_state.get().role() {
            let resolved = resolve_page(role, ctx.active.get());
            if ctx.active.get_untracked() != Some(resolved) {
                ctx.active.set(Some(resolved));
            }
        }
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let role = auth_state.get().role();
                        match role {
                            Some(role) => render_page(resolve_page(role, ctx.active.get())),
                            None => view! { <></> }.into_any(),
                        }
                    }}
                }
                .into_any()
            }
        />
    }
}

/// Login and signup share one screen
#[component]
fn AuthPages() -> impl IntoView {
    let (show_signup, set_show_signup) = signal(false);

    view! {
        <Show
            when=move || show_signup.get()
            fallback=move || view! { <LoginPage on_signup=Callback::new(move |_| set_show_signup.set(true)) /> }
        >
            <SignupPage on_login=Callback::new(move |_| set_show_signup.set(false)) />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <AuthPages /> }
        >
            <MainLayout />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(role: UserRole) -> Vec<PageKey> {
        menu_items(role).into_iter().map(|item| item.page).collect()
    }

    #[test]
    fn test_manager_menu() {
        assert_eq!(pages(UserRole::Manager), vec![PageKey::SalesListing, PageKey::SalesReport]);
        assert_eq!(default_page(UserRole::Manager), PageKey::SalesListing);
    }

    #[test]
    fn test_sales_menu() {
        assert_eq!(pages(UserRole::Sales), vec![PageKey::SalesSummary, PageKey::Sales]);
        assert_eq!(menu_items(UserRole::Sales)[1].label, "Sales");
    }

    #[test]
    fn test_resolve_page_guards_role() {
        assert_eq!(resolve_page(UserRole::Sales, Some(PageKey::SalesReport)), PageKey::SalesSummary);
        assert_eq!(resolve_page(UserRole::Manager, Some(PageKey::SalesReport)), PageKey::SalesReport);
        assert_eq!(resolve_page(UserRole::Manager, None), PageKey::SalesListing);
    }

    #[test]
    fn test_page_key_round_trip() {
        for page in [PageKey::SalesSummary, PageKey::SalesListing, PageKey::SalesReport, PageKey::Sales] {
            assert_eq!(PageKey::parse(page.key()), Some(page));
        }
        assert_eq!(PageKey::parse("unknown"), None);
    }
}
