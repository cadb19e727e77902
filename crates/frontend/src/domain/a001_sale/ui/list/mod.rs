pub mod state;

use contracts::domain::a001_sale::{SaleForm, SaleId, SaleRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{apply_created, apply_deleted, apply_updated, create_state};
use super::form_modal::SaleFormModal;
use crate::domain::a001_sale::api;
use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::sort_indicator;
use crate::system::auth::context::use_session;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this sale?";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Sales management table for representatives
#[component]
#[allow(non_snake_case)]
pub fn SaleList() -> impl IntoView {
    let state = create_state();
    let session = use_session();
    let ctx = use_global_context();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let modal_open = RwSignal::new(false);
    let (editing, set_editing) = signal::<Option<SaleRecord>>(None);
    let (saving, set_saving) = signal(false);

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let value = search.get();
        state.update(|s| s.search = value);
    });

    let fetch = move || {
        let Some(session) = session.get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sales(&session).await {
                Ok(sales) => {
                    state.update(|s| {
                        s.sales = sales;
                        s.is_loaded = true;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Error fetching sales: {}", e);
                    set_error.set(Some(e));
                    ctx.notify_error("Failed to fetch sales data!");
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if session.with(|s| s.is_some()) {
            fetch();
        }
    });

    let handle_add = move || {
        set_editing.set(None);
        modal_open.set(true);
    };

    let handle_edit = move |record: SaleRecord| {
        set_editing.set(Some(record));
        modal_open.set(true);
    };

    let handle_delete = move |id: SaleId| {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }
        let Some(session) = session.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_sale(&session, &id).await {
                Ok(()) => {
                    state.update(|s| apply_deleted(&mut s.sales, &id));
                    ctx.notify_success("Sale deleted successfully!");
                }
                Err(e) => {
                    log::error!("Error deleting sale {}: {}", id, e);
                    ctx.notify_error("Failed to delete sale!");
                }
            }
        });
    };

    let handle_submit = Callback::new(move |form: SaleForm| {
        let Some(session) = session.get_untracked() else {
            return;
        };
        let editing_id = editing.get_untracked().map(|r| r.id);
        set_saving.set(true);
        spawn_local(async move {
            let result = match editing_id.as_ref() {
                Some(id) => api::update_sale(&session, id, &form).await,
                None => api::create_sale(&session, &form).await,
            };
            match result {
                Ok(record) => {
                    if editing_id.is_some() {
                        state.update(|s| {
                            if !apply_updated(&mut s.sales, record) {
                                log::warn!("Updated sale is no longer in the list");
                            }
                        });
                        ctx.notify_success("Sale updated successfully!");
                    } else {
                        state.update(|s| apply_created(&mut s.sales, record));
                        ctx.notify_success("Sale created successfully!");
                    }
                    modal_open.set(false);
                }
                Err(e) => {
                    log::error!("Error saving sale: {}", e);
                    ctx.notify_error("Failed to save sale!");
                }
            }
            set_saving.set(false);
        });
    });

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {label}
                {move || state.with(|s| sort_indicator(&s.sort_field, field, s.sort_ascending))}
            </th>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales Management"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_add()>
                        {icon("plus")}
                        " Add Sale"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-bar">
                <Input value=search placeholder="Search product, customer or representative" />
            </div>

            {move || {
                if loading.get() && !state.with(|s| s.is_loaded) {
                    return view! { <div class="loading"><Spinner /></div> }.into_any();
                }
                if state.with(|s| s.sales.is_empty()) {
                    return view! {
                        <div class="empty-state">
                            <p>"No sales recorded yet."</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_add()>
                                "Add Your First Sale"
                            </Button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    {header_cell("product", "Product")}
                                    {header_cell("quantity", "Quantity")}
                                    {header_cell("date", "Date")}
                                    {header_cell("customer", "Customer")}
                                    <th class="table__header-cell">"Email"</th>
                                    <th class="table__header-cell">"Phone"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.with(|s| s.visible()).into_iter().map(|sale| {
                                    let for_edit = sale.clone();
                                    let id = sale.id.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{sale.product_name.clone()}</td>
                                            <td class="table__cell table__cell--number">{sale.quantity}</td>
                                            <td class="table__cell">{format_date(&sale.date_of_sale)}</td>
                                            <td class="table__cell">{sale.customer_name.clone()}</td>
                                            <td class="table__cell">{sale.customer_email().unwrap_or("N/A").to_string()}</td>
                                            <td class="table__cell">{sale.customer_phone().unwrap_or("N/A").to_string()}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button class="icon-btn" title="Edit" on:click=move |_| handle_edit(for_edit.clone())>
                                                    {icon("edit")}
                                                </button>
                                                <button class="icon-btn icon-btn--danger" title="Delete" on:click=move |_| handle_delete(id.clone())>
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}

            <SaleFormModal
                open=modal_open
                initial=editing
                saving=saving
                on_submit=handle_submit
            />
        </div>
    }
}
