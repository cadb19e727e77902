use contracts::dashboards::d400_sales_analytics::SalesAggregator;
use leptos::prelude::*;
use thaw::*;

use super::widgets::{
    bar_rows, BarChart, DiagnosticsNote, EmptyState, LoadingState, MetricCard, RollupColumns,
    RollupTable,
};
use crate::dashboards::d400_sales_analytics::data::use_sales_source;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_optional};

/// Manager dashboard: every sale plus product, date and representative rollups
#[component]
pub fn SalesListing() -> impl IntoView {
    let source = use_sales_source();

    let listing = Memo::new(move |_| {
        source
            .records
            .with(|records| SalesAggregator::new(records).listing_summary())
    });
    let diagnostics = Memo::new(move |_| {
        source
            .records
            .with(|records| SalesAggregator::new(records).diagnostics())
    });

    let rep_columns = RollupColumns {
        rank: true,
        unique_customers: true,
        unique_products: true,
        contact: true,
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"All Sales"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| source.reload()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            {move || source.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if source.loading.get() {
                    return view! { <LoadingState message="Loading sales..." /> }.into_any();
                }
                let listing = listing.get();
                if listing.metrics.total_transactions == 0 {
                    return view! {
                        <EmptyState title="No sales data available." message="Sales recorded by representatives appear here." />
                    }
                    .into_any();
                }
                let metrics = listing.metrics.clone();
                view! {
                    <DiagnosticsNote diagnostics=diagnostics.get() />
                    <div class="metric-grid">
                        <MetricCard label="Total Units" value=format_int(metrics.total_units) />
                        <MetricCard label="Transactions" value=format_int(metrics.total_transactions) />
                        <MetricCard label="Customers" value=metrics.distinct_customers.to_string() />
                        <MetricCard label="Sales Reps" value=metrics.distinct_representatives.to_string() />
                        <MetricCard label="Avg/Sale" value=format_optional(metrics.avg_sale_size, 1) />
                    </div>
                    <div class="chart-grid">
                        <BarChart title="Product-wise Sales" rows=bar_rows(&listing.products) />
                        <BarChart title="Sales Over Time" rows=bar_rows(&listing.dates) />
                        <BarChart title="Representative-wise Sales" rows=bar_rows(&listing.representatives) />
                    </div>
                    <RollupTable
                        title="Representatives"
                        key_label="Representative"
                        rows=listing.representatives.clone()
                        columns=rep_columns
                    />
                    <div class="table-card">
                        <h3 class="table-card__title">"All Sales"</h3>
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Product"</th>
                                        <th class="table__header-cell">"Quantity"</th>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Customer"</th>
                                        <th class="table__header-cell">"Email"</th>
                                        <th class="table__header-cell">"Phone"</th>
                                        <th class="table__header-cell">"Representative"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {source.records.get().into_iter().map(|sale| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{sale.product_name.clone()}</td>
                                            <td class="table__cell table__cell--number">{sale.quantity}</td>
                                            <td class="table__cell">{format_date(&sale.date_of_sale)}</td>
                                            <td class="table__cell">{sale.customer_name.clone()}</td>
                                            <td class="table__cell">{sale.customer_email().unwrap_or("N/A").to_string()}</td>
                                            <td class="table__cell">{sale.customer_phone().unwrap_or("N/A").to_string()}</td>
                                            <td class="table__cell">{sale.representative_name().to_string()}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
