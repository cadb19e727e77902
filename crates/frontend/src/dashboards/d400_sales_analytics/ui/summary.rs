use contracts::dashboards::d400_sales_analytics::SalesAggregator;
use leptos::prelude::*;
use thaw::*;

use super::widgets::{bar_rows, BarChart, EmptyState, LoadingState, MetricCard, RollupTable};
use crate::dashboards::d400_sales_analytics::data::use_sales_source;
use crate::layout::global_context::use_global_context;
use crate::routes::routes::PageKey;
use crate::shared::config::app_config;
use crate::shared::number_format::format_int;

/// Sales representative dashboard
#[component]
pub fn SalesSummary() -> impl IntoView {
    let source = use_sales_source();
    let ctx = use_global_context();
    let top_customers = app_config().analytics.dashboard_top_customers;

    let summary = Memo::new(move |_| {
        source
            .records
            .with(|records| SalesAggregator::new(records).dashboard_summary(top_customers))
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales Dashboard"</h1>
                </div>
            </div>

            {move || source.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || {
                if source.loading.get() {
                    return view! {
                        <LoadingState message="Please wait while we fetch your sales information" />
                    }
                    .into_any();
                }
                let summary = summary.get();
                if summary.metrics.total_transactions == 0 {
                    return view! {
                        <div>
                            <EmptyState
                                title="No Sales Yet"
                                message="Get started by recording your first sale"
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| ctx.navigate(PageKey::Sales)
                            >
                                "Add First Sale"
                            </Button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="metric-grid">
                        <MetricCard label="Total Sales" value=format_int(summary.metrics.total_transactions) />
                        <MetricCard label="Total Quantity" value=format_int(summary.metrics.total_units) />
                        <MetricCard label="Products" value=summary.metrics.distinct_products.to_string() />
                    </div>
                    <div class="chart-grid">
                        <BarChart title="Product-wise Sales" rows=bar_rows(&summary.products) />
                        <BarChart title="Sales Over Time" rows=bar_rows(&summary.dates) />
                    </div>
                    <RollupTable
                        title=format!("Top {} Customers", top_customers)
                        key_label="Customer"
                        rows=summary.top_customers
                    />
                }
                .into_any()
            }}
        </div>
    }
}
