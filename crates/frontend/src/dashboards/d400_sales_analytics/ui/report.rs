use chrono::NaiveDate;
use contracts::dashboards::d400_sales_analytics::{MonthlyRollup, SalesAggregator, SalesMetrics};
use leptos::prelude::*;
use thaw::*;

use super::widgets::{
    bar_rows, BarChart, DiagnosticsNote, EmptyState, InsightList, LoadingState, MetricCard,
    RollupColumns, RollupTable,
};
use crate::dashboards::d400_sales_analytics::data::use_sales_source;
use crate::shared::config::app_config;
use crate::shared::date_utils::{format_naive, today};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_decimal, format_int, format_optional};

pub fn report_subtitle(generated_on: NaiveDate, records: u64) -> String {
    format!(
        "Generated on {} | Total Records: {}",
        format_naive(generated_on),
        records
    )
}

pub fn executive_summary(metrics: &SalesMetrics) -> String {
    format!(
        "This comprehensive sales analysis covers {} transactions across {} products, {} customers, and {} sales representatives. The report includes performance metrics, trend analysis, customer segmentation, and actionable insights for strategic decision-making.",
        metrics.total_transactions,
        metrics.distinct_products,
        metrics.distinct_customers,
        metrics.distinct_representatives
    )
}

/// Closing paragraph; `None` when nothing was sold
pub fn performance_summary(metrics: &SalesMetrics) -> Option<String> {
    if metrics.total_units == 0 {
        return None;
    }
    Some(format!(
        "Overall performance shows {} units sold across {} transactions, maintaining an average of {} units per transaction. The sales team successfully engaged {} customers with a diverse portfolio of {} products.",
        metrics.total_units,
        metrics.total_transactions,
        format_optional(metrics.avg_sale_size, 1),
        metrics.distinct_customers,
        metrics.distinct_products
    ))
}

fn print_report() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::error!("window.print() failed: {:?}", e);
        }
    }
}

#[component]
fn MonthlyTable(months: Vec<MonthlyRollup>) -> impl IntoView {
    view! {
        <div class="table-card">
            <h3 class="table-card__title">"Monthly Sales Trend & Performance"</h3>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Month"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Transactions"</th>
                            <th class="table__header-cell">"Unique Customers"</th>
                            <th class="table__header-cell">"Avg/Transaction"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {months.into_iter().map(|month| view! {
                            <tr class="table__row">
                                <td class="table__cell">{month.label}</td>
                                <td class="table__cell table__cell--number">{format_int(month.quantity)}</td>
                                <td class="table__cell table__cell--number">{format_int(month.transactions)}</td>
                                <td class="table__cell table__cell--number">{month.unique_customers}</td>
                                <td class="table__cell table__cell--number">{format_decimal(month.avg_quantity, 2)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Printable manager report
#[component]
pub fn SalesReport() -> impl IntoView {
    let source = use_sales_source();
    let limits = app_config().analytics.clone();

    let report = Memo::new(move |_| {
        source.records.with(|records| {
            SalesAggregator::new(records)
                .full_report(limits.report_top_customers, limits.report_top_representatives)
        })
    });
    let has_data = Signal::derive(move || report.with(|r| r.metrics.total_transactions > 0));

    let product_columns = RollupColumns {
        unique_customers: true,
        ..RollupColumns::default()
    };
    let customer_columns = RollupColumns {
        unique_products: true,
        contact: true,
        ..RollupColumns::default()
    };
    let rep_columns = RollupColumns {
        rank: true,
        unique_customers: true,
        unique_products: true,
        contact: true,
    };

    view! {
        <div class="page report">
            <div class="header no-print">
                <div class="header__content">
                    <h1 class="header__title">"Reports"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| print_report()
                        disabled=Signal::derive(move || !has_data.get())
                    >
                        {icon("printer")}
                        " Download Report (PDF)"
                    </Button>
                </div>
            </div>

            {move || source.error.get().map(|e| view! { <div class="alert alert--error no-print">{e}</div> })}

            {move || {
                if source.loading.get() {
                    return view! { <LoadingState message="Preparing report..." /> }.into_any();
                }
                if !has_data.get() {
                    return view! {
                        <EmptyState
                            title="No Sales Data Available"
                            message="Currently, there are no sales records to display. Once sales are recorded, this report will be automatically populated with charts, tables, and insights."
                        />
                    }
                    .into_any();
                }
                let report = report.get();
                let metrics = report.metrics.clone();
                view! {
                    <DiagnosticsNote diagnostics=report.diagnostics.clone() />

                    <section class="report__cover">
                        <h1>"Comprehensive Sales Report"</h1>
                        <p class="text-muted">{report_subtitle(today(), metrics.total_transactions)}</p>
                        <div class="metric-grid">
                            <MetricCard label="Total Units" value=format_int(metrics.total_units) />
                            <MetricCard label="Transactions" value=format_int(metrics.total_transactions) />
                            <MetricCard label="Customers" value=metrics.distinct_customers.to_string() />
                            <MetricCard label="Products" value=metrics.distinct_products.to_string() />
                            <MetricCard label="Sales Reps" value=metrics.distinct_representatives.to_string() />
                            <MetricCard label="Avg/Sale" value=format_optional(metrics.avg_sale_size, 1) />
                        </div>
                    </section>

                    <section class="report__section">
                        <h2>"Executive Summary"</h2>
                        <p>{executive_summary(&metrics)}</p>
                    </section>

                    <section class="report__section">
                        <MonthlyTable months=report.months.clone() />
                        <div class="chart-grid">
                            <BarChart title="Product Performance Analysis" rows=bar_rows(&report.products) />
                            <BarChart title="Daily Sales Performance" rows=bar_rows(&report.dates) />
                        </div>
                        <RollupTable title="Products" key_label="Product" rows=report.products.clone() columns=product_columns />
                    </section>

                    <section class="report__section">
                        <RollupTable
                            title="Customer Performance Analysis"
                            key_label="Customer"
                            rows=report.top_customers.clone()
                            columns=customer_columns
                        />
                        <RollupTable
                            title="Sales Representative Performance"
                            key_label="Representative"
                            rows=report.representatives.clone()
                            columns=rep_columns
                        />
                    </section>

                    <section class="report__section">
                        <h2>"Data-Driven Insights & Conclusions"</h2>
                        <InsightList insights=report.insights.clone() />
                        {performance_summary(&metrics).map(|text| view! {
                            <div class="report__summary">
                                <h3>"Performance Summary"</h3>
                                <p>{text}</p>
                            </div>
                        })}
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total_units: u64, transactions: u64) -> SalesMetrics {
        SalesMetrics {
            total_units,
            total_transactions: transactions,
            distinct_customers: 3,
            distinct_products: 2,
            distinct_representatives: 1,
            avg_sale_size: (transactions > 0).then(|| total_units as f64 / transactions as f64),
        }
    }

    #[test]
    fn test_report_subtitle() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(report_subtitle(date, 12), "Generated on 05 Mar 2024 | Total Records: 12");
    }

    #[test]
    fn test_executive_summary() {
        let text = executive_summary(&metrics(10, 4));
        assert!(text.starts_with(
            "This comprehensive sales analysis covers 4 transactions across 2 products, 3 customers, and 1 sales representatives."
        ));
    }

    #[test]
    fn test_performance_summary() {
        assert_eq!(performance_summary(&metrics(0, 0)), None);
        let text = performance_summary(&metrics(10, 4)).unwrap();
        assert!(text.contains("average of 2.5 units per transaction"), "{text}");
    }
}
