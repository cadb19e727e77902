//! Building blocks shared by the sales dashboards

use contracts::dashboards::d400_sales_analytics::{AggregationDiagnostic, GroupRollup, Insight};
use leptos::prelude::*;
use thaw::*;

use crate::shared::number_format::{bar_percent, format_decimal, format_int};

/// Row of a horizontal CSS bar chart
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: u64,
    /// Width relative to the largest value, 0..=100
    pub percent: f64,
}

/// Bars by quantity, scaled to the largest rollup
pub fn bar_rows(rollups: &[GroupRollup]) -> Vec<BarRow> {
    let max = rollups.iter().map(|r| r.quantity).max().unwrap_or(0);
    rollups
        .iter()
        .map(|r| BarRow {
            label: r.key.clone(),
            value: r.quantity,
            percent: bar_percent(r.quantity, max),
        })
        .collect()
}

#[component]
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: String,
) -> impl IntoView {
    view! {
        <Card class="metric-card">
            <div class="metric-card__label">{label}</div>
            <div class="metric-card__value">{value}</div>
            {(!hint.is_empty()).then(|| view! { <div class="metric-card__hint">{hint}</div> })}
        </Card>
    }
}

#[component]
pub fn BarChart(#[prop(into)] title: String, rows: Vec<BarRow>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <div class="bar-chart">
                {rows.into_iter().map(|row| view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{row.label}</span>
                        <span class="bar-chart__track">
                            <span class="bar-chart__bar" style=format!("width: {:.1}%;", row.percent)></span>
                        </span>
                        <span class="bar-chart__value">{format_int(row.value)}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Which optional rollup columns a table shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RollupColumns {
    pub rank: bool,
    pub unique_customers: bool,
    pub unique_products: bool,
    pub contact: bool,
}

#[component]
pub fn RollupTable(
    #[prop(into)] title: String,
    #[prop(into)] key_label: String,
    rows: Vec<GroupRollup>,
    #[prop(optional)] columns: RollupColumns,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <h3 class="table-card__title">{title}</h3>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.rank.then(|| view! { <th class="table__header-cell">"Rank"</th> })}
                            <th class="table__header-cell">{key_label}</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Transactions"</th>
                            <th class="table__header-cell">"Avg/Transaction"</th>
                            {columns.unique_customers.then(|| view! { <th class="table__header-cell">"Customers"</th> })}
                            {columns.unique_products.then(|| view! { <th class="table__header-cell">"Product Variety"</th> })}
                            {columns.contact.then(|| view! { <th class="table__header-cell">"Contact"</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().enumerate().map(|(index, row)| {
                            let contact = row.contact.clone().unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    {columns.rank.then(|| view! { <td class="table__cell">{format!("#{}", index + 1)}</td> })}
                                    <td class="table__cell">{row.key.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_int(row.quantity)}</td>
                                    <td class="table__cell table__cell--number">{format_int(row.transactions)}</td>
                                    <td class="table__cell table__cell--number">{format_decimal(row.avg_quantity, 2)}</td>
                                    {columns.unique_customers.then(|| view! {
                                        <td class="table__cell table__cell--number">{row.unique_customers.unwrap_or(0)}</td>
                                    })}
                                    {columns.unique_products.then(|| view! {
                                        <td class="table__cell table__cell--number">{row.unique_products.unwrap_or(0)}</td>
                                    })}
                                    {columns.contact.then(|| view! {
                                        <td class="table__cell">
                                            <div>{contact.email.clone().unwrap_or_else(|| "N/A".to_string())}</div>
                                            <div class="text-muted">{contact.phone.clone().unwrap_or_default()}</div>
                                        </td>
                                    })}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn InsightList(insights: Vec<Insight>) -> impl IntoView {
    view! {
        <ol class="insight-list">
            {insights.into_iter().enumerate().map(|(index, insight)| view! {
                <li class="insight-list__item">
                    <span class="insight-list__number">{index + 1}</span>
                    <span>{insight.text}</span>
                </li>
            }).collect_view()}
        </ol>
    }
}

/// Records left out of daily/monthly views; logged and shown as a note
#[component]
pub fn DiagnosticsNote(diagnostics: Vec<AggregationDiagnostic>) -> impl IntoView {
    for diagnostic in &diagnostics {
        log::warn!("{}", diagnostic);
    }
    let count = diagnostics.len();
    (count > 0).then(|| {
        view! {
            <div class="alert alert--warning no-print">
                {format!(
                    "{} sale(s) have an unreadable date and are left out of the daily and monthly views.",
                    count
                )}
            </div>
        }
    })
}

#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>{title}</h2>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn LoadingState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <Spinner />
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rollup(key: &str, quantity: u64) -> GroupRollup {
        GroupRollup {
            key: key.to_string(),
            quantity,
            transactions: 1,
            avg_quantity: quantity as f64,
            unique_customers: None,
            unique_products: None,
            contact: None,
        }
    }

    #[test]
    fn test_bar_rows_scale_to_max() {
        let rows = bar_rows(&[rollup("A", 5), rollup("B", 20), rollup("C", 0)]);
        let percents: Vec<f64> = rows.iter().map(|r| r.percent).collect();
        assert_eq!(percents, vec![25.0, 100.0, 0.0]);
        assert_eq!(rows[1].label, "B");
    }

    #[test]
    fn test_bar_rows_empty() {
        assert!(bar_rows(&[]).is_empty());
    }
}
