use crate::domain::a001_sale::SaleRecord;

use super::dto::{
    AggregationDiagnostic, DashboardSummary, Dimension, DiagnosticKind, GroupRollup, Insight,
    ListingSummary, MonthlyRollup, SalesAnalytics, SalesMetrics,
};
use super::insights::{generate_insights, InsightInputs};
use super::metrics::compute_metrics;
use super::ranking::rank;
use super::trend::monthly_trend;

/// Read-only view over a snapshot of sale records.
///
/// Holds no state besides the borrowed slice: every call recomputes from
/// scratch and the records are never modified.
#[derive(Debug, Clone, Copy)]
pub struct SalesAggregator<'a> {
    records: &'a [SaleRecord],
}

impl<'a> SalesAggregator<'a> {
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'a [SaleRecord] {
        self.records
    }

    /// Rollups in first-seen key order
    pub fn group_by(&self, dimension: Dimension) -> Vec<GroupRollup> {
        dimension.group(self.records)
    }

    pub fn metrics(&self) -> SalesMetrics {
        compute_metrics(self.records)
    }

    /// Day rollups ordered by date, oldest first
    pub fn daily(&self) -> Vec<GroupRollup> {
        let mut days = self.group_by(Dimension::Date);
        // ISO keys sort chronologically
        days.sort_by(|a, b| a.key.cmp(&b.key));
        days
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyRollup> {
        monthly_trend(self.records)
    }

    /// Rollups of `dimension` ranked by quantity, cut to `limit`
    pub fn ranked(&self, dimension: Dimension, limit: Option<usize>) -> Vec<GroupRollup> {
        rank(&self.group_by(dimension), limit)
    }

    /// Records excluded from date-based views
    pub fn diagnostics(&self) -> Vec<AggregationDiagnostic> {
        self.records
            .iter()
            .filter(|r| r.sale_date().is_none())
            .map(|r| AggregationDiagnostic {
                record_id: r.id.to_string(),
                kind: DiagnosticKind::MalformedDate,
                value: r.date_of_sale.clone(),
            })
            .collect()
    }

    pub fn insights(&self) -> Vec<Insight> {
        let metrics = self.metrics();
        let products = self.group_by(Dimension::Product);
        let customers = self.ranked(Dimension::Customer, None);
        let representatives = self.group_by(Dimension::Representative);
        let months = self.monthly_trend();
        let dates = self.daily();
        generate_insights(&InsightInputs {
            metrics: &metrics,
            products: &products,
            customers: &customers,
            representatives: &representatives,
            months: &months,
            dates: &dates,
        })
    }

    /// Sales representative home screen
    pub fn dashboard_summary(&self, top_customers: usize) -> DashboardSummary {
        DashboardSummary {
            metrics: self.metrics(),
            products: self.group_by(Dimension::Product),
            top_customers: self.ranked(Dimension::Customer, Some(top_customers)),
            dates: self.daily(),
        }
    }

    /// Manager home screen
    pub fn listing_summary(&self) -> ListingSummary {
        ListingSummary {
            metrics: self.metrics(),
            products: self.group_by(Dimension::Product),
            dates: self.daily(),
            representatives: self.ranked(Dimension::Representative, None),
        }
    }

    /// Printable report: every view plus insights and diagnostics
    pub fn full_report(&self, top_customers: usize, top_representatives: usize) -> SalesAnalytics {
        let metrics = self.metrics();
        let products = self.group_by(Dimension::Product);
        let customers = self.ranked(Dimension::Customer, None);
        let representatives = self.group_by(Dimension::Representative);
        let months = self.monthly_trend();
        let dates = self.daily();

        let insights = generate_insights(&InsightInputs {
            metrics: &metrics,
            products: &products,
            customers: &customers,
            representatives: &representatives,
            months: &months,
            dates: &dates,
        });

        SalesAnalytics {
            top_customers: customers.into_iter().take(top_customers).collect(),
            representatives: rank(&representatives, Some(top_representatives)),
            metrics,
            products,
            dates,
            months,
            insights,
            diagnostics: self.diagnostics(),
        }
    }
}
