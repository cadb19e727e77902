use serde::{Deserialize, Serialize};

/// Top customers shown on the summary dashboard
pub const DASHBOARD_TOP_CUSTOMERS: usize = 5;
/// Top customers listed in the printable report
pub const REPORT_TOP_CUSTOMERS: usize = 10;
/// Representatives listed in the report leaderboard
pub const REPORT_TOP_REPRESENTATIVES: usize = 10;

/// Attribute used to partition sale records into rollups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Product,
    /// Calendar day, key "YYYY-MM-DD"
    Date,
    Representative,
    Customer,
    /// Calendar month, key "YYYY-MM"
    Month,
}

/// Contact details picked up while grouping by customer or representative
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Aggregate of all records sharing one grouping key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRollup {
    pub key: String,
    pub quantity: u64,
    pub transactions: u64,
    /// quantity / transactions, 2 decimals
    pub avg_quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_customers: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_products: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

/// Overall summary of a record set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_units: u64,
    pub total_transactions: u64,
    pub distinct_customers: usize,
    pub distinct_products: usize,
    pub distinct_representatives: usize,
    /// `None` when there are no transactions
    pub avg_sale_size: Option<f64>,
}

impl SalesMetrics {
    /// Units per distinct customer, `None` without customers
    pub fn avg_units_per_customer(&self) -> Option<f64> {
        if self.distinct_customers == 0 {
            None
        } else {
            Some(self.total_units as f64 / self.distinct_customers as f64)
        }
    }
}

/// One calendar month of the trend, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRollup {
    pub year: i32,
    pub month: u32,
    /// Display label, e.g. "Mar 2024"
    pub label: String,
    pub quantity: u64,
    pub transactions: u64,
    pub unique_customers: usize,
    pub avg_quantity: f64,
}

impl MonthlyRollup {
    /// Sortable key "YYYY-MM"
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Period-over-period change in quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Growth {
    /// Percent change, 1 decimal
    Rate(f64),
    /// Previous period had zero units, no percentage can be given
    InsufficientBaseline,
}

impl Growth {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Growth::Rate(p) => Some(*p),
            Growth::InsufficientBaseline => None,
        }
    }

    /// Growth only when strictly positive; zero counts as decline
    pub fn is_growth(&self) -> bool {
        matches!(self, Growth::Rate(p) if *p > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    ProductPerformance,
    TopCustomer,
    RepresentativePerformance,
    MonthlyGrowth,
    PeakDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// `dateOfSale` did not parse; record left out of date/month rollups
    MalformedDate,
}

/// Non-fatal problem found while aggregating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationDiagnostic {
    pub record_id: String,
    pub kind: DiagnosticKind,
    /// Offending raw value
    pub value: String,
}

impl std::fmt::Display for AggregationDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::MalformedDate => write!(
                f,
                "sale {} has an unparseable date '{}', excluded from daily and monthly views",
                self.record_id, self.value
            ),
        }
    }
}

/// Views used by the summary dashboard (sales representative home)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub metrics: SalesMetrics,
    pub products: Vec<GroupRollup>,
    pub top_customers: Vec<GroupRollup>,
    pub dates: Vec<GroupRollup>,
}

/// Views used by the full listing (manager home)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    pub metrics: SalesMetrics,
    pub products: Vec<GroupRollup>,
    pub dates: Vec<GroupRollup>,
    pub representatives: Vec<GroupRollup>,
}

/// Everything the printable report shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAnalytics {
    pub metrics: SalesMetrics,
    pub products: Vec<GroupRollup>,
    pub dates: Vec<GroupRollup>,
    pub months: Vec<MonthlyRollup>,
    pub top_customers: Vec<GroupRollup>,
    pub representatives: Vec<GroupRollup>,
    pub insights: Vec<Insight>,
    pub diagnostics: Vec<AggregationDiagnostic>,
}
