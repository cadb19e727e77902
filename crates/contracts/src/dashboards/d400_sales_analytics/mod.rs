//! Client-side sales analytics
//!
//! Pure transformations from a slice of [`SaleRecord`](crate::domain::a001_sale::SaleRecord)
//! into the rollups, rankings, trends and insights shown by the summary
//! dashboard, the full listing and the printable report.

pub mod aggregator;
pub mod dto;
pub mod group_by;
pub mod insights;
pub mod metrics;
pub mod ranking;
pub mod trend;

pub use aggregator::SalesAggregator;
pub use dto::*;
pub use group_by::{group_by, AccumulatorSpec, ContactSource};
pub use insights::{generate_insights, InsightInputs};
pub use metrics::compute_metrics;
pub use ranking::{rank, rank_by, Direction, RankBy};
pub use trend::{growth_rate, month_over_month, monthly_trend};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::a001_sale::{CreatedBy, SaleId, SaleRecord};

    pub fn sale(id: &str, product: &str, quantity: u32, date: &str) -> SaleRecord {
        SaleRecord {
            id: SaleId::new(id),
            product_name: product.to_string(),
            quantity,
            date_of_sale: date.to_string(),
            customer_name: "Walk-in".to_string(),
            customer_email: None,
            customer_phone: None,
            created_by: None,
        }
    }

    pub fn with_customer(mut record: SaleRecord, customer: &str) -> SaleRecord {
        record.customer_name = customer.to_string();
        record
    }

    pub fn with_rep(mut record: SaleRecord, name: &str) -> SaleRecord {
        record.created_by = Some(CreatedBy {
            name: name.to_string(),
            email: format!("{}@pharma.test", name.to_lowercase()),
        });
        record
    }
}
