use std::collections::HashSet;

use crate::domain::a001_sale::SaleRecord;

use super::dto::SalesMetrics;

/// Single-pass summary of a record set.
/// `avg_sale_size` stays `None` for an empty set.
pub fn compute_metrics(records: &[SaleRecord]) -> SalesMetrics {
    let mut total_units: u64 = 0;
    let mut customers: HashSet<&str> = HashSet::new();
    let mut products: HashSet<&str> = HashSet::new();
    let mut representatives: HashSet<&str> = HashSet::new();

    for record in records {
        total_units += u64::from(record.quantity);
        customers.insert(record.customer_name.as_str());
        products.insert(record.product_name.as_str());
        representatives.insert(record.representative_name());
    }

    let total_transactions = records.len() as u64;
    let avg_sale_size = if total_transactions == 0 {
        None
    } else {
        Some(total_units as f64 / total_transactions as f64)
    };

    SalesMetrics {
        total_units,
        total_transactions,
        distinct_customers: customers.len(),
        distinct_products: products.len(),
        distinct_representatives: representatives.len(),
        avg_sale_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_analytics::test_support::{sale, with_customer, with_rep};

    #[test]
    fn test_empty_input() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics.total_units, 0);
        assert_eq!(metrics.total_transactions, 0);
        assert_eq!(metrics.distinct_customers, 0);
        assert_eq!(metrics.avg_sale_size, None);
        assert_eq!(metrics.avg_units_per_customer(), None);
    }

    #[test]
    fn test_basic_metrics() {
        let records = vec![
            sale("1", "A", 3, "2024-01-05"),
            sale("2", "B", 5, "2024-01-05"),
            sale("3", "A", 2, "2024-01-06"),
        ];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.total_units, 10);
        assert_eq!(metrics.total_transactions, 3);
        assert_eq!(metrics.distinct_products, 2);
        assert_eq!(metrics.avg_sale_size, Some(10.0 / 3.0));
    }

    #[test]
    fn test_distinct_counts_include_unknown_rep() {
        let records = vec![
            with_customer(with_rep(sale("1", "A", 1, "2024-01-05"), "Olga"), "Clinic"),
            with_customer(with_rep(sale("2", "A", 1, "2024-01-05"), "Olga"), "Pharmacy"),
            with_customer(sale("3", "B", 1, "2024-01-05"), "Clinic"),
        ];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.distinct_customers, 2);
        assert_eq!(metrics.distinct_representatives, 2);
        assert_eq!(metrics.avg_units_per_customer(), Some(1.5));
    }
}
