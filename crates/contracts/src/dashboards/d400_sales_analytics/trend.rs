use chrono::{Datelike, NaiveDate};

use crate::domain::a001_sale::SaleRecord;

use super::dto::{Dimension, Growth, MonthlyRollup};
use super::group_by::round_to;

/// Monthly rollups in calendar order (oldest first).
///
/// Grouping order follows the input; the explicit sort is what makes
/// "latest vs previous" comparisons valid.
pub fn monthly_trend(records: &[SaleRecord]) -> Vec<MonthlyRollup> {
    let mut months: Vec<MonthlyRollup> = Dimension::Month
        .group(records)
        .into_iter()
        .filter_map(|rollup| {
            // keys come from Dimension::Month and are always "YYYY-MM"
            let first_day =
                NaiveDate::parse_from_str(&format!("{}-01", rollup.key), "%Y-%m-%d").ok()?;
            Some(MonthlyRollup {
                year: first_day.year(),
                month: first_day.month(),
                label: first_day.format("%b %Y").to_string(),
                quantity: rollup.quantity,
                transactions: rollup.transactions,
                unique_customers: rollup.unique_customers.unwrap_or(0),
                avg_quantity: rollup.avg_quantity,
            })
        })
        .collect();

    months.sort_by_key(|m| (m.year, m.month));
    months
}

/// Percent change from `previous` to `current`, 1 decimal.
/// A zero baseline yields [`Growth::InsufficientBaseline`].
pub fn growth_rate(current: u64, previous: u64) -> Growth {
    if previous == 0 {
        return Growth::InsufficientBaseline;
    }
    let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
    Growth::Rate(round_to(change, 1))
}

/// Last two months of a chronological trend and the growth between them
pub fn month_over_month(
    months: &[MonthlyRollup],
) -> Option<(&MonthlyRollup, &MonthlyRollup, Growth)> {
    match months {
        [.., previous, latest] => Some((
            previous,
            latest,
            growth_rate(latest.quantity, previous.quantity),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_analytics::test_support::{sale, with_customer};

    #[test]
    fn test_monthly_trend_is_chronological() {
        let records = vec![
            sale("1", "A", 5, "2024-03-10"),
            sale("2", "A", 1, "2023-12-31T23:00:00.000Z"),
            sale("3", "A", 2, "2024-01-15"),
            sale("4", "A", 3, "2024-03-01"),
        ];
        let months = monthly_trend(&records);
        let keys: Vec<String> = months.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(months[0].label, "Dec 2023");
        assert_eq!(months[2].quantity, 8);
        assert_eq!(months[2].transactions, 2);
        assert_eq!(months[2].avg_quantity, 4.0);
    }

    #[test]
    fn test_monthly_unique_customers() {
        let records = vec![
            with_customer(sale("1", "A", 1, "2024-05-01"), "Clinic"),
            with_customer(sale("2", "B", 1, "2024-05-02"), "Clinic"),
            with_customer(sale("3", "A", 1, "2024-05-03"), "Pharmacy"),
        ];
        let months = monthly_trend(&records);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].unique_customers, 2);
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(growth_rate(12, 8), Growth::Rate(50.0));
        assert_eq!(growth_rate(2, 3), Growth::Rate(-33.3));
        assert_eq!(growth_rate(5, 5), Growth::Rate(0.0));
        assert!(growth_rate(12, 8).is_growth());
        assert!(!growth_rate(5, 5).is_growth());
        assert!(!growth_rate(1, 5).is_growth());
    }

    #[test]
    fn test_zero_baseline_growth() {
        let growth = growth_rate(10, 0);
        assert_eq!(growth, Growth::InsufficientBaseline);
        assert_eq!(growth.percent(), None);
        assert!(!growth.is_growth());
    }

    #[test]
    fn test_month_over_month() {
        let records = vec![
            sale("1", "A", 4, "2024-02-10"),
            sale("2", "A", 6, "2024-01-10"),
        ];
        let months = monthly_trend(&records);
        let (previous, latest, growth) = month_over_month(&months).unwrap();
        assert_eq!(previous.label, "Jan 2024");
        assert_eq!(latest.label, "Feb 2024");
        assert_eq!(growth, Growth::Rate(-33.3));

        assert!(month_over_month(&months[..1]).is_none());
        assert!(month_over_month(&[]).is_none());
    }
}
