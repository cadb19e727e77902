//! Narrative conclusions for the printable report
//!
//! Each insight needs its own rollup; an empty rollup only drops that one
//! sentence.

use super::dto::{GroupRollup, Growth, Insight, InsightKind, MonthlyRollup, SalesMetrics};
use super::group_by::round_to;
use super::ranking::{first_max, first_min, RankBy};
use super::trend::month_over_month;

/// Rollups the insights are derived from
#[derive(Debug, Clone, Copy)]
pub struct InsightInputs<'a> {
    pub metrics: &'a SalesMetrics,
    pub products: &'a [GroupRollup],
    /// Ranked by quantity, highest first
    pub customers: &'a [GroupRollup],
    pub representatives: &'a [GroupRollup],
    /// Chronological
    pub months: &'a [MonthlyRollup],
    pub dates: &'a [GroupRollup],
}

pub fn generate_insights(inputs: &InsightInputs<'_>) -> Vec<Insight> {
    [
        product_insight(inputs.products),
        customer_insight(inputs.customers, inputs.metrics),
        representative_insight(inputs.representatives),
        growth_insight(inputs.months),
        peak_day_insight(inputs.dates),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn product_insight(products: &[GroupRollup]) -> Option<Insight> {
    let top = first_max(products, RankBy::Quantity)?;
    let least = first_min(products, RankBy::Quantity)?;
    Some(Insight {
        kind: InsightKind::ProductPerformance,
        text: format!(
            "{} is our best-performing product with {} units sold across {} transactions (avg: {} per transaction), while {} shows the lowest sales with only {} units.",
            top.key, top.quantity, top.transactions, top.avg_quantity, least.key, least.quantity
        ),
    })
}

fn customer_insight(customers: &[GroupRollup], metrics: &SalesMetrics) -> Option<Insight> {
    let top = customers.first()?;
    let mut text = format!(
        "Our top customer {} has purchased {} units across {} transactions with an average of {} units per purchase",
        top.key, top.quantity, top.transactions, top.avg_quantity
    );
    match customer_deviation(top, metrics) {
        Some(deviation) if deviation >= 0.0 => {
            text.push_str(&format!(", which is {:.1}% above the customer average.", deviation));
        }
        Some(deviation) => {
            text.push_str(&format!(", which is {:.1}% below the customer average.", deviation.abs()));
        }
        None => text.push('.'),
    }
    Some(Insight {
        kind: InsightKind::TopCustomer,
        text,
    })
}

/// `(top.avg_quantity / units_per_customer - 1) * 100`, 1 decimal
pub fn customer_deviation(top: &GroupRollup, metrics: &SalesMetrics) -> Option<f64> {
    let per_customer = metrics.avg_units_per_customer().filter(|avg| *avg > 0.0)?;
    Some(round_to((top.avg_quantity / per_customer - 1.0) * 100.0, 1))
}

fn representative_insight(representatives: &[GroupRollup]) -> Option<Insight> {
    let volume = first_max(representatives, RankBy::Quantity)?;
    let efficient = first_max(representatives, RankBy::AvgQuantity)?;
    Some(Insight {
        kind: InsightKind::RepresentativePerformance,
        text: format!(
            "{} leads in total sales volume with {} units sold to {} unique customers. {} shows the highest efficiency with {} units per transaction average.",
            volume.key,
            volume.quantity,
            volume.unique_customers.unwrap_or(0),
            efficient.key,
            efficient.avg_quantity
        ),
    })
}

fn growth_insight(months: &[MonthlyRollup]) -> Option<Insight> {
    let (previous, latest, growth) = month_over_month(months)?;
    let text = match growth {
        Growth::Rate(rate) => format!(
            "Sales trend shows {} of {:.1}% from {} ({} units) to {} ({} units).",
            if growth.is_growth() { "growth" } else { "decline" },
            rate.abs(),
            previous.label,
            previous.quantity,
            latest.label,
            latest.quantity
        ),
        Growth::InsufficientBaseline => format!(
            "Sales moved from {} units in {} to {} units in {}; growth cannot be expressed as a percentage (insufficient baseline).",
            previous.quantity, previous.label, latest.quantity, latest.label
        ),
    };
    Some(Insight {
        kind: InsightKind::MonthlyGrowth,
        text,
    })
}

fn peak_day_insight(dates: &[GroupRollup]) -> Option<Insight> {
    let best = first_max(dates, RankBy::Quantity)?;
    Some(Insight {
        kind: InsightKind::PeakDay,
        text: format!(
            "Peak daily performance was on {} with {} units sold across {} transactions.",
            best.key, best.quantity, best.transactions
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_analytics::group_by::average;
    use crate::dashboards::d400_sales_analytics::metrics::compute_metrics;

    fn rollup(key: &str, quantity: u64, transactions: u64) -> GroupRollup {
        GroupRollup {
            key: key.to_string(),
            quantity,
            transactions,
            avg_quantity: average(quantity, transactions),
            unique_customers: Some(1),
            unique_products: None,
            contact: None,
        }
    }

    fn month(year: i32, month: u32, label: &str, quantity: u64) -> MonthlyRollup {
        MonthlyRollup {
            year,
            month,
            label: label.to_string(),
            quantity,
            transactions: 1,
            unique_customers: 1,
            avg_quantity: quantity as f64,
        }
    }

    fn metrics(total_units: u64, customers: usize) -> SalesMetrics {
        SalesMetrics {
            total_units,
            total_transactions: 4,
            distinct_customers: customers,
            distinct_products: 2,
            distinct_representatives: 1,
            avg_sale_size: Some(total_units as f64 / 4.0),
        }
    }

    fn empty_inputs(metrics: &SalesMetrics) -> InsightInputs<'_> {
        InsightInputs {
            metrics,
            products: &[],
            customers: &[],
            representatives: &[],
            months: &[],
            dates: &[],
        }
    }

    #[test]
    fn test_no_data_no_insights() {
        let metrics = compute_metrics(&[]);
        assert!(generate_insights(&empty_inputs(&metrics)).is_empty());
    }

    #[test]
    fn test_product_insight_text() {
        let metrics = metrics(10, 2);
        let products = vec![rollup("A", 5, 2), rollup("B", 3, 1), rollup("C", 2, 1)];
        let inputs = InsightInputs {
            products: &products,
            ..empty_inputs(&metrics)
        };
        let insights = generate_insights(&inputs);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::ProductPerformance);
        assert_eq!(
            insights[0].text,
            "A is our best-performing product with 5 units sold across 2 transactions (avg: 2.5 per transaction), while C shows the lowest sales with only 2 units."
        );
    }

    #[test]
    fn test_customer_deviation() {
        // 12 units over 3 customers = 4 per customer; top buys 6 per purchase
        let metrics = metrics(12, 3);
        let top = rollup("Clinic", 6, 1);
        assert_eq!(customer_deviation(&top, &metrics), Some(50.0));

        let below = rollup("Kiosk", 2, 1);
        assert_eq!(customer_deviation(&below, &metrics), Some(-50.0));

        let customers = vec![below];
        let inputs = InsightInputs {
            customers: &customers,
            ..empty_inputs(&metrics)
        };
        let text = &generate_insights(&inputs)[0].text;
        assert!(text.ends_with("which is 50.0% below the customer average."), "{text}");
    }

    #[test]
    fn test_representative_volume_vs_efficiency() {
        let metrics = metrics(40, 3);
        let reps = vec![rollup("Olga", 30, 10), rollup("Ivan", 10, 2)];
        let inputs = InsightInputs {
            representatives: &reps,
            ..empty_inputs(&metrics)
        };
        let text = &generate_insights(&inputs)[0].text;
        assert_eq!(
            text,
            "Olga leads in total sales volume with 30 units sold to 1 unique customers. Ivan shows the highest efficiency with 5 units per transaction average."
        );
    }

    #[test]
    fn test_growth_insight_needs_two_months() {
        let metrics = metrics(10, 1);
        let one = vec![month(2024, 1, "Jan 2024", 10)];
        let inputs = InsightInputs {
            months: &one,
            ..empty_inputs(&metrics)
        };
        assert!(generate_insights(&inputs).is_empty());

        let two = vec![month(2024, 1, "Jan 2024", 8), month(2024, 2, "Feb 2024", 10)];
        let inputs = InsightInputs {
            months: &two,
            ..empty_inputs(&metrics)
        };
        assert_eq!(
            generate_insights(&inputs)[0].text,
            "Sales trend shows growth of 25.0% from Jan 2024 (8 units) to Feb 2024 (10 units)."
        );
    }

    #[test]
    fn test_flat_month_is_decline() {
        let metrics = metrics(10, 1);
        let months = vec![month(2024, 1, "Jan 2024", 5), month(2024, 2, "Feb 2024", 5)];
        let inputs = InsightInputs {
            months: &months,
            ..empty_inputs(&metrics)
        };
        assert!(generate_insights(&inputs)[0]
            .text
            .starts_with("Sales trend shows decline of 0.0%"));
    }

    #[test]
    fn test_zero_baseline_has_no_infinity() {
        let metrics = metrics(10, 1);
        let months = vec![month(2024, 1, "Jan 2024", 0), month(2024, 2, "Feb 2024", 10)];
        let inputs = InsightInputs {
            months: &months,
            ..empty_inputs(&metrics)
        };
        let text = &generate_insights(&inputs)[0].text;
        assert!(text.contains("insufficient baseline"), "{text}");
        assert!(!text.contains("inf") && !text.contains("NaN"), "{text}");
    }

    #[test]
    fn test_missing_rollup_does_not_block_others() {
        let metrics = metrics(10, 2);
        let products = vec![rollup("A", 10, 4)];
        let dates = vec![rollup("2024-01-02", 4, 1), rollup("2024-01-03", 6, 3)];
        let inputs = InsightInputs {
            products: &products,
            dates: &dates,
            ..empty_inputs(&metrics)
        };
        let kinds: Vec<InsightKind> = generate_insights(&inputs).iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InsightKind::ProductPerformance, InsightKind::PeakDay]);
        assert_eq!(
            generate_insights(&inputs)[1].text,
            "Peak daily performance was on 2024-01-03 with 6 units sold across 3 transactions."
        );
    }
}
