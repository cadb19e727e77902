//! Generic dimension-parameterised grouping
//!
//! Every rollup in the dashboards is produced by [`group_by`]: one pass over
//! the records, groups kept in first-seen order.

use std::collections::{HashMap, HashSet};

use crate::domain::a001_sale::SaleRecord;

use super::dto::{ContactInfo, Dimension, GroupRollup};

/// Where contact info of a group comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactSource {
    #[default]
    None,
    /// customerEmail / customerPhone
    Customer,
    /// createdBy.email
    Representative,
}

/// What to collect besides quantity and transaction count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccumulatorSpec {
    pub track_customers: bool,
    pub track_products: bool,
    pub contact: ContactSource,
}

impl Dimension {
    /// Grouping key of a record, `None` when the record has no value for
    /// this dimension (unparseable date for Date/Month)
    pub fn key(&self, record: &SaleRecord) -> Option<String> {
        match self {
            Dimension::Product => Some(record.product_name.clone()),
            Dimension::Customer => Some(record.customer_name.clone()),
            Dimension::Representative => Some(record.representative_name().to_string()),
            Dimension::Date => record
                .sale_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            Dimension::Month => record.sale_date().map(|d| d.format("%Y-%m").to_string()),
        }
    }

    pub fn accumulator_spec(&self) -> AccumulatorSpec {
        match self {
            Dimension::Product => AccumulatorSpec {
                track_customers: true,
                ..Default::default()
            },
            Dimension::Customer => AccumulatorSpec {
                track_products: true,
                contact: ContactSource::Customer,
                ..Default::default()
            },
            Dimension::Representative => AccumulatorSpec {
                track_customers: true,
                track_products: true,
                contact: ContactSource::Representative,
            },
            Dimension::Date => AccumulatorSpec::default(),
            Dimension::Month => AccumulatorSpec {
                track_customers: true,
                ..Default::default()
            },
        }
    }

    /// Group `records` by this dimension with its preset accumulator
    pub fn group(&self, records: &[SaleRecord]) -> Vec<GroupRollup> {
        group_by(records, |r| self.key(r), self.accumulator_spec())
    }
}

struct Accumulator<'a> {
    key: String,
    quantity: u64,
    transactions: u64,
    customers: HashSet<&'a str>,
    products: HashSet<&'a str>,
    email: Option<String>,
    phone: Option<String>,
}

impl<'a> Accumulator<'a> {
    fn new(key: String) -> Self {
        Self {
            key,
            quantity: 0,
            transactions: 0,
            customers: HashSet::new(),
            products: HashSet::new(),
            email: None,
            phone: None,
        }
    }

    fn add(&mut self, record: &'a SaleRecord, spec: &AccumulatorSpec) {
        self.quantity += u64::from(record.quantity);
        self.transactions += 1;

        if spec.track_customers {
            self.customers.insert(record.customer_name.as_str());
        }
        if spec.track_products {
            self.products.insert(record.product_name.as_str());
        }

        // first non-empty value wins
        match spec.contact {
            ContactSource::None => {}
            ContactSource::Customer => {
                if self.email.is_none() {
                    self.email = record.customer_email().map(str::to_string);
                }
                if self.phone.is_none() {
                    self.phone = record.customer_phone().map(str::to_string);
                }
            }
            ContactSource::Representative => {
                if self.email.is_none() {
                    self.email = record.representative_email().map(str::to_string);
                }
            }
        }
    }

    fn finish(self, spec: &AccumulatorSpec) -> GroupRollup {
        GroupRollup {
            avg_quantity: average(self.quantity, self.transactions),
            key: self.key,
            quantity: self.quantity,
            transactions: self.transactions,
            unique_customers: spec.track_customers.then_some(self.customers.len()),
            unique_products: spec.track_products.then_some(self.products.len()),
            contact: match spec.contact {
                ContactSource::None => None,
                _ => Some(ContactInfo {
                    email: self.email,
                    phone: self.phone,
                }),
            },
        }
    }
}

/// Partition `records` by `key_fn`.
///
/// Records for which `key_fn` returns `None` are skipped. Keys are compared
/// exactly (case-sensitive). Output order is the order in which each key was
/// first seen.
pub fn group_by<'a, F>(records: &'a [SaleRecord], key_fn: F, spec: AccumulatorSpec) -> Vec<GroupRollup>
where
    F: Fn(&'a SaleRecord) -> Option<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Accumulator<'a>> = Vec::new();

    for record in records {
        let Some(key) = key_fn(record) else {
            continue;
        };
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(key.clone(), slot);
                groups.push(Accumulator::new(key));
                slot
            }
        };
        groups[slot].add(record, &spec);
    }

    groups.into_iter().map(|acc| acc.finish(&spec)).collect()
}

/// quantity / transactions rounded to 2 decimals, 0 for an empty group
pub fn average(quantity: u64, transactions: u64) -> f64 {
    if transactions == 0 {
        return 0.0;
    }
    round_to(quantity as f64 / transactions as f64, 2)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
