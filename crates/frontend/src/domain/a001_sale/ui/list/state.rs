use std::cmp::Ordering;

use contracts::domain::a001_sale::{SaleId, SaleRecord};
use leptos::prelude::*;

use crate::shared::list_utils::{contains_ci, filter_list, sort_list, Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct SaleListState {
    pub sales: Vec<SaleRecord>,
    /// Empty means server order (newest created first)
    pub sort_field: String,
    pub sort_ascending: bool,
    pub search: String,
    pub is_loaded: bool,
}

impl Default for SaleListState {
    fn default() -> Self {
        Self {
            sales: Vec::new(),
            sort_field: String::new(),
            sort_ascending: true,
            search: String::new(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<SaleListState> {
    RwSignal::new(SaleListState::default())
}

impl Sortable for SaleRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.sale_date().cmp(&other.sale_date()),
            "product" => self.product_name.to_lowercase().cmp(&other.product_name.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "customer" => self.customer_name.to_lowercase().cmp(&other.customer_name.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for SaleRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.product_name, filter)
            || contains_ci(&self.customer_name, filter)
            || self.customer_email().is_some_and(|e| contains_ci(e, filter))
            || contains_ci(self.representative_name(), filter)
    }
}

impl SaleListState {
    /// Rows after search and sort
    pub fn visible(&self) -> Vec<SaleRecord> {
        let mut rows = filter_list(&self.sales, &self.search);
        if !self.sort_field.is_empty() {
            sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        }
        rows
    }

    /// Click on a column header: same field flips direction, new field sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

/// New sale goes to the top of the list
pub fn apply_created(sales: &mut Vec<SaleRecord>, record: SaleRecord) {
    sales.retain(|s| s.id != record.id);
    sales.insert(0, record);
}

/// Replace the record with the same id; returns false when it is not in the list
pub fn apply_updated(sales: &mut [SaleRecord], record: SaleRecord) -> bool {
    match sales.iter_mut().find(|s| s.id == record.id) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

pub fn apply_deleted(sales: &mut Vec<SaleRecord>, id: &SaleId) {
    sales.retain(|s| &s.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: &str, product: &str, quantity: u32, date: &str) -> SaleRecord {
        SaleRecord {
            id: SaleId::new(id),
            product_name: product.to_string(),
            quantity,
            date_of_sale: date.to_string(),
            customer_name: "City Clinic".to_string(),
            customer_email: None,
            customer_phone: None,
            created_by: None,
        }
    }

    fn ids(sales: &[SaleRecord]) -> Vec<&str> {
        sales.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_apply_created_prepends() {
        let mut sales = vec![sale("a", "X", 1, "2024-01-01")];
        apply_created(&mut sales, sale("b", "Y", 2, "2024-01-02"));
        assert_eq!(ids(&sales), vec!["b", "a"]);

        // same id again does not duplicate
        apply_created(&mut sales, sale("a", "X", 5, "2024-01-01"));
        assert_eq!(ids(&sales), vec!["a", "b"]);
        assert_eq!(sales[0].quantity, 5);
    }

    #[test]
    fn test_apply_updated_keeps_position() {
        let mut sales = vec![sale("a", "X", 1, "2024-01-01"), sale("b", "Y", 2, "2024-01-02")];
        assert!(apply_updated(&mut sales, sale("b", "Z", 9, "2024-01-02")));
        assert_eq!(ids(&sales), vec!["a", "b"]);
        assert_eq!(sales[1].product_name, "Z");
        assert!(!apply_updated(&mut sales, sale("c", "Q", 1, "2024-01-03")));
        assert_eq!(sales.len(), 2);
    }

    #[test]
    fn test_apply_deleted() {
        let mut sales = vec![sale("a", "X", 1, "2024-01-01"), sale("b", "Y", 2, "2024-01-02")];
        apply_deleted(&mut sales, &SaleId::new("a"));
        assert_eq!(ids(&sales), vec!["b"]);
        apply_deleted(&mut sales, &SaleId::new("missing"));
        assert_eq!(ids(&sales), vec!["b"]);
    }

    #[test]
    fn test_visible_search_and_sort() {
        let mut state = SaleListState {
            sales: vec![
                sale("a", "Paracetamol", 3, "2024-02-01"),
                sale("b", "Aspirin", 7, "2024-01-01"),
                sale("c", "Amoxicillin", 1, "2024-03-01"),
            ],
            ..SaleListState::default()
        };
        assert_eq!(ids(&state.visible()), vec!["a", "b", "c"]);

        state.toggle_sort("quantity");
        assert_eq!(ids(&state.visible()), vec!["c", "a", "b"]);
        state.toggle_sort("quantity");
        assert_eq!(ids(&state.visible()), vec!["b", "a", "c"]);

        state.toggle_sort("date");
        assert!(state.sort_ascending);
        assert_eq!(ids(&state.visible()), vec!["b", "a", "c"]);

        state.search = "amox".to_string();
        assert_eq!(ids(&state.visible()), vec!["c"]);
    }
}
