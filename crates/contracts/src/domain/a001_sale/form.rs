use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{SaleRecord, SaleValidationError};
use crate::shared::validation::looks_like_email;

/// Payload of `POST /sales` and `PUT /sales/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleForm {
    #[serde(rename = "productName")]
    pub product_name: String,

    pub quantity: u32,

    /// Calendar date, YYYY-MM-DD
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "customerEmail")]
    pub customer_email: String,

    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
}

impl SaleForm {
    /// Empty form for a new sale, dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            product_name: String::new(),
            quantity: 1,
            date_of_sale: today.format("%Y-%m-%d").to_string(),
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
        }
    }

    /// Form prefilled from an existing record.
    /// An unparseable stored date falls back to `today`.
    pub fn from_record(record: &SaleRecord, today: NaiveDate) -> Self {
        let date = record.sale_date().unwrap_or(today);
        Self {
            product_name: record.product_name.clone(),
            quantity: record.quantity.max(1),
            date_of_sale: date.format("%Y-%m-%d").to_string(),
            customer_name: record.customer_name.clone(),
            customer_email: record.customer_email.clone().unwrap_or_default(),
            customer_phone: record.customer_phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), SaleValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(SaleValidationError::MissingProductName);
        }
        if self.quantity == 0 {
            return Err(SaleValidationError::InvalidQuantity);
        }
        if NaiveDate::parse_from_str(self.date_of_sale.trim(), "%Y-%m-%d").is_err() {
            return Err(SaleValidationError::InvalidDate(self.date_of_sale.clone()));
        }
        if self.customer_name.trim().is_empty() {
            return Err(SaleValidationError::MissingCustomerName);
        }
        let email = self.customer_email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            return Err(SaleValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sale::{CreatedBy, SaleId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn filled() -> SaleForm {
        SaleForm {
            product_name: "Amoxicillin".to_string(),
            quantity: 4,
            date_of_sale: "2024-05-20".to_string(),
            customer_name: "Green Cross".to_string(),
            customer_email: "buy@greencross.test".to_string(),
            customer_phone: String::new(),
        }
    }

    #[test]
    fn test_blank_form() {
        let form = SaleForm::blank(today());
        assert_eq!(form.quantity, 1);
        assert_eq!(form.date_of_sale, "2024-06-01");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_from_record_normalises_date() {
        let record = SaleRecord {
            id: SaleId::new("a1"),
            product_name: "Aspirin".to_string(),
            quantity: 2,
            date_of_sale: "2024-02-10T15:45:00.000Z".to_string(),
            customer_name: "Clinic".to_string(),
            customer_email: None,
            customer_phone: Some("5551234567".to_string()),
            created_by: Some(CreatedBy {
                name: "Ivan".to_string(),
                email: "ivan@pharma.test".to_string(),
            }),
        };
        let form = SaleForm::from_record(&record, today());
        assert_eq!(form.date_of_sale, "2024-02-10");
        assert_eq!(form.customer_email, "");
        assert_eq!(form.customer_phone, "5551234567");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.quantity = 0;
        assert_eq!(form.validate(), Err(SaleValidationError::InvalidQuantity));

        let mut form = filled();
        form.date_of_sale = "20.05.2024".to_string();
        assert!(matches!(form.validate(), Err(SaleValidationError::InvalidDate(_))));

        let mut form = filled();
        form.customer_email = "not-an-email".to_string();
        assert!(matches!(form.validate(), Err(SaleValidationError::InvalidEmail(_))));

        let mut form = filled();
        form.customer_email = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_serialize_wire_names() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["productName"], "Amoxicillin");
        assert_eq!(value["dateOfSale"], "2024-05-20");
        assert_eq!(value["quantity"], 4);
    }
}
