use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Placeholder used when a sale has no `createdBy` representative
pub const UNKNOWN_REPRESENTATIVE: &str = "Unknown";

/// Opaque identifier of a sale record (`_id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub String);

impl SaleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sales representative who recorded the sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBy {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Sale record as returned by `GET /sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "_id")]
    pub id: SaleId,

    #[serde(rename = "productName")]
    pub product_name: String,

    /// Units sold, always >= 1 for a valid record
    pub quantity: u32,

    /// Raw timestamp as sent by the API ("2024-03-15T10:30:00.000Z" or "2024-03-15").
    /// Parsed lazily, see [`SaleRecord::sale_date`]
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "customerEmail", default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(rename = "customerPhone", default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    /// Anything other than a representative object (e.g. an unpopulated id)
    /// decodes as `None`
    #[serde(
        rename = "createdBy",
        default,
        deserialize_with = "lenient_created_by",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<CreatedBy>,
}

fn lenient_created_by<'de, D>(deserializer: D) -> Result<Option<CreatedBy>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCreatedBy {
        Populated(CreatedBy),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<RawCreatedBy>::deserialize(deserializer)? {
        Some(RawCreatedBy::Populated(rep)) => Some(rep),
        Some(RawCreatedBy::Other(_)) | None => None,
    })
}

/// Reasons a record is rejected at the API boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleValidationError {
    #[error("Product name is required")]
    MissingProductName,

    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Invalid date of sale: {0}")]
    InvalidDate(String),

    #[error("Invalid customer email: {0}")]
    InvalidEmail(String),
}

impl SaleRecord {
    /// Display name of the representative, "Unknown" when absent or blank
    pub fn representative_name(&self) -> &str {
        match &self.created_by {
            Some(rep) if !rep.name.trim().is_empty() => &rep.name,
            _ => UNKNOWN_REPRESENTATIVE,
        }
    }

    /// Representative email, `None` when absent or blank
    pub fn representative_email(&self) -> Option<&str> {
        self.created_by
            .as_ref()
            .map(|rep| rep.email.as_str())
            .filter(|email| !email.trim().is_empty())
    }

    pub fn customer_email(&self) -> Option<&str> {
        non_blank(self.customer_email.as_deref())
    }

    pub fn customer_phone(&self) -> Option<&str> {
        non_blank(self.customer_phone.as_deref())
    }

    /// Calendar date of the sale, `None` if `dateOfSale` cannot be parsed
    pub fn sale_date(&self) -> Option<NaiveDate> {
        parse_sale_date(&self.date_of_sale)
    }

    /// Structural checks applied before a record reaches the aggregator.
    ///
    /// The date is not checked here: records with a malformed
    /// date still count in totals and are reported by the aggregator.
    pub fn validate(&self) -> Result<(), SaleValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(SaleValidationError::MissingProductName);
        }
        if self.customer_name.trim().is_empty() {
            return Err(SaleValidationError::MissingCustomerName);
        }
        if self.quantity == 0 {
            return Err(SaleValidationError::InvalidQuantity);
        }
        Ok(())
    }
}

/// Response body of `POST /sales` and `PUT /sales/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleMutationResponse {
    pub sale: SaleRecord,
    #[serde(default)]
    pub message: Option<String>,
}

/// Parse a `dateOfSale` value into a calendar date.
///
/// Accepted forms: RFC 3339 timestamps (converted to UTC), naive ISO
/// datetimes and plain `YYYY-MM-DD` dates.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
