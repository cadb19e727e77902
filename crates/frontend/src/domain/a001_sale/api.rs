use contracts::domain::a001_sale::{SaleForm, SaleId, SaleMutationResponse, SaleRecord};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, error_message};
use crate::system::auth::context::Session;

/// Records that passed boundary checks plus a reason for each rejected one
#[derive(Debug, Default)]
pub struct AcceptedRecords {
    pub records: Vec<SaleRecord>,
    pub rejected: Vec<String>,
}

/// Decode and validate each element on its own, so one broken record does
/// not hide the rest of the list
pub fn accept_records(values: Vec<serde_json::Value>) -> AcceptedRecords {
    let mut accepted = AcceptedRecords::default();
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<SaleRecord>(value) {
            Ok(record) => match record.validate() {
                Ok(()) => accepted.records.push(record),
                Err(e) => accepted
                    .rejected
                    .push(format!("sale {}: {}", record.id, e)),
            },
            Err(e) => accepted.rejected.push(format!("item #{}: {}", index, e)),
        }
    }
    accepted
}

fn sale_url(id: &SaleId) -> String {
    api_url(&format!("/sales/{}", urlencoding::encode(id.as_str())))
}

async fn read_error(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(&body, status, fallback)
}

/// Fetch every sale visible to the session
pub async fn fetch_sales(session: &Session) -> Result<Vec<SaleRecord>, String> {
    let response = Request::get(&api_url("/sales"))
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to fetch sales data").await);
    }

    let values = response
        .json::<Vec<serde_json::Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let accepted = accept_records(values);
    for reason in &accepted.rejected {
        log::warn!("Dropping invalid sale record: {}", reason);
    }
    log::debug!("Loaded {} sales", accepted.records.len());
    Ok(accepted.records)
}

/// Create a sale; returns the stored record
pub async fn create_sale(session: &Session, form: &SaleForm) -> Result<SaleRecord, String> {
    form.validate().map_err(|e| e.to_string())?;

    let response = Request::post(&api_url("/sales"))
        .header("Authorization", &session.bearer())
        .json(form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to save sale").await);
    }

    response
        .json::<SaleMutationResponse>()
        .await
        .map(|body| body.sale)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update a sale; returns the stored record
pub async fn update_sale(
    session: &Session,
    id: &SaleId,
    form: &SaleForm,
) -> Result<SaleRecord, String> {
    form.validate().map_err(|e| e.to_string())?;

    let response = Request::put(&sale_url(id))
        .header("Authorization", &session.bearer())
        .json(form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to save sale").await);
    }

    response
        .json::<SaleMutationResponse>()
        .await
        .map(|body| body.sale)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_sale(session: &Session, id: &SaleId) -> Result<(), String> {
    let response = Request::delete(&sale_url(id))
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to delete sale").await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accept_records_drops_invalid() {
        let values = vec![
            json!({
                "_id": "s1",
                "productName": "Paracetamol",
                "quantity": 3,
                "dateOfSale": "2024-03-01T00:00:00.000Z",
                "customerName": "City Clinic",
                "createdBy": { "name": "Olga", "email": "olga@pharma.test" }
            }),
            json!({
                "_id": "s2",
                "productName": "",
                "quantity": 1,
                "dateOfSale": "2024-03-02",
                "customerName": "Kiosk"
            }),
            json!({ "_id": "s3", "quantity": "many" }),
            json!({
                "_id": "s4",
                "productName": "Aspirin",
                "quantity": 2,
                "dateOfSale": "not a date",
                "customerName": "Kiosk"
            }),
        ];

        let accepted = accept_records(values);
        let ids: Vec<&str> = accepted.records.iter().map(|r| r.id.as_str()).collect();
        // a bad date is kept and reported later by the aggregator
        assert_eq!(ids, vec!["s1", "s4"]);
        assert_eq!(accepted.rejected.len(), 2);
        assert!(accepted.rejected[0].starts_with("sale s2"));
        assert!(accepted.rejected[1].starts_with("item #2"));
    }

    #[test]
    fn test_accept_records_keeps_unpopulated_representative() {
        let values = vec![
            json!({
                "_id": "s1",
                "productName": "Paracetamol",
                "quantity": 3,
                "dateOfSale": "2024-03-01",
                "customerName": "City Clinic",
                "createdBy": "64abc"
            }),
            json!({
                "_id": "s2",
                "productName": "Aspirin",
                "quantity": 1,
                "dateOfSale": "2024-03-02",
                "customerName": "Kiosk",
                "createdBy": { "email": "olga@pharma.test" }
            }),
        ];

        let accepted = accept_records(values);
        assert!(accepted.rejected.is_empty(), "{:?}", accepted.rejected);
        let names: Vec<&str> = accepted
            .records
            .iter()
            .map(|r| r.representative_name())
            .collect();
        assert_eq!(names, vec!["Unknown", "Unknown"]);
    }

    #[test]
    fn test_accept_records_empty() {
        let accepted = accept_records(Vec::new());
        assert!(accepted.records.is_empty());
        assert!(accepted.rejected.is_empty());
    }
}
