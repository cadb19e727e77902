use contracts::system::auth::{Credentials, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::{api_url, error_message};

async fn read_error(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(&body, status, fallback)
}

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<Credentials, String> {
    let response = Request::post(&api_url("/api/auth/login"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Login failed").await);
    }

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if body.data.token.trim().is_empty() {
        return Err("Login failed: no token in response".to_string());
    }
    Ok(body.data)
}

/// Register a new user
pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, String> {
    let response = Request::post(&api_url("/api/auth/signup"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Signup failed").await);
    }

    // some deployments answer 201 with an empty body
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    if text.trim().is_empty() {
        return Ok(SignupResponse::default());
    }
    serde_json::from_str::<SignupResponse>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
