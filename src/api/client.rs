//! HTTP API Client
//!
//! Functions for communicating with the dentist patient REST API.

use gloo_net::http::Request;

use crate::state::global::{Patient, PatientStats};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("dentist_dashboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize a base URL: remove trailing slash
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Fetch the deduplicated patient roster, in backend order
pub async fn fetch_patients() -> Result<Vec<Patient>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/patients/unique", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch visit statistics for one patient
pub async fn fetch_patient_stats(patient_id: i64) -> Result<PatientStats, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/patients/{}/stats", api_base, patient_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_roster_parses_camel_case_fields() {
        let body = r#"[{
            "id": 1,
            "firstName": "Ann",
            "lastName": "Lee",
            "phoneNumber": "555-1111",
            "address": "1 Elm",
            "newPatient": true
        }]"#;

        let patients: Vec<Patient> = serde_json::from_str(body).unwrap();
        assert_eq!(patients.len(), 1);

        let p = &patients[0];
        assert_eq!(p.id, 1);
        assert_eq!(p.first_name, "Ann");
        assert_eq!(p.last_name, "Lee");
        assert_eq!(p.phone_number, "555-1111");
        assert_eq!(p.address, "1 Elm");
        assert!(p.new_patient);
    }

    #[test]
    fn test_empty_roster_parses() {
        let patients: Vec<Patient> = serde_json::from_str("[]").unwrap();
        assert!(patients.is_empty());
    }

    #[test]
    fn test_stats_response_parses() {
        let body = r#"{"visit_count": 3, "new_patient_first_time": true}"#;

        let stats: PatientStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.visit_count, 3);
        assert!(stats.new_patient_first_time);
    }

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8080/"), "http://localhost:8080");
        assert_eq!(normalize_base("http://localhost:8080"), "http://localhost:8080");
    }
}
