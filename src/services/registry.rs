use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::models::{Alert, NewAlert};

/// REST client for the external alert store (PostgREST contract).
///
/// Tables are path segments under `{base}/rest/v1/`. Every call carries the
/// `apikey` header plus the same key as a bearer token; inserts ask for the
/// created row back with `Prefer: return=representation`.
#[derive(Clone)]
pub struct RegistryClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct IdRow {
    id: i64,
}

impl RegistryClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn post(&self, table: &str) -> reqwest::RequestBuilder {
        self.http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<i64>, String> {
        let res = self
            .get("users")
            .query(&[("select", "id".to_string()), ("email", format!("eq.{email}"))])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("user lookup failed: {status} {body}"));
        }

        let rows = res.json::<Vec<IdRow>>().await.map_err(|e| e.to_string())?;

        // First row wins if the store somehow holds duplicates.
        Ok(rows.into_iter().next().map(|r| r.id))
    }

    pub async fn create_user(&self, email: &str) -> Result<i64, String> {
        let res = self
            .post("users")
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("user insert failed: {status} {body}"));
        }

        let rows = res.json::<Vec<IdRow>>().await.map_err(|e| e.to_string())?;
        rows.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| "user insert returned no row".to_string())
    }

    pub async fn create_alert(&self, alert: &NewAlert) -> Result<i64, String> {
        let res = self
            .post("alerts")
            .json(alert)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("alert insert failed: {status} {body}"));
        }

        let rows = res.json::<Vec<IdRow>>().await.map_err(|e| e.to_string())?;
        rows.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| "alert insert returned no row".to_string())
    }

    /// Unfiltered full-table read. No pagination.
    pub async fn list_all_alerts(&self) -> Result<Vec<Alert>, String> {
        let res = self
            .get("alerts")
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("alert listing failed: {status} {body}"));
        }

        res.json::<Vec<Alert>>().await.map_err(|e| e.to_string())
    }
}
