use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use super::models::ProfileSet;

const PROFILE_ENDPOINT: &str = "/api/v1/profile.json";

#[derive(Debug, Clone)]
pub struct NightscoutClient {
    http: Client,
    base_url: String,
}

impl NightscoutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn profile_url(&self) -> String {
        format!("{}{PROFILE_ENDPOINT}", self.base_url)
    }

    pub async fn fetch_profiles(&self) -> AppResult<Value> {
        let url = self.profile_url();
        info!(%url, "fetching nightscout profiles");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        info!(%status, "nightscout responded");
        debug!(bytes = body.len(), "received profile body");

        if !status.is_success() {
            return Err(map_api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

pub fn first_profile_set(document: Value) -> AppResult<ProfileSet> {
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(AppError::MalformedResponse(format!(
                "expected an array of profile sets, got {}",
                json_kind(&other)
            )));
        }
    };

    debug!(count = items.len(), "profile sets in response");
    let first = items.into_iter().next().ok_or_else(|| {
        AppError::MalformedResponse("profile response contains no profile sets".to_string())
    })?;

    serde_json::from_value(first)
        .map_err(|err| AppError::MalformedResponse(format!("first profile set: {err}")))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Deserialize)]
struct NightscoutErrorBody {
    message: Option<String>,
    description: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Api(format!(
            "nightscout refused the profile request ({status}): {message}. the site must allow readable access"
        ));
    }

    AppError::Api(format!("nightscout request failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let error = serde_json::from_str::<NightscoutErrorBody>(body).ok()?;
    let parts = [error.message, error.description]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>();

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(": "))
}
