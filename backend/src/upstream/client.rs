use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::{
    guard::PageContext,
    models::{Absence, Company, Employee, Point, User},
};

/// Characters left untouched inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Clone is cheap: `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    /// Client authenticated as the session that issued the page request.
    pub fn for_context(&self, ctx: &PageContext) -> Self {
        self.with_token(ctx.session_token().map(str::to_owned))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    fn get(&self, segments: &[&str]) -> RequestBuilder {
        let builder = self
            .client
            .get(self.url(segments))
            .header(header::ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, segments: &[&str]) -> Result<reqwest::Response, ApiError> {
        let response = self.get(segments).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, &body);
        tracing::warn!(
            status = status.as_u16(),
            path = %segments.join("/"),
            error = %error,
            "PointControl API request failed"
        );
        Err(error)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let response = self.send(segments).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    pub async fn get_company(&self, cnpj: &str) -> Result<Company, ApiError> {
        self.get_json(&["company", cnpj]).await
    }

    pub async fn get_employee(&self, cpf: &str) -> Result<Employee, ApiError> {
        self.get_json(&["employee", cpf]).await
    }

    pub async fn get_user(&self, email: &str) -> Result<User, ApiError> {
        self.get_json(&["user", email]).await
    }

    pub async fn get_absence(&self, id: &str) -> Result<Absence, ApiError> {
        self.get_json(&["absence", id]).await
    }

    pub async fn points_of_day(&self, date: NaiveDate) -> Result<Vec<Point>, ApiError> {
        let day = date.format("%Y-%m-%d").to_string();
        self.get_json(&["point", &day]).await
    }

    /// Succeeds while a password-recovery link is still redeemable.
    pub async fn validate_recovery_token(&self, token: &str) -> Result<(), ApiError> {
        self.send(&["user", "validate", "token", token]).await?;
        Ok(())
    }
}
