#![allow(dead_code)]
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use pointcontrol_backend::{app, config::Config, state::AppState, utils::cookies::SESSION_COOKIE_NAME};

pub fn test_config(api_base_url: &str) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().expect("bind addr"),
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
        cookie_secure: false,
    }
}

pub fn test_router(api_base_url: &str) -> Router {
    app(AppState::new(test_config(api_base_url)))
}

/// Session token carrying `role`. The signing key is irrelevant to the
/// console, which never verifies signatures.
pub fn create_test_token(role: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": "3f2a", "role": role, "exp": 4_102_444_800u64 }),
        &EncodingKey::from_secret(b"not-the-api-secret"),
    )
    .expect("encode token")
}

pub fn page_request(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE_NAME, token));
    }
    builder.body(Body::empty()).expect("build request")
}

/// Concrete path for a route template such as `/user/{email}`.
pub fn sample_path(route: &str) -> String {
    route
        .replace("{token}", "d41d8cd9")
        .replace("{cnpj}", "12345678000190")
        .replace("{cpf}", "12345678901")
        .replace("{email}", "ana@acme.com")
        .replace("{id}", "7")
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn company_json(cnpj: &str) -> Value {
    json!({
        "cnpj": cnpj,
        "name": "Acme Ltda",
        "createdAt": "2023-03-01T12:00:00Z",
        "updatedAt": "2023-03-02T12:00:00Z"
    })
}

pub fn user_json(email: &str) -> Value {
    json!({
        "id": "c0ffee",
        "name": "Ana",
        "email": email,
        "role": "client",
        "companyCnpj": "12345678000190",
        "createdAt": "2023-03-01T12:00:00Z",
        "updatedAt": "2023-03-01T12:00:00Z"
    })
}

pub fn absence_json(id: i64) -> Value {
    json!({
        "id": id,
        "status": 1,
        "type": "medical",
        "description": "Dentist",
        "startTime": "2023-03-10T08:00:00Z",
        "endTime": "2023-03-10T12:00:00Z",
        "employeeCpf": "12345678901",
        "justification": null,
        "createdAt": "2023-03-01T12:00:00Z",
        "updatedAt": "2023-03-01T12:00:00Z"
    })
}

pub fn point_json(id: i64) -> Value {
    json!({
        "id": id,
        "employeeCpf": "12345678901",
        "createdAt": "2023-03-10T08:01:00Z",
        "updatedAt": "2023-03-10T08:01:00Z"
    })
}
