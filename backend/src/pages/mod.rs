//! Page data routes. Each console page is served at its own path and answers
//! with the guarded loader's outcome.

pub mod absence;
pub mod company;
pub mod dashboard;
pub mod employee;
pub mod session;
pub mod user;

use std::future::Future;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    error::AppError,
    guard::{AuthOptions, LoaderError, PageContext, PageResult},
    models::Role,
    state::AppState,
    upstream::ApiError,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/identity/confirmation",
    "/validate/token/{token}",
    "/dashboard",
    "/change",
    "/change/password",
    "/config",
    "/company",
    "/company/list",
    "/company/create",
    "/company/edit/{cnpj}",
    "/employee",
    "/employee/list",
    "/employee/create",
    "/employee/{cpf}",
    "/employee/edit/{cpf}",
    "/user",
    "/user/list",
    "/user/create",
    "/user/{email}",
    "/user/edit/{email}",
    "/absence",
    "/absence/list",
    "/absence/create",
    "/absence/{id}",
    "/absence/edit/{id}",
    "/absence/review/{id}",
];

/// Reachable only without a session.
pub const GUEST_ROUTE_PATHS: &[&str] = &["/", "/identity/confirmation", "/validate/token/{token}"];

/// Reachable only by `global-admin` sessions.
pub const GLOBAL_ADMIN_ROUTE_PATHS: &[&str] = &[
    "/company",
    "/company/list",
    "/company/create",
    "/user",
    "/user/create",
];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(session::login))
        .route("/identity/confirmation", get(session::identity_confirmation))
        .route("/validate/token/{token}", get(session::validate_token))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/change", get(dashboard::change))
        .route("/change/password", get(dashboard::change_password))
        .route("/config", get(dashboard::config))
        .route("/company", get(company::index))
        .route("/company/list", get(company::list))
        .route("/company/create", get(company::create))
        .route("/company/edit/{cnpj}", get(company::edit))
        .route("/employee", get(employee::index))
        .route("/employee/list", get(employee::list))
        .route("/employee/create", get(employee::create))
        .route("/employee/{cpf}", get(employee::detail))
        .route("/employee/edit/{cpf}", get(employee::edit))
        .route("/user", get(user::index))
        .route("/user/list", get(user::list))
        .route("/user/create", get(user::create))
        .route("/user/{email}", get(user::detail))
        .route("/user/edit/{email}", get(user::edit))
        .route("/absence", get(absence::index))
        .route("/absence/list", get(absence::list))
        .route("/absence/create", get(absence::create))
        .route("/absence/{id}", get(absence::detail))
        .route("/absence/edit/{id}", get(absence::edit))
        .route("/absence/review/{id}", get(absence::review))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// Props for pages whose data is fetched in the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyProps {}

pub(crate) fn global_admin_only() -> AuthOptions {
    AuthOptions::roles([Role::GlobalAdmin])
}

pub(crate) async fn empty_props(_ctx: PageContext) -> Result<PageResult<EmptyProps>, LoaderError> {
    Ok(PageResult::props(EmptyProps {}))
}

/// Loader body for index pages that only forward to another page.
pub(crate) fn forward_to(
    destination: &'static str,
) -> impl FnOnce(PageContext) -> std::future::Ready<Result<PageResult<EmptyProps>, LoaderError>> {
    move |_ctx| std::future::ready(Ok(PageResult::redirect(destination)))
}

/// Fetches a record for a detail page. A rejected session aborts the page;
/// any other failure renders the page's "not found" state.
pub(crate) async fn optional_record<T, Fut>(fetch: Fut) -> Result<Option<T>, LoaderError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    match fetch.await {
        Ok(record) => Ok(Some(record)),
        Err(err) if err.is_unauthorized() => Err(LoaderError::InvalidSession),
        Err(err) => {
            tracing::warn!(error = %err, "record unavailable, rendering empty page");
            Ok(None)
        }
    }
}

/// Guard outcome plus the cookies the guard asked to set.
pub struct PageResponse<P> {
    result: PageResult<P>,
    set_cookies: Vec<String>,
}

impl<P: Serialize> IntoResponse for PageResponse<P> {
    fn into_response(self) -> Response {
        let mut response = match &self.result {
            PageResult::Props(_) => (StatusCode::OK, Json(&self.result)).into_response(),
            PageResult::Redirect(redirect) => {
                let status = if redirect.permanent {
                    StatusCode::PERMANENT_REDIRECT
                } else {
                    StatusCode::TEMPORARY_REDIRECT
                };
                let mut response = (status, Json(&self.result)).into_response();
                match HeaderValue::from_str(&redirect.destination) {
                    Ok(location) => {
                        response.headers_mut().insert(header::LOCATION, location);
                    }
                    Err(_) => {
                        tracing::error!(destination = %redirect.destination, "invalid redirect target");
                    }
                }
                response
            }
        };
        for cookie in self.set_cookies {
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}

pub(crate) fn respond<P: Serialize>(
    ctx: &PageContext,
    result: Result<PageResult<P>, LoaderError>,
) -> Response {
    match result {
        Ok(result) => PageResponse {
            result,
            set_cookies: ctx.set_cookies(),
        }
        .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
