use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use super::{empty_props, forward_to, optional_record, respond};
use crate::{
    guard::{with_ssr_auth, LoaderError, PageContext, PageResult},
    models::Employee,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProps {
    pub employee: Option<Employee>,
}

pub async fn index(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, forward_to("/employee/list")).await;
    respond(&ctx, result)
}

pub async fn list(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, empty_props).await;
    respond(&ctx, result)
}

pub async fn create(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, empty_props).await;
    respond(&ctx, result)
}

async fn load_employee(
    state: AppState,
    cpf: String,
    ctx: PageContext,
) -> Result<PageResult<EmployeeProps>, LoaderError> {
    let api = state.api.for_context(&ctx);
    let employee = optional_record(api.get_employee(&cpf)).await?;
    Ok(PageResult::props(EmployeeProps { employee }))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_employee(state, cpf, ctx)).await;
    respond(&ctx, result)
}

pub async fn edit(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_employee(state, cpf, ctx)).await;
    respond(&ctx, result)
}
