use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use super::{empty_props, forward_to, optional_record, respond};
use crate::{
    guard::{with_ssr_auth, LoaderError, PageContext, PageResult},
    models::Absence,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceProps {
    pub absence: Option<Absence>,
}

pub async fn index(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, forward_to("/absence/list")).await;
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

async fn load_absence(
    state: AppState,
    id: String,
    ctx: PageContext,
) -> Result<PageResult<AbsenceProps>, LoaderError> {
    let api = state.api.for_context(&ctx);
    let absence = optional_record(api.get_absence(&id)).await?;
    Ok(PageResult::props(AbsenceProps { absence }))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_absence(state, id, ctx)).await;
    respond(&ctx, result)
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_absence(state, id, ctx)).await;
    respond(&ctx, result)
}

/// Review page for an absence awaiting a decision.
pub async fn review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_absence(state, id, ctx)).await;
    respond(&ctx, result)
}
