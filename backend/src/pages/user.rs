use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use super::{empty_props, forward_to, global_admin_only, optional_record, respond};
use crate::{
    guard::{with_ssr_auth, LoaderError, PageContext, PageResult},
    models::User,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProps {
    pub user: Option<User>,
}

pub async fn index(ctx: PageContext) -> Response {
    let options = global_admin_only();
    let result = with_ssr_auth(ctx.clone(), Some(&options), forward_to("/user/list")).await;
    respond(&ctx, result)
}

pub async fn list(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, empty_props).await;
    respond(&ctx, result)
}

pub async fn create(ctx: PageContext) -> Response {
    let options = global_admin_only();
    let result = with_ssr_auth(ctx.clone(), Some(&options), empty_props).await;
    respond(&ctx, result)
}

async fn load_user(
    state: AppState,
    email: String,
    ctx: PageContext,
) -> Result<PageResult<UserProps>, LoaderError> {
    let api = state.api.for_context(&ctx);
    let user = optional_record(api.get_user(&email)).await?;
    Ok(PageResult::props(UserProps { user }))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_user(state, email, ctx)).await;
    respond(&ctx, result)
}

pub async fn edit(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| load_user(state, email, ctx)).await;
    respond(&ctx, result)
}
