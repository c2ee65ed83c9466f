use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use super::{empty_props, forward_to, global_admin_only, optional_record, respond};
use crate::{
    guard::{with_ssr_auth, PageContext, PageResult},
    models::Company,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProps {
    pub company: Option<Company>,
}

pub async fn index(ctx: PageContext) -> Response {
    let options = global_admin_only();
    let result = with_ssr_auth(ctx.clone(), Some(&options), forward_to("/company/list")).await;
    respond(&ctx, result)
}

pub async fn list(ctx: PageContext) -> Response {
    let options = global_admin_only();
    let result = with_ssr_auth(ctx.clone(), Some(&options), empty_props).await;
    respond(&ctx, result)
}

pub async fn create(ctx: PageContext) -> Response {
    let options = global_admin_only();
    let result = with_ssr_auth(ctx.clone(), Some(&options), empty_props).await;
    respond(&ctx, result)
}

pub async fn edit(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| async move {
        let api = state.api.for_context(&ctx);
        let company = optional_record(api.get_company(&cnpj)).await?;
        Ok(PageResult::props(CompanyProps { company }))
    })
    .await;
    respond(&ctx, result)
}
