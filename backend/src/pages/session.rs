use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use super::{empty_props, respond};
use crate::{
    guard::{with_ssr_guest, PageContext, PageResult},
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryTokenProps {
    pub token: String,
    pub valid: bool,
}

pub async fn login(ctx: PageContext) -> Response {
    let result = with_ssr_guest(ctx.clone(), empty_props).await;
    respond(&ctx, result)
}

pub async fn identity_confirmation(ctx: PageContext) -> Response {
    let result = with_ssr_guest(ctx.clone(), empty_props).await;
    respond(&ctx, result)
}

pub async fn validate_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
    ctx: PageContext,
) -> Response {
    let result = with_ssr_guest(ctx.clone(), |_ctx| async move {
        let valid = match state.api.validate_recovery_token(&token).await {
            Ok(()) => true,
            Err(err) => {
                tracing::info!(error = %err, "recovery token rejected");
                false
            }
        };
        Ok(PageResult::props(RecoveryTokenProps { token, valid }))
    })
    .await;
    respond(&ctx, result)
}
