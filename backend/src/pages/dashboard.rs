use axum::{extract::State, response::Response};
use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::{empty_props, forward_to, optional_record, respond};
use crate::{
    guard::{with_ssr_auth, PageContext, PageResult},
    models::Point,
    state::AppState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardProps {
    pub date: NaiveDate,
    /// `None` when the API could not list the day's clock-ins.
    pub points: Option<Vec<Point>>,
}

pub async fn dashboard(State(state): State<AppState>, ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, |ctx| async move {
        let date = Local::now().date_naive();
        let api = state.api.for_context(&ctx);
        let points = optional_record(api.points_of_day(date)).await?;
        Ok(PageResult::props(DashboardProps { date, points }))
    })
    .await;
    respond(&ctx, result)
}

pub async fn change(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, forward_to("/change/password")).await;
    respond(&ctx, result)
}

pub async fn change_password(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, empty_props).await;
    respond(&ctx, result)
}

pub async fn config(ctx: PageContext) -> Response {
    let result = with_ssr_auth(ctx.clone(), None, empty_props).await;
    respond(&ctx, result)
}
