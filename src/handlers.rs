use crate::activity::{apply_upsert, build_activity_response, resolve_range};
use crate::errors::AppError;
use crate::heatmap::{Heatmap, HeatmapView};
use crate::models::{ActivityDay, ActivityQuery, ActivityRange, ActivityRecord, ActivityResponse, ActivityUpsert};
use crate::provider::ActivityProvider;
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::render_journal;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let heatmap = current_heatmap(&state).await;
    Html(render_journal(&heatmap, &state.layout))
}

pub async fn get_heatmap(State(state): State<AppState>) -> Json<HeatmapView> {
    let heatmap = current_heatmap(&state).await;
    Json(heatmap.view(&state.layout))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityResponse>, AppError> {
    let range = resolve_range(query.range.as_deref());
    let data = state.data.lock().await;
    Ok(Json(build_activity_response(range, &data)))
}

pub async fn post_activity(
    State(state): State<AppState>,
    Json(payload): Json<ActivityUpsert>,
) -> Result<Json<ActivityDay>, AppError> {
    if payload.leetcode.is_none() && payload.github.is_none() {
        return Err(AppError::bad_request("provide at least one of 'leetcode' or 'github'"));
    }

    let mut data = state.data.lock().await;
    let day = apply_upsert(&mut data, &payload)?;
    persist_store(&state.data_path, &data).await?;
    info!(date = %day.date, total = day.total, "recorded activity");

    Ok(Json(day))
}

async fn current_heatmap(state: &AppState) -> Arc<Heatmap> {
    let today = Local::now().date_naive();
    let records = journal_records(state, today).await;
    let mut cache = state.cache.lock().await;
    cache.get_or_build(today, &records)
}

async fn journal_records(state: &AppState, today: NaiveDate) -> Vec<ActivityRecord> {
    match &state.remote {
        Some(feed) => match feed.activity(ActivityRange::OneYear).await {
            Ok(response) => response.records(today),
            Err(err) => {
                warn!(base_url = feed.client().base_url(), "activity fetch failed, showing demo data: {err}");
                state.demo.records(today)
            }
        },
        None => state.data.lock().await.records(today),
    }
}
