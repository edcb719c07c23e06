use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::properties::core::views::{self, SortKey, SortOrder};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListPropertiesParams {
    pub search: Option<String>,
    pub sort_by: Option<SortKey>,
    pub ascending: Option<bool>,
}

/// Current dashboard snapshot. Query parameters override the stored search and sort
/// for this response only.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListPropertiesParams>,
) -> impl IntoResponse {
    let mut snapshot = state.controller.snapshot().await;
    if params.search.is_some() || params.sort_by.is_some() || params.ascending.is_some() {
        let search = params.search.unwrap_or_else(|| snapshot.search.clone());
        let order = SortOrder {
            key: params.sort_by.unwrap_or(snapshot.sort.key),
            ascending: params.ascending.unwrap_or(snapshot.sort.ascending),
        };
        snapshot.visible = views::sorted_by(views::filtered_by(&snapshot.records, &search), order)
            .into_iter()
            .cloned()
            .collect();
        snapshot.search = search;
        snapshot.sort = order;
    }
    Json(snapshot)
}

pub async fn counts(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.counts().await)
}
