//! Insight (article) handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, Request, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::{AppError, AppState, MessageResponse, MAX_BODY_SIZE};
use ledgerpost_core::{
    Insight, InsightDraft, InsightPage, InsightPatch, InsightQuery, DEFAULT_RELATED_LIMIT,
};

/// Query parameters for listing insights
#[derive(Debug, Deserialize)]
pub struct InsightListQuery {
    /// Category slug; empty or "featured" means no filter
    pub category: Option<String>,
    /// Case-insensitive substring over title, excerpt and body
    pub search: Option<String>,
    /// Short alias for `search`
    pub s: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl InsightListQuery {
    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.s.as_deref())
    }
}

/// GET /api/insights - Filtered, paginated listing with category facets
pub async fn list_insights(
    State(state): State<Arc<AppState>>,
    params: Result<Query<InsightListQuery>, QueryRejection>,
) -> Result<Json<InsightPage>, AppError> {
    let Query(params) = params.map_err(|_| AppError::bad_request("Invalid query parameters"))?;

    let limit = params
        .limit
        .map(|l| l.clamp(1, state.config.max_page_limit.max(1)));

    let query = InsightQuery::new()
        .search(params.search_term())
        .category(params.category.as_deref())
        .page(params.page)
        .limit(limit);

    let page = state.store.list_insights(&query)?;

    debug!(
        total = page.pagination.total,
        page = page.pagination.page,
        "Listed insights"
    );

    Ok(Json(page))
}

/// GET /api/insights/:slug - Get a single insight
pub async fn get_insight(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Insight>, AppError> {
    let insight = state
        .store
        .get_insight_by_slug(&slug)?
        .ok_or_else(|| AppError::not_found("Insight not found"))?;

    Ok(Json(insight))
}

/// Query parameters for related insights
#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

/// GET /api/insights/:slug/related - Other insights in the same primary category
pub async fn get_related_insights(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    params: Result<Query<RelatedQuery>, QueryRejection>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let Query(params) = params.map_err(|_| AppError::bad_request("Invalid query parameters"))?;

    let insight = state
        .store
        .get_insight_by_slug(&slug)?
        .ok_or_else(|| AppError::not_found("Insight not found"))?;

    let limit = params.limit.min(state.config.max_page_limit);
    let related = state.store.related_insights(
        &insight.id,
        &insight.primary_category.slug,
        limit,
    )?;

    Ok(Json(related))
}

/// POST /api/insights - Create an insight
pub async fn create_insight(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<(StatusCode, Json<Insight>), AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let draft: InsightDraft =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let insight = state.store.create_insight(draft)?;

    Ok((StatusCode::CREATED, Json(insight)))
}

/// Request body for updating an insight: its id plus any fields to change
#[derive(Debug, Deserialize)]
pub struct UpdateInsightRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub patch: InsightPatch,
}

/// PUT /api/insights - Shallow-merge fields into an existing insight
pub async fn update_insight(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<Insight>, AppError> {
    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::bad_request("Invalid request body"))?;
    let req: UpdateInsightRequest =
        serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let id = req
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("Insight ID is required"))?;

    let insight = state.store.update_insight(&id, req.patch)?;

    Ok(Json(insight))
}

/// Query parameters for deleting an insight
#[derive(Debug, Deserialize)]
pub struct DeleteInsightQuery {
    pub id: Option<String>,
}

/// DELETE /api/insights?id= - Remove an insight
pub async fn delete_insight(
    State(state): State<Arc<AppState>>,
    params: Result<Query<DeleteInsightQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(params) = params.map_err(|_| AppError::bad_request("Invalid query parameters"))?;

    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("Insight ID is required"))?;

    state.store.delete_insight(&id)?;

    Ok(Json(MessageResponse {
        message: "Insight deleted successfully".to_string(),
    }))
}
