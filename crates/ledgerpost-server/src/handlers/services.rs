//! Services catalog handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use ledgerpost_core::Service;

/// Query parameters for the services endpoint
#[derive(Debug, Deserialize)]
pub struct ServiceQuery {
    pub slug: Option<String>,
}

#[derive(Serialize)]
pub struct ServicesResponse {
    pub services: Vec<Service>,
}

/// GET /api/services - Whole catalog, or one service with `?slug=`
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ServiceQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params.map_err(|_| AppError::bad_request("Invalid query parameters"))?;

    if let Some(slug) = params.slug.filter(|s| !s.is_empty()) {
        let service = find_service(&state, &slug)?;
        return Ok(Json(service).into_response());
    }

    Ok(Json(ServicesResponse {
        services: state.store.list_services(),
    })
    .into_response())
}

/// GET /api/services/:slug - Get a single service
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, AppError> {
    Ok(Json(find_service(&state, &slug)?))
}

fn find_service(state: &AppState, slug: &str) -> Result<Service, AppError> {
    state
        .store
        .get_service(slug)
        .ok_or_else(|| AppError::not_found("Service not found"))
}
