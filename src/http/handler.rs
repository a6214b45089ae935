//! HTTP handlers for the catalog API

use crate::catalog::Catalog;
use crate::compare::{ComparisonSelection, ComparisonView};
use crate::explore::{ExploreView, HomeView, OrgCard};
use crate::profile::ProfileView;
use crate::search::{search, SUGGESTION_LIMIT};
use crate::similarity::{SimilarityView, ViewMode};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

type SharedCatalog = Arc<dyn Catalog>;

/// HTTP errors
#[derive(Error, Debug)]
pub enum HttpError {
    /// Unknown organization identifier
    #[error("Organization not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl HttpError {
    fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn parse_view(view: Option<&str>) -> Result<ViewMode, HttpError> {
    match view {
        None => Ok(ViewMode::default()),
        Some(view) => view.parse().map_err(HttpError::InvalidRequest),
    }
}

#[derive(Debug, Deserialize)]
pub struct ExploreParams {
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub view: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub org: Option<String>,
}

/// Handler for system status
pub async fn status_handler(State(catalog): State<SharedCatalog>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": crate::VERSION,
        "catalog": {
            "organizations": catalog.len(),
        }
    }))
}

pub async fn home_handler(State(catalog): State<SharedCatalog>) -> impl IntoResponse {
    Json(HomeView::build(catalog.as_ref()))
}

pub async fn explore_handler(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<ExploreParams>,
) -> impl IntoResponse {
    debug!("explore sector={:?}", params.sector);
    let view = ExploreView::build(catalog.as_ref(), params.sector.as_deref());
    let caption = view.caption();
    Json(json!({
        "view": view,
        "caption": caption,
    }))
}

pub async fn search_handler(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    debug!("search q={:?}", query);
    Json(search(
        catalog.as_ref(),
        &query,
        params.limit.unwrap_or(SUGGESTION_LIMIT),
    ))
}

pub async fn organizations_handler(State(catalog): State<SharedCatalog>) -> impl IntoResponse {
    let cards: Vec<OrgCard> = catalog.all().into_iter().map(OrgCard::for_org).collect();
    Json(cards)
}

pub async fn organization_handler(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Response, HttpError> {
    debug!("profile id={}", id);
    let mode = parse_view(params.view.as_deref())?;
    let view = ProfileView::build(catalog.as_ref(), &id, mode);
    let status = match view {
        ProfileView::Found(_) => StatusCode::OK,
        ProfileView::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    Ok((status, Json(view)).into_response())
}

pub async fn similar_handler(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Response, HttpError> {
    let mode = parse_view(params.view.as_deref())?;
    let org = catalog
        .get(&id)
        .ok_or_else(|| HttpError::NotFound(id.clone()))?;
    let view = SimilarityView::new(org, catalog.as_ref());
    let response = match mode {
        ViewMode::List => Json(view.list(params.limit)).into_response(),
        ViewMode::Network => Json(view.graph(params.limit)).into_response(),
    };
    Ok(response)
}

pub async fn compare_handler(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<CompareParams>,
) -> impl IntoResponse {
    let selection = ComparisonSelection::parse(params.org.as_deref());
    debug!("compare org={:?}", selection.to_param());
    Json(ComparisonView::build(&selection, catalog.as_ref()))
}
