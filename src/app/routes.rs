use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::state::Snapshot;
use crate::formats::{BookDetail, BookSummary, HomeRow};
use crate::query::SearchRequest;

pub fn router(snapshot: Arc<Snapshot>) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok\n" }))
        .route("/home", get(home_handler))
        .route("/catalogo", get(search_handler))
        .route("/catalogo/:simplified_name", get(detail_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any)),
        )
        .with_state(snapshot)
}

async fn home_handler(State(snapshot): State<Arc<Snapshot>>) -> Json<Vec<HomeRow>> {
    Json(snapshot.home_rows())
}

async fn search_handler(
    State(snapshot): State<Arc<Snapshot>>,
    Query(request): Query<SearchRequest>,
) -> Json<Vec<BookSummary>> {
    let filter = request.filter();
    let start_index = request.start_index();
    let results = snapshot.search(&filter, start_index);
    tracing::debug!(?filter, start_index, count = results.len(), "search");
    Json(results)
}

async fn detail_handler(
    State(snapshot): State<Arc<Snapshot>>,
    Path(simplified_name): Path<String>,
) -> Result<Json<BookDetail>, StatusCode> {
    if simplified_name.is_empty() || simplified_name.contains('/') {
        return Err(StatusCode::NOT_FOUND);
    }
    snapshot
        .detail(&simplified_name)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
