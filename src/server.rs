//! Web surface: the form page plus a small JSON API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::render::{self, PageBody};
use crate::resolver::{Annotated, Resolver};
use crate::sampler::{sample, validate_count};
use crate::words::WordList;
use crate::WortError;

#[derive(Clone)]
pub struct AppState {
    pub words: Arc<WordList>,
    pub resolver: Resolver,
    pub max_count: usize,
    pub default_count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Raw `count` parameter. Kept as text so that an empty or malformed form
/// field still gets the HTML page with an error box.
#[derive(Deserialize)]
pub struct CountQuery {
    pub count: Option<String>,
}

impl CountQuery {
    /// `None` when the parameter is absent.
    pub fn parse(&self, max: usize) -> Result<Option<usize>, WortError> {
        let Some(raw) = &self.count else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| WortError::UnparsableCount {
                input: raw.clone(),
                max,
            })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/words", get(api_words))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<(), WortError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Validate, draw and annotate one batch.
async fn generate(state: &AppState, count: usize) -> Result<Vec<Annotated>, WortError> {
    let n = validate_count(count, state.max_count)?;
    // the thread-local RNG must not live across an await point
    let drawn = sample(state.words.as_slice(), n, &mut rand::thread_rng())?;
    Ok(state.resolver.annotate(drawn).await)
}

fn status_for(err: &WortError) -> StatusCode {
    match err {
        WortError::InvalidCount { .. } | WortError::UnparsableCount { .. } => {
            StatusCode::BAD_REQUEST
        }
        WortError::InsufficientCandidates { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn index(State(state): State<AppState>, Query(query): Query<CountQuery>) -> Response {
    let count = match query.parse(state.max_count) {
        Ok(Some(count)) => count,
        Ok(None) => {
            return Html(render::page(state.default_count, state.max_count, PageBody::Prompt))
                .into_response();
        }
        Err(e) => {
            let html = render::page(
                state.default_count,
                state.max_count,
                PageBody::Error(&e.to_string()),
            );
            return (status_for(&e), Html(html)).into_response();
        }
    };

    match generate(&state, count).await {
        Ok(items) => Html(render::page(count, state.max_count, PageBody::Words(&items)))
            .into_response(),
        Err(e) => {
            warn!("failed to generate words: {e}");
            let shown = count.clamp(1, state.max_count);
            let html = render::page(shown, state.max_count, PageBody::Error(&e.to_string()));
            (status_for(&e), Html(html)).into_response()
        }
    }
}

async fn api_words(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<Annotated>>>) {
    let result = match query.parse(state.max_count) {
        Ok(count) => generate(&state, count.unwrap_or(state.default_count)).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(items) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(items),
                error: None,
            }),
        ),
        Err(e) => {
            warn!("failed to generate words: {e}");
            (
                status_for(&e),
                Json(ApiResponse {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse {
        success: true,
        data: Some("OK".to_string()),
        error: None,
    })
}
