use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wortgenerator::server::{create_router, ApiResponse, AppState};
use wortgenerator::{Annotated, Dictionary, Entry, MeaningOverview, Resolver, WordList, WortError};

/// Every word means "Bedeutung von <word>".
struct EchoDictionary;

#[async_trait]
impl Dictionary for EchoDictionary {
    async fn lookup_exact(&self, word: &str) -> Result<Option<Entry>, WortError> {
        Ok(Some(Entry::new(
            word,
            MeaningOverview::Single(format!("Bedeutung von\n{word}")),
            1,
        )))
    }

    async fn search(&self, _word: &str) -> Result<Vec<Entry>, WortError> {
        Ok(Vec::new())
    }
}

fn state() -> AppState {
    AppState {
        words: Arc::new(["Haus", "Baum", "Auto"].into_iter().collect::<WordList>()),
        resolver: Resolver::new(Arc::new(EchoDictionary)),
        max_count: 25,
        default_count: 2,
    }
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = create_router(state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_without_count_prompts() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Bitte klicke auf"));
    assert!(body.contains(r#"value="2""#));
}

#[tokio::test]
async fn index_renders_hover_definitions() {
    let (status, body) = get("/?count=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<span title=\"Bedeutung von ").count(), 2);
}

#[tokio::test]
async fn index_rejects_out_of_range_count() {
    let (status, body) = get("/?count=26").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("between 1 and 25"));
}

#[tokio::test]
async fn api_returns_annotated_words() {
    let (status, body) = get("/api/words?count=3").await;
    assert_eq!(status, StatusCode::OK);
    let parsed: ApiResponse<Vec<Annotated>> = serde_json::from_str(&body).unwrap();
    assert!(parsed.success);
    let items = parsed.data.unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item.definition, format!("Bedeutung von {}", item.word));
    }
}

#[tokio::test]
async fn api_reports_insufficient_candidates() {
    let (status, body) = get("/api/words?count=4").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let parsed: ApiResponse<Vec<Annotated>> = serde_json::from_str(&body).unwrap();
    assert!(!parsed.success);
    assert!(parsed.error.unwrap().contains("cannot draw 4 words"));
}

#[tokio::test]
async fn health() {
    let (status, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"OK\""));
}

#[tokio::test]
async fn empty_count_field_still_renders_page() {
    let (status, body) = get("/?count=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("<h1>Wortgenerator</h1>"));
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("must be a number"));
}

#[tokio::test]
async fn garbage_count_renders_error_box() {
    let (status, body) = get("/?count=viele").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("&#39;viele&#39;"));
}

#[tokio::test]
async fn api_rejects_non_numeric_count() {
    let (status, body) = get("/api/words?count=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let parsed: ApiResponse<Vec<Annotated>> = serde_json::from_str(&body).unwrap();
    assert!(!parsed.success);
    assert!(parsed.error.unwrap().contains("must be a number"));
}
