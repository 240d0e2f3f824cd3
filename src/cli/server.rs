//! HTTP server mode for REST API access to the trivia store

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::pagination::PageRequest;
use crate::quiz::QuizScope;
use crate::service::TriviaService;
use crate::store::DuckDbStore;
use crate::types::{CategoryId, QuestionDraft, QuestionId};

/// App state shared across handlers
pub struct AppState {
    /// Service implementing every boundary operation
    pub service: TriviaService<DuckDbStore>,
}

/// Request body for creating a question
#[derive(Debug, Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    category: Option<CategoryId>,
    difficulty: Option<i32>,
}

/// Request body for searching questions
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

/// Request body for drawing a quiz question
#[derive(Debug, Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategoryBody>,
    #[serde(default)]
    previous_questions: Vec<QuestionId>,
}

/// Category selector inside a quiz request; `id` 0 means "all"
#[derive(Debug, Deserialize)]
struct QuizCategoryBody {
    id: CategoryId,
}

/// Start the HTTP server
pub async fn serve(store: DuckDbStore, page_size: usize, port: u16) -> Result<()> {
    let state = AppState {
        service: TriviaService::new(store, page_size),
    };
    let app = router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Build the API router over shared state
pub fn router(state: Arc<AppState>) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/categories", get(list_categories))
        .route("/categories/:id", get(category_detail))
        .route("/categories/:id/questions", get(questions_in_category))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/:id", delete(delete_question))
        .route("/search", post(search_questions))
        .route("/quizzes", post(next_quiz_question))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map a boundary error onto the wire envelope
fn error_response(err: &Error) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// Parse the optional 1-based `page` query parameter.
///
/// Absent means page 1; anything that is not a positive integer is a
/// bad request.
fn parse_page(state: &AppState, params: &HashMap<String, String>) -> Result<PageRequest> {
    let page = match params.get("page") {
        None => 1,
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| Error::bad_request(format!("invalid page number '{raw}'")))?,
    };
    Ok(state.service.page(page))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "success": true, "status": "ok" }))
}

/// List all categories as an id → label mapping
async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    match state.service.list_categories() {
        Ok(listing) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "categories": listing.categories,
                "total_categories": listing.total,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Fetch one category
async fn category_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CategoryId>,
) -> Response {
    match state.service.category_detail(id) {
        Ok(category) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "category": category,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// List one page of questions with totals and the category mapping
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let view = parse_page(&state, &params).and_then(|page| state.service.question_page(page));

    match view {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "questions": view.questions,
                "total_questions": view.total,
                "categories": view.categories,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Create a question from the posted fields
async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateQuestionBody>,
) -> Response {
    let draft = QuestionDraft {
        question: body.question.unwrap_or_default(),
        answer: body.answer.unwrap_or_default(),
        category: body.category.unwrap_or_default(),
        difficulty: body.difficulty.unwrap_or_default(),
    };

    match state.service.create_question(draft) {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "created": view.created,
                "questions": view.questions,
                "total_questions": view.total,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Delete a question and return the refreshed listing page
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<QuestionId>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let view =
        parse_page(&state, &params).and_then(|page| state.service.delete_question(id, page));

    match view {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "deleted": view.deleted,
                "questions": view.questions,
                "total_questions": view.total,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Search question text for a case-insensitive substring
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<SearchBody>,
) -> Response {
    let Some(term) = body.search_term else {
        return error_response(&Error::bad_request("searchTerm is required"));
    };

    let view =
        parse_page(&state, &params).and_then(|page| state.service.search_questions(&term, page));

    match view {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "questions": view.questions,
                "total_questions": view.total,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// List one page of a category's questions
async fn questions_in_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CategoryId>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let view =
        parse_page(&state, &params).and_then(|page| state.service.questions_in_category(id, page));

    match view {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "questions": view.questions,
                "total_questions": view.total,
                "current_category": view.current_category,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Draw one unseen quiz question; exhaustion is a success with `null`
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuizBody>,
) -> Response {
    let scope = body
        .quiz_category
        .map_or(QuizScope::All, |category| {
            QuizScope::from_selector(category.id)
        });
    let history: HashSet<QuestionId> = body.previous_questions.into_iter().collect();

    match state.service.next_quiz_question(scope, &history) {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "question": outcome,
            })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}
