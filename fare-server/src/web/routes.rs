//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::accounts::{AccountError, AuthOutcome, RegisterOutcome};
use crate::present::present;
use crate::search;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/search/offers", get(search_offers))
        .route("/api/facets", get(facet_options))
        .route("/api/catalog/reload", post(reload_catalog))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/api/booking", get(booking_get).post(booking_set))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.catalog.snapshot().await;

    Html(
        IndexTemplate {
            carriers: snapshot.facets.carriers,
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Search the loaded catalog.
async fn search_offers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<SearchOffersRequest>,
) -> Result<Response, AppError> {
    let snapshot = state.catalog.snapshot().await;
    let query = req.to_query();

    let outcome = search::run(&snapshot.offerings, &query, &state.config);
    let views = present(&outcome.offerings, &state.config);

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = OfferListTemplate {
            offerings: views,
            location_fallback: outcome.location_fallback,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let offerings: Vec<OfferResult> = views.iter().map(OfferResult::from_view).collect();

        Ok(Json(SearchOffersResponse {
            offerings,
            location_fallback: outcome.location_fallback,
        })
        .into_response())
    }
}

/// Facet options for the loaded catalog.
async fn facet_options(State(state): State<AppState>) -> Json<FacetOptionsResponse> {
    let snapshot = state.catalog.snapshot().await;

    Json(FacetOptionsResponse {
        carriers: snapshot.facets.carriers,
        catalog_origin: snapshot.origin.as_str().to_string(),
    })
}

/// Force a catalog reload.
async fn reload_catalog(State(state): State<AppState>) -> Json<ReloadResponse> {
    let origin = state.catalog.reload().await;

    Json(ReloadResponse {
        catalog_origin: origin.as_str().to_string(),
    })
}

/// Register a new account.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let outcome = state
        .accounts
        .register(&req.email, &req.password, &req.first_name, &req.last_name)
        .await?;

    match outcome {
        RegisterOutcome::Registered => Ok((
            StatusCode::CREATED,
            Json(RegisterResponse { email: req.email }),
        )
            .into_response()),
        RegisterOutcome::EmailTaken => Err(AppError::Conflict {
            message: format!("an account for {} already exists", req.email),
        }),
    }
}

/// Log in with email and password.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    match state.accounts.authenticate(&req.email, &req.password).await {
        AuthOutcome::Authenticated(account) => Ok(Json(LoginResponse {
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
        })),
        AuthOutcome::InvalidCredentials => Err(AppError::Unauthorized {
            message: "invalid email or password".to_string(),
        }),
    }
}

/// Read booking state by key.
async fn booking_get(
    State(state): State<AppState>,
    Query(req): Query<BookingGetRequest>,
) -> Result<Json<BookingEntry>, AppError> {
    match state.bookings.get(&req.key).await {
        Some(value) => Ok(Json(BookingEntry {
            key: req.key,
            value,
        })),
        None => Err(AppError::NotFound {
            message: format!("no booking state for key {:?}", req.key),
        }),
    }
}

/// Write booking state.
async fn booking_set(
    State(state): State<AppState>,
    Json(req): Json<BookingSetRequest>,
) -> StatusCode {
    state.bookings.set(req.key, req.value).await;
    StatusCode::NO_CONTENT
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::InvalidField { .. } | AccountError::EmptyField { .. } => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(status = %status, message = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
