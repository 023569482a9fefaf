use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde::Deserialize;
use std::sync::Arc;
use tender_core::session::{CartSnapshot, CheckoutReceipt, PurchaseReceipt, RankedResults, TenderSummary};
use tender_core::{Catalog, Product, Session, SessionConfig, SessionError};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

type ApiError = (StatusCode, String);

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct AddToCart {
    pub item: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}
fn default_quantity() -> u32 { 1 }

#[derive(Deserialize)]
pub struct BuyNow {
    pub item: String,
}

/// One session for the whole process; every request takes the lock, so commands
/// run one at a time like events on a UI thread.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

pub fn build_app(config: SessionConfig) -> Router {
    let catalog = Arc::new(Catalog::seeded());
    tracing::info!(products = catalog.len(), top_n = config.top_n, "catalog loaded");
    let app_state = AppState { session: Arc::new(Mutex::new(Session::new(catalog, config))) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/results", get(results_handler))
        .route("/catalog", get(catalog_handler))
        .route("/cart", get(cart_handler).post(add_to_cart_handler))
        .route("/cart/:index", delete(remove_from_cart_handler))
        .route("/checkout", post(checkout_handler))
        .route("/buy", post(buy_handler))
        .route("/history", get(history_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RankedResults>, ApiError> {
    let results = state.session.lock().search(&params.q).map_err(reject)?;
    Ok(Json(results))
}

/// Results of the last successful search, `null` before the first one.
pub async fn results_handler(State(state): State<AppState>) -> Json<Option<RankedResults>> {
    Json(state.session.lock().active())
}

pub async fn catalog_handler(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.session.lock().catalog().products().to_vec())
}

pub async fn cart_handler(State(state): State<AppState>) -> Json<CartSnapshot> {
    Json(state.session.lock().cart())
}

pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Json(body): Json<AddToCart>,
) -> Result<Json<CartSnapshot>, ApiError> {
    let cart = state.session.lock().add_to_cart(&body.item, body.quantity).map_err(reject)?;
    Ok(Json(cart))
}

/// `index` is 0-based; an index past the end returns the cart unchanged.
pub async fn remove_from_cart_handler(State(state): State<AppState>, Path(index): Path<usize>) -> Json<CartSnapshot> {
    Json(state.session.lock().remove_from_cart(index))
}

pub async fn checkout_handler(State(state): State<AppState>) -> Result<Json<CheckoutReceipt>, ApiError> {
    let receipt = state.session.lock().checkout().map_err(reject)?;
    Ok(Json(receipt))
}

pub async fn buy_handler(
    State(state): State<AppState>,
    Json(body): Json<BuyNow>,
) -> Result<Json<PurchaseReceipt>, ApiError> {
    let receipt = state.session.lock().buy_now(&body.item).map_err(reject)?;
    Ok(Json(receipt))
}

pub async fn history_handler(State(state): State<AppState>) -> Json<Vec<TenderSummary>> {
    Json(state.session.lock().history())
}

fn reject(err: SessionError) -> ApiError {
    let status = match err {
        SessionError::UnknownProduct(_) => StatusCode::NOT_FOUND,
        SessionError::EmptyQuery | SessionError::EmptyCart | SessionError::InvalidQuantity => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}
