use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tender_core::SessionConfig;
use tower::ServiceExt;

fn app() -> Router {
    tender_server::build_app(SessionConfig::default())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let app = app();
    let (status, json) = call(&app, Method::GET, "/search?q=cheap%20and%20fast%20padang%20food", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "padang-food");
    assert_eq!(json["criteria"]["cheapest"], true);
    assert_eq!(json["criteria"]["fastest"], true);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 6);
    assert_eq!(results[0]["product"]["item"], "Street Style Padang");
    assert_eq!(results[0]["score"], 6);
    assert_eq!(results[5]["product"]["item"], "Premium Rendang Set");
}

#[tokio::test]
async fn empty_query_is_rejected_and_previous_results_remain() {
    let app = app();
    let (status, json) = call(&app, Method::GET, "/results", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.is_null());

    call(&app, Method::GET, "/search?q=coffee", None).await;
    let (status, body) = call(&app, Method::GET, "/search?q=%20%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "please enter a search request");
    let (status, _) = call(&app, Method::GET, "/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = call(&app, Method::GET, "/results", None).await;
    assert_eq!(json["query"], "coffee");
}

#[tokio::test]
async fn cart_and_checkout() {
    let app = app();
    call(&app, Method::POST, "/cart", Some(json!({ "item": "Complete Mixed Rice" }))).await;
    let (status, cart) = call(&app, Method::POST, "/cart", Some(json!({ "item": "Complete Mixed Rice", "quantity": 2 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["lines"][0]["quantity"], 3);
    assert_eq!(cart["total"], 36_000);

    let (_, cart) = call(&app, Method::DELETE, "/cart/1", None).await;
    assert_eq!(cart["count"], 1);

    let (status, receipt) = call(&app, Method::POST, "/checkout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["total"], 36_000);
    assert_eq!(receipt["item_count"], 1);

    let (_, cart) = call(&app, Method::GET, "/cart", None).await;
    assert_eq!(cart["count"], 0);
    let (status, body) = call(&app, Method::POST, "/checkout", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "your cart is empty");
}

#[tokio::test]
async fn unknown_products_and_bad_quantities() {
    let app = app();
    let (status, _) = call(&app, Method::POST, "/cart", Some(json!({ "item": "Moon Cheese" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::POST, "/cart", Some(json!({ "item": "Fresh Fruit Ice", "quantity": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = call(&app, Method::POST, "/buy", Some(json!({ "item": "Moon Cheese" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn buy_and_history() {
    let app = app();
    let (status, receipt) = call(&app, Method::POST, "/buy", Some(json!({ "item": "Premium Rendang Set" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["price"], 30_000);
    assert_eq!(receipt["landed_price"], 40_000);

    call(&app, Method::GET, "/search?q=tea", None).await;
    call(&app, Method::GET, "/search?q=burger", None).await;
    let (_, history) = call(&app, Method::GET, "/history", None).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["request"], "burger");
    assert_eq!(history[1]["category"], "beverage");

    let (_, catalog) = call(&app, Method::GET, "/catalog", None).await;
    assert_eq!(catalog.as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn repeated_max_quantity_is_rejected() {
    let app = app();
    let body = json!({ "item": "Fresh Fruit Ice", "quantity": u32::MAX });
    let (status, cart) = call(&app, Method::POST, "/cart", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"][0]["quantity"], u32::MAX);

    let (status, _) = call(&app, Method::POST, "/cart", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, cart) = call(&app, Method::GET, "/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["count"], 1);
    assert_eq!(cart["lines"][0]["quantity"], u32::MAX);
    assert_eq!(cart["total"], u64::from(u32::MAX) * 8_000);
}
