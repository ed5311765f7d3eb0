//! Handler tests for the food items domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They exercise ONLY the domain handlers against the in-memory repository,
//! not the full application with routing, auth middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_food_items::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn test_app() -> (FoodItemService<InMemoryFoodItemRepository>, Router) {
    let repo = InMemoryFoodItemRepository::new();
    let service = FoodItemService::new(repo, Arc::new(NoopFileStore));
    let app = handlers::router(service.clone());
    (service, app)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn milk_body() -> Value {
    json!({
        "name": "Milk",
        "expiration_date": "2026-09-01",
        "quantity": 2,
        "placement": "fridge",
        "keywords": ["dairy"],
        "category_names": ["Dairy", "Breakfast", "Dairy"]
    })
}

async fn seed(service: &FoodItemService<InMemoryFoodItemRepository>, body: Value) -> FoodItem {
    let input: CreateFoodItem = serde_json::from_value(body).unwrap();
    service.create_food_item(input).await.unwrap()
}

#[tokio::test]
async fn test_create_returns_201_and_echoes_fields() {
    let (_service, app) = test_app();

    let response = app
        .oneshot(json_request("POST", "/", milk_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item: FoodItem = json_body(response.into_body()).await;
    assert_eq!(item.name, "Milk");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.placement, "fridge");
    assert_eq!(item.keywords, vec!["dairy".to_string()]);
    // Duplicate category collapsed, first occurrence kept
    assert_eq!(
        item.categories,
        vec!["Dairy".to_string(), "Breakfast".to_string()]
    );
    assert!(!item.hidden);
}

#[tokio::test]
async fn test_create_rejects_zero_quantity() {
    let (service, app) = test_app();

    let mut body = milk_body();
    body["quantity"] = json!(0);

    let response = app.oneshot(json_request("POST", "/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored
    let listed = service.list_food_items(None, None).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_rejects_unparseable_date() {
    let (_service, app) = test_app();

    let mut body = milk_body();
    body["expiration_date"] = json!("sometime next week");

    let response = app.oneshot(json_request("POST", "/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_excludes_hidden_and_orders_by_expiration() {
    let (service, app) = test_app();

    let later = seed(
        &service,
        json!({"name": "Rice", "expiration_date": "2027-01-01", "quantity": 1, "placement": "pantry"}),
    )
    .await;
    let sooner = seed(
        &service,
        json!({"name": "Yogurt", "expiration_date": "2026-08-30", "quantity": 1, "placement": "fridge"}),
    )
    .await;
    let archived = seed(
        &service,
        json!({"name": "Old bread", "expiration_date": "2026-08-25", "quantity": 1, "placement": "pantry"}),
    )
    .await;

    service
        .update_food_item(UpdateFoodItem {
            id: Some(archived.id),
            hidden: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<FoodItem> = json_body(response.into_body()).await;
    let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);
}

#[tokio::test]
async fn test_get_by_id_reaches_hidden_item() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;
    service
        .update_food_item(UpdateFoodItem {
            id: Some(item.id),
            hidden: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = app
        .oneshot(get_request(&format!("/?id={}", item.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: FoodItem = json_body(response.into_body()).await;
    assert_eq!(fetched.id, item.id);
    assert!(fetched.hidden);
}

#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let (_service, app) = test_app();

    let response = app
        .oneshot(get_request(&format!("/?id={}", Uuid::now_v7())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_and_sort_query_params() {
    let (service, app) = test_app();

    seed(
        &service,
        json!({"name": "Apple juice", "expiration_date": "2026-12-01", "quantity": 3, "placement": "pantry"}),
    )
    .await;
    seed(
        &service,
        json!({"name": "Apples", "expiration_date": "2026-09-10", "quantity": 8, "placement": "fruit bowl"}),
    )
    .await;
    seed(
        &service,
        json!({"name": "Rice", "expiration_date": "2027-01-01", "quantity": 1, "placement": "pantry"}),
    )
    .await;

    let response = app
        .oneshot(get_request("/?search=apple&sort=quantity_desc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<FoodItem> = json_body(response.into_body()).await;
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Apples", "Apple juice"]);
}

#[tokio::test]
async fn test_update_applies_sparse_patch() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({"id": item.id, "quantity": 7}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: FoodItem = json_body(response.into_body()).await;
    assert_eq!(updated.quantity, 7);
    // Untouched fields survive the patch
    assert_eq!(updated.name, "Milk");
    assert_eq!(updated.placement, "fridge");
    assert_eq!(updated.categories, item.categories);
    assert!(updated.updated_at >= item.updated_at);
}

#[tokio::test]
async fn test_update_replaces_categories_wholesale() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({"id": item.id, "category_names": ["Snacks"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: FoodItem = json_body(response.into_body()).await;
    assert_eq!(updated.categories, vec!["Snacks".to_string()]);
}

#[tokio::test]
async fn test_update_without_id_returns_400() {
    let (_service, app) = test_app();

    let response = app
        .oneshot(json_request("PUT", "/", json!({"quantity": 7})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let (_service, app) = test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({"id": Uuid::now_v7(), "quantity": 7}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_invalid_quantity_and_keeps_stored_value() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/",
            json!({"id": item.id, "quantity": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored = service.get_food_item(item.id).await.unwrap();
    assert_eq!(stored.quantity, 2);
}

#[tokio::test]
async fn test_delete_returns_message_and_id() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;

    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/", json!({"id": item.id})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: DeleteFoodItemResponse = json_body(response.into_body()).await;
    assert_eq!(body.deleted_id, item.id);
    assert_eq!(body.message, "Food item deleted");

    // Item is gone
    let response = app
        .oneshot(get_request(&format!("/?id={}", item.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_without_id_returns_400() {
    let (_service, app) = test_app();

    let response = app
        .oneshot(json_request("DELETE", "/", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404_and_mutates_nothing() {
    let (service, app) = test_app();

    let item = seed(&service, milk_body()).await;

    let response = app
        .oneshot(json_request("DELETE", "/", json!({"id": Uuid::now_v7()})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(service.get_food_item(item.id).await.is_ok());
}
