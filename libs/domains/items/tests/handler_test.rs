//! Handler tests for the Items domain
//!
//! These exercise the items router against a real (in-memory SQLite)
//! repository: request parsing, status codes and error bodies.
//! The full application with docs and middleware is covered by the app's own tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    let service = ItemService::new(SqlItemRepository::new(db.connection()));
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, name: &str, price: f64) -> Item {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/items/",
            json!({"name": name, "description": "from test", "price": price}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_item_returns_200_with_id() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_create_200");

    let response = app
        .oneshot(json_request(
            "POST",
            "/items/",
            json!({"name": builder.name("item", "pen"), "price": builder.price()}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let item: Item = json_body(response.into_body()).await;
    assert!(item.id >= 1);
    assert_eq!(item.name, builder.name("item", "pen"));
    assert_eq!(item.description, None);
    assert_eq!(item.price, builder.price());
}

#[tokio::test]
async fn test_collection_answers_without_trailing_slash() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/items", json!({"name": "Pen", "price": 1.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_create_item_missing_price_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(json_request("POST", "/items/", json!({"name": "Pen"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail[0]["loc"][0], "body");
}

#[tokio::test]
async fn test_create_item_malformed_json_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let request = Request::builder()
        .method("POST")
        .uri("/items/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn test_create_item_name_too_long_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(json_request(
            "POST",
            "/items/",
            json!({"name": "x".repeat(256), "price": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));
}

#[tokio::test]
async fn test_get_item_returns_stored_row() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, "Lamp", 35.5).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/items/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, created);
}

#[tokio::test]
async fn test_get_missing_item_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app.oneshot(empty_request("GET", "/items/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn test_non_integer_id_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for method in ["GET", "DELETE"] {
        let response = app
            .clone()
            .oneshot(empty_request(method, "/items/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["detail"][0]["loc"][0], "path");
    }
}

#[tokio::test]
async fn test_out_of_range_id_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for uri in ["/items/99999999999", "/items/-99999999999999999999999"] {
        let requests = [
            empty_request("GET", uri),
            json_request("PUT", uri, json!({"name": "Ghost", "price": 1.0})),
            empty_request("DELETE", uri),
        ];
        for request in requests {
            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let body: Value = json_body(response.into_body()).await;
            assert_eq!(body, json!({"detail": "Item not found"}));
        }
    }
}

#[tokio::test]
async fn test_update_item_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, "Desk", 120.0).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/items/{}", created.id),
            json!({"name": "Standing desk", "price": 250.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, created.id);
    assert_eq!(item.name, "Standing desk");
    assert_eq!(item.description, None);
    assert_eq!(item.price, 250.0);

    let response = app
        .oneshot(empty_request("GET", &format!("/items/{}", created.id)))
        .await
        .unwrap();
    let fetched: Item = json_body(response.into_body()).await;
    assert_eq!(fetched, item);
}

#[tokio::test]
async fn test_update_missing_item_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/items/42",
            json!({"name": "Ghost", "price": 1.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item not found");
}

#[tokio::test]
async fn test_delete_item_then_get_returns_404() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let created = create(&app, "Mug", 8.0).await;
    let uri = format!("/items/{}", created.id);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({"message": "Item deleted successfully"}));

    let response = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_items_pagination() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    for i in 0..5 {
        create(&app, &format!("item-{i}"), i as f64).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/items/?skip=1&limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["item-1", "item-2"]);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/items/?skip=10"))
        .await
        .unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());

    let response = app
        .oneshot(empty_request("GET", "/items/?limit=0"))
        .await
        .unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_bad_query_returns_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for uri in ["/items/?skip=-1", "/items/?limit=abc"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["detail"][0]["loc"][0], "query");
    }
}
