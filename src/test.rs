use axum::{body::Body, response::Response, Router};
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    error::ErrorVerbosity,
    server::{router, ServerConfig},
    state::ApiState,
    store::BookStore,
};

#[tokio::test]
async fn example_config_is_valid() {
    ServerConfig::from_config_file("config.example.yaml")
        .await
        .expect("Example config is not parsable");
}

fn seeded_app() -> Router {
    router(ApiState::new(ErrorVerbosity::Full, BookStore::seeded()))
}

fn empty_app() -> Router {
    router(ApiState::new(ErrorVerbosity::Full, BookStore::new()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build the request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build the request")
}

fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("Failed to build the request")
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("Failed to send the request")
}

async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read the response body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

fn book_payload() -> Value {
    json!({
        "title": "Software Engineering",
        "author": "John Smith",
        "description": "This is a book about software engineering",
        "rating": 5,
        "published_date": 2022
    })
}

#[tokio::test]
async fn listing_returns_the_full_catalog() {
    let app = seeded_app();

    let response = send(&app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(10));
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["title"], "Computer Science");
    assert_eq!(books[9]["id"], 10);
    assert_eq!(books[9]["title"], "Philosophy");
}

#[tokio::test]
async fn filtering_by_rating_returns_the_matching_books() {
    let app = seeded_app();

    let response = send(&app, get("/books/?rating=5")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(2));
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[1]["id"], 6);
}

#[tokio::test]
async fn filtering_by_an_out_of_range_rating_is_rejected() {
    let app = seeded_app();

    let response = send(&app, get("/books/?rating=6")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Validation");
    assert_eq!(body["message"], "Validation failed");
}

#[tokio::test]
async fn filtering_by_an_unparsable_rating_is_rejected() {
    let app = seeded_app();

    let response = send(&app, get("/books/?rating=excellent")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Query");
    assert_eq!(body["message"], "Failed to parse query parameters");
}

#[tokio::test]
async fn filtering_by_published_date_returns_the_matching_books() {
    let app = seeded_app();

    let response = send(&app, get("/books/by-publish-date/?published_date=2021")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["id"], 1);
}

#[tokio::test]
async fn filtering_by_the_excluded_lower_published_date_bound_is_rejected() {
    let app = seeded_app();

    let response = send(&app, get("/books/by-publish-date/?published_date=2000")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Validation");
}

#[tokio::test]
async fn getting_a_book_by_id_returns_it() {
    let app = seeded_app();

    let response = send(&app, get("/books/3/")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let book = body_json(response).await;

    assert_eq!(book["id"], 3);
    assert_eq!(book["title"], "Physics");
    assert_eq!(book["author"], "John Smith");
    assert_eq!(book["rating"], 3);
    assert_eq!(book["published_date"], 2019);
}

#[tokio::test]
async fn getting_a_missing_book_returns_not_found() {
    let app = seeded_app();

    let response = send(&app, get("/books/999/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "BookNotFound");
    assert_eq!(body["message"], "Book not found!");
    assert_eq!(
        body["error"]["book_not_found_reason"],
        "Book with id 999 not found"
    );
}

#[tokio::test]
async fn getting_a_book_with_id_zero_is_rejected() {
    let app = seeded_app();

    let response = send(&app, get("/books/0/")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Validation");
}

#[tokio::test]
async fn getting_a_book_with_an_unparsable_id_is_rejected() {
    let app = seeded_app();

    let response = send(&app, get("/books/first/")).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Path");
    assert_eq!(body["message"], "Failed to parse path parameters");
}

#[tokio::test]
async fn creating_a_book_returns_the_grown_collection() {
    let app = seeded_app();

    let response = send(
        &app,
        json_request(Method::POST, "/create-books/", &book_payload()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(11));
    assert_eq!(books[10]["id"], 11);
    assert_eq!(books[10]["title"], "Software Engineering");

    let response = send(&app, get("/books/11/")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let book = body_json(response).await;

    assert_eq!(book["author"], "John Smith");
    assert_eq!(book["rating"], 5);
    assert_eq!(book["published_date"], 2022);
}

#[tokio::test]
async fn creating_a_book_on_an_empty_collection_assigns_id_one() {
    let app = empty_app();

    let response = send(
        &app,
        json_request(Method::POST, "/create-books/", &book_payload()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["id"], 1);
}

#[tokio::test]
async fn creating_a_book_ignores_a_client_supplied_id() {
    let app = seeded_app();

    let mut payload = book_payload();
    payload["id"] = json!(999);

    let response = send(&app, json_request(Method::POST, "/create-books/", &payload)).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let books = body_json(response).await;

    assert_eq!(books[10]["id"], 11);

    let response = send(&app, get("/books/999/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creating_a_book_with_a_short_title_is_rejected() {
    let app = seeded_app();

    let mut payload = book_payload();
    payload["title"] = json!("ab");

    let response = send(&app, json_request(Method::POST, "/create-books/", &payload)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Validation");
    assert!(body["error"]["validation_errors"]["title"].is_array());

    let response = send(&app, get("/")).await;
    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn creating_a_book_with_a_malformed_body_is_rejected() {
    let app = seeded_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/create-books/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("Failed to build the request");

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "Body");
    assert_eq!(body["message"], "Failed to parse request body");
}

#[tokio::test]
async fn updating_a_book_overwrites_every_field_except_the_id() {
    let app = seeded_app();

    let payload = json!({
        "title": "Applied Physics",
        "author": "Jane Smith",
        "description": "This is a book about applied physics",
        "rating": 4,
        "published_date": 2049
    });

    let response = send(
        &app,
        json_request(Method::PUT, "/update-books/3/", &payload),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let book = body_json(response).await;

    assert_eq!(book["id"], 3);
    assert_eq!(book["title"], "Applied Physics");
    assert_eq!(book["author"], "Jane Smith");
    assert_eq!(book["description"], "This is a book about applied physics");
    assert_eq!(book["rating"], 4);
    assert_eq!(book["published_date"], 2049);

    let response = send(&app, get("/books/3/")).await;
    let book = body_json(response).await;

    assert_eq!(book["title"], "Applied Physics");
    assert_eq!(book["published_date"], 2049);
}

#[tokio::test]
async fn updating_a_missing_book_returns_not_found() {
    let app = seeded_app();

    let response = send(&app, get("/")).await;
    let books_before = body_json(response).await;

    let response = send(
        &app,
        json_request(Method::PUT, "/update-books/999/", &book_payload()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;

    assert_eq!(body["message"], "Book not found!");

    let response = send(&app, get("/")).await;
    let books_after = body_json(response).await;

    assert_eq!(books_before, books_after);
}

#[tokio::test]
async fn deleting_a_book_returns_no_content() {
    let app = seeded_app();

    let response = send(&app, delete("/delete-books/5/")).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/books/5/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, get("/")).await;
    let books = body_json(response).await;

    assert_eq!(books.as_array().map(Vec::len), Some(9));
}

#[tokio::test]
async fn deleting_a_missing_book_returns_not_found() {
    let app = seeded_app();

    let response = send(&app, delete("/delete-books/999/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "BookNotFound");
}

#[tokio::test]
async fn unknown_routes_return_not_found() {
    let app = seeded_app();

    let response = send(&app, get("/books")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "NotFound");
    assert_eq!(body["message"], "The requested resource was not found");
}

#[tokio::test]
async fn wrong_methods_return_method_not_allowed() {
    let app = seeded_app();

    let response = send(&app, json_request(Method::POST, "/", &book_payload())).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body = body_json(response).await;

    assert_eq!(body["error_type"], "MethodNotAllowed");
}

#[tokio::test]
async fn status_code_verbosity_strips_the_error_body() {
    let app = router(ApiState::new(
        ErrorVerbosity::StatusCode,
        BookStore::seeded(),
    ));

    let response = send(&app, get("/books/999/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read the response body")
        .to_bytes();

    assert!(bytes.is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = seeded_app();

    let response = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);

    let document = body_json(response).await;

    assert!(document["paths"]["/create-books/"]["post"].is_object());
}
