use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::ApiErrorResponse,
    extractor::{json::ApiJson, validated::ValidatedFromRequest},
    state::ApiState,
    store::Book,
};

use super::BookRequest;

/// Appends a new book with the next free id and returns the full collection.
#[utoipa::path(
    post,
    path = "/create-books/",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "The full book collection including the created book", body = [Book]),
        (status = 422, description = "Invalid request body", body = ApiErrorResponse),
    )
)]
pub async fn create_book(
    State(state): State<ApiState>,
    ValidatedFromRequest(ApiJson(request)): ValidatedFromRequest<ApiJson<BookRequest>>,
) -> (StatusCode, Json<Vec<Book>>) {
    let books = state.book_store().create(request.into());

    (StatusCode::CREATED, Json(books))
}
