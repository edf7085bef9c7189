use axum::{extract::State, http::StatusCode};

use crate::{
    error::{ApiError, ApiErrorResponse, BookNotFoundError, ErrorVerbosityProvider},
    extractor::{path::ApiPath, validated::ValidatedFromRequestParts},
    state::ApiState,
};

use super::BookIdPath;

/// Removes the book with the given id from the collection.
#[utoipa::path(
    delete,
    path = "/delete-books/{book_id}/",
    tag = "books",
    params(BookIdPath),
    responses(
        (status = 204, description = "The book was deleted"),
        (status = 404, description = "No book has the requested id", body = ApiErrorResponse),
        (status = 422, description = "Invalid path parameters", body = ApiErrorResponse),
    )
)]
pub async fn delete_book(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiPath(path)): ValidatedFromRequestParts<ApiPath<BookIdPath>>,
) -> Result<StatusCode, ApiError> {
    if !state.book_store().delete(path.book_id) {
        return Err(BookNotFoundError::new(state.error_verbosity(), path.book_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
