use axum::{extract::State, Json};

use crate::{
    error::{ApiError, ApiErrorResponse, BookNotFoundError, ErrorVerbosityProvider},
    extractor::{path::ApiPath, validated::ValidatedFromRequestParts},
    state::ApiState,
    store::Book,
};

use super::BookIdPath;

/// Returns the book with the given id.
#[utoipa::path(
    get,
    path = "/books/{book_id}/",
    tag = "books",
    params(BookIdPath),
    responses(
        (status = 200, description = "The requested book", body = Book),
        (status = 404, description = "No book has the requested id", body = ApiErrorResponse),
        (status = 422, description = "Invalid path parameters", body = ApiErrorResponse),
    )
)]
pub async fn get_book(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiPath(path)): ValidatedFromRequestParts<ApiPath<BookIdPath>>,
) -> Result<Json<Book>, ApiError> {
    let book = state
        .book_store()
        .find_by_id(path.book_id)
        .ok_or_else(|| BookNotFoundError::new(state.error_verbosity(), path.book_id))?;

    Ok(Json(book))
}
