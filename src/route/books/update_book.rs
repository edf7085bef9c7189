use axum::{extract::State, Json};

use crate::{
    error::{ApiError, ApiErrorResponse, BookNotFoundError, ErrorVerbosityProvider},
    extractor::{
        json::ApiJson,
        path::ApiPath,
        validated::{ValidatedFromRequest, ValidatedFromRequestParts},
    },
    state::ApiState,
    store::Book,
};

use super::{BookIdPath, BookRequest};

/// Overwrites every field except the id of the book with the given id.
#[utoipa::path(
    put,
    path = "/update-books/{book_id}/",
    tag = "books",
    params(BookIdPath),
    request_body = BookRequest,
    responses(
        (status = 200, description = "The updated book", body = Book),
        (status = 404, description = "No book has the requested id", body = ApiErrorResponse),
        (status = 422, description = "Invalid path parameters or request body", body = ApiErrorResponse),
    )
)]
pub async fn update_book(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiPath(path)): ValidatedFromRequestParts<ApiPath<BookIdPath>>,
    ValidatedFromRequest(ApiJson(request)): ValidatedFromRequest<ApiJson<BookRequest>>,
) -> Result<Json<Book>, ApiError> {
    let book = state
        .book_store()
        .update(path.book_id, request.into())
        .ok_or_else(|| BookNotFoundError::new(state.error_verbosity(), path.book_id))?;

    Ok(Json(book))
}
