use axum::{extract::State, Json};

use crate::{state::ApiState, store::Book};

/// Returns the full book collection.
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "The full book collection", body = [Book]),
    )
)]
pub async fn list_books(State(state): State<ApiState>) -> Json<Vec<Book>> {
    let books = state.book_store().all();

    Json(books)
}
