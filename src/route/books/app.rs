use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/", get(super::list_books::list_books))
        .route("/books/", get(super::filter_books::get_books_by_rating))
        .route(
            "/books/by-publish-date/",
            get(super::filter_books::get_books_by_published_date),
        )
        .route("/books/:book_id/", get(super::get_book::get_book))
        .route("/create-books/", post(super::create_book::create_book))
        .route(
            "/update-books/:book_id/",
            put(super::update_book::update_book),
        )
        .route(
            "/delete-books/:book_id/",
            delete(super::delete_book::delete_book),
        )
}
