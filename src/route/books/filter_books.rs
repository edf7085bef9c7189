use axum::{extract::State, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::ApiErrorResponse,
    extractor::{query::ApiQuery, validated::ValidatedFromRequestParts},
    state::ApiState,
    store::Book,
};

/// Query parameter selecting books with an exact rating.
#[derive(Debug, Deserialize, JsonSchema, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RatingQuery {
    #[validate(range(min = 1, max = 5, message = "Must be between 1 and 5"))]
    pub rating: u8,
}

/// Query parameter selecting books with an exact publish date.
#[derive(Debug, Deserialize, JsonSchema, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PublishedDateQuery {
    #[validate(range(
        exclusive_min = 2000,
        max = 2050,
        message = "Must be greater than 2000 and at most 2050"
    ))]
    pub published_date: u16,
}

/// Returns the books matching the given rating exactly.
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(RatingQuery),
    responses(
        (status = 200, description = "The books with the requested rating", body = [Book]),
        (status = 422, description = "Invalid query parameters", body = ApiErrorResponse),
    )
)]
pub async fn get_books_by_rating(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiQuery(query)): ValidatedFromRequestParts<ApiQuery<RatingQuery>>,
) -> Json<Vec<Book>> {
    let books = state.book_store().find_by_rating(query.rating);

    Json(books)
}

/// Returns the books matching the given publish date exactly.
#[utoipa::path(
    get,
    path = "/books/by-publish-date/",
    tag = "books",
    params(PublishedDateQuery),
    responses(
        (status = 200, description = "The books with the requested publish date", body = [Book]),
        (status = 422, description = "Invalid query parameters", body = ApiErrorResponse),
    )
)]
pub async fn get_books_by_published_date(
    State(state): State<ApiState>,
    ValidatedFromRequestParts(ApiQuery(query)): ValidatedFromRequestParts<
        ApiQuery<PublishedDateQuery>,
    >,
) -> Json<Vec<Book>> {
    let books = state.book_store().find_by_published_date(query.published_date);

    Json(books)
}
