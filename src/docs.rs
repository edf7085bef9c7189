use utoipa::OpenApi;

use crate::{
    error::{
        ApiError, ApiErrorResponse, BodyError, BookNotFoundError, InternalServerError,
        MethodNotAllowedError, NotFoundError, PathError, QueryError, ValidationError,
    },
    route::books::BookRequest,
    store::Book,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::route::books::list_books::list_books,
        crate::route::books::filter_books::get_books_by_rating,
        crate::route::books::filter_books::get_books_by_published_date,
        crate::route::books::get_book::get_book,
        crate::route::books::create_book::create_book,
        crate::route::books::update_book::update_book,
        crate::route::books::delete_book::delete_book,
    ),
    components(schemas(
        Book,
        BookRequest,
        ApiErrorResponse,
        ApiError,
        InternalServerError,
        QueryError,
        BodyError,
        PathError,
        ValidationError,
        MethodNotAllowedError,
        NotFoundError,
        BookNotFoundError,
    )),
    tags(
        (name = "books", description = "CRUD operations over the in-memory book collection")
    )
)]
pub struct ApiDoc;
