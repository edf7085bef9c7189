use schemars::JsonSchema;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::store::NewBook;

pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod filter_books;
pub mod get_book;
pub mod list_books;
pub mod update_book;

/// The payload accepted by the create and update endpoints.
///
/// An `id` may be sent but is ignored: the store assigns ids on create and
/// keeps them on update.
#[derive(Debug, Deserialize, JsonSchema, Validate, ToSchema)]
pub struct BookRequest {
    pub id: Option<u64>,
    #[validate(length(min = 3, max = 50, message = "Must be between 3 and 50 characters long"))]
    #[schema(example = "A Book Title")]
    pub title: String,
    #[validate(length(min = 1, max = 50, message = "Must be between 1 and 50 characters long"))]
    #[schema(example = "Author Name")]
    pub author: String,
    #[validate(length(min = 1, max = 100, message = "Must be between 1 and 100 characters long"))]
    #[schema(example = "A Book Description")]
    pub description: String,
    #[validate(range(min = 1, max = 5, message = "Must be between 1 and 5"))]
    #[schema(example = 5)]
    pub rating: u8,
    #[validate(range(min = 2000, max = 2050, message = "Must be between 2000 and 2050"))]
    #[schema(example = 2021)]
    pub published_date: u16,
}

impl From<BookRequest> for NewBook {
    fn from(request: BookRequest) -> Self {
        NewBook {
            title: request.title,
            author: request.author,
            description: request.description,
            rating: request.rating,
            published_date: request.published_date,
        }
    }
}

/// Path parameters identifying a single book.
#[derive(Debug, Deserialize, JsonSchema, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct BookIdPath {
    #[validate(range(min = 1, message = "Must be greater than 0"))]
    pub book_id: u64,
}
