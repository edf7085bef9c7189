use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

pub mod json;
pub mod path;
pub mod query;
pub mod validated;

/// An extractor over the request parts that exposes its extracted data.
pub trait ExtractorFromRequestParts<S>: FromRequestParts<S, Rejection = ApiError> {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;
}

/// An extractor over the whole request that exposes its extracted data.
pub trait ExtractorFromRequest<S>: FromRequest<S, Rejection = ApiError> {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;
}
