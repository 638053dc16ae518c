//! Products service errors.

use thiserror::Error;

use crate::domain::products::{records::ProductId, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("product identifiers exhausted after {0}")]
    IdsExhausted(ProductId),
}
