//! Product Errors

use salvo::http::StatusError;
use tracing::{debug, error};

use roaster_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Invalid(errors) => {
            debug!("rejected product payload: {errors}");

            StatusError::unprocessable_entity()
                .brief("Invalid product payload")
                .detail(errors.to_string())
        }
        ProductsServiceError::IdsExhausted(last) => {
            error!(last_id = %last, "no product identifiers left to assign");

            StatusError::internal_server_error()
        }
    }
}
