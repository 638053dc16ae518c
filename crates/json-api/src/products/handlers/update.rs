//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Product Update Handler
///
/// Empty or zero fields in the body keep the stored value.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err(level = "debug")
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("product_id", id);

    let product = state
        .app
        .products
        .update_product(id.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(product_id = %product.id, price = product.price, "updated product");

    Ok(Json(product.into()))
}
