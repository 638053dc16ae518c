//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product in insertion order.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "All products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await;

    info!(count = products.len(), "listed products");

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
