//! App Router

use salvo::Router;

use crate::{fallback, goodbye, healthcheck, products};

/// Routes served by the API, without middleware or docs.
///
/// The product routes sit at the root and are pushed last so that the
/// catch-all `{id}` segment does not shadow named routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("goodbye").get(goodbye::handler))
        .push(products_router())
}

fn products_router() -> Router {
    Router::new()
        .get(products::index::handler)
        .post(products::create::handler)
        .put(fallback::missing_product_id)
        .push(
            Router::with_path("{id}")
                .put(products::update::handler)
                .goal(fallback::method_not_allowed),
        )
        .goal(fallback::method_not_allowed)
}
