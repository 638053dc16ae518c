//! Fallback responders

use salvo::prelude::*;
use tracing::debug;

/// Answers 405 for any method a route does not handle.
#[handler]
pub(crate) async fn method_not_allowed(req: &mut Request, res: &mut Response) {
    debug!(method = %req.method(), path = %req.uri().path(), "method not allowed");

    res.status_code(StatusCode::METHOD_NOT_ALLOWED);
}

/// Answers 400 for `PUT` on the collection, which has no ID segment.
#[handler]
pub(crate) async fn missing_product_id(res: &mut Response) {
    debug!("product update without an id");

    res.render(StatusError::bad_request().brief("Missing product id"));
}
