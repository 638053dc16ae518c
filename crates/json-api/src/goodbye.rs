//! Goodbye Handler

use salvo::prelude::*;
use tracing::info;

/// Says goodbye from whichever path it was mounted on.
#[handler]
pub(crate) async fn handler(req: &mut Request) -> String {
    info!("goodbye");

    format!("GoodBye from {}\n", req.uri().path())
}
