//! Request-level logging and request IDs.

use std::time::Instant;

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

use super::settings;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_ID_DEPOT_KEY: &str = "request_id";

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let remote_addr = req.remote_addr().to_string();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let _enter = span.enter();

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = started.elapsed().as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    info!(status = status.as_u16(), duration_ms, "request.completed");

    if status.is_server_error() {
        error!(
            status = status.as_u16(),
            method = %method,
            path = %path,
            request_id = %request_id,
            "server error response"
        );
    } else if status.is_client_error() {
        warn!(
            status = status.as_u16(),
            method = %method,
            path = %path,
            request_id = %request_id,
            "client error response"
        );
    }

    if duration_ms > threshold_ms {
        warn!(
            method = %method,
            path = %path,
            request_id = %request_id,
            duration_ms,
            threshold_ms,
            "slow request detected"
        );
    }
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(generate_request_id)
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    let header_value = match HeaderValue::from_str(request_id) {
        Ok(value) => value,
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );

            return;
        }
    };

    res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
}

fn generate_request_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("ping").get(ok)),
        )
    }

    #[test]
    fn test_resolve_request_id_keeps_supplied_value() {
        assert_eq!(resolve_request_id(Some("abc-123".to_owned())), "abc-123");
    }

    #[test]
    fn test_resolve_request_id_generates_when_blank() {
        let generated = resolve_request_id(Some("   ".to_owned()));

        assert!(
            Uuid::parse_str(&generated).is_ok(),
            "expected a generated uuid, got {generated}"
        );
    }

    #[tokio::test]
    async fn test_echoes_request_id_header() {
        let res = TestClient::get("http://example.com/ping")
            .add_header(REQUEST_ID_HEADER, "req-42", true)
            .send(&make_service())
            .await;

        let request_id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok());

        assert_eq!(request_id, Some("req-42"));
    }

    #[tokio::test]
    async fn test_generates_request_id_header() {
        let res = TestClient::get("http://example.com/ping")
            .send(&make_service())
            .await;

        let request_id = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(Uuid::parse_str);

        assert!(
            matches!(request_id, Some(Ok(_))),
            "expected a uuid request id, got {request_id:?}"
        );
    }
}
