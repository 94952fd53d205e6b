use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_LENGTH, Request, StatusCode},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

struct ErrorEvent {
    status: StatusCode,
    method: String,
    uri: String,
    latency_ms: u64,
}

/// Logs every 4xx/5xx response together with a preview of its body. The body
/// is buffered and handed on unchanged.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let event = ErrorEvent {
        status,
        method,
        uri,
        latency_ms: start.elapsed().as_millis() as u64,
    };
    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => {
            event.log(&body_preview(&bytes));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            event.log_unreadable(&err);
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::empty())
        }
    }
}

fn body_preview(bytes: &Bytes) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

impl ErrorEvent {
    fn log(&self, body: &str) {
        let status = self.status.as_u16();
        if self.status.is_server_error() {
            tracing::error!(
                status,
                method = %self.method,
                uri = %self.uri,
                latency_ms = self.latency_ms,
                body,
                "Request completed with error status"
            );
        } else {
            tracing::warn!(
                status,
                method = %self.method,
                uri = %self.uri,
                latency_ms = self.latency_ms,
                body,
                "Request completed with error status"
            );
        }
    }

    fn log_unreadable(&self, err: &AxumError) {
        tracing::error!(
            status = self.status.as_u16(),
            method = %self.method,
            uri = %self.uri,
            latency_ms = self.latency_ms,
            error = ?err,
            "Failed to read error response body"
        );
    }
}
