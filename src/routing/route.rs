//! Route and canned response value types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A fixed status and single-line body returned for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    status: StatusCode,
    body: String,
}

impl CannedResponse {
    /// Build a response whose body is `text` followed by a newline.
    pub fn line(status: StatusCode, text: impl Into<String>) -> Self {
        let mut body = text.into();
        body.push('\n');
        Self { status, body }
    }

    /// Shorthand for a `200 OK` line.
    pub fn ok(text: impl Into<String>) -> Self {
        Self::line(StatusCode::OK, text)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Body bytes as written on the wire, trailing newline included.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    response: CannedResponse,
    description: String,
}

impl Route {
    /// Create a route. `description` is the text recorded each time the path is hit.
    pub fn new(
        path: impl Into<String>,
        response: CannedResponse,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            response,
            description: description.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn response(&self) -> &CannedResponse {
        &self.response
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_appends_newline() {
        let resp = CannedResponse::ok("vacuum paused");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.body(), "vacuum paused\n");
    }

    #[test]
    fn test_custom_status() {
        let resp = CannedResponse::line(StatusCode::ACCEPTED, "queued");
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(resp.body(), "queued\n");
    }

    #[tokio::test]
    async fn test_into_response_keeps_status_and_body() {
        let resp = CannedResponse::ok("OK").into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], b"OK\n");
    }
}
