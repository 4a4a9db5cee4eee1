use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into an HTML error page.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    build(
        status,
        mime::TEXT_HTML_UTF_8.as_ref(),
        error_page(status, &message).into_string(),
    )
}

/// Convert a ServerError into `{"error": "..."}` for the board API.
pub fn json_error_response(err: ServerError) -> Response {
    let body = json!({ "error": err.to_string() }).to_string();
    build(err.status(), mime::APPLICATION_JSON.as_ref(), body)
}

fn build(status: u16, content_type: &str, body: String) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type)
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
