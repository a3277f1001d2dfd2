use std::io::Cursor;

use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers;
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn json_response(status: u16, body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

/// 400 with a `{"error": ...}` body; the client surfaces the message.
pub fn bad_request(message: &str) -> Response<Cursor<Vec<u8>>> {
    let body = serde_json::json!({ "error": message }).to_string();
    json_response(400, body)
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` so the dispatcher retains ownership
/// and can call `request.respond(response)` at the end.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url = request.url().to_owned();

    // The page has no query-string surface; strip one if present.
    let path = url.split('?').next().unwrap_or("").to_owned();

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => handlers::page::handle(),

        (Method::Post, "/api/forward") => handlers::infer::handle(&mut request, &state),
        (Method::Post, "/api/network/reinit") => handlers::reinit::handle(&state),

        _ => not_found(),
    };

    if let Err(e) = request.respond(response) {
        eprintln!("Failed to send response: {}", e);
    }
}
