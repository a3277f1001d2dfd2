use std::io::Cursor;

use tiny_http::Response;

use crate::render::render_index;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle() -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(render_index())
}
