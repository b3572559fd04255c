// Dashboard static files

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tower_http::services::ServeDir;

pub(super) fn serve_dir(dir: &str) -> ServeDir {
    ServeDir::new(dir)
}

/// Scripts go out as `application/javascript` regardless of the guessed MIME type.
pub(super) async fn javascript_content_type(req: Request, next: Next) -> Response {
    let is_script = req.uri().path().ends_with(".js");
    let mut res = next.run(req).await;
    if is_script && res.status().is_success() {
        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript"),
        );
    }
    res
}
