//! Byte serving for `/assets/*`.

use axum::body::Body;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::path::{Component, Path, PathBuf};
use tokio_util::io::ReaderStream;
use tracing::debug;

/// Join a request path onto `base`, segment by segment.
///
/// Returns `None` for anything that is not a plain name (`..`, a drive
/// prefix, an embedded separator), so the result always lies under `base`
/// lexically.
pub fn resolve_request_path(base: &Path, requested: &str) -> Option<PathBuf> {
    let mut resolved = base.to_path_buf();
    let mut pushed = false;

    for segment in requested.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == segment => resolved.push(name),
            _ => return None,
        }
        pushed = true;
    }

    pushed.then_some(resolved)
}

/// Stream the file at `requested` (relative to `base`) or answer `404`.
///
/// `base` must be canonical: the target is canonicalized too, and anything
/// that resolves outside `base` through a symlink is refused.
pub async fn serve_file(base: &Path, requested: &str) -> Response {
    let Some(candidate) = resolve_request_path(base, requested) else {
        debug!("Rejected asset request {:?}", requested);
        return not_found();
    };

    let Ok(canonical) = tokio::fs::canonicalize(&candidate).await else {
        return not_found();
    };
    if !canonical.starts_with(base) {
        debug!("Asset request {:?} escapes {:?}", requested, base);
        return not_found();
    }

    let Ok(file) = tokio::fs::File::open(&canonical).await else {
        return not_found();
    };
    let Ok(metadata) = file.metadata().await else {
        return not_found();
    };
    if !metadata.is_file() {
        return not_found();
    }

    debug!("Serving asset {:?} ({} bytes)", canonical, metadata.len());

    let mime = mime_guess::from_path(&canonical).first_or_octet_stream();
    let mut response = Body::from_stream(ReaderStream::new(file)).into_response();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(metadata.len()));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
