// Static asset serving from the dist directory.
// Falls back to index.html for page routes so client-side routing works.

use std::path::{Component, Path, PathBuf};

use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

const INDEX_DOCUMENT: &str = "index.html";

/// Content types by lowercase file extension.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("js", "text/javascript"),
    ("css", "text/css"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
];

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Content type for a request path, by extension.
pub fn content_type(path: &str) -> &'static str {
    let Some(extension) = Path::new(path).extension().and_then(|e| e.to_str()) else {
        return DEFAULT_MIME_TYPE;
    };
    let extension = extension.to_ascii_lowercase();

    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Join a decoded request path onto `root`, refusing anything that could
/// leave it (`..`, absolute or prefixed components).
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Whether a missing path should get the root document instead of a 404.
fn wants_index(request_path: &str) -> bool {
    let path = Path::new(request_path);
    path.extension().is_none() || request_path.ends_with(".html")
}

async fn read_file(path: &Path) -> Option<Vec<u8>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return None,
    }

    match tokio::fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read asset");
            None
        }
    }
}

fn file_response(content_type: &'static str, bytes: Vec<u8>) -> Response {
    ([(CONTENT_TYPE, content_type)], Body::from(bytes)).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Serve `request_path` (already percent-decoded) from `root`.
pub async fn serve(root: &Path, request_path: &str) -> Response {
    let request_path = match request_path.trim_start_matches('/') {
        "" => INDEX_DOCUMENT,
        path => path,
    };

    let Some(file) = resolve(root, request_path) else {
        debug!(request_path, "rejected path outside dist directory");
        return not_found();
    };

    if let Some(bytes) = read_file(&file).await {
        return file_response(content_type(request_path), bytes);
    }

    if wants_index(request_path) {
        if let Some(bytes) = read_file(&root.join(INDEX_DOCUMENT)).await {
            debug!(request_path, "serving index for page route");
            return file_response("text/html", bytes);
        }
    }

    not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn header(response: &Response) -> &str {
        response.headers()[CONTENT_TYPE].to_str().unwrap()
    }

    fn dist() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("index.html"), "<html>home</html>").unwrap();
        fs::create_dir_all(temp_dir.path().join("assets")).unwrap();
        fs::write(temp_dir.path().join("assets/app.JS"), "console.log(1)").unwrap();
        fs::write(temp_dir.path().join("data.bin"), [0u8, 1, 2]).unwrap();
        temp_dir
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type("index.html"), "text/html");
        assert_eq!(content_type("a/b/style.CSS"), "text/css");
        assert_eq!(content_type("logo.svg"), "image/svg+xml");
        assert_eq!(content_type("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type("archive.tar.gz"), DEFAULT_MIME_TYPE);
        assert_eq!(content_type("README"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_resolve_rejects_escape() {
        let root = Path::new("/srv/dist");
        assert_eq!(
            resolve(root, "/assets/./app.js"),
            Some(PathBuf::from("/srv/dist/assets/app.js"))
        );
        assert_eq!(resolve(root, "../secret"), None);
        assert_eq!(resolve(root, "assets/../../secret"), None);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dist = dist();
        let response = serve(dist.path(), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header(&response), "text/html");
        assert_eq!(body_text(response).await, "<html>home</html>");
    }

    #[tokio::test]
    async fn test_existing_file_uses_extension_type() {
        let dist = dist();

        let response = serve(dist.path(), "/assets/app.JS").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header(&response), "text/javascript");

        let response = serve(dist.path(), "/data.bin").await;
        assert_eq!(header(&response), DEFAULT_MIME_TYPE);
    }

    #[tokio::test]
    async fn test_page_routes_fall_back_to_index() {
        let dist = dist();

        for path in ["/projects", "/about/me", "/missing.html"] {
            let response = serve(dist.path(), path).await;
            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(header(&response), "text/html");
            assert_eq!(body_text(response).await, "<html>home</html>");
        }
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let dist = dist();

        let response = serve(dist.path(), "/assets/missing.css").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not Found");
    }

    #[tokio::test]
    async fn test_directory_is_not_served() {
        let dist = dist();

        // A directory has no extension, so it gets the index document
        let response = serve(dist.path(), "/assets").await;
        assert_eq!(body_text(response).await, "<html>home</html>");
    }

    #[tokio::test]
    async fn test_no_index_means_not_found() {
        let empty = TempDir::new().unwrap();

        let response = serve(empty.path(), "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
