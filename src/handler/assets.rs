//! Static asset serving module
//!
//! Resolves request paths against the build directory and applies the SPA
//! fallback policy: client-side routes (extensionless paths with no file on
//! disk) and missing assets both receive the entry document, so in-browser
//! routing can take over.

use crate::config::Config;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Serve the asset addressed by `path`, falling back to the SPA entry
/// document on any missing file.
pub async fn serve(path: &str, cfg: &Config) -> Response<Full<Bytes>> {
    let mut target = resolve_target(path, cfg);

    // Client-side routes like /songs/42 have no file on disk; rewrite to the
    // entry document before attempting the read. An extensionless path that
    // does exist as a file is read directly.
    if target.extension().is_none() && !target.exists() {
        target = fallback_path(cfg);
    }

    match fs::read(&target).await {
        Ok(content) => {
            let content_type =
                mime::content_type_for(target.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => serve_fallback(cfg).await,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                target.display(),
                e
            ));
            http::build_500_response()
        }
    }
}

/// Read and serve the fallback document; 404 when the build output itself is
/// missing.
async fn serve_fallback(cfg: &Config) -> Response<Full<Bytes>> {
    let fallback = fallback_path(cfg);
    match fs::read(&fallback).await {
        Ok(content) => http::build_fallback_response(content),
        Err(e) => {
            logger::log_warning(&format!(
                "Fallback document '{}' unavailable: {}",
                fallback.display(),
                e
            ));
            http::build_404_response()
        }
    }
}

/// Resolve a request path to a file path inside the build directory.
///
/// Only normal components of the request path are appended, so `..` and
/// absolute segments cannot escape the build root.
fn resolve_target(path: &str, cfg: &Config) -> PathBuf {
    if path == "/" {
        return fallback_path(cfg);
    }

    let mut target = PathBuf::from(&cfg.build_dir);
    for component in Path::new(path.trim_start_matches('/')).components() {
        if let Component::Normal(part) = component {
            target.push(part);
        }
    }
    target
}

fn fallback_path(cfg: &Config) -> PathBuf {
    Path::new(&cfg.build_dir).join(&cfg.index_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::fs as std_fs;
    use tempfile::TempDir;

    const INDEX_HTML: &[u8] = b"<!DOCTYPE html><html><body>TrackFlow</body></html>";
    const APP_JS: &[u8] = b"console.log('trackflow');";

    /// Build directory fixture: index.html, static/app.js, an extensionless
    /// file, and a sibling file outside the build root.
    fn build_fixture() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let build = dir.path().join("build");
        std_fs::create_dir_all(build.join("static")).unwrap();
        std_fs::write(build.join("index.html"), INDEX_HTML).unwrap();
        std_fs::write(build.join("static").join("app.js"), APP_JS).unwrap();
        std_fs::write(build.join("CNAME"), b"trackflow.example.com").unwrap();
        std_fs::write(dir.path().join("secret.txt"), b"top secret").unwrap();

        let cfg = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            build_dir: build.to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
            access_log: false,
            access_log_format: "common".to_string(),
        };
        (dir, cfg)
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(&body_bytes(resp).await[..], INDEX_HTML);
    }

    #[tokio::test]
    async fn test_existing_asset_with_extension() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/static/app.js", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
        assert_eq!(&body_bytes(resp).await[..], APP_JS);
    }

    #[tokio::test]
    async fn test_client_route_gets_fallback() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/songs/42", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(&body_bytes(resp).await[..], INDEX_HTML);
    }

    #[tokio::test]
    async fn test_existing_extensionless_file_served_directly() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/CNAME", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/octet-stream");
        assert_eq!(&body_bytes(resp).await[..], b"trackflow.example.com");
    }

    #[tokio::test]
    async fn test_missing_asset_with_extension_gets_fallback() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/missing.png", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        assert_eq!(&body_bytes(resp).await[..], INDEX_HTML);
    }

    #[tokio::test]
    async fn test_missing_fallback_is_404() {
        let (_dir, mut cfg) = build_fixture();
        cfg.index_file = "nope.html".to_string();
        let resp = serve("/songs/42", &cfg).await;
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(&body_bytes(resp).await[..], b"Not found");
    }

    #[tokio::test]
    async fn test_unreadable_target_is_500() {
        let (_dir, cfg) = build_fixture();
        // A directory with an asset-like name fails the read with a
        // non-NotFound error
        std_fs::create_dir(Path::new(&cfg.build_dir).join("oops.png")).unwrap();
        let resp = serve("/oops.png", &cfg).await;
        assert_eq!(resp.status(), 500);
        assert_eq!(&body_bytes(resp).await[..], b"Server error");
    }

    #[tokio::test]
    async fn test_traversal_stays_inside_build_root() {
        let (_dir, cfg) = build_fixture();
        let resp = serve("/../secret.txt", &cfg).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
        // The sibling file is never reached; the contained-but-missing path
        // follows the normal fallback flow
        assert_eq!(&body_bytes(resp).await[..], INDEX_HTML);
    }

    #[test]
    fn test_resolve_target_drops_parent_components() {
        let (_dir, cfg) = build_fixture();
        let target = resolve_target("/a/../../b.txt", &cfg);
        assert_eq!(target, Path::new(&cfg.build_dir).join("a").join("b.txt"));
    }

    #[test]
    fn test_resolve_root_is_fallback() {
        let (_dir, cfg) = build_fixture();
        assert_eq!(resolve_target("/", &cfg), fallback_path(&cfg));
    }
}
