mod config;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::config::Config;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX_FILE: &str = "index.html";
const API_PREFIX: &str = "api/";

/// Resolves `path` inside `dir`. Unknown paths get `index.html` so client-side
/// routes such as `/dashboard` survive a reload; API paths never do.
fn embedded_response(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX_FILE } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    if file_path.starts_with(API_PREFIX) {
        return HttpResponse::NotFound().body("Not Found");
    }

    match dir.get_file(INDEX_FILE) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();
    let url = config.url();

    if STATIC_DIR.get_file(INDEX_FILE).is_none() {
        warn!("No frontend bundle embedded; run `trunk build` in frontend/ and rebuild");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser: {e}");
            }
        });
    }

    info!("TalentX admin running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    static FIXTURE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/fixtures/site");

    async fn body_of(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let response = embedded_response(&FIXTURE_DIR, "/");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_of(response).await.contains("<title>TalentX Admin</title>"));
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let response = embedded_response(&FIXTURE_DIR, "/app.js");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        for route in ["/login", "/dashboard", "/no/such/page"] {
            let response = embedded_response(&FIXTURE_DIR, route);
            assert_eq!(response.status(), StatusCode::OK, "{route}");
            assert!(body_of(response).await.contains("TalentX Admin"));
        }
    }

    #[actix_web::test]
    async fn api_paths_do_not_fall_back() {
        let response = embedded_response(&FIXTURE_DIR, "/api/talents/list");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
