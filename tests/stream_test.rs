//! Range streaming through the full router.

mod common;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use common::{patterned, TestHarness};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(app: Router, uri: &str, range: Option<&str>) -> Response<Body> {
    let mut request = Request::get(uri);
    if let Some(range) = range {
        request = request.header(header::RANGE, range);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn header_str<'a>(response: &'a Response<Body>, name: header::HeaderName) -> &'a str {
    response.headers()[name].to_str().unwrap()
}

#[tokio::test]
async fn open_range_is_clamped_by_window() {
    let h = TestHarness::new();
    let data = patterned(100);
    h.write("clip.mp4", &data);

    let response = get(h.router(), "/video/1", Some("bytes=50-")).await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(header_str(&response, header::CONTENT_RANGE), "bytes 50-59/100");
    assert_eq!(header_str(&response, header::CONTENT_LENGTH), "10");
    assert_eq!(header_str(&response, header::ACCEPT_RANGES), "bytes");
    assert_eq!(header_str(&response, header::CONTENT_TYPE), "video/mp4");
    assert_eq!(body_bytes(response).await, &data[50..60]);
}

#[tokio::test]
async fn explicit_range_is_clamped_by_file_size() {
    let h = TestHarness::new();
    let data = patterned(100);
    h.write("clip.mp4", &data);

    let response = get(h.router(), "/video/1", Some("bytes=95-200")).await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(header_str(&response, header::CONTENT_RANGE), "bytes 95-99/100");
    assert_eq!(body_bytes(response).await, &data[95..100]);
}

#[tokio::test]
async fn missing_range_serves_first_window_as_partial() {
    let h = TestHarness::new();
    let data = patterned(100);
    h.write("clip.mp4", &data);

    let response = get(h.router(), "/video/1", None).await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(header_str(&response, header::CONTENT_RANGE), "bytes 0-9/100");
    assert_eq!(body_bytes(response).await, &data[..10]);
}

#[tokio::test]
async fn wrong_unit_is_treated_like_no_range() {
    let h = TestHarness::new();
    h.write("clip.mp4", &patterned(100));

    let plain = get(h.router(), "/video/1", None).await;
    let wrong_unit = get(h.router(), "/video/1", Some("items=0-10")).await;

    assert_eq!(wrong_unit.status(), plain.status());
    assert_eq!(
        header_str(&wrong_unit, header::CONTENT_RANGE),
        header_str(&plain, header::CONTENT_RANGE)
    );
    assert_eq!(body_bytes(wrong_unit).await, body_bytes(plain).await);
}

#[tokio::test]
async fn multi_range_falls_back_to_start() {
    let h = TestHarness::new();
    h.write("clip.mp4", &patterned(100));

    let response = get(h.router(), "/video/1", Some("bytes=20-29,40-49")).await;
    assert_eq!(header_str(&response, header::CONTENT_RANGE), "bytes 0-9/100");
}

#[tokio::test]
async fn start_past_end_is_416() {
    let h = TestHarness::new();
    h.write("clip.mp4", &patterned(100));

    let response = get(h.router(), "/video/1", Some("bytes=150-")).await;
    assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
    assert_eq!(header_str(&response, header::CONTENT_RANGE), "bytes */100");

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["code"], "range_not_satisfiable");
}

#[tokio::test]
async fn unknown_or_invalid_index_is_404() {
    let h = TestHarness::new();
    h.write("clip.mp4", &patterned(10));

    for uri in [
        "/video/0",
        "/video/2",
        "/video/-1",
        "/video/abc",
        "/video/+1",
        "/video/01",
    ] {
        let response = get(h.router(), uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn vanished_file_is_reported_without_path() {
    let h = TestHarness::new();
    h.write("secret-name.mp4", &patterned(10));
    let app = h.router();
    std::fs::remove_file(h.root().join("secret-name.mp4")).unwrap();

    let response = get(app, "/video/1", None).await;
    assert_eq!(response.status(), StatusCode::GONE);

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(!body.contains("secret-name"));
    assert!(!body.contains(&h.root().display().to_string()));
}

#[tokio::test]
async fn unknown_mime_falls_back_to_octet_stream() {
    let h = TestHarness::new();
    h.write("clip.mp4", &patterned(10));
    let mut config = h.config();
    config.library.extensions = vec![".bin".into()];
    h.write("blob.bin", &patterned(10));

    let extensions = vidshelf::config::extension_set(&config).unwrap();
    let catalog = vidshelf_catalog::Catalog::build(h.root(), &extensions).unwrap();
    let app = vidshelf::server::create_router(vidshelf::server::AppContext::new(config, catalog));

    let response = get(app, "/video/1", None).await;
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        header_str(&response, header::CONTENT_TYPE),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn tiled_windows_reconstruct_file() {
    let h = TestHarness::with_window(64);
    let data = patterned(1000);
    h.write("clip.mkv", &data);
    let app = h.router();

    let mut rebuilt = Vec::new();
    while rebuilt.len() < data.len() {
        let range = format!("bytes={}-", rebuilt.len());
        let response = get(app.clone(), "/video/1", Some(&range)).await;
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        let chunk = body_bytes(response).await;
        assert!(!chunk.is_empty() && chunk.len() <= 64);
        rebuilt.extend_from_slice(&chunk);
    }
    assert_eq!(rebuilt, data);
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let h = TestHarness::with_window(100);
    let data = patterned(10_000);
    h.write("clip.mp4", &data);
    let app = h.router();

    let tasks: Vec<_> = (0..20u64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let start = i * 500;
                let range = format!("bytes={start}-{}", start + 49);
                let response = get(app, "/video/1", Some(&range)).await;
                (start as usize, body_bytes(response).await)
            })
        })
        .collect();

    for task in tasks {
        let (start, chunk) = task.await.unwrap();
        assert_eq!(chunk, &data[start..start + 50]);
    }
}
