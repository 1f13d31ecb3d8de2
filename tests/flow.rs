//! End-to-end tests driving a real server over HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use virtual_tryon::config::Settings;
use virtual_tryon::server::{self, AppState};

const PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

const DELAY: Duration = Duration::from_millis(400);

struct Page {
    status: u16,
    cookie: Option<String>,
    location: Option<String>,
    body: String,
}

async fn spawn_server() -> SocketAddr {
    let settings = Settings {
        port: 0,
        processing_delay_ms: DELAY.as_millis() as u64,
        max_image_kb: 4,
        ..Settings::default()
    };

    let listener = server::bind(&settings).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, AppState::new(settings), std::future::pending()));
    addr
}

fn into_page(result: Result<ureq::Response, ureq::Error>) -> Page {
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(e) => panic!("request failed: {e}"),
    };

    Page {
        status: response.status(),
        cookie: response
            .header("set-cookie")
            .and_then(|c| c.split(';').next())
            .map(str::to_string),
        location: response.header("location").map(str::to_string),
        body: response.into_string().unwrap(),
    }
}

/// Runs a blocking request off the async runtime.
async fn get(addr: SocketAddr, path: &str, cookie: Option<&str>) -> Page {
    let url = format!("http://{addr}{path}");
    let cookie = cookie.map(str::to_string);
    tokio::task::spawn_blocking(move || {
        let agent = ureq::AgentBuilder::new().redirects(0).build();
        let mut request = agent.get(&url);
        if let Some(cookie) = cookie {
            request = request.set("Cookie", &cookie);
        }
        into_page(request.call())
    })
    .await
    .unwrap()
}

async fn post_json(addr: SocketAddr, body: &str) -> Page {
    let url = format!("http://{addr}/demo/process");
    let body = body.to_string();
    tokio::task::spawn_blocking(move || {
        let agent = ureq::AgentBuilder::new().redirects(0).build();
        into_page(agent.post(&url).set("Content-Type", "application/json").send_string(&body))
    })
    .await
    .unwrap()
}

async fn post_image(addr: SocketAddr, image: &str, cookie: Option<&str>) -> Page {
    let url = format!("http://{addr}/demo/process");
    let cookie = cookie.map(str::to_string);
    let image = image.to_string();
    tokio::task::spawn_blocking(move || {
        let agent = ureq::AgentBuilder::new().redirects(0).build();
        let mut request = agent.post(&url);
        if let Some(cookie) = cookie {
            request = request.set("Cookie", &cookie);
        }
        into_page(request.send_form(&[("image", image.as_str())]))
    })
    .await
    .unwrap()
}

/// Captures `image` in a fresh session and returns the session cookie.
async fn capture(addr: SocketAddr, image: &str) -> String {
    let landing = get(addr, "/demo/process", None).await;
    let cookie = landing.cookie.expect("capture page should start a session");

    let processing = post_image(addr, image, Some(&cookie)).await;
    assert_eq!(processing.status, 200);
    assert!(processing.body.contains("Processing your image..."));
    cookie
}

#[tokio::test(flavor = "multi_thread")]
async fn root_redirects_to_capture() {
    let addr = spawn_server().await;
    let page = get(addr, "/", None).await;
    assert_eq!(page.status, 303);
    assert_eq!(page.location.as_deref(), Some("/demo/process"));
}

#[tokio::test(flavor = "multi_thread")]
async fn try_on_without_image_shows_notice_only() {
    let addr = spawn_server().await;
    let page = get(addr, "/demo/try-on", None).await;

    assert_eq!(page.status, 200);
    assert!(page.body.contains("No image found"));
    assert!(page.body.contains(r#"href="/demo/process""#));
    assert!(!page.body.contains(r#"class="categories""#));
    assert!(!page.body.contains(r#"class="swatches""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn captured_image_round_trips_after_the_delay() {
    let addr = spawn_server().await;
    let cookie = capture(addr, PIXEL).await;

    let early = get(addr, "/demo/try-on", Some(&cookie)).await;
    assert!(early.body.contains("Processing your image..."));
    assert!(!early.body.contains("Transform Your Look"));

    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

    let page = get(addr, "/demo/try-on", Some(&cookie)).await;
    assert_eq!(page.status, 200);
    assert!(page.body.contains("Transform Your Look"));
    assert!(page.body.contains(&format!(r#"<img src="{PIXEL}""#)));
    assert_eq!(page.body.matches(r#"class="category selected""#).count(), 1);
    assert!(page.body.contains(r#"href="/demo/try-on?category=eyeshadow""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn selection_is_driven_by_the_query() {
    let addr = spawn_server().await;
    let cookie = capture(addr, PIXEL).await;
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

    let page = get(addr, "/demo/try-on?category=blush&color=DC143C", Some(&cookie)).await;
    assert!(page.body.contains(r#"<a class="category selected" href="/demo/try-on?category=blush&amp;color=DC143C""#));
    assert_eq!(page.body.matches(r#"aria-pressed="true""#).count(), 1);
    assert!(page.body.contains(r##"<a class="swatch selected" href="/demo/try-on?category=blush&amp;color=DC143C" style="background-color:#DC143C""##));

    // the image is untouched by selection
    assert!(page.body.contains(&format!(r#"<img src="{PIXEL}""#)));
}

#[tokio::test(flavor = "multi_thread")]
async fn sessions_do_not_share_images() {
    let addr = spawn_server().await;
    capture(addr, PIXEL).await;
    tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

    let stranger = get(addr, "/demo/try-on", None).await;
    assert!(stranger.body.contains("No image found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_payloads_are_rejected_without_storing() {
    let addr = spawn_server().await;
    let cookie = get(addr, "/demo/process", None).await.cookie.unwrap();

    let empty = post_image(addr, "", Some(&cookie)).await;
    assert_eq!(empty.status, 422);
    assert!(empty.body.contains("no image was provided"));

    let too_big = format!("data:image/png;base64,{}", "A".repeat(8 * 1024));
    let rejected = post_image(addr, &too_big, Some(&cookie)).await;
    assert_eq!(rejected.status, 422);
    assert!(rejected.body.contains("the limit is 4096 bytes"));

    let page = get(addr, "/demo/try-on", Some(&cookie)).await;
    assert!(page.body.contains("No image found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn bodies_over_the_request_limit_land_on_the_capture_screen() {
    let addr = spawn_server().await;
    let cookie = get(addr, "/demo/process", None).await.cookie.unwrap();

    let huge = format!("data:image/png;base64,{}", "A".repeat(200 * 1024));
    let page = post_image(addr, &huge, Some(&cookie)).await;
    assert_eq!(page.status, 413);
    assert!(page.body.contains(r#"id="capture-form""#));
    assert!(page.body.contains("larger than the 4096 byte image limit"));

    let try_on = get(addr, "/demo/try-on", Some(&cookie)).await;
    assert!(try_on.body.contains("No image found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_form_uploads_land_on_the_capture_screen() {
    let addr = spawn_server().await;
    let page = post_json(addr, r#"{"image":"data:image/png;base64,AAAA"}"#).await;
    assert_eq!(page.status, 415);
    assert!(page.body.contains(r#"id="capture-form""#));
    assert!(page.body.contains("the upload could not be read"));
    assert!(page.cookie.is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn catalog_api_lists_categories() {
    let addr = spawn_server().await;
    let page = get(addr, "/api/categories", None).await;
    assert_eq!(page.status, 200);

    let categories: serde_json::Value = serde_json::from_str(&page.body).unwrap();
    let ids: Vec<_> = categories
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["lipstick", "eyeshadow", "foundation", "blush", "eyeliner"]);
    assert_eq!(categories[0]["colors"][0], "#FF0000");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_paths_get_a_not_found_page() {
    let addr = spawn_server().await;
    let page = get(addr, "/demo/recommendations", None).await;
    assert_eq!(page.status, 404);
    assert!(page.body.contains("Page not found"));
}
