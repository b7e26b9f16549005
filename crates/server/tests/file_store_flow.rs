use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::CloudVendor;
use serde_json::json;
use service::vendor::FileVendorStore;
use tower::Service;
use uuid::Uuid;

use server::routes::{self, AppState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app(path: &std::path::Path) -> anyhow::Result<Router> {
    let store = FileVendorStore::new(path).await?;
    Ok(routes::build_router(AppState::new(store), cors()))
}

fn write(method: &str, body: serde_json::Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri("/cloudvendor/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?)
}

fn read(method: &str, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method(method).uri(uri).body(Body::empty())?)
}

async fn text(resp: axum::response::Response) -> anyhow::Result<String> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn crud_round_trip_over_file_store() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("cloud_vendor_flow_{}", Uuid::new_v4()));
    let path = dir.join("vendors.json");
    let app = build_app(&path).await?;

    // empty collection
    let resp = app.clone().call(read("GET", "/cloudvendor/")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let gcp = json!({"id": "2", "name": "GCP", "country": "UK", "vendorPhoneNumber": "1234567890"});
    let resp = app.clone().call(write("POST", gcp.clone())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(text(resp).await?, "Success");

    // same id again
    let resp = app.clone().call(write("POST", gcp.clone())?).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app.clone().call(read("GET", "/cloudvendor/2")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&text(resp).await?)?;
    assert_eq!(body, gcp);

    let renamed = json!({"id": "2", "name": "Google Cloud", "country": "UK", "vendorPhoneNumber": "0987654321"});
    let resp = app.clone().call(write("PUT", renamed.clone())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let unknown = json!({"id": "404", "name": "Ghost", "country": "NA", "vendorPhoneNumber": "0000000000"});
    let resp = app.clone().call(write("PUT", unknown)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // a fresh app over the same file sees the update
    let reopened = build_app(&path).await?;
    let resp = reopened.clone().call(read("GET", "/cloudvendor/")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let vendors: Vec<CloudVendor> = serde_json::from_str(&text(resp).await?)?;
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].name, "Google Cloud");

    let resp = reopened.clone().call(read("DELETE", "/cloudvendor/2")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = reopened.clone().call(read("GET", "/cloudvendor/2")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = reopened.clone().call(read("DELETE", "/cloudvendor/2")?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

#[tokio::test]
async fn concurrent_creates_keep_ids_unique() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("cloud_vendor_race_{}", Uuid::new_v4()));
    let app = build_app(&dir.join("vendors.json")).await?;

    let mut tasks = Vec::new();
    for i in 0..8 {
        let mut app = app.clone();
        let body = json!({"id": "same", "name": format!("V{i}"), "country": "UK", "vendorPhoneNumber": "1234567890"});
        tasks.push(tokio::spawn(async move {
            let resp = app.call(write("POST", body)?).await?;
            anyhow::Ok(resp.status())
        }));
    }
    let mut ok = 0;
    let mut conflicts = 0;
    for t in tasks {
        match t.await?? {
            StatusCode::OK => ok += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!((ok, conflicts), (1, 7));

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
