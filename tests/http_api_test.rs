use axum::body::Body;
use axum::http::{Request, StatusCode};
use efficacy::http::router;
use efficacy::{Catalog, InMemoryCatalog};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let catalog: Arc<dyn Catalog> = Arc::new(InMemoryCatalog::bundled().unwrap());
    let response = router(catalog)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status() {
    let (status, body) = get("/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog"]["organizations"], 24);
}

#[tokio::test]
async fn test_explore_deep_link() {
    let (status, body) = get("/api/explore?sector=WASH").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["view"]["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["wateraid", "charity-water"]);
    assert_eq!(body["caption"], "2 organizations in WASH");
}

#[tokio::test]
async fn test_explore_encoded_sector() {
    let (_, body) = get("/api/explore?sector=Global%20Health").await;
    assert_eq!(body["view"]["selected"]["sector"], "Global Health");
    assert_eq!(body["view"]["cards"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_profile_found_and_missing() {
    let (status, body) = get("/api/organizations/givedirectly").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "found");
    assert_eq!(body["header"]["name"], "GiveDirectly");
    assert_eq!(body["sidebar"]["overflow"], 2);

    let (status, body) = get("/api/organizations/not-a-real-org").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "notFound");
    assert_eq!(body["requested"], "not-a-real-org");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_similar_views() {
    let (status, list) = get("/api/organizations/wateraid/similar?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["items"].as_array().unwrap().len(), 2);
    assert_eq!(list["items"][0]["id"], "charity-water");

    let (_, graph) = get("/api/organizations/wateraid/similar?view=network&limit=2").await;
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(graph["edges"][0]["label"], "94%");
    assert_eq!(graph["nodes"][0]["position"]["x"], 250.0);

    let (status, _) = get("/api/organizations/wateraid/similar?view=grid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get("/api/organizations/nobody/similar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nobody"));
}

#[tokio::test]
async fn test_compare() {
    let (status, body) = get("/api/compare?org=givedirectly,bogus,wateraid").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "table");
    assert_eq!(body["table"]["columns"].as_array().unwrap().len(), 2);
    assert_eq!(body["dropped"][0], "bogus");

    let (_, body) = get("/api/compare").await;
    assert_eq!(body["state"], "empty");
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_search() {
    let (_, body) = get("/api/search?q=water&limit=1").await;
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
    assert_eq!(body["suggestions"][0]["id"], "wateraid");

    let (_, body) = get("/api/search?q=zzzz").await;
    assert_eq!(body["empty"]["kind"], "noResults");
}

#[tokio::test]
async fn test_home_and_listing() {
    let (_, home) = get("/api/home").await;
    assert_eq!(home["sectors"].as_array().unwrap().len(), 8);

    let (_, orgs) = get("/api/organizations").await;
    assert_eq!(orgs.as_array().unwrap().len(), 24);
    assert_eq!(orgs[1]["sector"], "WASH");
}
