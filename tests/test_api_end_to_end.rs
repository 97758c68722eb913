//! End-to-end API test: start the router on an ephemeral port with an in-memory store and
//! drive the section and content endpoints over HTTP.

use serde_json::{json, Value};
use std::sync::Arc;
use tls_content_validator::{transport, InMemoryContentStore, SectionRegistry};

const ADMIN: &str = "admin@tamilsociety.test";

async fn spawn_server() -> Result<String, Box<dyn std::error::Error>> {
    let app_state = transport::http::AppState {
        registry: Arc::new(SectionRegistry::builtin()?),
        store: Arc::new(InMemoryContentStore::new()),
    };
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_section_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    // --- HEALTH ---
    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["status"], "ok");

    // --- TYPE LISTING ---
    let body: Value = client
        .get(format!("{}/api/sections/types", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["data"]["count"], 10);

    let resp = client
        .get(format!("{}/api/sections/types/hero", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["maxPerPage"], 1);

    let resp = client
        .get(format!("{}/api/sections/types/carousel", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    // --- PLACEMENT: identity required ---
    let hero = json!({
        "sectionType": "hero",
        "page": "home",
        "data": { "title": "Welcome", "images": [{ "url": "x.jpg", "alt": "x" }] }
    });
    let resp = client
        .post(format!("{}/api/sections/validate", base_url))
        .json(&hero)
        .send()
        .await?;
    assert_eq!(resp.status(), 401);

    // --- PLACEMENT: allowed ---
    let resp = client
        .post(format!("{}/api/sections/validate", base_url))
        .header("x-admin-user", ADMIN)
        .json(&hero)
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    let data = &body["data"];
    assert_eq!(data["isValid"], true);
    assert_eq!(data["currentCount"], 0);
    assert_eq!(data["maxAllowed"], 1);
    assert_eq!(data["remainingSlots"], 1);
    assert_eq!(data["validatedData"]["title"], json!({ "en": "Welcome", "ta": "Welcome" }));
    assert_eq!(data["metadata"]["validatedBy"], ADMIN);

    // --- PLACEMENT: page not allowed ---
    let resp = client
        .post(format!("{}/api/sections/validate", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({ "sectionType": "hero", "page": "contact", "data": { "title": "Hi" } }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["code"], "PAGE_NOT_ALLOWED");
    let allowed: Vec<&str> = body["data"]["allowedPages"]
        .as_array()
        .expect("allowedPages is an array")
        .iter()
        .filter_map(|p| p.as_str())
        .collect();
    assert!(allowed.contains(&"home"));
    assert!(!allowed.contains(&"contact"));

    // --- MALFORMED BODY ---
    let resp = client
        .post(format!("{}/api/sections/validate", base_url))
        .header("x-admin-user", ADMIN)
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(resp.status(), 422);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_content_endpoints() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    // --- VALIDATE: single stage ---
    let resp = client
        .post(format!("{}/api/content/validate", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({
            "validationType": "schema",
            "data": { "title": { "en": "", "ta": "" } }
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["isValid"], true);
    assert_eq!(body["data"]["validationType"], "schema");
    assert_eq!(
        body["data"]["warnings"],
        json!(["title is missing content in both languages"])
    );

    // --- CREATE: first hero on home succeeds ---
    let create = json!({
        "page": "home",
        "section": "hero",
        "sectionKey": "home-hero",
        "sectionType": "hero",
        "data": { "title": "Welcome", "images": [{ "url": "x.jpg", "alt": "x" }] }
    });
    let resp = client
        .post(format!("{}/api/content", base_url))
        .header("x-admin-user", ADMIN)
        .json(&create)
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    let record = &body["data"]["record"];
    assert_eq!(record["sectionKey"], "home-hero");
    assert_eq!(record["content"]["title"]["ta"], "Welcome");
    assert_eq!(body["data"]["remainingSlots"], 0);

    // --- CREATE: the page is now full ---
    let resp = client
        .post(format!("{}/api/content", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({
            "page": "home",
            "section": "hero",
            "sectionKey": "home-hero-2",
            "sectionType": "hero",
            "data": { "title": "Another welcome" }
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["code"], "QUOTA_EXCEEDED");
    assert_eq!(body["data"]["currentCount"], 1);
    assert_eq!(body["data"]["maxAllowed"], 1);

    // --- CREATE: an inactive draft does not need a free slot ---
    let resp = client
        .post(format!("{}/api/content", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({
            "page": "home",
            "section": "hero",
            "sectionKey": "home-hero-draft",
            "sectionType": "hero",
            "isActive": false,
            "data": { "title": "Next season" }
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["record"]["isActive"], false);
    assert_eq!(body["data"]["remainingSlots"], 0);

    // --- CREATE: field errors block the save ---
    let resp = client
        .post(format!("{}/api/content", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({
            "page": "home",
            "section": "cta",
            "sectionKey": "join-us",
            "sectionType": "cta",
            "data": { "title": "Join us" }
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["data"]["errors"],
        json!(["Field 'buttonText' is required", "Field 'buttonLink' is required"])
    );

    // --- VALIDATE: the stored key now clashes ---
    let resp = client
        .post(format!("{}/api/content/validate", base_url))
        .header("x-admin-user", ADMIN)
        .json(&json!({
            "validationType": "duplicate",
            "data": { "page": "home", "sectionKey": "home-hero" }
        }))
        .send()
        .await?;
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["isValid"], false);
    assert_eq!(
        body["data"]["errors"],
        json!(["Section key 'home-hero' already exists on page 'home'"])
    );

    Ok(())
}
