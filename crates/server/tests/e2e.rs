use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::build_router;
use service::{file::FileItemStore, ItemStore};

struct TestApp {
    base_url: String,
}

/// Spin up the real stack: file store on an isolated temp directory, router,
/// ephemeral listener.
async fn start_server() -> anyhow::Result<TestApp> {
    let items_dir = format!("target/test-data/{}/items", Uuid::new_v4());
    let store: Arc<dyn ItemStore> = FileItemStore::new(&items_dir).await?;

    let app: Router = build_router(store, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_item_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // empty list to start
    let res = c.get(format!("{}/list", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    // create
    let res = c
        .post(format!("{}/add", app.base_url))
        .json(&json!({"name": "Phone", "brand": "Apple", "price": 1000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Phone", "brand": "Apple", "price": 1000})
    );

    // read back
    let res = c.get(format!("{}/item/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, created);

    // list has the one record
    let res = c.get(format!("{}/list", app.base_url)).send().await?;
    let listed = res.json::<serde_json::Value>().await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // delete once, then it is gone
    let res = c.delete(format!("{}/delete/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"status": "deleted"})
    );

    let res = c.delete(format!("{}/delete/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "item not found"})
    );

    Ok(())
}

#[tokio::test]
async fn e2e_bad_requests() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/item/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "invalid id"})
    );

    let res = c
        .post(format!("{}/add", app.base_url))
        .json(&json!({"name": "", "brand": "Apple", "price": 1000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"error": "invalid item data"})
    );

    let res = c.get(format!("{}/add", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
