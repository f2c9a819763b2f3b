//! JSONPlaceholder Example
//!
//! Builds a small typed client for https://jsonplaceholder.typicode.com and
//! walks through the common outcomes: a validated success, a 404 and a
//! query-filtered listing.
//!
//! Run with: RUST_LOG=exter=debug cargo run --example jsonplaceholder
//! Set EXTER_BASE_URL to point at a different server.

use exter::schema::{JsonSchema, Typed};
use exter::{result, ClientBuilder, QueryParams, RequestOptions, Route};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    user_id: u64,
    id: u64,
    title: String,
    body: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url = std::env::var("EXTER_BASE_URL")
        .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());

    let client = ClientBuilder::new()
        .base_url(base_url)
        .route(Route::new(
            "/posts",
            result(
                JsonSchema::compile(json!({"type": ["array", "object"]}))?,
                None,
            )?,
        )?)
        .route(Route::new(
            "/posts/:id",
            result(Typed::<Post>::new(), Some(json!({}).into()))?,
        )?)
        .build()?;

    // 1. Success
    let outcome = client.route("/posts/:id", None)?.get([("id", "1")], None).await?;
    match outcome.data_as::<Post>() {
        Some(Ok(post)) => println!(
            "post #{} by user {}: {} ({} chars)",
            post.id,
            post.user_id,
            post.title,
            post.body.len()
        ),
        _ => println!("unexpected: {:?}", outcome.code()),
    }

    // 2. Not found
    let outcome = client.route("/posts/:id", None)?.get([("id", "0")], None).await?;
    if let Some(detail) = outcome.detail() {
        println!("{} ({})", detail, detail.code());
    }

    // 3. Query-filtered listing
    let outcome = client
        .route("/posts", QueryParams::map([("userId", Some(1))]))?
        .get((), None)
        .await?;
    println!("listing outcome: {:?}", outcome.code().map(|c| c.to_string()));

    // 4. Create
    let outcome = client
        .route("/posts", None)?
        .post(
            (),
            RequestOptions::new().json(json!({"title": "hello", "body": "world", "userId": 1})),
        )
        .await?;
    println!("create status: {}", outcome.response().status);

    Ok(())
}
