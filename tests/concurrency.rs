//! Concurrent extraction across independent requests.

use std::time::{Duration, Instant};

use site_audit::config::ServiceConfig;

mod common;

use common::{start_programmable_backend, MockResponse, TestService};

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    // Each page has a different number of H1s so cross-talk would show.
    let site = start_programmable_backend(|target| async move {
        let n: usize = target.trim_start_matches('/').parse().unwrap_or(0);
        MockResponse::ok("<h1>x</h1>".repeat(n) + "<h2>tail</h2>")
    })
    .await;

    let mut config = ServiceConfig::default();
    config.extractor.collect_contents = false;
    let service = TestService::start(config).await;

    let concurrency = 20;
    let start = Instant::now();

    let mut tasks = Vec::new();
    for n in 1..=concurrency {
        let client = service.client.clone();
        let url = service.url("/heading-tag-checker");
        let page = format!("http://{site}/{n}");
        tasks.push(tokio::spawn(async move {
            let res = client
                .get(&url)
                .query(&[("websiteUrl", &page)])
                .send()
                .await
                .unwrap();
            assert!(res.status().is_success());
            let body: serde_json::Value = res.json().await.unwrap();
            (n, body)
        }));
    }

    for task in tasks {
        let (n, body) = task.await.unwrap();
        assert_eq!(
            body,
            serde_json::json!([
                { "tagName": "H1", "count": n },
                { "tagName": "H2", "count": 1 },
            ])
        );
    }

    assert!(start.elapsed() < Duration::from_secs(30));
}

#[tokio::test]
async fn test_repeated_extraction_is_stable() {
    let site = start_programmable_backend(|_| async move {
        MockResponse::ok("<h3>a</h3><h1>b</h1><h3>c</h3>")
    })
    .await;
    let service = TestService::start(ServiceConfig::default()).await;
    let page = format!("http://{site}/");

    let (_, first) = service
        .get("/heading-tag-checker", &[("websiteUrl", &page)])
        .await;
    for _ in 0..5 {
        let (_, again) = service
            .get("/heading-tag-checker", &[("websiteUrl", &page)])
            .await;
        assert_eq!(first, again);
    }
}
