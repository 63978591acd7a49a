mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use site_analytics::web::chart::NO_DATA_SVG;
use std::collections::HashSet;

#[tokio::test]
async fn test_chart_content_type() {
    let (app, repository) = common::create_test_app();
    common::seed_two_sites(&repository);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/analytics/by-site/svg").await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::CONTENT_TYPE).to_str().unwrap(),
        "image/svg+xml"
    );

    let svg = response.text();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains(">a</text>"));
    assert!(svg.contains(">b</text>"));
}

#[tokio::test]
async fn test_chart_without_data_is_placeholder() {
    let (app, _repository) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/analytics/by-site/svg").await;

    response.assert_status_ok();
    assert_eq!(response.text(), NO_DATA_SVG);
    assert!(response.text().contains("No data available"));
}

#[tokio::test]
async fn test_chart_single_site_at_plot_start() {
    let (app, repository) = common::create_test_app();
    repository.insert("only.example.com", "/", "10.0.0.1");
    let server = TestServer::new(app).unwrap();

    let response = server.get("/analytics/by-site/svg").await;

    response.assert_status_ok();
    let svg = response.text();
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains(r#"<circle cx="60.00""#));
}

#[tokio::test]
async fn test_chart_escapes_site_labels() {
    let (app, repository) = common::create_test_app();
    repository.insert("<script>&", "/", "10.0.0.1");
    let server = TestServer::new(app).unwrap();

    let svg = server.get("/analytics/by-site/svg").await.text();

    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;&amp;"));
}

#[tokio::test]
async fn test_chart_failure_is_json() {
    let server = TestServer::new(common::create_failing_app()).unwrap();

    let response = server.get("/analytics/by-site/svg").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Failed to generate chart" })
    );
}

#[tokio::test]
async fn test_chart_repeated_query_key_is_json_failure() {
    let (app, repository) = common::create_test_app();
    common::seed_two_sites(&repository);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/analytics/by-site/svg?days=1&days=2").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Failed to generate chart" })
    );
}

/// Site names in the order their labels appear in the document.
fn label_order(svg: &str, sites: &[String]) -> Vec<String> {
    let mut ordered = sites.to_vec();
    ordered.sort_by_key(|site| svg.find(&format!(">{site}</text>")));
    ordered
}

#[tokio::test]
async fn test_chart_order_changes_between_requests() {
    let (app, repository) = common::create_test_app();
    let sites: Vec<String> = (0..20).map(|i| format!("site-{i:02}.test")).collect();
    for site in &sites {
        repository.insert(site, "/", "10.0.0.1");
    }
    let server = TestServer::new(app).unwrap();

    let mut orders = HashSet::new();
    for _ in 0..10 {
        let response = server.get("/analytics/by-site/svg").await;
        response.assert_status_ok();
        orders.insert(label_order(&response.text(), &sites));
    }

    assert!(orders.len() >= 2);
}
