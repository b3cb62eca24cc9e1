use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_healthz(ctx: &TestContext) {
    let response = ctx.client.get("/v1/healthz").await.unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("content-type", "application/json");
    assert_eq!(response.body(), &json!({ "status": "ok" }));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_always_fail_on_err_endpoint(ctx: &TestContext) {
    for _ in 0..3 {
        let response = ctx.client.get("/v1/err").await.unwrap();

        response
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
            .assert_error("Internal Server Error");
        response.assert_header("content-type", "application/json");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_database_readiness(ctx: &TestContext) {
    let response = ctx.client.get("/v1/readyz").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body(),
        &json!({ "status": "ready", "database": "connected" })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/v1/healthz").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/v1/err").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/v1/healthz").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
