use axum::http::StatusCode;
use request_echo::prelude::*;
use request_echo::testing::TestClient;
use serde_json::json;
use std::collections::BTreeMap;

fn client() -> TestClient {
    let app = Application::builder()
        .interceptor(LoggingInterceptor)
        .controller::<GetController>()
        .build()
        .unwrap();
    TestClient::new(app.router())
}

#[tokio::test]
async fn query_params_are_echoed() {
    let response = client()
        .get("/get/query-params")
        .query("a", "1")
        .query("b", "2")
        .send()
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_json(&json!({ "a": "1", "b": "2" }));
}

#[tokio::test]
async fn raw_query_string_is_decoded() {
    let response = client()
        .get("/get/query-params?name=John+Doe&city=K%C3%B6ln")
        .send()
        .await
        .unwrap();

    response.assert_json(&json!({ "name": "John Doe", "city": "Köln" }));
}

#[tokio::test]
async fn missing_query_string_yields_empty_object() {
    let response = client().get("/get/query-params").send().await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_json(&json!({}));
}

#[tokio::test]
async fn query_params_are_idempotent() {
    let client = client();
    let first = client
        .get("/get/query-params?a=1")
        .send()
        .await
        .unwrap()
        .json::<QueryParams>()
        .unwrap();
    let second = client
        .get("/get/query-params?a=1")
        .send()
        .await
        .unwrap()
        .json::<QueryParams>()
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn headers_are_echoed() {
    let response = client()
        .get("/get/headers")
        .header("X-Test", "foo")
        .send()
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let headers: HeaderValues = response.json().unwrap();
    assert_eq!(headers["x-test"], vec!["foo"]);
}

#[tokio::test]
async fn repeated_headers_keep_their_order() {
    let response = client()
        .get("/get/headers")
        .header("Accept", "text/html")
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    let headers: BTreeMap<String, Vec<String>> = response.json().unwrap();
    assert_eq!(headers["accept"], vec!["text/html", "application/json"]);
}

#[tokio::test]
async fn scopes_are_reported_innermost_first() {
    let response = client().get("/get/scopes").send().await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_json(&json!(["http-request", "http", "root"]));
}

#[tokio::test]
async fn scopes_follow_a_custom_root_container() {
    let app = Application::builder()
        .container(Container::named("app"))
        .controller::<GetController>()
        .build()
        .unwrap();

    TestClient::new(app.router())
        .get("/get/scopes")
        .send()
        .await
        .unwrap()
        .assert_json(&json!(["http-request", "http", "app"]));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = client().get("/get/nothing").send().await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let response = client().post("/get/headers").send().await.unwrap();
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn reverse_routing_matches_served_paths() {
    let app = Application::builder()
        .controller::<GetController>()
        .build()
        .unwrap();
    let uri = app
        .uri(GetController::QUERY_PARAMS, &[("a", "1"), ("b", "2")])
        .unwrap();
    assert_eq!(uri, "/get/query-params?a=1&b=2");

    TestClient::new(app.router())
        .get(uri)
        .send()
        .await
        .unwrap()
        .assert_json(&json!({ "a": "1", "b": "2" }));
}
