use axum::http::StatusCode;
use request_echo::prelude::*;
use request_echo::testing::TestClient;
use std::sync::Arc;

struct Greeting(&'static str);

fn router(with_logging: bool) -> Router {
    let root = Arc::new(ContainerBuilder::new().register(Greeting("hello")).build());
    let http = Arc::new(root.open_scope(ScopeName::Http));

    let mut table: RouteTable<AppState> = RouteTable::new();
    table
        .route(Route::get(
            "/request-id",
            "request.id",
            |Inject(id): Inject<RequestId>| async move { id.to_string() },
        ))
        .unwrap()
        .route(Route::get(
            "/greeting",
            "greeting",
            |Inject(greeting): Inject<Greeting>| async move { greeting.0 },
        ))
        .unwrap()
        .route(Route::get(
            "/scopes",
            "scopes",
            |scopes: ActiveScopes| async move { Json(scopes) },
        ))
        .unwrap();

    let mut interceptors: Vec<Arc<dyn Interceptor>> = Vec::new();
    if with_logging {
        interceptors.push(Arc::new(LoggingInterceptor));
    }
    interceptors.push(Arc::new(RequestScopeInterceptor::new(Arc::clone(&http))));

    table
        .router()
        .layer(InterceptorLayer::new(interceptors))
        .with_state(AppState::new(http))
}

#[tokio::test]
async fn request_id_is_registered_on_the_request_scope() {
    let client = TestClient::new(router(true));

    let first = client.get("/request-id").send().await.unwrap();
    first.assert_status(StatusCode::OK);
    let second = client.get("/request-id").send().await.unwrap();

    assert!(uuid::Uuid::parse_str(&first.text()).is_ok());
    assert_ne!(first.text(), second.text());
}

#[tokio::test]
async fn request_id_is_missing_without_logging() {
    let response = TestClient::new(router(false))
        .get("/request-id")
        .send()
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Dependency injection failed"));
}

#[tokio::test]
async fn request_scope_resolves_through_parents() {
    let response = TestClient::new(router(false))
        .get("/greeting")
        .send()
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "hello");
}

#[tokio::test]
async fn each_request_gets_its_own_scope() {
    let client = TestClient::new(router(true));
    for _ in 0..3 {
        client
            .get("/scopes")
            .send()
            .await
            .unwrap()
            .assert_json(&["http-request", "http", "root"]);
    }
}

#[tokio::test]
async fn scopes_without_request_scope_fail() {
    let router: Router = Router::new().route(
        "/scopes",
        axum::routing::get(|scopes: ActiveScopes| async move { Json(scopes) }),
    );

    let response = TestClient::new(router).get("/scopes").send().await.unwrap();
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Scope mismatch"));
}
