use crate::controller::Controller;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::router::{Route, RouteTable};
use crate::scope::ActiveScopes;
use axum::Json;
use axum::extract::Query;
use axum::http::HeaderMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Query parameters as parsed by axum's `Query` extractor
pub type QueryParams = BTreeMap<String, String>;

/// Header name to values, in the order the values were received
pub type HeaderValues = BTreeMap<String, Vec<String>>;

/// Echoes request data back to the caller
///
/// | Path                | Name              |
/// |---------------------|-------------------|
/// | `/get/query-params` | `get.queryParams` |
/// | `/get/headers`      | `get.headers`     |
/// | `/get/scopes`       | `get.scopes`      |
#[derive(Debug, Default)]
pub struct GetController;

impl GetController {
    pub const QUERY_PARAMS: &'static str = "get.queryParams";
    pub const HEADERS: &'static str = "get.headers";
    pub const SCOPES: &'static str = "get.scopes";

    pub fn query_params(&self, params: QueryParams) -> QueryParams {
        params
    }

    /// Header names keep the `http` crate's normalization (lowercase).
    pub fn headers(&self, headers: &HeaderMap) -> HeaderValues {
        let mut values = HeaderValues::new();
        for name in headers.keys() {
            let all = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect();
            values.insert(name.as_str().to_string(), all);
        }
        values
    }

    pub fn scopes(&self, scopes: ActiveScopes) -> Vec<String> {
        scopes.into_names()
    }
}

impl Injectable for GetController {
    fn inject(_container: &Container) -> Result<Self> {
        Ok(Self)
    }
}

impl Controller for GetController {
    fn register_routes<S>(self: Arc<Self>, table: &mut RouteTable<S>) -> Result<()>
    where
        S: Clone + Send + Sync + 'static,
    {
        table
            .route(Route::get("/get/query-params", Self::QUERY_PARAMS, {
                let controller = Arc::clone(&self);
                move |Query(params): Query<QueryParams>| {
                    let controller = Arc::clone(&controller);
                    async move { Json(controller.query_params(params)) }
                }
            }))?
            .route(Route::get("/get/headers", Self::HEADERS, {
                let controller = Arc::clone(&self);
                move |headers: HeaderMap| {
                    let controller = Arc::clone(&controller);
                    async move { Json(controller.headers(&headers)) }
                }
            }))?
            .route(Route::get("/get/scopes", Self::SCOPES, {
                let controller = Arc::clone(&self);
                move |scopes: ActiveScopes| {
                    let controller = Arc::clone(&controller);
                    async move { Json(controller.scopes(scopes)) }
                }
            }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_query_params_pass_through() {
        let params = QueryParams::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
        assert_eq!(GetController.query_params(params.clone()), params);
        assert!(GetController.query_params(QueryParams::new()).is_empty());
    }

    #[test]
    fn test_headers_keep_value_order() {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("text/html"));
        headers.append("accept", HeaderValue::from_static("application/json"));
        headers.insert("x-test", HeaderValue::from_static("foo"));

        let values = GetController.headers(&headers);
        assert_eq!(values["accept"], vec!["text/html", "application/json"]);
        assert_eq!(values["x-test"], vec!["foo"]);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_headers_idempotent() {
        let mut headers = HeaderMap::new();
        headers.insert("x-test", HeaderValue::from_static("foo"));
        let first = GetController.headers(&headers);
        let second = GetController.headers(&headers);
        assert_eq!(first, second);
    }

    #[test]
    fn test_headers_non_utf8_value() {
        let mut headers = HeaderMap::new();
        headers.insert("x-raw", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        let values = GetController.headers(&headers);
        assert_eq!(values["x-raw"], vec!["caf\u{fffd}"]);
    }

    #[test]
    fn test_scopes_reported_in_context_order() {
        let scopes = ActiveScopes::from(vec!["http".to_string(), "request".to_string()]);
        assert_eq!(GetController.scopes(scopes), vec!["http", "request"]);
    }

    #[test]
    fn test_routes_registered() {
        let mut table: RouteTable = RouteTable::new();
        Arc::new(GetController).register_routes(&mut table).unwrap();

        let routes: Vec<_> = table.routes().map(|r| (r.path(), r.name())).collect();
        assert_eq!(
            routes,
            vec![
                ("/get/query-params", "get.queryParams"),
                ("/get/headers", "get.headers"),
                ("/get/scopes", "get.scopes"),
            ]
        );
    }
}
