//! # request-echo
//!
//! A request-echo controller for exercising an HTTP stack from tests: it
//! returns the query string, the request headers, or the names of the
//! container scopes active for the request.
//!
//! ## Features
//!
//! - **Explicit route table**: routes are `(method, path, name)` entries
//!   registered at startup, with reverse routing by name
//! - **Scoped container**: a DI container with named scopes (`root`, `http`,
//!   `http-request`); handlers receive the active scope list as an argument
//! - **Interceptors**: async middleware chain with request logging
//! - **Test client**: drive the router in-process and assert on JSON bodies
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use request_echo::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> request_echo::Result<()> {
//!     let app = Application::builder()
//!         .interceptor(LoggingInterceptor)
//!         .controller::<GetController>()
//!         .build()?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//!     axum::serve(listener, app.router())
//!         .with_graceful_shutdown(shutdown_signal())
//!         .await
//!         .unwrap();
//!     Ok(())
//! }
//! ```
//!
//! | Path                | Name              | Body                          |
//! |---------------------|-------------------|-------------------------------|
//! | `/get/query-params` | `get.queryParams` | `{"a": "1"}`                  |
//! | `/get/headers`      | `get.headers`     | `{"x-test": ["foo"]}`         |
//! | `/get/scopes`       | `get.scopes`      | `["http-request","http","root"]` |

pub mod config;
pub mod controller;
pub mod di;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod router;
pub mod scope;
pub mod testing;

// Re-export core types
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{EchoError, Result};
pub use router::{Route, RouteTable};
pub use scope::{ActiveScopes, RequestScope, ScopeName};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use request_echo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::controller::{Controller, GetController, HeaderValues, QueryParams};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{EchoError, Result};
    pub use crate::interceptor::{
        Interceptor, InterceptorLayer, InterceptorResult, LoggingInterceptor, Next, RequestId,
        RequestScopeInterceptor,
    };
    pub use crate::lifecycle::{AppState, Application, ApplicationBuilder, shutdown_signal};
    pub use crate::router::{Route, RouteTable};
    pub use crate::scope::{ActiveScopes, RequestScope, ScopeName};
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
