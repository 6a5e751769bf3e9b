use thiserror::Error;

pub type Result<T> = std::result::Result<T, EchoError>;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    #[error("Scope mismatch: {message}")]
    ScopeMismatch { message: String },

    #[error("Route conflict: {message}")]
    RouteConflict { message: String },

    #[error("Invalid route path '{path}': {message}")]
    InvalidRoute { path: String, message: String },

    #[error("Route not found: {name}")]
    RouteNotFound { name: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EchoError {
    pub fn scope_mismatch(message: impl Into<String>) -> Self {
        Self::ScopeMismatch {
            message: message.into(),
        }
    }

    pub fn route_conflict(message: impl Into<String>) -> Self {
        Self::RouteConflict {
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for EchoError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            EchoError::RouteNotFound { .. } => {
                (axum::http::StatusCode::NOT_FOUND, self.to_string())
            }
            EchoError::Internal(msg) => {
                (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            _ => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                self.to_string(),
            ),
        };
        tracing::error!(%status, "{}", message);
        (status, message).into_response()
    }
}
