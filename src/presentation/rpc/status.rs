// src/presentation/rpc/status.rs
use crate::application::{ErrorKind, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Canonical RPC status codes used by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcCode {
    InvalidArgument,
    AlreadyExists,
    NotFound,
    Unauthenticated,
    Internal,
    Unimplemented,
}

impl RpcCode {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl From<ErrorKind> for RpcCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => Self::InvalidArgument,
            ErrorKind::Conflict => Self::AlreadyExists,
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::Unauthorized => Self::Unauthenticated,
            ErrorKind::Internal => Self::Internal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: RpcCode,
    pub message: String,
}

impl RpcStatus {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ApplicationError> for RpcStatus {
    fn from(err: ApplicationError) -> Self {
        let code = RpcCode::from(err.kind());
        if code == RpcCode::Internal {
            tracing::error!(error = %err, "rpc call failed");
        }
        Self::new(code, err.message())
    }
}

impl IntoResponse for RpcStatus {
    fn into_response(self) -> Response {
        (self.code.http_status(), Json(self)).into_response()
    }
}
