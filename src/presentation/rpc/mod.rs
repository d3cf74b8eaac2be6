// src/presentation/rpc/mod.rs
//! RPC-style binding of the cook service: `POST /rpc/cook.CookService/{method}`
//! with JSON request records and the caller id in the `cookid` metadata header.
pub mod messages;
pub mod service;
pub mod status;

use axum::{Router, routing::post};

pub use status::{RpcCode, RpcStatus};

pub const SERVICE_PATH: &str = "/rpc/cook.CookService";
pub const CALLER_METADATA: &str = "cookid";

pub fn router() -> Router {
    Router::new().route(&format!("{SERVICE_PATH}/{{method}}"), post(service::call))
}
