// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres;
mod redis_store;

pub use error::map_sqlx;
pub use memory::InMemoryCookStore;
pub use postgres::PostgresCookStore;
pub use redis_store::RedisCookStore;
