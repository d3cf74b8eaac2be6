// src/infrastructure/repositories/postgres/mod.rs
//! Relational storage: `cooks` rows, a `favorite_links` join table and the
//! read-only `menus` catalog table.
mod cooks;
mod favorites;
mod menus;

use crate::domain::storage::CookStorage;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresCookStore {
    pool: PgPool,
}

impl PostgresCookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CookStorage for PostgresCookStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
