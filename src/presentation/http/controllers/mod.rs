// src/presentation/http/controllers/mod.rs
pub mod cooks;
pub mod favorites;
