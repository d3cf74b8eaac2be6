// src/domain/cook/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Cook, CookUpdate, NewCook};
pub use repository::CookRepository;
pub use value_objects::{Avatar, CookId, CookName, Email, ExternalSubject, SecretHash};
