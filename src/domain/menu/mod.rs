pub mod entity;
pub mod repository;

pub use entity::{Menu, MenuId};
pub use repository::MenuCatalog;
