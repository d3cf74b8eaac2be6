pub mod entity;
pub mod repository;

pub use entity::{FavoriteId, FavoriteLink, NewFavorite};
pub use repository::FavoriteRepository;
