//! Favorite-menu bookkeeping for an already resolved cook.
mod add;
mod list;
mod remove;
mod service;

pub use service::FavoritesLedger;
