pub mod cooks;
pub mod favorites;

pub use cooks::{CookProfileDto, ExternalSignInDto};
pub use favorites::{FavoriteMenuDto, MenuDto};
