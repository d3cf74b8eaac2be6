pub mod cook;
pub mod errors;
pub mod favorite;
pub mod menu;
pub mod storage;
