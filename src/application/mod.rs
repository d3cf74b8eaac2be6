pub mod deadline;
pub mod dto;
pub mod error;
pub mod favorites;
pub mod identity;
pub mod ports;
pub mod services;

pub use error::{ApplicationResult, ErrorKind};
