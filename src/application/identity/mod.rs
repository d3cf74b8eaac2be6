//! Profile registration, federated sign-in and self-service profile edits.
mod external;
mod profile;
mod register;
mod service;
mod update;

pub use external::ExternalSignInCommand;
pub use register::RegisterCookCommand;
pub use service::IdentityResolver;
pub use update::UpdateProfileCommand;
