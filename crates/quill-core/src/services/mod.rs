//! Application services - the operations the API surface exposes.

mod auth;
mod posts;

#[cfg(test)]
mod fakes;

pub use auth::{AdminCapability, AuthService, Identity, IssuedToken};
pub use posts::PostService;
