// Domain layer module exports
// Models, value objects and repository ports
// Domain is independent of infrastructure concerns

pub mod blog;
pub mod error;
pub mod identity;
pub mod project;
pub mod repositories;
pub mod service;
pub mod timestamps;
pub mod user;

pub use error::{DomainError, DomainResult};
