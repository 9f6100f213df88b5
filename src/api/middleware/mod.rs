pub mod auth;

pub use auth::{AdminAuth, EditorAuth, JwtAuth};
