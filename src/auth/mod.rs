// Authentication primitives: password hashing and bearer tokens

pub mod jwt;
pub mod password;

pub use password::{BcryptHasher, PasswordHasher};
