// User domain module
// Contains the user model and its value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::User;
pub use value_objects::Role;
