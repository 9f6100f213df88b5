//! Portfolio API Library
//!
//! Domain models, persistence adapters, services and the HTTP surface
//! behind a personal portfolio site: projects, service offerings, blog
//! posts and the user accounts that manage them.

pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod dto;
pub mod infrastructure;
pub mod logging;
pub mod services;
