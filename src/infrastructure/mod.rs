// Infrastructure layer module
// Storage entities, mappers and repository adapters
// Follows Hexagonal Architecture

pub mod entities;
pub mod mappers;
pub mod repositories;
