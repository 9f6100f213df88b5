// Project domain module

#![allow(clippy::module_inception)]

pub mod project;

pub use project::Project;
