// Service offering domain module

#![allow(clippy::module_inception)]

pub mod service;

pub use service::{Service, DEFAULT_CTA_LINK, DEFAULT_CTA_TEXT, DEFAULT_DETAILS_LINK};
