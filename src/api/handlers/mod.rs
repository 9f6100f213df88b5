// HTTP handlers, one module per resource

pub mod auth;
pub mod blogs;
pub mod projects;
pub mod services;
pub mod users;

use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// `?page=&size=` query; zero-based page
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
