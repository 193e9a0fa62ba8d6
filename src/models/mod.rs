pub mod berita;
pub mod pesanan;
pub mod portfolio;
pub mod services;
pub mod users;
pub mod visitor_logs;

use serde::Serialize;

/// Standard envelope for paginated admin listings.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        Self {
            data,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

pub(crate) fn page_or_default(page: Option<u64>) -> u64 {
    page.unwrap_or(1).max(1)
}

pub(crate) fn per_page_or_default(per_page: Option<u64>) -> u64 {
    per_page.unwrap_or(15).clamp(1, 100)
}
