pub mod auth;
pub mod cache;
pub mod db;
pub mod handlers;
pub mod models;
pub mod slug;
pub mod storage;
pub mod tracking;

pub use db::create_pool;
