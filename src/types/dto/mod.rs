// Request/response models exposed over HTTP
pub mod common;
pub mod items;
