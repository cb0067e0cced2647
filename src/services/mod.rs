// Services layer - Use-case entry points
pub mod item_service;

pub use item_service::ItemService;

#[cfg(test)]
mod item_service_tests;
