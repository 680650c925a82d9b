pub mod api;
pub mod cart;
pub mod data;
pub mod services;
pub mod utils;
