pub mod accessory_service;
pub mod category_service;
pub mod color_service;
pub mod errors;
pub mod faq_service;
pub mod media_service;
pub mod order_service;
pub mod product_service;
