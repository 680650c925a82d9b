pub mod mappers;
pub mod order_number;
pub mod slug;
