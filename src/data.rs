pub mod database;

pub mod models {
    pub mod accessory;
    pub mod category;
    pub mod color;
    pub mod faq;
    pub mod order;
    pub mod order_item;
    pub mod product;
    pub mod product_size;
    pub mod schema;
}

pub mod repos {
    pub mod implementors {
        pub mod accessory_repo;
        pub mod category_repo;
        pub mod color_repo;
        pub mod faq_repo;
        pub mod order_repo;
        pub mod product_repo;
    }

    pub mod traits {
        pub mod repository;
    }
}
