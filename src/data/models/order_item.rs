use crate::data::models::order::Order;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

/// Snapshot of a purchased product configuration. Nothing here is re-read
/// from the live catalog after the order is placed.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(primary_key(order_item_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub color_name: Option<String>,
    pub color_image: Option<String>,
    pub size_name: Option<String>,
    pub size_dimensions: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub color_name: Option<String>,
    pub color_image: Option<String>,
    pub size_name: Option<String>,
    pub size_dimensions: Option<String>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_item_accessories)]
#[diesel(primary_key(order_item_accessory_id))]
#[diesel(belongs_to(OrderItem, foreign_key = order_item_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItemAccessory {
    pub order_item_accessory_id: i32,
    pub order_item_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = order_item_accessories)]
pub struct NewOrderItemAccessory {
    pub order_item_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image: Option<String>,
}

/// A resolved line before it is attached to an order row.
#[derive(PartialEq, Debug, Clone)]
pub struct OrderItemSnapshot {
    pub item: NewOrderItem,
    pub accessories: Vec<NewOrderItemAccessory>,
}
