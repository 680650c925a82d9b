use crate::data::models::order_item::{OrderItem, OrderItemAccessory};
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub order_id: i32,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder<'a> {
    pub order_number: &'a str,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub shipping_address: &'a str,
    pub total_amount: BigDecimal,
    pub status: &'a str,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct UpdateOrder<'a> {
    pub status: Option<&'a str>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

/// An order with its line items, each carrying its accessory snapshots.
#[derive(PartialEq, Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<(OrderItem, Vec<OrderItemAccessory>)>,
}
