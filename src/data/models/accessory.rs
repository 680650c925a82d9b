use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = accessories)]
#[diesel(primary_key(accessory_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Accessory {
    pub accessory_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = accessories)]
pub struct NewAccessory<'a> {
    pub name: &'a str,
    pub price: BigDecimal,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = accessories)]
pub struct UpdateAccessory<'a> {
    pub name: Option<&'a str>,
    pub price: Option<BigDecimal>,
    pub image: Option<&'a str>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}
