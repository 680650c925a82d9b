use crate::data::models::product::Product;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_sizes)]
#[diesel(primary_key(size_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductSize {
    pub size_id: i32,
    pub product_id: i32,
    pub name: String,
    pub dimensions: Option<String>,
    pub price: BigDecimal,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = product_sizes)]
pub struct NewProductSize<'a> {
    pub product_id: i32,
    pub name: &'a str,
    pub dimensions: Option<&'a str>,
    pub price: BigDecimal,
}

/// Size row as submitted with a product, before the product id is known.
#[derive(PartialEq, Debug, Clone)]
pub struct SizeForm<'a> {
    pub name: &'a str,
    pub dimensions: Option<&'a str>,
    pub price: BigDecimal,
}

impl<'a> SizeForm<'a> {
    pub fn for_product(&self, product_id: i32) -> NewProductSize<'a> {
        NewProductSize {
            product_id,
            name: self.name,
            dimensions: self.dimensions,
            price: self.price.clone(),
        }
    }
}
