use crate::data::models::accessory::Accessory;
use crate::data::models::category::Category;
use crate::data::models::color::Color;
use crate::data::models::product_size::ProductSize;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub discount_percentage: Option<BigDecimal>,
    pub stock: i32,
    pub is_active: bool,
    pub category_id: Option<i32>,
    pub main_image: String,
    /// JSON array of image urls
    pub gallery_images: String,
    pub glb_file_url: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

impl Product {
    pub fn gallery(&self) -> Vec<String> {
        serde_json::from_str(&self.gallery_images).unwrap_or_default()
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub price: BigDecimal,
    pub discount_percentage: Option<BigDecimal>,
    pub stock: i32,
    pub is_active: bool,
    pub category_id: Option<i32>,
    pub main_image: &'a str,
    pub gallery_images: String,
    pub glb_file_url: Option<&'a str>,
}

/// Nested options distinguish "leave as is" (`None`) from "set to NULL" (`Some(None)`).
#[derive(AsChangeset, PartialEq, Debug, Default)]
#[diesel(table_name = products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price: Option<BigDecimal>,
    pub discount_percentage: Option<Option<BigDecimal>>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub category_id: Option<Option<i32>>,
    pub main_image: Option<&'a str>,
    pub gallery_images: Option<String>,
    pub glb_file_url: Option<Option<&'a str>>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Queryable, Selectable, Insertable, PartialEq, Debug)]
#[diesel(table_name = product_colors)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductColor {
    pub product_id: i32,
    pub color_id: i32,
}

#[derive(Queryable, Selectable, Insertable, PartialEq, Debug)]
#[diesel(table_name = product_accessories)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct ProductAccessory {
    pub product_id: i32,
    pub accessory_id: i32,
}

/// A product together with everything the storefront shows next to it.
#[derive(PartialEq, Debug, Clone)]
pub struct ProductDetails {
    pub product: Product,
    pub category: Option<Category>,
    pub colors: Vec<Color>,
    pub sizes: Vec<ProductSize>,
    pub accessories: Vec<Accessory>,
}
