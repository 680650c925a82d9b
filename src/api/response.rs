use async_graphql::{ID, OutputType, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One page of a listing plus the number of rows matching the filters.
#[derive(Serialize, SimpleObject, Debug, Clone)]
#[graphql(concrete(name = "PaginatedProducts", params(ProductResponse)))]
#[graphql(concrete(name = "PaginatedCategories", params(CategoryResponse)))]
#[graphql(concrete(name = "PaginatedColors", params(ColorResponse)))]
#[graphql(concrete(name = "PaginatedAccessories", params(AccessoryResponse)))]
#[graphql(concrete(name = "PaginatedFaqs", params(FaqResponse)))]
#[graphql(concrete(name = "PaginatedOrders", params(OrderResponse)))]
pub struct Paginated<T: OutputType> {
    pub items: Vec<T>,
    pub total: i64,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Category")]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: ID,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Color")]
pub struct ColorResponse {
    pub id: ID,
    pub name: String,
    pub image: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Accessory")]
pub struct AccessoryResponse {
    pub id: ID,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "ProductSize")]
#[serde(rename_all = "camelCase")]
pub struct ProductSizeResponse {
    pub id: ID,
    pub name: String,
    pub dimensions: Option<String>,
    pub price: f64,
    pub product_id: ID,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Product")]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ID,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    pub stock: i32,
    pub is_active: bool,
    pub category_id: Option<ID>,
    pub category: Option<CategoryResponse>,
    pub main_image: String,
    pub gallery_images: Vec<String>,
    pub glb_file_url: Option<String>,
    pub colors: Vec<ColorResponse>,
    pub sizes: Vec<ProductSizeResponse>,
    pub accessories: Vec<AccessoryResponse>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Faq")]
#[serde(rename_all = "camelCase")]
pub struct FaqResponse {
    pub id: ID,
    pub question: String,
    pub answer: String,
    pub order: i32,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "OrderItemAccessory")]
pub struct OrderItemAccessoryResponse {
    pub id: ID,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "OrderItem")]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: ID,
    /// `None` once the product has been removed from the catalog
    pub product_id: Option<ID>,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub color_name: Option<String>,
    pub color_image: Option<String>,
    pub size_name: Option<String>,
    pub size_dimensions: Option<String>,
    pub accessories: Vec<OrderItemAccessoryResponse>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, SimpleObject, Debug, Clone, PartialEq)]
#[graphql(name = "Order")]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: ID,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: f64,
    pub status: crate::services::order_service::OrderStatus,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Image,
    Glb,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaFileResponse {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub size: u64,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaListResponse {
    pub items: Vec<MediaFileResponse>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}
