use async_graphql::{ID, InputObject, MaybeUndefined};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, InputObject, Clone, Debug, PartialEq)]
#[graphql(name = "CreateOrderItemAccessoryInput")]
pub struct OrderItemAccessoryRequest {
    pub name: String,
    pub price: f64,
}

#[derive(Deserialize, Serialize, InputObject, Clone, Debug, PartialEq)]
#[graphql(name = "CreateOrderItemInput")]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: ID,
    pub quantity: i32,
    /// Unit price the customer saw in the cart
    pub price: f64,
    pub color_name: Option<String>,
    pub size_name: Option<String>,
    pub accessories: Option<Vec<OrderItemAccessoryRequest>>,
}

#[derive(Deserialize, Serialize, InputObject, Clone, Debug, PartialEq)]
#[graphql(name = "CreateOrderInput")]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: f64,
    pub items: Vec<OrderItemRequest>,
}

/// Struct for updating order status
#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "UpdateOrderStatusInput")]
pub struct UpdateOrderStatusRequest {
    pub id: ID,
    pub status: crate::services::order_service::OrderStatus,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "ProductSizeInput")]
pub struct ProductSizeRequest {
    pub name: String,
    pub dimensions: Option<String>,
    pub price: f64,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "CreateProductInput")]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    /// Generated from the name when blank
    #[graphql(default)]
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    /// 0-100
    pub discount_percentage: Option<f64>,
    pub stock: i32,
    #[graphql(default = true)]
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub main_image: String,
    #[graphql(default)]
    #[serde(default)]
    pub gallery_images: Vec<String>,
    pub glb_file_url: Option<String>,
    pub category_id: Option<ID>,
    pub color_ids: Option<Vec<ID>>,
    pub sizes: Option<Vec<ProductSizeRequest>>,
    pub accessory_ids: Option<Vec<ID>>,
}

/// Every field is optional. `categoryId`, `discountPercentage`, `description`
/// and `glbFileUrl` may be sent as `null` to clear them.
#[derive(InputObject, Clone, Debug, Default)]
#[graphql(name = "UpdateProductInput")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: MaybeUndefined<String>,
    pub price: Option<f64>,
    pub discount_percentage: MaybeUndefined<f64>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub main_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
    pub glb_file_url: MaybeUndefined<String>,
    pub category_id: MaybeUndefined<ID>,
    pub color_ids: Option<Vec<ID>>,
    pub sizes: Option<Vec<ProductSizeRequest>>,
    pub accessory_ids: Option<Vec<ID>>,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "CreateCategoryInput")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[graphql(default)]
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug, Default)]
#[graphql(name = "UpdateCategoryInput")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "CreateColorInput")]
pub struct CreateColorRequest {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug, Default)]
#[graphql(name = "UpdateColorInput")]
pub struct UpdateColorRequest {
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "CreateAccessoryInput")]
pub struct CreateAccessoryRequest {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug, Default)]
#[graphql(name = "UpdateAccessoryInput")]
pub struct UpdateAccessoryRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[derive(Deserialize, InputObject, Clone, Debug)]
#[graphql(name = "CreateFaqInput")]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    #[graphql(default)]
    #[serde(default)]
    pub order: i32,
    #[graphql(default = true)]
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Deserialize, InputObject, Clone, Debug, Default)]
#[graphql(name = "UpdateFaqInput")]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Query string of `GET /media`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct MediaQueryParams {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query string of `POST /media/delete-multiple`
#[derive(Deserialize, Debug, Clone)]
pub struct DeleteMediaParams {
    pub ids: String,
}

fn default_true() -> bool {
    true
}
