use crate::api::response::{
    AccessoryResponse, CategoryResponse, ColorResponse, FaqResponse, OrderItemAccessoryResponse,
    OrderItemResponse, OrderResponse, ProductResponse, ProductSizeResponse,
};
use crate::cart::{CartAccessory, CartColor, CartProduct, CartSize};
use crate::data::models::accessory::Accessory;
use crate::data::models::category::Category;
use crate::data::models::color::Color;
use crate::data::models::faq::Faq;
use crate::data::models::order::OrderDetails;
use crate::data::models::order_item::{OrderItem, OrderItemAccessory};
use crate::data::models::product::ProductDetails;
use crate::data::models::product_size::ProductSize;
use crate::services::order_service::OrderStatus;
use async_graphql::ID;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MappingError {
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
}

pub fn parse_id(id: &ID) -> Result<i32, MappingError> {
    id.as_str()
        .trim()
        .parse::<i32>()
        .map_err(|_| MappingError::InvalidId(id.to_string()))
}

pub fn parse_ids(ids: &[ID]) -> Result<Vec<i32>, MappingError> {
    ids.iter().map(parse_id).collect()
}

pub fn to_id(id: i32) -> ID {
    ID::from(id.to_string())
}

/// Money goes through its shortest decimal text form so `0.1` stays `0.10`
/// instead of the nearest binary fraction.
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal, MappingError> {
    if !value.is_finite() {
        return Err(MappingError::InvalidAmount(value));
    }

    BigDecimal::from_str(&value.to_string())
        .map(|d| d.with_scale_round(2, RoundingMode::HalfUp))
        .map_err(|_| MappingError::InvalidAmount(value))
}

pub fn decimal_to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: to_id(category.category_id),
            name: category.name,
            slug: category.slug,
            description: category.description,
            image: category.image,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<Color> for ColorResponse {
    fn from(color: Color) -> Self {
        ColorResponse {
            id: to_id(color.color_id),
            name: color.name,
            image: color.image,
        }
    }
}

impl From<Accessory> for AccessoryResponse {
    fn from(accessory: Accessory) -> Self {
        AccessoryResponse {
            id: to_id(accessory.accessory_id),
            name: accessory.name,
            price: decimal_to_f64(&accessory.price),
            image: accessory.image,
        }
    }
}

impl From<ProductSize> for ProductSizeResponse {
    fn from(size: ProductSize) -> Self {
        ProductSizeResponse {
            id: to_id(size.size_id),
            name: size.name,
            dimensions: size.dimensions,
            price: decimal_to_f64(&size.price),
            product_id: to_id(size.product_id),
        }
    }
}

impl From<ProductDetails> for ProductResponse {
    fn from(details: ProductDetails) -> Self {
        let gallery_images = details.product.gallery();
        let product = details.product;

        ProductResponse {
            id: to_id(product.product_id),
            slug: product.slug,
            name: product.name,
            description: product.description,
            price: decimal_to_f64(&product.price),
            discount_percentage: product.discount_percentage.as_ref().map(decimal_to_f64),
            stock: product.stock,
            is_active: product.is_active,
            category_id: product.category_id.map(to_id),
            category: details.category.map(CategoryResponse::from),
            main_image: product.main_image,
            gallery_images,
            glb_file_url: product.glb_file_url,
            colors: details.colors.into_iter().map(ColorResponse::from).collect(),
            sizes: details.sizes.into_iter().map(ProductSizeResponse::from).collect(),
            accessories: details
                .accessories
                .into_iter()
                .map(AccessoryResponse::from)
                .collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        FaqResponse {
            id: to_id(faq.faq_id),
            question: faq.question,
            answer: faq.answer,
            order: faq.sort_order,
            is_active: faq.is_active,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}

impl From<OrderItemAccessory> for OrderItemAccessoryResponse {
    fn from(accessory: OrderItemAccessory) -> Self {
        OrderItemAccessoryResponse {
            id: to_id(accessory.order_item_accessory_id),
            name: accessory.name,
            price: decimal_to_f64(&accessory.price),
            image: accessory.image,
        }
    }
}

impl From<(OrderItem, Vec<OrderItemAccessory>)> for OrderItemResponse {
    fn from((item, accessories): (OrderItem, Vec<OrderItemAccessory>)) -> Self {
        OrderItemResponse {
            id: to_id(item.order_item_id),
            product_id: item.product_id.map(to_id),
            product_name: item.product_name,
            quantity: item.quantity,
            price: decimal_to_f64(&item.price),
            color_name: item.color_name,
            color_image: item.color_image,
            size_name: item.size_name,
            size_dimensions: item.size_dimensions,
            accessories: accessories
                .into_iter()
                .map(OrderItemAccessoryResponse::from)
                .collect(),
        }
    }
}

impl From<OrderDetails> for OrderResponse {
    fn from(details: OrderDetails) -> Self {
        let order = details.order;
        let status = OrderStatus::from_str(&order.status).unwrap_or_else(|_| {
            tracing::warn!(
                "Order {} has unknown status {:?}, reporting PENDING",
                order.order_id,
                order.status
            );
            OrderStatus::Pending
        });

        OrderResponse {
            id: to_id(order.order_id),
            order_number: order.order_number,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            shipping_address: order.shipping_address,
            total_amount: decimal_to_f64(&order.total_amount),
            status,
            items: details.items.into_iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<&ProductResponse> for CartProduct {
    fn from(product: &ProductResponse) -> Self {
        CartProduct {
            id: product.id.to_string(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price,
            discount_percentage: product.discount_percentage,
            main_image: product.main_image.clone(),
        }
    }
}

impl From<&ProductSizeResponse> for CartSize {
    fn from(size: &ProductSizeResponse) -> Self {
        CartSize {
            id: size.id.to_string(),
            name: size.name.clone(),
            dimensions: size.dimensions.clone(),
            price: size.price,
        }
    }
}

impl From<&ColorResponse> for CartColor {
    fn from(color: &ColorResponse) -> Self {
        CartColor {
            id: color.id.to_string(),
            name: color.name.clone(),
            image: color.image.clone(),
        }
    }
}

impl From<&AccessoryResponse> for CartAccessory {
    fn from(accessory: &AccessoryResponse) -> Self {
        CartAccessory {
            id: accessory.id.to_string(),
            name: accessory.name.clone(),
            price: accessory.price,
            image: accessory.image.clone(),
        }
    }
}
