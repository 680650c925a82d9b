//! Shopping cart rules of the storefront: one line per product configuration,
//! discount pricing, totals, and persistence between sessions.

pub mod pricing;
pub mod storage;

use crate::api::request::{CreateOrderRequest, OrderItemAccessoryRequest, OrderItemRequest};
use async_graphql::ID;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
    #[error("Quantity too large")]
    QuantityTooLarge,
    #[error("Cart line not found: {0}")]
    LineNotFound(String),
    #[error("Cart storage error: {0}")]
    Storage(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    pub main_image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartSize {
    pub id: String,
    pub name: String,
    pub dimensions: Option<String>,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartColor {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartAccessory {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

/// A product as configured by the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: CartProduct,
    pub size: Option<CartSize>,
    pub color: Option<CartColor>,
    pub accessories: Vec<CartAccessory>,
}

impl Selection {
    pub fn new(product: CartProduct) -> Self {
        Selection {
            product,
            size: None,
            color: None,
            accessories: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: CartSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: CartColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_accessory(mut self, accessory: CartAccessory) -> Self {
        self.accessories.push(accessory);
        self
    }

    /// `<productId>-<sizeId|default>-<colorId|default>-<accessory ids, sorted, comma separated>`
    pub fn line_key(&self) -> String {
        let mut accessory_ids: Vec<&str> = self.accessories.iter().map(|a| a.id.as_str()).collect();
        accessory_ids.sort_unstable();

        format!(
            "{}-{}-{}-{}",
            self.product.id,
            self.size.as_ref().map_or("default", |s| s.id.as_str()),
            self.color.as_ref().map_or("default", |c| c.id.as_str()),
            accessory_ids.join(",")
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub key: String,
    pub product: CartProduct,
    pub size: Option<CartSize>,
    pub color: Option<CartColor>,
    pub accessories: Vec<CartAccessory>,
    pub quantity: u32,
    /// Price per unit after discount, accessories included
    pub unit_price: f64,
    /// Price per unit before discount, accessories included
    pub original_price: f64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        pricing::total([(self.unit_price, self.quantity)])
    }

    pub fn is_discounted(&self) -> bool {
        self.original_price > self.unit_price
    }
}

/// Customer details entered at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Merges into the line with the same configuration, or appends a new
    /// line priced from the selection. Returns the line key.
    pub fn add(&mut self, selection: Selection, quantity: u32) -> Result<String, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let key = selection.line_key();

        if let Some(item) = self.items.iter_mut().find(|i| i.key == key) {
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityTooLarge)?;
            return Ok(key);
        }

        let accessory_prices: Vec<f64> = selection.accessories.iter().map(|a| a.price).collect();
        let price = pricing::line_price(
            selection.product.price,
            selection.product.discount_percentage,
            selection.size.as_ref().map(|s| s.price),
            &accessory_prices,
        );

        self.items.push(CartItem {
            key: key.clone(),
            product: selection.product,
            size: selection.size,
            color: selection.color,
            accessories: selection.accessories,
            quantity,
            unit_price: price.unit,
            original_price: price.original,
        });

        Ok(key)
    }

    /// Removing an unknown key is a no-op.
    pub fn remove(&mut self, key: &str) {
        self.items.retain(|i| i.key != key);
    }

    /// A quantity of zero removes the line.
    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove(key);
            return Ok(());
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.key == key)
            .ok_or_else(|| CartError::LineNotFound(key.to_string()))?;
        item.quantity = quantity;

        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        pricing::total(self.items.iter().map(|i| (i.unit_price, i.quantity)))
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `createOrder` input the checkout page submits for this cart.
    pub fn to_order_request(&self, customer: &Customer) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            shipping_address: customer.address.clone(),
            total_amount: self.total(),
            items: self
                .items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: ID::from(item.product.id.as_str()),
                    quantity: i32::try_from(item.quantity).unwrap_or(i32::MAX),
                    price: item.unit_price,
                    color_name: item.color.as_ref().map(|c| c.name.clone()),
                    size_name: item.size.as_ref().map(|s| s.name.clone()),
                    accessories: Some(
                        item.accessories
                            .iter()
                            .map(|a| OrderItemAccessoryRequest {
                                name: a.name.clone(),
                                price: a.price,
                            })
                            .collect(),
                    ),
                })
                .collect(),
        }
    }
}
