use crate::api::request::{CreateOrderRequest, OrderItemRequest};
use crate::api::response::{OrderResponse, Paginated};
use crate::data::models::order::{NewOrder, UpdateOrder};
use crate::data::models::order_item::{NewOrderItem, NewOrderItemAccessory, OrderItemSnapshot};
use crate::data::models::product::ProductDetails;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::OrderServiceError;
use crate::utils::mappers::{decimal_from_f64, parse_id};
use crate::utils::order_number::generate_order_number;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Order statuses for workflow management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(OrderServiceError::InvalidStatus(s.to_string())),
        }
    }
}

/// Copies the chosen configuration of `product` into an order line.
///
/// Color image, size dimensions and accessory images are looked up by exact
/// name; a name the product does not know leaves the snapshot field empty.
pub fn snapshot_item(
    line: &OrderItemRequest,
    product: &ProductDetails,
) -> Result<OrderItemSnapshot, OrderServiceError> {
    let color_image = line.color_name.as_deref().and_then(|name| {
        product
            .colors
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| c.image.clone())
    });

    let size_dimensions = line.size_name.as_deref().and_then(|name| {
        product
            .sizes
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.dimensions.clone())
    });

    let accessories = line
        .accessories
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|acc| {
            Ok(NewOrderItemAccessory {
                order_item_id: 0,
                name: acc.name.clone(),
                price: decimal_from_f64(acc.price)?,
                image: product
                    .accessories
                    .iter()
                    .find(|a| a.name == acc.name)
                    .and_then(|a| a.image.clone()),
            })
        })
        .collect::<Result<Vec<_>, OrderServiceError>>()?;

    Ok(OrderItemSnapshot {
        item: NewOrderItem {
            order_id: 0,
            product_id: Some(product.product.product_id),
            product_name: product.product.name.clone(),
            quantity: line.quantity,
            price: decimal_from_f64(line.price)?,
            color_name: line.color_name.clone(),
            color_image,
            size_name: line.size_name.clone(),
            size_dimensions,
        },
        accessories,
    })
}

fn validate_request(request: &CreateOrderRequest) -> Result<(), OrderServiceError> {
    if request.items.is_empty() {
        return Err(OrderServiceError::InvalidOrder(
            "an order needs at least one item".to_string(),
        ));
    }

    if let Some(line) = request.items.iter().find(|line| line.quantity <= 0) {
        return Err(OrderServiceError::InvalidOrder(format!(
            "quantity must be positive, got {} for product {}",
            line.quantity, line.product_id.as_str()
        )));
    }

    Ok(())
}

pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        OrderService
    }

    /// Places a cash-on-delivery order in `PENDING` state.
    ///
    /// Every product is looked up before anything is written, so an unknown
    /// product id fails the whole order with nothing persisted.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderResponse, OrderServiceError> {
        validate_request(request)?;

        let product_ids = request
            .items
            .iter()
            .map(|line| parse_id(&line.product_id))
            .collect::<Result<Vec<i32>, _>>()?;

        let products: HashMap<i32, ProductDetails> = ProductRepo::new()
            .get_details_by_ids(&product_ids)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load order products: {}", e);
                OrderServiceError::DatabaseError
            })?
            .into_iter()
            .map(|details| (details.product.product_id, details))
            .collect();

        let snapshots = request
            .items
            .iter()
            .zip(&product_ids)
            .map(|(line, id)| {
                let product = products
                    .get(id)
                    .ok_or(OrderServiceError::ProductNotFound(*id))?;
                snapshot_item(line, product)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order_number = generate_order_number();
        let new_order = NewOrder {
            order_number: &order_number,
            customer_name: &request.customer_name,
            customer_phone: &request.customer_phone,
            shipping_address: &request.shipping_address,
            total_amount: decimal_from_f64(request.total_amount)?,
            status: OrderStatus::Pending.as_str(),
        };

        let repo = OrderRepo::new();
        let order_id = repo
            .create_with_items(new_order, snapshots)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create order {}: {}", order_number, e);
                OrderServiceError::OrderCreationFailed
            })?;

        tracing::info!("Created order {} ({})", order_number, order_id);

        repo.get_details_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .map(OrderResponse::from)
            .ok_or(OrderServiceError::OrderNotFound(order_id))
    }

    /// Lists orders newest first, optionally narrowed by status and search term.
    pub async fn get_orders(
        &self,
        status: Option<OrderStatus>,
        query: &PageQuery,
    ) -> Result<Paginated<OrderResponse>, OrderServiceError> {
        let repo = OrderRepo::new();

        let (orders, total) = repo
            .find_page(query, status.map(|s| s.as_str()))
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        let items = repo
            .attach_items(orders)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .into_iter()
            .map(OrderResponse::from)
            .collect();

        Ok(Paginated { items, total })
    }

    pub async fn get_order_by_id(
        &self,
        order_id: i32,
    ) -> Result<Option<OrderResponse>, OrderServiceError> {
        let repo = OrderRepo::new();

        let order = repo
            .get_details_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        Ok(order.map(OrderResponse::from))
    }

    /// Any status may follow any other; the workflow is driven by the admin.
    pub async fn update_order_status(
        &self,
        order_id: i32,
        new_status: OrderStatus,
    ) -> Result<OrderResponse, OrderServiceError> {
        let repo = OrderRepo::new();

        // Verify order exists
        repo.get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound(order_id))?;

        let update = UpdateOrder {
            status: Some(new_status.as_str()),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        repo.update(order_id, update)
            .await
            .map_err(|_| OrderServiceError::OrderUpdateFailed)?;

        tracing::info!("Order {} moved to {}", order_id, new_status.as_str());

        self.get_order_by_id(order_id)
            .await?
            .ok_or(OrderServiceError::OrderNotFound(order_id))
    }

    /// Deletes an order
    pub async fn delete_order(&self, order_id: i32) -> Result<(), OrderServiceError> {
        let repo = OrderRepo::new();

        // Verify order exists
        repo.get_by_id(order_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::OrderNotFound(order_id))?;

        repo.delete(order_id)
            .await
            .map_err(|_| OrderServiceError::OrderDeletionFailed)?;

        tracing::info!("Deleted order {}", order_id);

        Ok(())
    }

    /// Returns how many orders were removed; unknown ids are ignored.
    pub async fn bulk_delete_orders(&self, order_ids: Vec<i32>) -> Result<usize, OrderServiceError> {
        if order_ids.is_empty() {
            return Ok(0);
        }

        let deleted = OrderRepo::new()
            .delete_many(order_ids)
            .await
            .map_err(|_| OrderServiceError::OrderDeletionFailed)?;

        tracing::info!("Bulk deleted {} orders", deleted);

        Ok(deleted)
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new()
    }
}
