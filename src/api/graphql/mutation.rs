use crate::api::request::{
    CreateAccessoryRequest, CreateCategoryRequest, CreateColorRequest, CreateFaqRequest,
    CreateOrderRequest, CreateProductRequest, UpdateAccessoryRequest, UpdateCategoryRequest,
    UpdateColorRequest, UpdateFaqRequest, UpdateOrderStatusRequest, UpdateProductRequest,
};
use crate::api::response::{
    AccessoryResponse, CategoryResponse, ColorResponse, FaqResponse, OrderResponse,
    ProductResponse,
};
use crate::services::accessory_service::AccessoryService;
use crate::services::category_service::CategoryService;
use crate::services::color_service::ColorService;
use crate::services::faq_service::FaqService;
use crate::services::order_service::OrderService;
use crate::services::product_service::ProductService;
use crate::utils::mappers::{parse_id, parse_ids};
use async_graphql::{ID, Object, Result};

pub struct MutationRoot;

/// Deletes answer `true` once the rows are gone; `removeAccessory` and
/// `removeFaq` hand back the removed entity instead.
#[Object]
impl MutationRoot {
    async fn create_product(&self, input: CreateProductRequest) -> Result<ProductResponse> {
        Ok(ProductService::new().create_product(&input).await?)
    }

    async fn update_product(&self, id: ID, input: UpdateProductRequest) -> Result<ProductResponse> {
        Ok(ProductService::new()
            .update_product(parse_id(&id)?, &input)
            .await?)
    }

    async fn delete_product(&self, id: ID) -> Result<bool> {
        ProductService::new().delete_product(parse_id(&id)?).await?;
        Ok(true)
    }

    async fn bulk_delete_products(&self, ids: Vec<ID>) -> Result<bool> {
        ProductService::new().bulk_delete_products(parse_ids(&ids)?).await?;
        Ok(true)
    }

    async fn create_category(&self, input: CreateCategoryRequest) -> Result<CategoryResponse> {
        Ok(CategoryService::new().create_category(&input).await?)
    }

    async fn update_category(
        &self,
        id: ID,
        input: UpdateCategoryRequest,
    ) -> Result<CategoryResponse> {
        Ok(CategoryService::new()
            .update_category(parse_id(&id)?, &input)
            .await?)
    }

    async fn delete_category(&self, id: ID) -> Result<bool> {
        CategoryService::new().delete_category(parse_id(&id)?).await?;
        Ok(true)
    }

    async fn bulk_delete_categories(&self, ids: Vec<ID>) -> Result<bool> {
        CategoryService::new().bulk_delete_categories(parse_ids(&ids)?).await?;
        Ok(true)
    }

    async fn create_color(&self, input: CreateColorRequest) -> Result<ColorResponse> {
        Ok(ColorService::new().create_color(&input).await?)
    }

    async fn update_color(&self, id: ID, input: UpdateColorRequest) -> Result<ColorResponse> {
        Ok(ColorService::new().update_color(parse_id(&id)?, &input).await?)
    }

    async fn delete_color(&self, id: ID) -> Result<bool> {
        ColorService::new().delete_color(parse_id(&id)?).await?;
        Ok(true)
    }

    async fn bulk_delete_colors(&self, ids: Vec<ID>) -> Result<bool> {
        ColorService::new().bulk_delete_colors(parse_ids(&ids)?).await?;
        Ok(true)
    }

    async fn create_accessory(&self, input: CreateAccessoryRequest) -> Result<AccessoryResponse> {
        Ok(AccessoryService::new().create_accessory(&input).await?)
    }

    async fn update_accessory(
        &self,
        id: ID,
        input: UpdateAccessoryRequest,
    ) -> Result<AccessoryResponse> {
        Ok(AccessoryService::new()
            .update_accessory(parse_id(&id)?, &input)
            .await?)
    }

    async fn remove_accessory(&self, id: ID) -> Result<AccessoryResponse> {
        Ok(AccessoryService::new()
            .remove_accessory(parse_id(&id)?)
            .await?)
    }

    async fn bulk_delete_accessories(&self, ids: Vec<ID>) -> Result<bool> {
        AccessoryService::new().bulk_delete_accessories(parse_ids(&ids)?).await?;
        Ok(true)
    }

    async fn create_faq(&self, input: CreateFaqRequest) -> Result<FaqResponse> {
        Ok(FaqService::new().create_faq(&input).await?)
    }

    async fn update_faq(&self, id: ID, input: UpdateFaqRequest) -> Result<FaqResponse> {
        Ok(FaqService::new().update_faq(parse_id(&id)?, &input).await?)
    }

    async fn remove_faq(&self, id: ID) -> Result<FaqResponse> {
        Ok(FaqService::new().remove_faq(parse_id(&id)?).await?)
    }

    async fn bulk_delete_faqs(&self, ids: Vec<ID>) -> Result<bool> {
        FaqService::new().bulk_delete_faqs(parse_ids(&ids)?).await?;
        Ok(true)
    }

    /// Places a cash-on-delivery order; it starts out `PENDING`
    async fn create_order(&self, input: CreateOrderRequest) -> Result<OrderResponse> {
        Ok(OrderService::new().create_order(&input).await?)
    }

    async fn update_order_status(&self, input: UpdateOrderStatusRequest) -> Result<OrderResponse> {
        Ok(OrderService::new()
            .update_order_status(parse_id(&input.id)?, input.status)
            .await?)
    }

    async fn remove_order(&self, id: ID) -> Result<bool> {
        OrderService::new().delete_order(parse_id(&id)?).await?;
        Ok(true)
    }

    async fn bulk_delete_orders(&self, ids: Vec<ID>) -> Result<bool> {
        OrderService::new().bulk_delete_orders(parse_ids(&ids)?).await?;
        Ok(true)
    }
}
