use crate::api::response::{
    AccessoryResponse, CategoryResponse, ColorResponse, FaqResponse, OrderResponse, Paginated,
    ProductResponse,
};
use crate::data::repos::traits::repository::PageQuery;
use crate::services::accessory_service::AccessoryService;
use crate::services::category_service::CategoryService;
use crate::services::color_service::ColorService;
use crate::services::faq_service::FaqService;
use crate::services::order_service::{OrderService, OrderStatus};
use crate::services::product_service::ProductService;
use crate::utils::mappers::parse_id;
use async_graphql::{ID, Object, Result};

fn page(search: Option<String>, skip: Option<i32>, take: Option<i32>) -> PageQuery {
    PageQuery::new(search, skip.map(i64::from), take.map(i64::from))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Products newest first; `category` is a category slug
    async fn products(
        &self,
        category: Option<String>,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
    ) -> Result<Paginated<ProductResponse>> {
        Ok(ProductService::new()
            .get_products(category.as_deref(), &page(search, skip, take))
            .await?)
    }

    async fn product(&self, id: ID) -> Result<Option<ProductResponse>> {
        Ok(ProductService::new().get_product_by_id(parse_id(&id)?).await?)
    }

    async fn product_by_slug(&self, slug: String) -> Result<Option<ProductResponse>> {
        Ok(ProductService::new().get_product_by_slug(&slug).await?)
    }

    async fn categories(
        &self,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
    ) -> Result<Paginated<CategoryResponse>> {
        Ok(CategoryService::new()
            .get_categories(&page(search, skip, take))
            .await?)
    }

    async fn category(&self, id: ID) -> Result<Option<CategoryResponse>> {
        Ok(CategoryService::new()
            .get_category_by_id(parse_id(&id)?)
            .await?)
    }

    async fn category_by_slug(&self, slug: String) -> Result<Option<CategoryResponse>> {
        Ok(CategoryService::new().get_category_by_slug(&slug).await?)
    }

    async fn colors(
        &self,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
    ) -> Result<Paginated<ColorResponse>> {
        Ok(ColorService::new().get_colors(&page(search, skip, take)).await?)
    }

    async fn color(&self, id: ID) -> Result<Option<ColorResponse>> {
        Ok(ColorService::new().get_color_by_id(parse_id(&id)?).await?)
    }

    async fn accessories(
        &self,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
    ) -> Result<Paginated<AccessoryResponse>> {
        Ok(AccessoryService::new()
            .get_accessories(&page(search, skip, take))
            .await?)
    }

    async fn accessory(&self, id: ID) -> Result<Option<AccessoryResponse>> {
        Ok(AccessoryService::new()
            .get_accessory_by_id(parse_id(&id)?)
            .await?)
    }

    /// FAQs by display order; `isActive` narrows to shown or hidden entries
    async fn faqs(
        &self,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
        is_active: Option<bool>,
    ) -> Result<Paginated<FaqResponse>> {
        Ok(FaqService::new()
            .get_faqs(&page(search, skip, take), is_active)
            .await?)
    }

    async fn faq(&self, id: ID) -> Result<Option<FaqResponse>> {
        Ok(FaqService::new().get_faq_by_id(parse_id(&id)?).await?)
    }

    /// Orders newest first; `search` matches order number, customer name or phone
    async fn orders(
        &self,
        status: Option<OrderStatus>,
        search: Option<String>,
        skip: Option<i32>,
        take: Option<i32>,
    ) -> Result<Paginated<OrderResponse>> {
        Ok(OrderService::new()
            .get_orders(status, &page(search, skip, take))
            .await?)
    }

    async fn order(&self, id: ID) -> Result<Option<OrderResponse>> {
        Ok(OrderService::new().get_order_by_id(parse_id(&id)?).await?)
    }
}
