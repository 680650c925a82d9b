use crate::data::database::{Database, last_insert_id};
use crate::data::models::order::{NewOrder, Order, OrderDetails, UpdateOrder};
use crate::data::models::order_item::{
    NewOrderItemAccessory, OrderItem, OrderItemAccessory, OrderItemSnapshot,
};
use crate::data::models::schema::{order_item_accessories, order_items, orders};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::pooled_connection::deadpool::Object;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct OrderRepo {}

impl OrderRepo {
    pub fn new() -> Self {
        OrderRepo {}
    }

    /// Newest orders first. The search term matches the order number,
    /// customer name or customer phone.
    pub async fn find_page(
        &self,
        query: &PageQuery,
        status_filter: Option<&str>,
    ) -> Result<(Vec<Order>, i64), result::Error> {
        use crate::data::models::schema::orders::dsl::{
            created_at, customer_name, customer_phone, order_id, order_number, orders, status,
        };

        let mut conn: Object<AsyncMysqlConnection> = Database::new().await.get_connection().await?;

        let mut items_query = orders.into_boxed();
        let mut count_query = orders.into_boxed();

        if let Some(s) = status_filter {
            items_query = items_query.filter(status.eq(s));
            count_query = count_query.filter(status.eq(s));
        }

        if let Some(p) = query.like_pattern() {
            items_query = items_query.filter(
                order_number
                    .like(p.clone())
                    .or(customer_name.like(p.clone()))
                    .or(customer_phone.like(p.clone())),
            );
            count_query = count_query.filter(
                order_number
                    .like(p.clone())
                    .or(customer_name.like(p.clone()))
                    .or(customer_phone.like(p)),
            );
        }

        let items = items_query
            .order((created_at.desc(), order_id.desc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Order>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn get_details_by_id(&self, id: i32) -> Result<Option<OrderDetails>, result::Error> {
        match self.get_by_id(id).await? {
            Some(order) => Ok(self.attach_items(vec![order]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Inserts the order, its items and their accessories atomically.
    /// Returns the new order id.
    pub async fn create_with_items<'a>(
        &self,
        new_order: NewOrder<'a>,
        items: Vec<OrderItemSnapshot>,
    ) -> Result<i32, result::Error> {
        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders::table)
                    .values(&new_order)
                    .execute(connection)
                    .await?;

                let new_id = last_insert_id(connection).await?;

                // MySQL has no RETURNING, so items go in one by one to learn their ids.
                for snapshot in items {
                    let mut item = snapshot.item;
                    item.order_id = new_id;

                    diesel::insert_into(order_items::table)
                        .values(&item)
                        .execute(connection)
                        .await?;

                    if snapshot.accessories.is_empty() {
                        continue;
                    }

                    let item_id = last_insert_id(connection).await?;
                    let accessories: Vec<NewOrderItemAccessory> = snapshot
                        .accessories
                        .into_iter()
                        .map(|mut acc| {
                            acc.order_item_id = item_id;
                            acc
                        })
                        .collect();

                    diesel::insert_into(order_item_accessories::table)
                        .values(&accessories)
                        .execute(connection)
                        .await?;
                }

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    /// Loads items and item accessories for each order, keeping input order.
    pub async fn attach_items(
        &self,
        order_list: Vec<Order>,
    ) -> Result<Vec<OrderDetails>, result::Error> {
        if order_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = Database::new().await.get_connection().await?;

        let items: Vec<OrderItem> = OrderItem::belonging_to(&order_list)
            .order(order_items::order_item_id.asc())
            .select(OrderItem::as_select())
            .load(&mut conn)
            .await?;

        let accessories: Vec<OrderItemAccessory> = OrderItemAccessory::belonging_to(&items)
            .order(order_item_accessories::order_item_accessory_id.asc())
            .select(OrderItemAccessory::as_select())
            .load(&mut conn)
            .await?;

        let grouped_accessories = accessories.grouped_by(&items);

        let mut map: HashMap<i32, Vec<(OrderItem, Vec<OrderItemAccessory>)>> = HashMap::new();
        for (item, item_accessories) in items.into_iter().zip(grouped_accessories) {
            map.entry(item.order_id).or_default().push((item, item_accessories));
        }

        Ok(order_list
            .into_iter()
            .map(|order| {
                let items = map.remove(&order.order_id).unwrap_or_default();
                OrderDetails { order, items }
            })
            .collect())
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem<'a> = NewOrder<'a>;
    type UpdateForm<'a> = UpdateOrder<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = Database::new().await.get_connection().await?;

        match orders
            .filter(order_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        self.create_with_items(item, Vec::new()).await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::update(orders.filter(order_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        self.delete_many(vec![id]).await
    }

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let item_ids: Vec<i32> = order_items::table
                    .filter(order_items::order_id.eq_any(&ids))
                    .select(order_items::order_item_id)
                    .load(connection)
                    .await?;

                diesel::delete(
                    order_item_accessories::table
                        .filter(order_item_accessories::order_item_id.eq_any(&item_ids)),
                )
                .execute(connection)
                .await?;
                diesel::delete(order_items::table.filter(order_items::order_id.eq_any(&ids)))
                    .execute(connection)
                    .await?;
                diesel::delete(orders::table.filter(orders::order_id.eq_any(&ids)))
                    .execute(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for OrderRepo {
    fn default() -> Self {
        Self::new()
    }
}
