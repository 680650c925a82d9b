use crate::data::database::{Database, last_insert_id};
use crate::data::models::accessory::{Accessory, NewAccessory, UpdateAccessory};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct AccessoryRepo {}

impl AccessoryRepo {
    pub fn new() -> Self {
        AccessoryRepo {}
    }

    /// Returns one page of accessories matching the search plus the total match count.
    pub async fn find_page(&self, query: &PageQuery) -> Result<(Vec<Accessory>, i64), result::Error> {
        use crate::data::models::schema::accessories::dsl::{accessories, accessory_id, created_at, name};

        let mut conn = Database::new().await.get_connection().await?;

        let pattern = query.like_pattern();

        let mut items_query = accessories.into_boxed();
        let mut count_query = accessories.into_boxed();
        if let Some(p) = pattern {
            items_query = items_query.filter(name.like(p.clone()));
            count_query = count_query.filter(name.like(p));
        }

        let items = items_query
            .order((created_at.desc(), accessory_id.desc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Accessory>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Accessory>, result::Error> {
        use crate::data::models::schema::accessories::dsl::{accessory_id, accessories};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = Database::new().await.get_connection().await?;

        accessories
            .filter(accessory_id.eq_any(ids))
            .load::<Accessory>(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for AccessoryRepo {
    type Id = i32;
    type Item = Accessory;
    type NewItem<'a> = NewAccessory<'a>;
    type UpdateForm<'a> = UpdateAccessory<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::accessories::dsl::{accessory_id, accessories};

        let mut conn = Database::new().await.get_connection().await?;

        match accessories
            .filter(accessory_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::accessories::dsl::accessories;

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(accessories)
                    .values(&item)
                    .execute(connection)
                    .await?;
                last_insert_id(connection).await
            }
            .scope_boxed()
        })
        .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        use crate::data::models::schema::accessories::dsl::{accessory_id, accessories};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::update(accessories.filter(accessory_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        self.delete_many(vec![id]).await
    }

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        use crate::data::models::schema::accessories::dsl::{accessory_id, accessories};
        use crate::data::models::schema::product_accessories::dsl::{
            accessory_id as link_accessory_id, product_accessories,
        };

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::delete(product_accessories.filter(link_accessory_id.eq_any(&ids)))
                    .execute(connection)
                    .await?;
                diesel::delete(accessories.filter(accessory_id.eq_any(&ids)))
                    .execute(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for AccessoryRepo {
    fn default() -> Self {
        Self::new()
    }
}
