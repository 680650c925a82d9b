use crate::data::database::{Database, last_insert_id};
use crate::data::models::color::{Color, NewColor, UpdateColor};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct ColorRepo {}

impl ColorRepo {
    pub fn new() -> Self {
        ColorRepo {}
    }

    /// Returns one page of colors matching the search plus the total match count.
    pub async fn find_page(&self, query: &PageQuery) -> Result<(Vec<Color>, i64), result::Error> {
        use crate::data::models::schema::colors::dsl::{color_id, colors, created_at, name};

        let mut conn = Database::new().await.get_connection().await?;

        let pattern = query.like_pattern();

        let mut items_query = colors.into_boxed();
        let mut count_query = colors.into_boxed();
        if let Some(p) = pattern {
            items_query = items_query.filter(name.like(p.clone()));
            count_query = count_query.filter(name.like(p));
        }

        let items = items_query
            .order((created_at.desc(), color_id.desc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Color>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Color>, result::Error> {
        use crate::data::models::schema::colors::dsl::{color_id, colors};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = Database::new().await.get_connection().await?;

        colors
            .filter(color_id.eq_any(ids))
            .load::<Color>(&mut conn)
            .await
    }
}

#[async_trait]
impl Repository for ColorRepo {
    type Id = i32;
    type Item = Color;
    type NewItem<'a> = NewColor<'a>;
    type UpdateForm<'a> = UpdateColor<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::colors::dsl::{color_id, colors};

        let mut conn = Database::new().await.get_connection().await?;

        match colors
            .filter(color_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::colors::dsl::colors;

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(colors)
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
        use crate::data::models::schema::colors::dsl::{color_id, colors};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::update(colors.filter(color_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        self.delete_many(vec![id]).await
    }

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        use crate::data::models::schema::colors::dsl::{color_id, colors};
        use crate::data::models::schema::product_colors::dsl::{
            color_id as link_color_id, product_colors,
        };

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::delete(product_colors.filter(link_color_id.eq_any(&ids)))
                    .execute(connection)
                    .await?;
                diesel::delete(colors.filter(color_id.eq_any(&ids)))
                    .execute(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for ColorRepo {
    fn default() -> Self {
        Self::new()
    }
}
