use crate::data::database::{Database, last_insert_id};
use crate::data::models::category::{Category, NewCategory, UpdateCategory};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CategoryRepo {}

impl CategoryRepo {
    pub fn new() -> Self {
        CategoryRepo {}
    }

    pub async fn get_by_slug(&self, slug_val: &str) -> Result<Option<Category>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, slug};

        let mut conn = Database::new().await.get_connection().await?;

        match categories
            .filter(slug.eq(slug_val))
            .first::<Category>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Categories whose name or slug contains the search term, newest first.
    pub async fn find_page(
        &self,
        query: &PageQuery,
    ) -> Result<(Vec<Category>, i64), result::Error> {
        use crate::data::models::schema::categories::dsl::{
            categories, category_id, created_at, name, slug,
        };

        let mut conn = Database::new().await.get_connection().await?;

        let mut items_query = categories.into_boxed();
        let mut count_query = categories.into_boxed();
        if let Some(p) = query.like_pattern() {
            items_query = items_query.filter(name.like(p.clone()).or(slug.like(p.clone())));
            count_query = count_query.filter(name.like(p.clone()).or(slug.like(p)));
        }

        let items = items_query
            .order((created_at.desc(), category_id.desc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Category>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }
}

#[async_trait]
impl Repository for CategoryRepo {
    type Id = i32;
    type Item = Category;
    type NewItem<'a> = NewCategory<'a>;
    type UpdateForm<'a> = UpdateCategory<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        let mut conn = Database::new().await.get_connection().await?;

        match categories
            .filter(category_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::categories::dsl::categories;

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(categories)
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
        use crate::data::models::schema::categories::dsl::{categories, category_id};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::update(categories.filter(category_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        self.delete_many(vec![id]).await
    }

    /// Products of a deleted category become uncategorized.
    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        use crate::data::models::schema::categories::dsl::{categories, category_id};
        use crate::data::models::schema::products::dsl::{
            category_id as product_category_id, products,
        };

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::update(products.filter(product_category_id.eq_any(&ids)))
                    .set(product_category_id.eq(None::<i32>))
                    .execute(connection)
                    .await?;
                diesel::delete(categories.filter(category_id.eq_any(&ids)))
                    .execute(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}
