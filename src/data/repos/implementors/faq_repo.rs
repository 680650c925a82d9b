use crate::data::database::{Database, last_insert_id};
use crate::data::models::faq::{Faq, NewFaq, UpdateFaq};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct FaqRepo {}

impl FaqRepo {
    pub fn new() -> Self {
        FaqRepo {}
    }

    /// FAQs in display order. `active` narrows to shown or hidden entries.
    pub async fn find_page(
        &self,
        query: &PageQuery,
        active: Option<bool>,
    ) -> Result<(Vec<Faq>, i64), result::Error> {
        use crate::data::models::schema::faqs::dsl::{
            answer, created_at, faq_id, faqs, is_active, question, sort_order,
        };

        let mut conn = Database::new().await.get_connection().await?;

        let mut items_query = faqs.into_boxed();
        let mut count_query = faqs.into_boxed();

        if let Some(p) = query.like_pattern() {
            items_query = items_query.filter(question.like(p.clone()).or(answer.like(p.clone())));
            count_query = count_query.filter(question.like(p.clone()).or(answer.like(p)));
        }

        if let Some(flag) = active {
            items_query = items_query.filter(is_active.eq(flag));
            count_query = count_query.filter(is_active.eq(flag));
        }

        let items = items_query
            .order((sort_order.asc(), created_at.asc(), faq_id.asc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Faq>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }
}

#[async_trait]
impl Repository for FaqRepo {
    type Id = i32;
    type Item = Faq;
    type NewItem<'a> = NewFaq<'a>;
    type UpdateForm<'a> = UpdateFaq<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::faqs::dsl::{faq_id, faqs};

        let mut conn = Database::new().await.get_connection().await?;

        match faqs.filter(faq_id.eq(id)).first::<Self::Item>(&mut conn).await {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        use crate::data::models::schema::faqs::dsl::faqs;

        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(faqs)
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
        use crate::data::models::schema::faqs::dsl::{faq_id, faqs};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::update(faqs.filter(faq_id.eq(id)))
            .set(&item)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        use crate::data::models::schema::faqs::dsl::{faq_id, faqs};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::delete(faqs.filter(faq_id.eq(id)))
            .execute(&mut conn)
            .await
    }

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        use crate::data::models::schema::faqs::dsl::{faq_id, faqs};

        let mut conn = Database::new().await.get_connection().await?;

        diesel::delete(faqs.filter(faq_id.eq_any(ids)))
            .execute(&mut conn)
            .await
    }
}

impl Default for FaqRepo {
    fn default() -> Self {
        Self::new()
    }
}
