use crate::data::database::{Database, last_insert_id};
use crate::data::models::accessory::Accessory;
use crate::data::models::category::Category;
use crate::data::models::color::Color;
use crate::data::models::product::{
    NewProduct, Product, ProductAccessory, ProductColor, ProductDetails, UpdateProduct,
};
use crate::data::models::product_size::{ProductSize, SizeForm};
use crate::data::models::schema::{
    accessories, categories, colors, order_items, product_accessories, product_colors,
    product_sizes, products,
};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncMysqlConnection, RunQueryDsl};
use std::collections::HashMap;

/// Relation changes applied together with a product insert or update.
/// `None` leaves the existing rows untouched; `Some` replaces them.
#[derive(Debug, Default, Clone)]
pub struct ProductRelations<'a> {
    pub color_ids: Option<Vec<i32>>,
    pub accessory_ids: Option<Vec<i32>>,
    pub sizes: Option<Vec<SizeForm<'a>>>,
}

pub struct ProductRepo {}

impl ProductRepo {
    pub fn new() -> Self {
        ProductRepo {}
    }

    pub async fn get_by_slug(&self, slug_val: &str) -> Result<Option<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{products, slug};

        let mut conn = Database::new().await.get_connection().await?;

        match products
            .filter(slug.eq(slug_val))
            .first::<Product>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Newest products first, optionally restricted to one category and to
    /// names or descriptions containing the search term.
    pub async fn find_page(
        &self,
        query: &PageQuery,
        category: Option<i32>,
    ) -> Result<(Vec<Product>, i64), result::Error> {
        use crate::data::models::schema::products::dsl::{
            category_id, created_at, description, name, product_id, products,
        };

        let mut conn = Database::new().await.get_connection().await?;

        let mut items_query = products.into_boxed();
        let mut count_query = products.into_boxed();

        if let Some(cat) = category {
            items_query = items_query.filter(category_id.eq(cat));
            count_query = count_query.filter(category_id.eq(cat));
        }

        if let Some(p) = query.like_pattern() {
            items_query = items_query.filter(name.like(p.clone()).or(description.like(p.clone())));
            count_query = count_query.filter(name.like(p.clone()).or(description.like(p)));
        }

        let items = items_query
            .order((created_at.desc(), product_id.desc()))
            .offset(query.offset())
            .limit(query.limit())
            .load::<Product>(&mut conn)
            .await?;

        let total = count_query.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn get_details_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ProductDetails>, result::Error> {
        match self.get_by_id(id).await? {
            Some(product) => Ok(self.attach_relations(vec![product]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Details for every existing id; ids without a product are skipped.
    pub async fn get_details_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<ProductDetails>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = Database::new().await.get_connection().await?;

        let found = products
            .filter(product_id.eq_any(ids))
            .load::<Product>(&mut conn)
            .await?;

        if found.is_empty() {
            return Ok(Vec::new());
        }

        load_relations(&mut conn, found).await
    }

    /// Loads category, colors, sizes and accessories for each product, keeping input order.
    pub async fn attach_relations(
        &self,
        product_list: Vec<Product>,
    ) -> Result<Vec<ProductDetails>, result::Error> {
        if product_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = Database::new().await.get_connection().await?;
        load_relations(&mut conn, product_list).await
    }

    /// Inserts the product and its colors, accessories and sizes in one transaction.
    pub async fn create_with_relations<'a>(
        &self,
        new_product: NewProduct<'a>,
        relations: ProductRelations<'a>,
    ) -> Result<i32, result::Error> {
        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(products::table)
                    .values(&new_product)
                    .execute(connection)
                    .await?;

                let new_id = last_insert_id(connection).await?;
                replace_relations(connection, new_id, relations).await?;

                Ok(new_id)
            }
            .scope_boxed()
        })
        .await
    }

    pub async fn update_with_relations<'a>(
        &self,
        id: i32,
        changes: UpdateProduct<'a>,
        relations: ProductRelations<'a>,
    ) -> Result<(), result::Error> {
        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::update(products::table.filter(products::product_id.eq(id)))
                    .set(&changes)
                    .execute(connection)
                    .await?;

                replace_relations(connection, id, relations).await
            }
            .scope_boxed()
        })
        .await
    }
}

async fn replace_relations(
    conn: &mut AsyncMysqlConnection,
    id: i32,
    relations: ProductRelations<'_>,
) -> Result<(), result::Error> {
    if let Some(color_ids) = relations.color_ids {
        diesel::delete(product_colors::table.filter(product_colors::product_id.eq(id)))
            .execute(conn)
            .await?;

        let links: Vec<ProductColor> = color_ids
            .into_iter()
            .map(|color_id| ProductColor {
                product_id: id,
                color_id,
            })
            .collect();

        if !links.is_empty() {
            diesel::insert_into(product_colors::table)
                .values(&links)
                .execute(conn)
                .await?;
        }
    }

    if let Some(accessory_ids) = relations.accessory_ids {
        diesel::delete(product_accessories::table.filter(product_accessories::product_id.eq(id)))
            .execute(conn)
            .await?;

        let links: Vec<ProductAccessory> = accessory_ids
            .into_iter()
            .map(|accessory_id| ProductAccessory {
                product_id: id,
                accessory_id,
            })
            .collect();

        if !links.is_empty() {
            diesel::insert_into(product_accessories::table)
                .values(&links)
                .execute(conn)
                .await?;
        }
    }

    if let Some(sizes) = relations.sizes {
        diesel::delete(product_sizes::table.filter(product_sizes::product_id.eq(id)))
            .execute(conn)
            .await?;

        let rows: Vec<_> = sizes.iter().map(|s| s.for_product(id)).collect();

        if !rows.is_empty() {
            diesel::insert_into(product_sizes::table)
                .values(&rows)
                .execute(conn)
                .await?;
        }
    }

    Ok(())
}

async fn load_relations(
    conn: &mut AsyncMysqlConnection,
    product_list: Vec<Product>,
) -> Result<Vec<ProductDetails>, result::Error> {
    let ids: Vec<i32> = product_list.iter().map(|p| p.product_id).collect();
    let category_ids: Vec<i32> = product_list.iter().filter_map(|p| p.category_id).collect();

    let category_map: HashMap<i32, Category> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        categories::table
            .filter(categories::category_id.eq_any(&category_ids))
            .load::<Category>(conn)
            .await?
            .into_iter()
            .map(|c| (c.category_id, c))
            .collect()
    };

    let color_rows: Vec<(ProductColor, Color)> = product_colors::table
        .inner_join(colors::table)
        .filter(product_colors::product_id.eq_any(&ids))
        .order(colors::color_id.asc())
        .select((ProductColor::as_select(), Color::as_select()))
        .load(conn)
        .await?;

    let accessory_rows: Vec<(ProductAccessory, Accessory)> = product_accessories::table
        .inner_join(accessories::table)
        .filter(product_accessories::product_id.eq_any(&ids))
        .order(accessories::accessory_id.asc())
        .select((ProductAccessory::as_select(), Accessory::as_select()))
        .load(conn)
        .await?;

    let size_rows: Vec<ProductSize> = ProductSize::belonging_to(&product_list)
        .order(product_sizes::size_id.asc())
        .select(ProductSize::as_select())
        .load(conn)
        .await?;
    let grouped_sizes = size_rows.grouped_by(&product_list);

    let mut color_map: HashMap<i32, Vec<Color>> = HashMap::new();
    for (link, color) in color_rows {
        color_map.entry(link.product_id).or_default().push(color);
    }

    let mut accessory_map: HashMap<i32, Vec<Accessory>> = HashMap::new();
    for (link, accessory) in accessory_rows {
        accessory_map.entry(link.product_id).or_default().push(accessory);
    }

    let details = product_list
        .into_iter()
        .zip(grouped_sizes)
        .map(|(product, sizes)| ProductDetails {
            category: product
                .category_id
                .and_then(|cid| category_map.get(&cid).cloned()),
            colors: color_map.remove(&product.product_id).unwrap_or_default(),
            accessories: accessory_map.remove(&product.product_id).unwrap_or_default(),
            sizes,
            product,
        })
        .collect();

    Ok(details)
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem<'a> = NewProduct<'a>;
    type UpdateForm<'a> = UpdateProduct<'a>;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = Database::new().await.get_connection().await?;

        match products
            .filter(product_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error> {
        self.create_with_relations(item, ProductRelations::default())
            .await
    }

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error> {
        self.update_with_relations(id, item, ProductRelations::default())
            .await
    }

    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error> {
        self.delete_many(vec![id]).await
    }

    /// Order items keep their snapshot; only their product reference is cleared.
    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error> {
        let mut conn = Database::new().await.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::update(order_items::table.filter(order_items::product_id.eq_any(&ids)))
                    .set(order_items::product_id.eq(None::<i32>))
                    .execute(connection)
                    .await?;
                diesel::delete(product_colors::table.filter(product_colors::product_id.eq_any(&ids)))
                    .execute(connection)
                    .await?;
                diesel::delete(
                    product_accessories::table.filter(product_accessories::product_id.eq_any(&ids)),
                )
                .execute(connection)
                .await?;
                diesel::delete(product_sizes::table.filter(product_sizes::product_id.eq_any(&ids)))
                    .execute(connection)
                    .await?;
                diesel::delete(products::table.filter(products::product_id.eq_any(&ids)))
                    .execute(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}

impl Default for ProductRepo {
    fn default() -> Self {
        Self::new()
    }
}
