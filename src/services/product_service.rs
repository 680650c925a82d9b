use crate::api::request::{CreateProductRequest, ProductSizeRequest, UpdateProductRequest};
use crate::api::response::{Paginated, ProductResponse};
use crate::data::models::product::{NewProduct, UpdateProduct};
use crate::data::models::product_size::SizeForm;
use crate::data::repos::implementors::accessory_repo::AccessoryRepo;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::implementors::color_repo::ColorRepo;
use crate::data::repos::implementors::product_repo::{ProductRelations, ProductRepo};
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::ProductServiceError;
use crate::utils::mappers::{decimal_from_f64, parse_id, parse_ids};
use crate::utils::slug::resolve_slug;
use async_graphql::MaybeUndefined;
use bigdecimal::BigDecimal;
use diesel::result::{DatabaseErrorKind, Error};

fn map_write_error(e: Error, slug: &str, fallback: ProductServiceError) -> ProductServiceError {
    match e {
        Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ProductServiceError::ProductAlreadyExists(slug.to_string())
        }
        e => {
            tracing::error!("Product write failed: {}", e);
            fallback
        }
    }
}

fn validate_discount(discount: Option<f64>) -> Result<Option<BigDecimal>, ProductServiceError> {
    match discount {
        Some(d) if !(0.0..=100.0).contains(&d) => Err(ProductServiceError::InvalidProduct(
            format!("discount percentage must be between 0 and 100, got {}", d),
        )),
        Some(d) => Ok(Some(decimal_from_f64(d)?)),
        None => Ok(None),
    }
}

fn size_forms(sizes: &[ProductSizeRequest]) -> Result<Vec<SizeForm<'_>>, ProductServiceError> {
    sizes
        .iter()
        .map(|s| {
            Ok(SizeForm {
                name: &s.name,
                dimensions: s.dimensions.as_deref(),
                price: decimal_from_f64(s.price)?,
            })
        })
        .collect()
}

fn gallery_json(images: &[String]) -> Result<String, ProductServiceError> {
    serde_json::to_string(images)
        .map_err(|e| ProductServiceError::InvalidProduct(format!("gallery images: {}", e)))
}

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    /// Newest first. An unknown category slug yields an empty page.
    pub async fn get_products(
        &self,
        category_slug: Option<&str>,
        query: &PageQuery,
    ) -> Result<Paginated<ProductResponse>, ProductServiceError> {
        let category = match category_slug.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => match CategoryRepo::new()
                .get_by_slug(slug)
                .await
                .map_err(|_| ProductServiceError::DatabaseError)?
            {
                Some(c) => Some(c.category_id),
                None => {
                    return Ok(Paginated {
                        items: Vec::new(),
                        total: 0,
                    });
                }
            },
            None => None,
        };

        let repo = ProductRepo::new();

        let (products, total) = repo
            .find_page(query, category)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        let items = repo
            .attach_relations(products)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .into_iter()
            .map(ProductResponse::from)
            .collect();

        Ok(Paginated { items, total })
    }

    pub async fn get_product_by_id(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductResponse>, ProductServiceError> {
        let product = ProductRepo::new()
            .get_details_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        Ok(product.map(ProductResponse::from))
    }

    pub async fn get_product_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProductResponse>, ProductServiceError> {
        let repo = ProductRepo::new();

        let product = repo
            .get_by_slug(slug)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?;

        match product {
            Some(p) => Ok(repo
                .attach_relations(vec![p])
                .await
                .map_err(|_| ProductServiceError::DatabaseError)?
                .pop()
                .map(ProductResponse::from)),
            None => Ok(None),
        }
    }

    async fn ensure_category(&self, category_id: i32) -> Result<(), ProductServiceError> {
        CategoryRepo::new()
            .get_by_id(category_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .map(|_| ())
            .ok_or(ProductServiceError::CategoryNotFound(category_id))
    }

    /// Fails on the first color or accessory id that does not exist.
    async fn ensure_links(&self, relations: &ProductRelations<'_>) -> Result<(), ProductServiceError> {
        if let Some(ids) = relations.color_ids.as_deref().filter(|ids| !ids.is_empty()) {
            let found = ColorRepo::new()
                .get_by_ids(ids)
                .await
                .map_err(|_| ProductServiceError::DatabaseError)?;

            if let Some(missing) = ids.iter().find(|id| !found.iter().any(|c| c.color_id == **id)) {
                return Err(ProductServiceError::InvalidProduct(format!(
                    "Color not found: {}",
                    missing
                )));
            }
        }

        if let Some(ids) = relations.accessory_ids.as_deref().filter(|ids| !ids.is_empty()) {
            let found = AccessoryRepo::new()
                .get_by_ids(ids)
                .await
                .map_err(|_| ProductServiceError::DatabaseError)?;

            if let Some(missing) = ids
                .iter()
                .find(|id| !found.iter().any(|a| a.accessory_id == **id))
            {
                return Err(ProductServiceError::InvalidProduct(format!(
                    "Accessory not found: {}",
                    missing
                )));
            }
        }

        Ok(())
    }

    /// Creates the product with its color / accessory links and sizes.
    pub async fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> Result<ProductResponse, ProductServiceError> {
        if request.name.trim().is_empty() {
            return Err(ProductServiceError::InvalidProduct(
                "name must not be empty".to_string(),
            ));
        }

        let category_id = request.category_id.as_ref().map(parse_id).transpose()?;
        if let Some(id) = category_id {
            self.ensure_category(id).await?;
        }

        let slug = resolve_slug(&request.slug, &request.name);
        let sizes = request.sizes.as_deref().map(size_forms).transpose()?;

        let new_product = NewProduct {
            name: &request.name,
            slug: &slug,
            description: request.description.as_deref(),
            price: decimal_from_f64(request.price)?,
            discount_percentage: validate_discount(request.discount_percentage)?,
            stock: request.stock,
            is_active: request.is_active,
            category_id,
            main_image: &request.main_image,
            gallery_images: gallery_json(&request.gallery_images)?,
            glb_file_url: request.glb_file_url.as_deref(),
        };

        let relations = ProductRelations {
            color_ids: request.color_ids.as_deref().map(parse_ids).transpose()?,
            accessory_ids: request.accessory_ids.as_deref().map(parse_ids).transpose()?,
            sizes,
        };
        self.ensure_links(&relations).await?;

        let product_id = ProductRepo::new()
            .create_with_relations(new_product, relations)
            .await
            .map_err(|e| map_write_error(e, &slug, ProductServiceError::ProductCreationFailed))?;

        tracing::info!("Created product {} ({})", slug, product_id);

        self.get_product_by_id(product_id)
            .await?
            .ok_or(ProductServiceError::ProductNotFound(product_id))
    }

    /// Applies the fields present in `request`; relation lists replace the stored ones.
    pub async fn update_product(
        &self,
        product_id: i32,
        request: &UpdateProductRequest,
    ) -> Result<ProductResponse, ProductServiceError> {
        let repo = ProductRepo::new();

        let existing = repo
            .get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound(product_id))?;

        let category_id = match &request.category_id {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(id) => {
                let id = parse_id(id)?;
                self.ensure_category(id).await?;
                Some(Some(id))
            }
        };

        let discount_percentage = match &request.discount_percentage {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(d) => Some(validate_discount(Some(*d))?),
        };

        let slug = request
            .slug
            .as_deref()
            .map(|s| resolve_slug(s, request.name.as_deref().unwrap_or(&existing.name)));

        let changes = UpdateProduct {
            name: request.name.as_deref(),
            slug: slug.as_deref(),
            description: request.description.as_opt_ref().map(|d| d.map(String::as_str)),
            price: request.price.map(decimal_from_f64).transpose()?,
            discount_percentage,
            stock: request.stock,
            is_active: request.is_active,
            category_id,
            main_image: request.main_image.as_deref(),
            gallery_images: request.gallery_images.as_deref().map(gallery_json).transpose()?,
            glb_file_url: request.glb_file_url.as_opt_ref().map(|g| g.map(String::as_str)),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        let relations = ProductRelations {
            color_ids: request.color_ids.as_deref().map(parse_ids).transpose()?,
            accessory_ids: request.accessory_ids.as_deref().map(parse_ids).transpose()?,
            sizes: request.sizes.as_deref().map(size_forms).transpose()?,
        };
        self.ensure_links(&relations).await?;

        repo.update_with_relations(product_id, changes, relations)
            .await
            .map_err(|e| {
                map_write_error(
                    e,
                    slug.as_deref().unwrap_or(&existing.slug),
                    ProductServiceError::ProductUpdateFailed,
                )
            })?;

        tracing::info!("Updated product {}", product_id);

        self.get_product_by_id(product_id)
            .await?
            .ok_or(ProductServiceError::ProductNotFound(product_id))
    }

    /// Returns the product as it was before deletion.
    pub async fn delete_product(
        &self,
        product_id: i32,
    ) -> Result<ProductResponse, ProductServiceError> {
        let existing = self
            .get_product_by_id(product_id)
            .await?
            .ok_or(ProductServiceError::ProductNotFound(product_id))?;

        ProductRepo::new()
            .delete(product_id)
            .await
            .map_err(|_| ProductServiceError::ProductDeletionFailed)?;

        tracing::info!("Deleted product {}", product_id);

        Ok(existing)
    }

    pub async fn bulk_delete_products(
        &self,
        product_ids: Vec<i32>,
    ) -> Result<usize, ProductServiceError> {
        if product_ids.is_empty() {
            return Ok(0);
        }

        let deleted = ProductRepo::new()
            .delete_many(product_ids)
            .await
            .map_err(|_| ProductServiceError::ProductDeletionFailed)?;

        tracing::info!("Bulk deleted {} products", deleted);

        Ok(deleted)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
