use crate::api::request::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::response::{CategoryResponse, Paginated};
use crate::data::models::category::{NewCategory, UpdateCategory};
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::CatalogServiceError;
use crate::utils::slug::resolve_slug;
use diesel::result::{DatabaseErrorKind, Error};

const ENTITY: &str = "Category";

fn map_write_error(e: Error, slug: &str, fallback: CatalogServiceError) -> CatalogServiceError {
    match e {
        Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CatalogServiceError::AlreadyExists {
                entity: ENTITY,
                name: slug.to_string(),
            }
        }
        e => {
            tracing::error!("Category write failed: {}", e);
            fallback
        }
    }
}

pub struct CategoryService {}

impl CategoryService {
    pub fn new() -> Self {
        CategoryService {}
    }

    pub async fn get_categories(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<CategoryResponse>, CatalogServiceError> {
        let (categories, total) = CategoryRepo::new()
            .find_page(query)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(Paginated {
            items: categories.into_iter().map(CategoryResponse::from).collect(),
            total,
        })
    }

    pub async fn get_category_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<CategoryResponse>, CatalogServiceError> {
        let category = CategoryRepo::new()
            .get_by_id(category_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(category.map(CategoryResponse::from))
    }

    pub async fn get_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CategoryResponse>, CatalogServiceError> {
        let category = CategoryRepo::new()
            .get_by_slug(slug)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(category.map(CategoryResponse::from))
    }

    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<CategoryResponse, CatalogServiceError> {
        if request.name.trim().is_empty() {
            return Err(CatalogServiceError::InvalidInput(
                "category name must not be empty".to_string(),
            ));
        }

        let slug = resolve_slug(&request.slug, &request.name);

        let new_category = NewCategory {
            name: &request.name,
            slug: &slug,
            description: request.description.as_deref(),
            image: request.image.as_deref(),
        };

        let id = CategoryRepo::new()
            .add(new_category)
            .await
            .map_err(|e| map_write_error(e, &slug, CatalogServiceError::CreationFailed(ENTITY)))?;

        tracing::info!("Created category {} ({})", slug, id);

        self.get_category_by_id(id)
            .await?
            .ok_or(CatalogServiceError::NotFound { entity: ENTITY, id })
    }

    pub async fn update_category(
        &self,
        category_id: i32,
        request: &UpdateCategoryRequest,
    ) -> Result<CategoryResponse, CatalogServiceError> {
        let repo = CategoryRepo::new();

        let existing = repo
            .get_by_id(category_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .ok_or(CatalogServiceError::NotFound {
                entity: ENTITY,
                id: category_id,
            })?;

        let slug = request
            .slug
            .as_deref()
            .map(|s| resolve_slug(s, request.name.as_deref().unwrap_or(&existing.name)));

        let changes = UpdateCategory {
            name: request.name.as_deref(),
            slug: slug.as_deref(),
            description: request.description.as_deref(),
            image: request.image.as_deref(),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        repo.update(category_id, changes).await.map_err(|e| {
            map_write_error(
                e,
                slug.as_deref().unwrap_or(&existing.slug),
                CatalogServiceError::UpdateFailed(ENTITY),
            )
        })?;

        self.get_category_by_id(category_id)
            .await?
            .ok_or(CatalogServiceError::NotFound {
                entity: ENTITY,
                id: category_id,
            })
    }

    /// Returns the deleted category; its products stay, uncategorized.
    pub async fn delete_category(
        &self,
        category_id: i32,
    ) -> Result<CategoryResponse, CatalogServiceError> {
        let existing = self
            .get_category_by_id(category_id)
            .await?
            .ok_or(CatalogServiceError::NotFound {
                entity: ENTITY,
                id: category_id,
            })?;

        CategoryRepo::new()
            .delete(category_id)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))?;

        tracing::info!("Deleted category {}", category_id);

        Ok(existing)
    }

    pub async fn bulk_delete_categories(
        &self,
        category_ids: Vec<i32>,
    ) -> Result<usize, CatalogServiceError> {
        if category_ids.is_empty() {
            return Ok(0);
        }

        CategoryRepo::new()
            .delete_many(category_ids)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
