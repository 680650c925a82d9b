use crate::api::request::{CreateColorRequest, UpdateColorRequest};
use crate::api::response::{ColorResponse, Paginated};
use crate::data::models::color::{NewColor, UpdateColor};
use crate::data::repos::implementors::color_repo::ColorRepo;
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::CatalogServiceError;

const ENTITY: &str = "Color";

fn not_found(id: i32) -> CatalogServiceError {
    CatalogServiceError::NotFound { entity: ENTITY, id }
}

pub struct ColorService {}

impl ColorService {
    pub fn new() -> Self {
        ColorService {}
    }

    pub async fn get_colors(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<ColorResponse>, CatalogServiceError> {
        let (colors, total) = ColorRepo::new()
            .find_page(query)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(Paginated {
            items: colors.into_iter().map(ColorResponse::from).collect(),
            total,
        })
    }

    pub async fn get_color_by_id(
        &self,
        color_id: i32,
    ) -> Result<Option<ColorResponse>, CatalogServiceError> {
        let color = ColorRepo::new()
            .get_by_id(color_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(color.map(ColorResponse::from))
    }

    pub async fn create_color(
        &self,
        request: &CreateColorRequest,
    ) -> Result<ColorResponse, CatalogServiceError> {
        if request.name.trim().is_empty() {
            return Err(CatalogServiceError::InvalidInput(
                "color name must not be empty".to_string(),
            ));
        }

        let new_color = NewColor {
            name: &request.name,
            image: request.image.as_deref(),
        };

        let id = ColorRepo::new().add(new_color).await.map_err(|e| {
            tracing::error!("Failed to create color {}: {}", request.name, e);
            CatalogServiceError::CreationFailed(ENTITY)
        })?;

        tracing::info!("Created color {} ({})", request.name, id);

        self.get_color_by_id(id).await?.ok_or(not_found(id))
    }

    pub async fn update_color(
        &self,
        color_id: i32,
        request: &UpdateColorRequest,
    ) -> Result<ColorResponse, CatalogServiceError> {
        let repo = ColorRepo::new();

        repo.get_by_id(color_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .ok_or(not_found(color_id))?;

        let changes = UpdateColor {
            name: request.name.as_deref(),
            image: request.image.as_deref(),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        repo.update(color_id, changes)
            .await
            .map_err(|_| CatalogServiceError::UpdateFailed(ENTITY))?;

        self.get_color_by_id(color_id)
            .await?
            .ok_or(not_found(color_id))
    }

    /// Unlinks the color from every product and returns it.
    pub async fn delete_color(&self, color_id: i32) -> Result<ColorResponse, CatalogServiceError> {
        let existing = self
            .get_color_by_id(color_id)
            .await?
            .ok_or(not_found(color_id))?;

        ColorRepo::new()
            .delete(color_id)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))?;

        tracing::info!("Deleted color {}", color_id);

        Ok(existing)
    }

    pub async fn bulk_delete_colors(&self, color_ids: Vec<i32>) -> Result<usize, CatalogServiceError> {
        if color_ids.is_empty() {
            return Ok(0);
        }

        ColorRepo::new()
            .delete_many(color_ids)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))
    }
}

impl Default for ColorService {
    fn default() -> Self {
        Self::new()
    }
}
