use crate::api::request::{CreateAccessoryRequest, UpdateAccessoryRequest};
use crate::api::response::{AccessoryResponse, Paginated};
use crate::data::models::accessory::{NewAccessory, UpdateAccessory};
use crate::data::repos::implementors::accessory_repo::AccessoryRepo;
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::CatalogServiceError;
use crate::utils::mappers::decimal_from_f64;

const ENTITY: &str = "Accessory";

pub struct AccessoryService {}

impl AccessoryService {
    pub fn new() -> Self {
        AccessoryService {}
    }

    pub async fn get_accessories(
        &self,
        query: &PageQuery,
    ) -> Result<Paginated<AccessoryResponse>, CatalogServiceError> {
        let (accessories, total) = AccessoryRepo::new()
            .find_page(query)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(Paginated {
            items: accessories.into_iter().map(AccessoryResponse::from).collect(),
            total,
        })
    }

    pub async fn get_accessory_by_id(
        &self,
        accessory_id: i32,
    ) -> Result<Option<AccessoryResponse>, CatalogServiceError> {
        let accessory = AccessoryRepo::new()
            .get_by_id(accessory_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(accessory.map(AccessoryResponse::from))
    }

    pub async fn create_accessory(
        &self,
        request: &CreateAccessoryRequest,
    ) -> Result<AccessoryResponse, CatalogServiceError> {
        if request.name.trim().is_empty() {
            return Err(CatalogServiceError::InvalidInput(
                "accessory name must not be empty".to_string(),
            ));
        }
        if request.price < 0.0 {
            return Err(CatalogServiceError::InvalidInput(format!(
                "accessory price must not be negative, got {}",
                request.price
            )));
        }

        let new_accessory = NewAccessory {
            name: &request.name,
            price: decimal_from_f64(request.price)?,
            image: request.image.as_deref(),
        };

        let id = AccessoryRepo::new()
            .add(new_accessory)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create accessory {}: {}", request.name, e);
                CatalogServiceError::CreationFailed(ENTITY)
            })?;

        tracing::info!("Created accessory {} ({})", request.name, id);

        self.get_accessory_by_id(id)
            .await?
            .ok_or(CatalogServiceError::NotFound { entity: ENTITY, id })
    }

    pub async fn update_accessory(
        &self,
        accessory_id: i32,
        request: &UpdateAccessoryRequest,
    ) -> Result<AccessoryResponse, CatalogServiceError> {
        let repo = AccessoryRepo::new();
        let not_found = CatalogServiceError::NotFound {
            entity: ENTITY,
            id: accessory_id,
        };

        if repo
            .get_by_id(accessory_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .is_none()
        {
            return Err(not_found);
        }

        let changes = UpdateAccessory {
            name: request.name.as_deref(),
            price: request.price.map(decimal_from_f64).transpose()?,
            image: request.image.as_deref(),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        repo.update(accessory_id, changes)
            .await
            .map_err(|_| CatalogServiceError::UpdateFailed(ENTITY))?;

        self.get_accessory_by_id(accessory_id).await?.ok_or(not_found)
    }

    /// Removes the accessory and its product links, returning what was deleted.
    pub async fn remove_accessory(
        &self,
        accessory_id: i32,
    ) -> Result<AccessoryResponse, CatalogServiceError> {
        let existing = self
            .get_accessory_by_id(accessory_id)
            .await?
            .ok_or(CatalogServiceError::NotFound {
                entity: ENTITY,
                id: accessory_id,
            })?;

        AccessoryRepo::new()
            .delete(accessory_id)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))?;

        tracing::info!("Removed accessory {}", accessory_id);

        Ok(existing)
    }

    pub async fn bulk_delete_accessories(
        &self,
        accessory_ids: Vec<i32>,
    ) -> Result<usize, CatalogServiceError> {
        if accessory_ids.is_empty() {
            return Ok(0);
        }

        AccessoryRepo::new()
            .delete_many(accessory_ids)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))
    }
}

impl Default for AccessoryService {
    fn default() -> Self {
        Self::new()
    }
}
