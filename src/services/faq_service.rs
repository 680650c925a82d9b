use crate::api::request::{CreateFaqRequest, UpdateFaqRequest};
use crate::api::response::{FaqResponse, Paginated};
use crate::data::models::faq::{NewFaq, UpdateFaq};
use crate::data::repos::implementors::faq_repo::FaqRepo;
use crate::data::repos::traits::repository::{PageQuery, Repository};
use crate::services::errors::CatalogServiceError;

const ENTITY: &str = "FAQ";

pub struct FaqService;

impl FaqService {
    pub fn new() -> Self {
        FaqService
    }

    /// Ordered by `order`, ties broken by creation time.
    pub async fn get_faqs(
        &self,
        query: &PageQuery,
        is_active: Option<bool>,
    ) -> Result<Paginated<FaqResponse>, CatalogServiceError> {
        let (faqs, total) = FaqRepo::new()
            .find_page(query, is_active)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(Paginated {
            items: faqs.into_iter().map(FaqResponse::from).collect(),
            total,
        })
    }

    pub async fn get_faq_by_id(&self, faq_id: i32) -> Result<Option<FaqResponse>, CatalogServiceError> {
        let faq = FaqRepo::new()
            .get_by_id(faq_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?;

        Ok(faq.map(FaqResponse::from))
    }

    pub async fn create_faq(&self, request: &CreateFaqRequest) -> Result<FaqResponse, CatalogServiceError> {
        if request.question.trim().is_empty() || request.answer.trim().is_empty() {
            return Err(CatalogServiceError::InvalidInput(
                "question and answer must not be empty".to_string(),
            ));
        }

        let new_faq = NewFaq {
            question: &request.question,
            answer: &request.answer,
            sort_order: request.order,
            is_active: request.is_active,
        };

        let id = FaqRepo::new().add(new_faq).await.map_err(|e| {
            tracing::error!("Failed to create FAQ: {}", e);
            CatalogServiceError::CreationFailed(ENTITY)
        })?;

        tracing::info!("Created FAQ {}", id);

        self.get_faq_by_id(id)
            .await?
            .ok_or(CatalogServiceError::NotFound { entity: ENTITY, id })
    }

    pub async fn update_faq(
        &self,
        faq_id: i32,
        request: &UpdateFaqRequest,
    ) -> Result<FaqResponse, CatalogServiceError> {
        let repo = FaqRepo::new();
        let not_found = || CatalogServiceError::NotFound {
            entity: ENTITY,
            id: faq_id,
        };

        repo.get_by_id(faq_id)
            .await
            .map_err(|_| CatalogServiceError::DatabaseError)?
            .ok_or_else(not_found)?;

        let changes = UpdateFaq {
            question: request.question.as_deref(),
            answer: request.answer.as_deref(),
            sort_order: request.order,
            is_active: request.is_active,
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        repo.update(faq_id, changes)
            .await
            .map_err(|_| CatalogServiceError::UpdateFailed(ENTITY))?;

        self.get_faq_by_id(faq_id).await?.ok_or_else(not_found)
    }

    pub async fn remove_faq(&self, faq_id: i32) -> Result<FaqResponse, CatalogServiceError> {
        let existing = self
            .get_faq_by_id(faq_id)
            .await?
            .ok_or(CatalogServiceError::NotFound {
                entity: ENTITY,
                id: faq_id,
            })?;

        FaqRepo::new()
            .delete(faq_id)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))?;

        Ok(existing)
    }

    pub async fn bulk_delete_faqs(&self, faq_ids: Vec<i32>) -> Result<usize, CatalogServiceError> {
        if faq_ids.is_empty() {
            return Ok(0);
        }

        FaqRepo::new()
            .delete_many(faq_ids)
            .await
            .map_err(|_| CatalogServiceError::DeletionFailed(ENTITY))
    }
}

impl Default for FaqService {
    fn default() -> Self {
        Self::new()
    }
}
