use crate::utils::mappers::MappingError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderServiceError {
    #[error("Order not found: {0}")]
    OrderNotFound(i32),
    #[error("Product not found: {0}")]
    ProductNotFound(i32),
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
    #[error(transparent)]
    InvalidInput(#[from] MappingError),
    #[error("Order creation failed")]
    OrderCreationFailed,
    #[error("Order update failed")]
    OrderUpdateFailed,
    #[error("Order deletion failed")]
    OrderDeletionFailed,
    #[error("Database error")]
    DatabaseError,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductServiceError {
    #[error("Product not found: {0}")]
    ProductNotFound(i32),
    #[error("Product already exists: {0}")]
    ProductAlreadyExists(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error(transparent)]
    InvalidInput(#[from] MappingError),
    #[error("Product creation failed")]
    ProductCreationFailed,
    #[error("Product update failed")]
    ProductUpdateFailed,
    #[error("Product deletion failed")]
    ProductDeletionFailed,
    #[error("Database error")]
    DatabaseError,
}

/// Errors shared by the category, color, accessory and FAQ services.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogServiceError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{entity} already exists: {name}")]
    AlreadyExists { entity: &'static str, name: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    InvalidValue(#[from] MappingError),
    #[error("{0} creation failed")]
    CreationFailed(&'static str),
    #[error("{0} update failed")]
    UpdateFailed(&'static str),
    #[error("{0} deletion failed")]
    DeletionFailed(&'static str),
    #[error("Database error")]
    DatabaseError,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MediaServiceError {
    #[error("No file uploaded")]
    NoFileUploaded,
    #[error("Invalid media id: {0}")]
    InvalidId(String),
    #[error("Media file not found: {0}")]
    NotFound(String),
    #[error("Media storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for MediaServiceError {
    fn from(e: std::io::Error) -> Self {
        MediaServiceError::Storage(e.to_string())
    }
}
