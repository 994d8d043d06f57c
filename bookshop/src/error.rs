use thiserror::Error;

/// Failures surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    #[error("{what} not found: id = {id}")]
    NotFound { what: &'static str, id: i64 },

    #[error("cart {0} is already attached to an order")]
    CartAlreadyOrdered(i64),
}

impl StorageError {
    pub fn not_found(what: &'static str, id: i64) -> Self {
        Self::NotFound { what, id }
    }
}
