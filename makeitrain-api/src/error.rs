use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Concurrent update detected for {entity_id}")]
    ConcurrentUpdate { entity_id: Uuid },

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_update_message_names_entity() {
        let id = Uuid::nil();
        let err = ApiError::ConcurrentUpdate { entity_id: id };
        assert_eq!(
            err.to_string(),
            "Concurrent update detected for 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_error_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            ApiError::NotFound("transaction".to_string()).into();
        assert_eq!(boxed.to_string(), "Not found: transaction");
    }
}
