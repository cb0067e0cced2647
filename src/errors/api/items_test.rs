#[cfg(test)]
mod tests {
    use crate::errors::ItemsError;
    use crate::errors::internal::{DatabaseError, InternalError};
    use sea_orm::DbErr;

    #[test]
    fn test_not_found_converts_to_404_with_entity_message() {
        let api_err = ItemsError::from_internal_error(InternalError::item_not_found(1));

        assert!(matches!(api_err, ItemsError::NotFound(_)));
        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.detail(), "Item not found, id: 1");
    }

    #[test]
    fn test_already_exists_converts_to_409() {
        let api_err = ItemsError::from_internal_error(InternalError::item_already_exists(1));

        assert!(matches!(api_err, ItemsError::Conflict(_)));
        assert_eq!(api_err.status_code(), 409);
        assert_eq!(api_err.detail(), "Item already exists, id: 1");
    }

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::Custom("connection reset".to_string());
        let api_err = ItemsError::from_internal_error(InternalError::database("list_items", db_err));

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.detail(), "An internal error occurred");
    }

    #[test]
    fn test_transaction_error_does_not_leak_details() {
        let internal_err = InternalError::Database(DatabaseError::TransactionCommit {
            source: DbErr::Custom("disk I/O error".to_string()),
        });
        let api_err: ItemsError = internal_err.into();

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.detail().contains("disk"));
    }

    #[test]
    fn test_validation_error_is_422_with_detail() {
        let api_err = ItemsError::validation("missing field `description`".to_string());

        assert!(matches!(api_err, ItemsError::Validation(_)));
        assert_eq!(api_err.status_code(), 422);
        assert_eq!(api_err.detail(), "missing field `description`");
    }

    #[test]
    fn test_display_uses_detail() {
        let api_err = ItemsError::not_found("Item not found, id: 9".to_string());

        assert_eq!(api_err.to_string(), "Item not found, id: 9");
    }
}
