#[cfg(test)]
mod tests {
    use crate::errors::internal::{InternalError, ItemError};
    use crate::services::ItemService;
    use crate::stores::MockItemRepository;
    use crate::types::db::item;
    use crate::types::dto::items::{AddItemRequest, UpdateItemRequest};
    use mockall::predicate::eq;

    fn bath_towel(description: &str) -> item::Model {
        item::Model {
            id: 1,
            name: "Bath Towel".to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_items_returns_repository_list() {
        let mut repository = MockItemRepository::new();
        repository.expect_list_all().times(1).returning(|| {
            Ok(vec![
                bath_towel("Blue"),
                item::Model {
                    id: 2,
                    name: "Hand Towel".to_string(),
                    description: "Pink".to_string(),
                },
            ])
        });

        let service = ItemService::new(repository);
        let items = service.get_items().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].name, "Hand Towel");
    }

    #[tokio::test]
    async fn test_get_item_by_id_forwards_id() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_get()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(bath_towel("Blue")));

        let service = ItemService::new(repository);
        let item = service.get_item_by_id(1).await.unwrap();

        assert_eq!(item, bath_towel("Blue"));
    }

    #[tokio::test]
    async fn test_get_item_by_id_propagates_not_found() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_get()
            .returning(|id| Err(InternalError::item_not_found(id)));

        let service = ItemService::new(repository);
        let result = service.get_item_by_id(5).await;

        match result {
            Err(InternalError::Item(ItemError::NotFound { id, .. })) => assert_eq!(id, 5),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_item_forwards_request() {
        let request = AddItemRequest {
            id: 1,
            name: "Bath Towel".to_string(),
            description: "Blue".to_string(),
        };

        let mut repository = MockItemRepository::new();
        repository
            .expect_add()
            .with(eq(request.clone()))
            .times(1)
            .returning(|_| Ok(bath_towel("Blue")));

        let service = ItemService::new(repository);
        let item = service.add_item(request).await.unwrap();

        assert_eq!(item.description, "Blue");
    }

    #[tokio::test]
    async fn test_add_item_propagates_conflict() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_add()
            .returning(|request| Err(InternalError::item_already_exists(request.id)));

        let service = ItemService::new(repository);
        let result = service
            .add_item(AddItemRequest {
                id: 1,
                name: "Bath Towel".to_string(),
                description: "Red".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Item(ItemError::AlreadyExists { id: 1 }))
        ));
    }

    #[tokio::test]
    async fn test_update_item_forwards_id_and_request() {
        let request = UpdateItemRequest {
            name: "Bath Towel".to_string(),
            description: "Red".to_string(),
        };

        let mut repository = MockItemRepository::new();
        repository
            .expect_update()
            .with(eq(1), eq(request.clone()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ItemService::new(repository);

        assert!(service.update_item(1, request).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_item_propagates_not_found() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_update()
            .returning(|id, _| Err(InternalError::item_not_found(id)));

        let service = ItemService::new(repository);
        let result = service
            .update_item(
                999,
                UpdateItemRequest {
                    name: "Bath Towel".to_string(),
                    description: "Red".to_string(),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Item(ItemError::NotFound { id: 999, .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete_item_by_id_forwards_id() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = ItemService::new(repository);

        assert!(service.delete_item_by_id(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_item_by_id_propagates_not_found() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_delete()
            .returning(|id| Err(InternalError::item_not_found(id)));

        let service = ItemService::new(repository);
        let result = service.delete_item_by_id(1).await;

        assert!(matches!(
            result,
            Err(InternalError::Item(ItemError::NotFound { id: 1, .. }))
        ));
    }
}
