use uuid::Uuid;

use storefront_store::error::StoreError;
use storefront_store::usecase::user::{
    CreateUserInput, CreateUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserInput,
    UpdateUserUseCase,
};

use crate::helpers::{MockUserRepo, test_user};

// ── CreateUser ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_with_generated_id_and_timestamps() {
    let repo = MockUserRepo::empty();
    let created = repo.created_handle();
    let usecase = CreateUserUseCase { repo };

    let user = usecase
        .execute(CreateUserInput {
            username: "John Doe".into(),
            email: "jdoe@example.com".into(),
            description: "Постоянный клиент".into(),
        })
        .await
        .unwrap();

    assert_eq!(user.username, "John Doe");
    assert_eq!(user.created_at, user.updated_at);

    let created = created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, user.id);
}

#[tokio::test]
async fn should_generate_distinct_ids_per_created_user() {
    let usecase = CreateUserUseCase {
        repo: MockUserRepo::empty(),
    };
    let a = usecase
        .execute(CreateUserInput {
            username: "a".into(),
            email: "a@example.com".into(),
            description: "a".into(),
        })
        .await
        .unwrap();
    let b = usecase
        .execute(CreateUserInput {
            username: "b".into(),
            email: "b@example.com".into(),
            description: "b".into(),
        })
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn should_propagate_duplicate_username_conflict() {
    let existing = test_user("John Doe");
    let usecase = CreateUserUseCase {
        repo: MockUserRepo::new(vec![existing]),
    };
    let result = usecase
        .execute(CreateUserInput {
            username: "John Doe".into(),
            email: "other@example.com".into(),
            description: "other".into(),
        })
        .await;
    assert!(matches!(result, Err(StoreError::UserAlreadyExists)));
}

// ── GetUser / ListUsers ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_existing_user() {
    let user = test_user("alice");
    let usecase = GetUserUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let found = usecase.execute(user.id).await.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, user.email);
}

#[tokio::test]
async fn should_return_user_not_found_for_unknown_id() {
    let usecase = GetUserUseCase {
        repo: MockUserRepo::empty(),
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::UserNotFound)));
}

#[tokio::test]
async fn should_list_all_users() {
    let users = vec![test_user("a"), test_user("b"), test_user("c")];
    let usecase = ListUsersUseCase {
        repo: MockUserRepo::new(users),
    };
    let listed = usecase.execute().await.unwrap();
    assert_eq!(listed.len(), 3);
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_missing_data_when_both_fields_none() {
    let user = test_user("alice");
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let result = usecase
        .execute(
            user.id,
            UpdateUserInput {
                username: None,
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::MissingData)));
}

#[tokio::test]
async fn should_return_user_not_found_when_updating_unknown_user() {
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::empty(),
    };
    let result = usecase
        .execute(
            Uuid::new_v4(),
            UpdateUserInput {
                username: Some("new".into()),
                description: None,
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::UserNotFound)));
}

#[tokio::test]
async fn should_update_existing_user() {
    let user = test_user("alice");
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };
    let result = usecase
        .execute(
            user.id,
            UpdateUserInput {
                username: Some("alice2".into()),
                description: Some("updated".into()),
            },
        )
        .await;
    assert!(result.is_ok());
}
