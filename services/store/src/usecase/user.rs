use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::StoreError;

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub description: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    /// Constructs the user with a client-generated id so callers can reference
    /// it before the row is durably committed.
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, StoreError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(StoreError::UserNotFound)
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, StoreError> {
        self.repo.list().await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub username: Option<String>,
    pub description: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, input: UpdateUserInput) -> Result<(), StoreError> {
        if input.username.is_none() && input.description.is_none() {
            return Err(StoreError::MissingData);
        }
        if self.repo.find_by_id(user_id).await?.is_none() {
            return Err(StoreError::UserNotFound);
        }
        self.repo
            .update_profile(
                user_id,
                input.username.as_deref(),
                input.description.as_deref(),
            )
            .await
    }
}
