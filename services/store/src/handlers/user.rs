use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::User;
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserInput,
    UpdateUserUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub description: String,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            description: user.description,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub description: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), StoreError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            username: body.username,
            email: body.email,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, StoreError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, StoreError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub description: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<StatusCode, StoreError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(
            id,
            UpdateUserInput {
                username: body.username,
                description: body.description,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
