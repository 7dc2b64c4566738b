use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::Address;
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::address::ListAddressesUseCase;

#[derive(Serialize)]
pub struct AddressResponse {
    pub id: String,
    pub user_id: String,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub is_primary: bool,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id.to_string(),
            user_id: address.user_id.to_string(),
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
            is_primary: address.is_primary,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

// ── GET /users/{id}/addresses ────────────────────────────────────────────────

pub async fn list_user_addresses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AddressResponse>>, StoreError> {
    let usecase = ListAddressesUseCase {
        users: state.user_repo(),
        addresses: state.address_repo(),
    };
    let addresses = usecase.execute(id).await?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}
