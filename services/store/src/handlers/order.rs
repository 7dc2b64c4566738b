use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::Order;
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::order::ListOrdersUseCase;

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub address_id: String,
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_price: f64,
    pub quantity: i32,
    pub total_amount: f64,
    pub status: &'static str,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            address_id: order.address_id.to_string(),
            product_name: order.product_name,
            product_description: order.product_description,
            product_price: order.product_price,
            quantity: order.quantity,
            total_amount: order.total_amount,
            status: order.status.as_str(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

// ── GET /users/{id}/orders ───────────────────────────────────────────────────

pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OrderResponse>>, StoreError> {
    let usecase = ListOrdersUseCase {
        users: state.user_repo(),
        orders: state.order_repo(),
    };
    let orders = usecase.execute(id).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}
