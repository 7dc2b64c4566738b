use uuid::Uuid;

use crate::domain::repository::{OrderRepository, UserRepository};
use crate::domain::types::Order;
use crate::error::StoreError;

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<U: UserRepository, O: OrderRepository> {
    pub users: U,
    pub orders: O,
}

impl<U: UserRepository, O: OrderRepository> ListOrdersUseCase<U, O> {
    /// List the orders of an existing user, oldest first.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(StoreError::UserNotFound);
        }
        self.orders.list_by_user(user_id).await
    }
}
