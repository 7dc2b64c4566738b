#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Address, Order, User};
use crate::error::StoreError;

/// Repository for customer accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// List all users, oldest first.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn create(&self, user: &User) -> Result<(), StoreError>;

    /// Update username and/or description. Refreshes `updated_at`.
    async fn update_profile(
        &self,
        id: Uuid,
        username: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Repository for shipping addresses.
pub trait AddressRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, StoreError>;

    async fn create(&self, address: &Address) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError>;

    async fn create(&self, order: &Order) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}
