use uuid::Uuid;

use crate::domain::repository::{AddressRepository, UserRepository};
use crate::domain::types::Address;
use crate::error::StoreError;

// ── ListAddresses ────────────────────────────────────────────────────────────

pub struct ListAddressesUseCase<U: UserRepository, A: AddressRepository> {
    pub users: U,
    pub addresses: A,
}

impl<U: UserRepository, A: AddressRepository> ListAddressesUseCase<U, A> {
    /// List the addresses of an existing user, oldest first.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Address>, StoreError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(StoreError::UserNotFound);
        }
        self.addresses.list_by_user(user_id).await
    }
}
