use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use storefront_store::domain::repository::{AddressRepository, OrderRepository, UserRepository};
use storefront_store::domain::types::{Address, Order, OrderStatus, User};
use storefront_store::error::StoreError;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Vec<User>,
    pub created: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            created: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shared handle to the rows passed to `create`, for post-execution checks.
    pub fn created_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.created)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }

    async fn create(&self, user: &User) -> Result<(), StoreError> {
        if self.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UserAlreadyExists);
        }
        self.created.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_profile(
        &self,
        _id: Uuid,
        _username: Option<&str>,
        _description: Option<&str>,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.users.len() as u64)
    }
}

// ── MockAddressRepo ──────────────────────────────────────────────────────────

pub struct MockAddressRepo {
    pub addresses: Vec<Address>,
}

impl AddressRepository for MockAddressRepo {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, StoreError> {
        Ok(self
            .addresses
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, _address: &Address) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.addresses.len() as u64)
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

pub struct MockOrderRepo {
    pub orders: Vec<Order>,
}

impl OrderRepository for MockOrderRepo {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, _order: &Order) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.orders.len() as u64)
    }
}

// ── Fixture constructors ─────────────────────────────────────────────────────

pub fn test_user(username: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        description: format!("{username} description"),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_address(user_id: Uuid) -> Address {
    let now = Utc::now();
    Address {
        id: Uuid::new_v4(),
        user_id,
        street: "456 Test Avenue".to_owned(),
        city: "Los Angeles".to_owned(),
        state: Some("CA".to_owned()),
        zip_code: Some("90001".to_owned()),
        country: "USA".to_owned(),
        is_primary: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_order(user_id: Uuid, address_id: Uuid) -> Order {
    let now = Utc::now();
    Order {
        id: Uuid::new_v4(),
        user_id,
        address_id,
        product_name: "Widget".to_owned(),
        product_description: Some("A test widget".to_owned()),
        product_price: 10.0,
        quantity: 3,
        total_amount: 30.0,
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}
