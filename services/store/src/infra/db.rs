use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use storefront_store_schema::{addresses, orders, users};

use crate::domain::repository::{AddressRepository, OrderRepository, UserRepository};
use crate::domain::types::{Address, Order, OrderStatus, User};
use crate::error::StoreError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            description: Set(user.description.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(StoreError::UserAlreadyExists)
            }
            Err(e) => Err(anyhow!(e).context("create user").into()),
        }
    }

    async fn update_profile(
        &self,
        id: Uuid,
        username: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(new_username) = username {
            am.username = Set(new_username.to_owned());
        }
        if let Some(new_description) = description {
            am.description = Set(new_description.to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db)
            .await
            .context("update user profile")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let n = users::Entity::find()
            .count(&self.db)
            .await
            .context("count users")?;
        Ok(n)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Address repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAddressRepository {
    pub db: DatabaseConnection,
}

impl AddressRepository for DbAddressRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>, StoreError> {
        let models = addresses::Entity::find()
            .filter(addresses::Column::UserId.eq(user_id))
            .order_by_asc(addresses::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list addresses by user")?;
        Ok(models.into_iter().map(address_from_model).collect())
    }

    async fn create(&self, address: &Address) -> Result<(), StoreError> {
        addresses::ActiveModel {
            id: Set(address.id),
            user_id: Set(address.user_id),
            street: Set(address.street.clone()),
            city: Set(address.city.clone()),
            state: Set(address.state.clone()),
            zip_code: Set(address.zip_code.clone()),
            country: Set(address.country.clone()),
            is_primary: Set(address.is_primary),
            created_at: Set(address.created_at),
            updated_at: Set(address.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create address")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let n = addresses::Entity::find()
            .count(&self.db)
            .await
            .context("count addresses")?;
        Ok(n)
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        user_id: model.user_id,
        street: model.street,
        city: model.city,
        state: model.state,
        zip_code: model.zip_code,
        country: model.country,
        is_primary: model.is_primary,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, StoreError> {
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_asc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders by user")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn create(&self, order: &Order) -> Result<(), StoreError> {
        orders::ActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            address_id: Set(order.address_id),
            product_name: Set(order.product_name.clone()),
            product_description: Set(order.product_description.clone()),
            product_price: Set(order.product_price),
            quantity: Set(order.quantity),
            total_amount: Set(order.total_amount),
            status: Set(order.status.as_str().to_owned()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create order")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let n = orders::Entity::find()
            .count(&self.db)
            .await
            .context("count orders")?;
        Ok(n)
    }
}

fn order_from_model(model: orders::Model) -> Result<Order, StoreError> {
    let status = OrderStatus::parse(&model.status)
        .ok_or_else(|| anyhow!("unknown order status {:?}", model.status))?;
    Ok(Order {
        id: model.id,
        user_id: model.user_id,
        address_id: model.address_id,
        product_name: model.product_name,
        product_description: model.product_description,
        product_price: model.product_price,
        quantity: model.quantity,
        total_amount: model.total_amount,
        status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
