//! Fixture loader: boots an empty schema into a known-good sample dataset.
//!
//! One-shot bootstrap routine for non-production environments. Three stages
//! (users, addresses, orders), each committed in its own transaction before
//! the next begins, so foreign keys created in earlier stages are resolvable
//! at insert time. Re-running without an intervening [`reset_schema`] fails
//! on the users' uniqueness constraints.

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, TransactionTrait};
use sea_orm_migration::MigratorTrait as _;
use tracing::info;
use uuid::Uuid;

use storefront_store_migration::Migrator;
use storefront_store_schema::{addresses, orders, users};

use crate::domain::types::{Address, Order, OrderStatus, User};
use crate::error::StoreError;

/// Drop every table, then re-run all migrations. Destructive and
/// unconditional; any connectivity error propagates.
pub async fn reset_schema(db: &DatabaseConnection) -> Result<(), StoreError> {
    Migrator::fresh(db).await.context("reset schema")?;
    Ok(())
}

/// The complete fixture graph, in insertion order.
pub struct Fixtures {
    pub users: Vec<User>,
    pub addresses: Vec<Address>,
    pub orders: Vec<Order>,
}

const SAMPLE_USERS: [(&str, &str, &str); 5] = [
    ("John Doe", "jdoe@example.com", "Постоянный клиент"),
    ("John Smith", "jSmith@example.com", "Новый клиент"),
    ("Alison Bree", "Alison@example.com", "VIP клиент"),
    ("Alfred Brown", "ABrown@example.com", "Корпоративный клиент"),
    ("Sam Winchester", "SWin@example.com", "Частый покупатель"),
];

const SAMPLE_PRODUCTS: [(&str, &str, f64); 5] = [
    ("Игровая консоль", "Последняя модель игровой консоли", 499.99),
    ("Камера", "Профессиональная цифровая камера", 1200.00),
    ("Монитор", "4K UHD монитор", 350.00),
    ("Клавиатура", "Механическая клавиатура", 150.00),
    ("Мышь", "Игровая мышь с подсветкой", 80.00),
];

const STATUS_ROTATION: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Completed,
    OrderStatus::Shipped,
    OrderStatus::Processing,
    OrderStatus::Delivered,
];

/// Build the fixture graph in memory. Ids are generated at construction time,
/// so every foreign key is known before anything is persisted.
pub fn sample_fixtures() -> Fixtures {
    let now = Utc::now();

    let users: Vec<User> = SAMPLE_USERS
        .iter()
        .map(|&(username, email, description)| User {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            email: email.to_owned(),
            description: description.to_owned(),
            created_at: now,
            updated_at: now,
        })
        .collect();

    let addresses: Vec<Address> = users
        .iter()
        .map(|user| {
            let first_token = user.username.split_whitespace().next().unwrap_or("");
            Address {
                id: Uuid::new_v4(),
                user_id: user.id,
                street: format!("456 {first_token} Avenue"),
                city: "Los Angeles".to_owned(),
                state: Some("CA".to_owned()),
                zip_code: Some("90001".to_owned()),
                country: "USA".to_owned(),
                is_primary: true,
                created_at: now,
                updated_at: now,
            }
        })
        .collect();

    let orders: Vec<Order> = users
        .iter()
        .zip(&addresses)
        .enumerate()
        .map(|(i, (user, address))| {
            let (name, description, price) = SAMPLE_PRODUCTS[i];
            let quantity = 2 + i as i32;
            Order {
                id: Uuid::new_v4(),
                user_id: user.id,
                address_id: address.id,
                product_name: name.to_owned(),
                product_description: Some(description.to_owned()),
                product_price: price,
                quantity,
                total_amount: price * quantity as f64,
                status: STATUS_ROTATION[i % STATUS_ROTATION.len()],
                created_at: now,
                updated_at: now,
            }
        })
        .collect();

    Fixtures {
        users,
        addresses,
        orders,
    }
}

/// Insert the sample dataset into a freshly reset schema.
///
/// No retry and no partial recovery: the first failing commit surfaces to the
/// caller and earlier stages stay committed.
pub async fn load_fixtures(db: &DatabaseConnection) -> Result<Fixtures, StoreError> {
    let fixtures = sample_fixtures();

    insert_users(db, &fixtures.users).await?;
    info!(count = fixtures.users.len(), "seeded users");

    insert_addresses(db, &fixtures.addresses).await?;
    info!(count = fixtures.addresses.len(), "seeded addresses");

    insert_orders(db, &fixtures.orders).await?;
    info!(count = fixtures.orders.len(), "seeded orders");

    Ok(fixtures)
}

async fn insert_users(db: &DatabaseConnection, rows: &[User]) -> Result<(), StoreError> {
    let txn = db.begin().await.context("begin users stage")?;
    for user in rows {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            description: Set(user.description.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&txn)
        .await
        .context("insert user")?;
    }
    txn.commit().await.context("commit users stage")?;
    Ok(())
}

async fn insert_addresses(db: &DatabaseConnection, rows: &[Address]) -> Result<(), StoreError> {
    let txn = db.begin().await.context("begin addresses stage")?;
    for address in rows {
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
        .insert(&txn)
        .await
        .context("insert address")?;
    }
    txn.commit().await.context("commit addresses stage")?;
    Ok(())
}

async fn insert_orders(db: &DatabaseConnection, rows: &[Order]) -> Result<(), StoreError> {
    let txn = db.begin().await.context("begin orders stage")?;
    for order in rows {
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
        .insert(&txn)
        .await
        .context("insert order")?;
    }
    txn.commit().await.context("commit orders stage")?;
    Ok(())
}
