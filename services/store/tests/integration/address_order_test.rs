use uuid::Uuid;

use storefront_store::error::StoreError;
use storefront_store::usecase::address::ListAddressesUseCase;
use storefront_store::usecase::order::ListOrdersUseCase;

use crate::helpers::{
    MockAddressRepo, MockOrderRepo, MockUserRepo, test_address, test_order, test_user,
};

// ── ListAddresses ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_the_users_addresses() {
    let user = test_user("alice");
    let other = test_user("bob");
    let addresses = vec![
        test_address(user.id),
        test_address(other.id),
        test_address(user.id),
    ];
    let usecase = ListAddressesUseCase {
        users: MockUserRepo::new(vec![user.clone(), other]),
        addresses: MockAddressRepo { addresses },
    };
    let listed = usecase.execute(user.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|a| a.user_id == user.id));
}

#[tokio::test]
async fn should_reject_address_listing_for_unknown_user() {
    let usecase = ListAddressesUseCase {
        users: MockUserRepo::empty(),
        addresses: MockAddressRepo { addresses: vec![] },
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::UserNotFound)));
}

#[tokio::test]
async fn should_return_empty_list_for_user_without_addresses() {
    let user = test_user("alice");
    let usecase = ListAddressesUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        addresses: MockAddressRepo { addresses: vec![] },
    };
    let listed = usecase.execute(user.id).await.unwrap();
    assert!(listed.is_empty());
}

// ── ListOrders ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_the_users_orders() {
    let user = test_user("alice");
    let other = test_user("bob");
    let address = test_address(user.id);
    let orders = vec![
        test_order(user.id, address.id),
        test_order(other.id, address.id),
    ];
    let usecase = ListOrdersUseCase {
        users: MockUserRepo::new(vec![user.clone(), other]),
        orders: MockOrderRepo { orders },
    };
    let listed = usecase.execute(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].user_id, user.id);
    assert_eq!(listed[0].total_amount, listed[0].product_price * listed[0].quantity as f64);
}

#[tokio::test]
async fn should_reject_order_listing_for_unknown_user() {
    let usecase = ListOrdersUseCase {
        users: MockUserRepo::empty(),
        orders: MockOrderRepo { orders: vec![] },
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::UserNotFound)));
}
