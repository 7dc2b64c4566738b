mod helpers;

mod address_order_test;
mod router_test;
mod user_test;
