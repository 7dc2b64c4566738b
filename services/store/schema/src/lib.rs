pub mod addresses;
pub mod orders;
pub mod users;
