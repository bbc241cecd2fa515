pub mod confirm;
pub mod filter;
pub mod permission;
pub mod role;
pub mod setting;
pub mod store;
pub mod user;
pub mod workspace;
