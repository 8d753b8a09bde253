pub mod auth;
pub mod driver;
pub mod menu_item;
pub mod notification;
pub mod order;
pub mod restaurant;
pub mod user;

mod router;
pub use router::get_router;
