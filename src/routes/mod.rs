mod error;
mod health_check;
pub mod customer;
pub mod restaurant;
pub mod menu;
pub mod order;

pub use error::*;
pub use health_check::*;
