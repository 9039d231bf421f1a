mod customer;
mod restaurant;
mod menu;
mod orders;

pub use customer::*;
pub use restaurant::*;
pub use menu::*;
pub use orders::*;
