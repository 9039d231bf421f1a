pub mod required_field;
pub mod price;
pub mod order_quantity;
pub mod order_status;

pub use required_field::RequiredField;
pub use price::Price;
pub use order_quantity::OrderQuantity;
pub use order_status::OrderStatus;
