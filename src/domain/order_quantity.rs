// Number of units of a menu item in an order line, at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuantity(i32);

impl OrderQuantity{
    pub fn parse(quantity: i32) -> Result<OrderQuantity, String>{
        if quantity > 0 {
            Ok(Self(quantity))
        } else {
            Err(format!("{} is not a valid quantity, quantity must be at least 1", quantity))
        }
    }

    pub fn inner(&self) -> i32 {
        self.0
    }
}
