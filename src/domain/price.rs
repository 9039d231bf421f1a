// Money amount: finite and never negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price{
    pub fn parse(price: f64) -> Result<Price, String>{
        if price.is_finite() && price >= 0.0 {
            Ok(Self(price))
        } else {
            Err(format!("{} is not a valid price, price must be a non-negative number", price))
        }
    }

    // Same as `parse` but for fields that must be present
    pub fn parse_required(price: Option<f64>, field: &str) -> Result<Price, String>{
        match price {
            Some(price) => Self::parse(price)
                .map_err(|e| format!("{}: {}", field, e)),
            None => Err(format!("{} is required", field))
        }
    }

    pub fn inner(&self) -> f64 {
        self.0
    }
}
