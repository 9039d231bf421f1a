// Recognised order states. Transitions between them are unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus{
    Pending,
    Completed
}

impl OrderStatus{
    pub fn parse(status: Option<String>) -> Result<OrderStatus, String>{
        let status = match status {
            Some(status) => status,
            None => return Err("status is required".to_string())
        };

        match status.trim().to_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "COMPLETED" => Ok(OrderStatus::Completed),
            _ => Err(format!("{} is not a valid order status, expected PENDING or COMPLETED", status))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Completed => "COMPLETED"
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
