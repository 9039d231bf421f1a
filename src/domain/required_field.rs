// Text field that must be present and not blank
#[derive(Debug, Clone)]
pub struct RequiredField(String);

impl RequiredField{
    pub fn parse(value: Option<String>, field: &str) -> Result<RequiredField, String>{
        match value {
            Some(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(format!("{} is required", field))
        }
    }

    pub fn inner(self) -> String {
        self.0
    }
}
