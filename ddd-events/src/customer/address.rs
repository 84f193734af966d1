use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 地址值对象
///
/// # 示例
///
/// ```
/// use ddd_events::customer::Address;
///
/// let address = Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap();
/// assert_eq!(address.to_string(), "Street 1, 123, 13330-250 São Paulo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        let required = [
            ("street", &self.street),
            ("zip", &self.zip),
            ("city", &self.city),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(DomainError::InvalidValue {
                reason: format!("address {field} is required"),
            });
        }
        if self.number == 0 {
            return Err(DomainError::InvalidValue {
                reason: "address number must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}
