use super::ProductCreated;
use crate::domain_event::{DomainEvents, Event};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// 商品实体
#[derive(Debug, Clone)]
pub struct Product {
    id: String,
    name: String,
    description: String,
    price: f64,
    events: DomainEvents,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let mut product = Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            events: DomainEvents::default(),
        };
        product.validate()?;

        let created = ProductCreated {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        };
        product.events.record(Event::from_payload(&created)?);

        Ok(product)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "product id is required".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "product name is required".into(),
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidValue {
                reason: format!("product price must be a non-negative number, got {}", self.price),
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.price, price);
        if let Err(err) = self.validate() {
            self.price = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn take_events(&mut self) -> DomainEvents {
        self.events.take()
    }
}
