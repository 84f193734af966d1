use super::{Address, CustomerChangeAddress, CustomerCreated};
use crate::domain_event::{DomainEvents, Event};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// 客户实体
///
/// 创建与变更地址时把事件暂存到 `DomainEvents`，由调用方通过 `take_events` 取出发布。
#[derive(Debug, Clone)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
    events: DomainEvents,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let mut customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
            events: DomainEvents::default(),
        };
        customer.validate()?;

        let created = CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        };
        customer.events.record(Event::from_payload(&created)?);

        Ok(customer)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "customer id is required".into(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "customer name is required".into(),
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    /// 变更地址并记录 `CustomerChangeAddress` 事件
    pub fn change_address(&mut self, address: Address) -> DomainResult<()> {
        let changed = CustomerChangeAddress {
            id: self.id.clone(),
            name: self.name.clone(),
            address: address.clone(),
        };
        let event = Event::from_payload(&changed)?;

        self.address = Some(address);
        self.events.record(event);
        Ok(())
    }

    /// 激活客户；必须先有地址
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::InvalidState {
                reason: "address is mandatory to activate a customer".into(),
            });
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn take_events(&mut self) -> DomainEvents {
        self.events.take()
    }
}
