use std::ops::Deref;
use std::slice::Iter;
use std::vec::IntoIter;

use super::event::Event;
use crate::error::DomainResult;
use crate::eventing::EventDispatcher;

/// 实体累积的待发布事件集合，按发生顺序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainEvents {
    events: Vec<Event>,
}

impl DomainEvents {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// 追加一条事件
    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    /// 取出全部事件，原集合清空
    pub fn take(&mut self) -> Self {
        Self {
            events: std::mem::take(&mut self.events),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 按顺序逐条通知分发器，遇到第一个错误即停止
    pub fn publish(self, dispatcher: &EventDispatcher) -> DomainResult<()> {
        for event in &self.events {
            dispatcher.notify(event)?;
        }
        Ok(())
    }
}

impl IntoIterator for DomainEvents {
    type Item = Event;
    type IntoIter = IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a DomainEvents {
    type Item = &'a Event;
    type IntoIter = Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl Deref for DomainEvents {
    type Target = [Event];

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}
