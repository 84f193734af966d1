//! 事件分发器（EventDispatcher）
//!
//! 维护 `HandlerRegistry`，在调用方线程上按注册顺序同步通知处理器：
//! - 未注册的事件类型、未找到的处理器一律视为空操作；
//! - 处理器失败时按 `FailurePolicy` 决定中止剩余处理器或隔离并汇总；
//! - 变更需 `&mut self`，不提供内部同步，跨线程使用需由调用方加锁。
//!
use super::{EventHandler, HandlerRegistry};
use crate::domain_event::{Event, EventPayload};
use crate::error::{DomainError, DomainResult, HandlerFailure};
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, trace, warn};

/// 处理器失败时的传播策略
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 第一个失败立即返回，剩余处理器不再调用
    #[default]
    Abort,
    /// 调用全部处理器，最后汇总所有失败
    Isolate,
}

/// 分发器配置
#[derive(Builder, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    #[builder(default)]
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Default)]
pub struct EventDispatcher {
    registry: HandlerRegistry,
    config: DispatcherConfig,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// 为事件类型追加处理器（允许重复注册）
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        debug!(event_type = %event_type, handler = handler.handler_name(), "register event handler");
        self.registry.insert(event_type, handler);
    }

    /// 以载荷类型的 `EVENT_TYPE` 作为键注册
    pub fn register_for<P>(&mut self, handler: Arc<dyn EventHandler>)
    where
        P: EventPayload,
    {
        self.register(P::EVENT_TYPE, handler);
    }

    /// 移除第一个同一实例的处理器；类型或处理器不存在时不做任何事
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) {
        let removed = self.registry.remove(event_type, handler);
        debug!(
            event_type,
            handler = handler.handler_name(),
            removed,
            "unregister event handler"
        );
    }

    /// 清空整个注册表（包括键）
    pub fn unregister_all(&mut self) {
        debug!(event_types = self.registry.len(), "unregister all event handlers");
        self.registry.clear();
    }

    /// 当前注册表的实时视图
    pub fn event_handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        self.registry.as_map()
    }

    pub fn handlers_for(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler>]> {
        self.registry.get(event_type)
    }

    /// 同步通知订阅了该事件类型的全部处理器
    pub fn notify(&self, event: &Event) -> DomainResult<()> {
        let event_type = event.event_type();
        let Some(handlers) = self.registry.get(event_type) else {
            trace!(event_type, "no handlers registered");
            return Ok(());
        };

        trace!(
            event_type,
            event_id = event.event_id(),
            handlers = handlers.len(),
            "notify event handlers"
        );

        match self.config.failure_policy {
            FailurePolicy::Abort => Self::notify_abort(handlers, event),
            FailurePolicy::Isolate => Self::notify_isolate(handlers, event),
        }
    }

    fn notify_abort(handlers: &[Arc<dyn EventHandler>], event: &Event) -> DomainResult<()> {
        for h in handlers {
            if let Err(err) = h.handle(event) {
                warn!(
                    event_type = event.event_type(),
                    handler = h.handler_name(),
                    error = %err,
                    "event handler failed, aborting remaining handlers"
                );
                return Err(DomainError::EventHandler {
                    handler: h.handler_name().to_string(),
                    event_type: event.event_type().to_string(),
                    reason: err.to_string(),
                });
            }
        }
        Ok(())
    }

    fn notify_isolate(handlers: &[Arc<dyn EventHandler>], event: &Event) -> DomainResult<()> {
        let failures: Vec<HandlerFailure> = handlers
            .iter()
            .filter_map(|h| {
                h.handle(event).err().map(|err| {
                    warn!(
                        event_type = event.event_type(),
                        handler = h.handler_name(),
                        error = %err,
                        "event handler failed"
                    );
                    HandlerFailure {
                        handler: h.handler_name().to_string(),
                        reason: err.to_string(),
                    }
                })
            })
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        Err(DomainError::EventHandlers {
            event_type: event.event_type().to_string(),
            failures,
        })
    }
}
