//! 领域层统一错误定义
//!
//! 聚焦值对象/实体校验、事件载荷序列化与事件处理器失败等最小必要集合，
//! 便于调用方统一以 `DomainError` 处理。
//!
use std::fmt;

use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/载荷 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },

    // --- 事件系统 ---
    #[error("event handler error: handler={handler}, event_type={event_type}, reason={reason}")]
    EventHandler {
        handler: String,
        event_type: String,
        reason: String,
    },
    #[error("event handlers failed: event_type={event_type}, failures=[{}]", join_failures(.failures))]
    EventHandlers {
        event_type: String,
        failures: Vec<HandlerFailure>,
    },

    // --- 领域规则/状态 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

/// 单个处理器的失败记录（用于隔离模式下的汇总）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    pub handler: String,
    pub reason: String,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.handler, self.reason)
    }
}

fn join_failures(failures: &[HandlerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
