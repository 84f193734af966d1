//! 处理器注册表（HandlerRegistry）
//!
//! 事件类型名 → 处理器序列。序列顺序即通知顺序；同一处理器重复注册会产生两个条目。
//! 移除单个处理器不会删除键，只有 `clear` 会。
//!
use super::EventHandler;
use std::{collections::HashMap, fmt, sync::Arc};

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    by_type: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加处理器；类型不存在时先建立空序列
    pub fn insert(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        self.by_type.entry(event_type.into()).or_default().push(handler);
    }

    /// 移除第一个与 `handler` 为同一实例的条目，返回是否移除
    pub fn remove(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) -> bool {
        let Some(list) = self.by_type.get_mut(event_type) else {
            return false;
        };

        match list.iter().position(|h| Arc::ptr_eq(h, handler)) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.by_type.clear();
    }

    /// 未注册过的类型返回 `None`，区别于“已注册但为空”
    pub fn get(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler>]> {
        self.by_type.get(event_type).map(Vec::as_slice)
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.by_type
    }

    /// 已登记的事件类型数量
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.by_type {
            let names: Vec<&str> = handlers.iter().map(|h| h.handler_name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}
