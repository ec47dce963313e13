//! 身份分配
//!
//! 为顶点和边分配单调递增、不重复的整数身份。身份只用于无向边端点的规范排序。

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// 身份提供者
///
/// 实现必须保证返回值严格递增且不复用。
pub trait IdentityProvider: Send + Sync + fmt::Debug {
    /// 分配下一个身份
    fn next_id(&self) -> u64;
}

/// 图私有的计数器，从 1 开始
#[derive(Debug)]
pub struct SequenceIdentity {
    next: AtomicU64,
}

impl SequenceIdentity {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SequenceIdentity {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

static PROCESS_NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// 进程级计数器，所有使用它的图共享同一序列
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIdentity;

impl IdentityProvider for ProcessIdentity {
    fn next_id(&self) -> u64 {
        PROCESS_NEXT_ID.fetch_add(1, Ordering::SeqCst)
    }
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// 图实例 ID（仅用于诊断输出）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(pub u64);

impl GraphId {
    /// 分配新的图实例 ID
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::SeqCst))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
