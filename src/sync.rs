//! 跨线程共享图
//!
//! 整个图外包一把读写锁，读操作并发，写操作互斥。

use crate::graph::GraphOps;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::ops::Add;
use std::sync::Arc;

/// 可克隆的共享图句柄
#[derive(Debug, Default)]
pub struct SharedGraph<G> {
    inner: Arc<RwLock<G>>,
}

impl<G> Clone for SharedGraph<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G> SharedGraph<G> {
    pub fn new(graph: G) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// 获取读锁
    pub fn read(&self) -> RwLockReadGuard<'_, G> {
        self.inner.read()
    }

    /// 获取写锁
    pub fn write(&self) -> RwLockWriteGuard<'_, G> {
        self.inner.write()
    }

    /// 两个句柄是否指向同一个图
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<G: Clone> SharedGraph<G> {
    /// 当前内容的独立副本
    pub fn snapshot(&self) -> G {
        self.inner.read().clone()
    }
}

impl<G: GraphOps> SharedGraph<G> {
    pub fn append(&self, edge: G::EdgeInput) {
        self.inner.write().append(edge);
    }

    /// 在一次写锁内添加多条边
    pub fn extend<I: IntoIterator<Item = G::EdgeInput>>(&self, edges: I) {
        self.inner.write().extend(edges);
    }

    pub fn order(&self) -> usize {
        self.inner.read().order()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn contains_edge(&self, from: &G::Name, to: &G::Name) -> bool {
        self.inner.read().contains_edge(from, to)
    }
}

impl<G> SharedGraph<G>
where
    for<'a> &'a G: Add<&'a G, Output = G>,
{
    /// 在两侧读锁下计算并集，结果是新的共享图
    ///
    /// 读锁按锁地址升序获取，`g.union(&h)` 与 `h.union(&g)` 并发时不会互相等待。
    pub fn union(&self, other: &Self) -> Self {
        // 同一把锁不重复加读锁
        if self.ptr_eq(other) {
            let guard = self.inner.read();
            return Self::new(&*guard + &*guard);
        }

        if Arc::as_ptr(&self.inner) < Arc::as_ptr(&other.inner) {
            let left = self.inner.read();
            let right = other.inner.read();
            Self::new(&*left + &*right)
        } else {
            let right = other.inner.read();
            let left = self.inner.read();
            Self::new(&*left + &*right)
        }
    }
}

impl<G> From<G> for SharedGraph<G> {
    fn from(graph: G) -> Self {
        Self::new(graph)
    }
}
