//! 有向图
//!
//! 端点按给定顺序保存，`(a, b)` 与 `(b, a)` 是两条不同的边。重复添加同一有序点对无操作。

use super::store::{GraphStore, Pairs};
use super::{pairwise_union, GraphOps, VertexKey};
use crate::config::GraphConfig;
use crate::identity::IdentityProvider;
use crate::types::{GraphKind, VertexName};
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// 有向图
#[derive(Debug, Clone)]
pub struct DirectedGraph<N = VertexName> {
    store: GraphStore<N>,
}

impl<N: VertexKey> DirectedGraph<N> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    pub fn with_identity(config: &GraphConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store: GraphStore::with_identity(GraphKind::Directed, config, identity),
        }
    }
}

impl<N: VertexKey> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> super::sealed::Sealed for DirectedGraph<N> {}

impl<N: VertexKey> GraphOps for DirectedGraph<N> {
    type Name = N;
    type EdgeInput = (N, N);

    const KIND: GraphKind = GraphKind::Directed;

    fn with_config(config: &GraphConfig) -> Self {
        Self {
            store: GraphStore::with_config(GraphKind::Directed, config),
        }
    }

    fn store(&self) -> &GraphStore<N> {
        &self.store
    }

    fn append(&mut self, (from, to): (N, N)) {
        self.store.insert_edge(from, to);
    }

    fn add_vertex(&mut self, name: N) {
        self.store.add_vertex(name);
    }
}

impl<'a, N: VertexKey> Add<&'a DirectedGraph<N>> for &'a DirectedGraph<N> {
    type Output = DirectedGraph<N>;

    fn add(self, other: &'a DirectedGraph<N>) -> DirectedGraph<N> {
        pairwise_union(self, other)
    }
}

impl<N: VertexKey> Add for DirectedGraph<N> {
    type Output = DirectedGraph<N>;

    fn add(self, other: DirectedGraph<N>) -> DirectedGraph<N> {
        &self + &other
    }
}

impl<'a, N: VertexKey> IntoIterator for &'a DirectedGraph<N> {
    type Item = (&'a N, &'a N);
    type IntoIter = Pairs<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: VertexKey> FromIterator<(N, N)> for DirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N: VertexKey> fmt::Display for DirectedGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.store
            .fmt_with(f, "DirectedGraph", self.iter().collect::<Vec<_>>())
    }
}
