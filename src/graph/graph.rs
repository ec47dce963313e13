//! 无向图
//!
//! `(u, v)` 与 `(v, u)` 视为同一条边，只保存一次

use super::store::{GraphStore, Pairs};
use super::{pairwise_union, GraphOps, VertexKey};
use crate::config::GraphConfig;
use crate::identity::IdentityProvider;
use crate::types::{GraphKind, VertexName};
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// 无向图
#[derive(Debug, Clone)]
pub struct Graph<N = VertexName> {
    store: GraphStore<N>,
}

impl<N: VertexKey> Graph<N> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// 使用指定身份提供者创建空图
    pub fn with_identity(config: &GraphConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store: GraphStore::with_identity(GraphKind::Undirected, config, identity),
        }
    }
}

impl<N: VertexKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> super::sealed::Sealed for Graph<N> {}

impl<N: VertexKey> GraphOps for Graph<N> {
    type Name = N;
    type EdgeInput = (N, N);

    const KIND: GraphKind = GraphKind::Undirected;

    fn with_config(config: &GraphConfig) -> Self {
        Self {
            store: GraphStore::with_config(GraphKind::Undirected, config),
        }
    }

    fn store(&self) -> &GraphStore<N> {
        &self.store
    }

    /// 两个方向都不存在时才创建边
    fn append(&mut self, (from, to): (N, N)) {
        self.store.insert_edge(from, to);
    }

    fn add_vertex(&mut self, name: N) {
        self.store.add_vertex(name);
    }
}

impl<'a, N: VertexKey> Add<&'a Graph<N>> for &'a Graph<N> {
    type Output = Graph<N>;

    fn add(self, other: &'a Graph<N>) -> Graph<N> {
        pairwise_union(self, other)
    }
}

impl<N: VertexKey> Add for Graph<N> {
    type Output = Graph<N>;

    fn add(self, other: Graph<N>) -> Graph<N> {
        &self + &other
    }
}

impl<'a, N: VertexKey> IntoIterator for &'a Graph<N> {
    type Item = (&'a N, &'a N);
    type IntoIter = Pairs<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: VertexKey> FromIterator<(N, N)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N: VertexKey> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.store
            .fmt_with(f, "Graph", self.iter().collect::<Vec<_>>())
    }
}
