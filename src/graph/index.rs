//! 图索引
//!
//! 顶点注册表和边存储，支持按名字、ID 和点对快速查找

use crate::graph::edge::Edge;
use crate::graph::vertex::{Vertex, VertexId};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::Hash;

/// 顶点注册表
///
/// 名字到顶点的映射，保持注册顺序。
#[derive(Debug, Clone)]
pub(crate) struct VertexRegistry<N> {
    /// 顶点名到顶点的映射
    by_name: IndexMap<N, Vertex<N>>,
    /// 顶点 ID 到注册位置的映射
    by_id: HashMap<VertexId, usize>,
}

impl<N: Clone + Eq + Hash> VertexRegistry<N> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_name: IndexMap::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
        }
    }

    /// 注册顶点；名字已存在时返回已有顶点的 ID
    pub fn register(&mut self, name: N, id: impl FnOnce() -> VertexId) -> (VertexId, bool) {
        if let Some(existing) = self.by_name.get(&name) {
            return (existing.id(), false);
        }
        let id = id();
        let position = self.by_name.len();
        self.by_name.insert(name.clone(), Vertex::new(id, name));
        self.by_id.insert(id, position);
        (id, true)
    }

    /// 通过名字查找顶点
    pub fn get(&self, name: &N) -> Option<&Vertex<N>> {
        self.by_name.get(name)
    }

    /// 通过 ID 查找顶点
    pub fn get_by_id(&self, id: VertexId) -> Option<&Vertex<N>> {
        let position = *self.by_id.get(&id)?;
        self.get_index(position)
    }

    /// 按注册位置获取顶点
    pub fn get_index(&self, position: usize) -> Option<&Vertex<N>> {
        self.by_name.get_index(position).map(|(_, v)| v)
    }

    /// 名字到顶点的映射视图
    pub fn as_map(&self) -> &IndexMap<N, Vertex<N>> {
        &self.by_name
    }

    /// 获取顶点数量
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

/// 边存储
///
/// 每个点对至多一条边。点对键由调用方决定：无向边用规范排序后的端点，有向边用 (src, dst)。
#[derive(Debug, Clone, Default)]
pub(crate) struct EdgeStore {
    /// 按插入顺序保存的边
    edges: Vec<Edge>,
    /// 点对到边位置的映射
    pair_to_edge: HashMap<(VertexId, VertexId), usize>,
    /// 较高端点到边位置列表的映射
    by_higher: HashMap<VertexId, Vec<usize>>,
}

impl EdgeStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            pair_to_edge: HashMap::with_capacity(capacity),
            by_higher: HashMap::new(),
        }
    }

    /// 插入边；点对已存在时不做任何修改并返回 false
    pub fn insert(&mut self, edge: Edge) -> bool {
        let key = edge.pair_key();
        if self.pair_to_edge.contains_key(&key) {
            return false;
        }
        let position = self.edges.len();
        self.pair_to_edge.insert(key, position);
        self.by_higher
            .entry(edge.higher())
            .or_insert_with(Vec::new)
            .push(position);
        self.edges.push(edge);
        true
    }

    /// 通过点对键查找边
    pub fn get(&self, key: (VertexId, VertexId)) -> Option<&Edge> {
        self.pair_to_edge.get(&key).map(|&i| &self.edges[i])
    }

    pub fn contains(&self, key: (VertexId, VertexId)) -> bool {
        self.pair_to_edge.contains_key(&key)
    }

    /// 以该顶点为较高端点的边的位置，按插入顺序
    pub fn higher_positions(&self, vertex_id: VertexId) -> &[usize] {
        self.by_higher
            .get(&vertex_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 按位置获取边
    pub fn at(&self, position: usize) -> Option<&Edge> {
        self.edges.get(position)
    }

    /// 获取边数量
    pub fn len(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::EdgeId;

    #[test]
    fn test_vertex_registry() {
        let mut registry = VertexRegistry::with_capacity(0);
        let mut next = 0;
        let mut id = || {
            next += 1;
            VertexId::new(next)
        };

        let (a, created) = registry.register("a", &mut id);
        assert!(created);
        let (b, _) = registry.register("b", &mut id);
        let (again, created) = registry.register("a", &mut id);
        assert!(!created);
        assert_eq!(again, a);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&"b").map(|v| v.id()), Some(b));
        assert_eq!(registry.get_by_id(a).map(|v| *v.name()), Some("a"));
        assert_eq!(registry.as_map().keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(registry.get(&"c").is_none());
    }

    #[test]
    fn test_edge_store_pair_uniqueness() {
        let mut store = EdgeStore::default();
        let a = VertexId::new(1);
        let b = VertexId::new(2);

        assert!(store.insert(Edge::undirected(EdgeId::new(1), a, b)));
        assert!(!store.insert(Edge::undirected(EdgeId::new(2), b, a)));
        assert_eq!(store.len(), 1);
        assert!(store.contains((a, b)));
        assert!(!store.contains((b, a)));
        assert_eq!(store.get((a, b)).map(|e| e.id()), Some(EdgeId::new(1)));
    }

    #[test]
    fn test_edge_store_by_higher() {
        let mut store = EdgeStore::default();
        let (a, b, c) = (VertexId::new(1), VertexId::new(2), VertexId::new(3));

        store.insert(Edge::directed(EdgeId::new(1), a, c));
        store.insert(Edge::directed(EdgeId::new(2), c, b));
        store.insert(Edge::directed(EdgeId::new(3), b, c));

        let into_c: Vec<_> = store
            .higher_positions(c)
            .iter()
            .filter_map(|&i| store.at(i))
            .map(|e| e.id().as_u64())
            .collect();
        assert_eq!(into_c, vec![1, 3]);
        assert!(store.higher_positions(a).is_empty());
    }
}
