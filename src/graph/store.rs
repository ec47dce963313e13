//! 图存储
//!
//! 三种图共用的组合层：顶点注册表 + 边存储 + 身份提供者

use super::edge::{Edge, EdgeId};
use super::index::{EdgeStore, VertexRegistry};
use super::vertex::{Vertex, VertexId};
use super::VertexKey;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::identity::{GraphId, IdentityProvider};
use crate::types::{GraphKind, Weight};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// 图存储
///
/// 图类型在创建时固定，边的端点规范化和去重规则都由它决定。
/// 写操作只对所属的图开放。
#[derive(Debug, Clone)]
pub struct GraphStore<N> {
    /// 图实例 ID
    id: GraphId,
    /// 图类型
    kind: GraphKind,
    /// 创建时使用的配置
    config: GraphConfig,
    /// 身份提供者
    identity: Arc<dyn IdentityProvider>,
    /// 顶点注册表
    vertices: VertexRegistry<N>,
    /// 边存储
    edges: EdgeStore,
}

impl<N: VertexKey> GraphStore<N> {
    /// 按配置创建空存储
    pub(crate) fn with_config(kind: GraphKind, config: &GraphConfig) -> Self {
        Self::with_identity(kind, config, config.identity_provider())
    }

    /// 使用指定身份提供者创建空存储
    pub(crate) fn with_identity(
        kind: GraphKind,
        config: &GraphConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            id: GraphId::next(),
            kind,
            config: config.clone(),
            identity,
            vertices: VertexRegistry::with_capacity(config.vertex_capacity),
            edges: EdgeStore::with_capacity(config.edge_capacity),
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点；已存在时返回已有 ID
    pub(crate) fn add_vertex(&mut self, name: N) -> VertexId {
        let identity = &self.identity;
        let (id, created) = self
            .vertices
            .register(name, || VertexId::new(identity.next_id()));
        if created {
            trace!(graph = %self.id, vertex = %id, "registered vertex");
        }
        id
    }

    /// 通过名字获取顶点
    pub fn vertex(&self, name: &N) -> Result<&Vertex<N>> {
        self.vertices
            .get(name)
            .ok_or_else(|| Error::vertex_not_found(name))
    }

    pub fn vertex_id(&self, name: &N) -> Result<VertexId> {
        self.vertex(name).map(Vertex::id)
    }

    /// 名字到顶点的映射视图
    pub fn name_to_vertex(&self) -> &IndexMap<N, Vertex<N>> {
        self.vertices.as_map()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 点对索引键：有向图保持顺序，其余按 ID 规范排序
    fn pair_key(&self, a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if self.kind.is_directed() {
            (a, b)
        } else {
            Edge::canonical(a, b)
        }
    }

    /// 插入无权边（无向图或有向图）
    pub(crate) fn insert_edge(&mut self, from: N, to: N) -> bool {
        let directed = self.kind.is_directed();
        self.insert_with(from, to, |id, src, dst| {
            if directed {
                Edge::directed(id, src, dst)
            } else {
                Edge::undirected(id, src, dst)
            }
        })
    }

    /// 插入带权边
    pub(crate) fn insert_weighted_edge(&mut self, from: N, to: N, weight: Weight) -> bool {
        self.insert_with(from, to, |id, src, dst| Edge::weighted(id, src, dst, weight))
    }

    /// 缺失的端点自动创建；点对已存在时不做修改并返回 false
    fn insert_with<F>(&mut self, from: N, to: N, build: F) -> bool
    where
        F: FnOnce(EdgeId, VertexId, VertexId) -> Edge,
    {
        let src = self.add_vertex(from);
        let dst = self.add_vertex(to);

        if self.edges.contains(self.pair_key(src, dst)) {
            trace!(graph = %self.id, src = %src, dst = %dst, "edge already present, skipped");
            return false;
        }

        let id = EdgeId::new(self.identity.next_id());
        let edge = build(id, src, dst);
        debug!(
            graph = %self.id,
            kind = %self.kind,
            lower = %edge.lower(),
            higher = %edge.higher(),
            edge = %id,
            "created edge"
        );
        self.edges.insert(edge)
    }

    /// 查找连接两个顶点的边；任一顶点不存在时返回 None
    ///
    /// 有向图只匹配给定方向，其余不区分方向。
    pub fn find_edge(&self, from: &N, to: &N) -> Option<&Edge> {
        let src = self.vertices.get(from)?.id();
        let dst = self.vertices.get(to)?.id();
        self.edges.get(self.pair_key(src, dst))
    }

    /// 按报告顺序遍历边
    pub fn edges(&self) -> Edges<'_, N> {
        Edges {
            vertices: &self.vertices,
            edges: &self.edges,
            position: 0,
            higher: None,
            incident: (&[] as &[usize]).iter(),
        }
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 诊断输出
    pub(crate) fn fmt_with<T: fmt::Debug>(
        &self,
        f: &mut fmt::Formatter<'_>,
        type_name: &str,
        edges: T,
    ) -> fmt::Result {
        write!(
            f,
            "{}(id={}, type={}, edges={:?})",
            type_name, self.id, self.kind, edges
        )
    }
}

/// 报告顺序的边迭代器
///
/// 按较高端点的注册顺序分组，组内按插入顺序，产出 `(较低端点名, 较高端点名, 边)`。
pub struct Edges<'a, N> {
    vertices: &'a VertexRegistry<N>,
    edges: &'a EdgeStore,
    position: usize,
    higher: Option<&'a Vertex<N>>,
    incident: std::slice::Iter<'a, usize>,
}

impl<'a, N: VertexKey> Iterator for Edges<'a, N> {
    type Item = (&'a N, &'a N, &'a Edge);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(higher) = self.higher {
                if let Some(&i) = self.incident.next() {
                    let Some(edge) = self.edges.at(i) else {
                        continue;
                    };
                    let Some(lower) = self.vertices.get_by_id(edge.lower()) else {
                        continue;
                    };
                    return Some((lower.name(), higher.name(), edge));
                }
            }

            let vertex = self.vertices.get_index(self.position)?;
            self.position += 1;
            self.higher = Some(vertex);
            self.incident = self.edges.higher_positions(vertex.id()).iter();
        }
    }
}

/// 边的端点名迭代器
pub struct Pairs<'a, N>(pub(crate) Edges<'a, N>);

impl<'a, N: VertexKey> Iterator for Pairs<'a, N> {
    type Item = (&'a N, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(lower, higher, _)| (lower, higher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequenceIdentity;

    /// RUST_LOG=unigraph=trace 时输出边创建日志
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn store(kind: GraphKind) -> GraphStore<&'static str> {
        GraphStore::with_config(kind, &GraphConfig::default())
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut s = store(GraphKind::Undirected);
        let a = s.add_vertex("a");
        let b = s.add_vertex("b");
        assert_eq!(s.add_vertex("a"), a);
        assert!(a < b);
        assert_eq!(s.vertex_count(), 2);
        assert_eq!(s.vertex_id(&"b").unwrap(), b);
    }

    #[test]
    fn test_unknown_vertex() {
        let s = store(GraphKind::Undirected);
        let err = s.vertex(&"missing").unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(_)));
    }

    #[test]
    fn test_insert_edge_kinds() {
        init_tracing();
        let mut s = store(GraphKind::Undirected);
        assert!(s.insert_edge("b", "a"));
        assert!(!s.insert_edge("a", "b"));
        assert!(s.find_edge(&"a", &"b").is_some());

        let mut d = store(GraphKind::Directed);
        assert!(d.insert_edge("a", "b"));
        assert!(d.insert_edge("b", "a"));
        assert!(!d.insert_edge("a", "b"));
        assert_eq!(d.edge_count(), 2);
        assert!(d.find_edge(&"b", &"a").is_some());
    }

    #[test]
    fn test_weighted_edge_keeps_first_weight() {
        let mut w = store(GraphKind::Weighted);
        assert!(w.insert_weighted_edge("a", "b", 2.5));
        assert!(!w.insert_weighted_edge("b", "a", 9.0));

        let edge = w.find_edge(&"b", &"a").unwrap();
        assert_eq!(edge.kind(), GraphKind::Weighted);
        assert_eq!(edge.weight(), Some(2.5));
    }

    #[test]
    fn test_edges_report_order() {
        let mut s = store(GraphKind::Directed);
        s.insert_edge("c", "a");
        s.insert_edge("a", "b");
        s.insert_edge("b", "c");

        let pairs: Vec<_> = Pairs(s.edges()).map(|(x, y)| (*x, *y)).collect();
        assert_eq!(pairs, vec![("b", "c"), ("c", "a"), ("a", "b")]);
    }

    #[test]
    fn test_shared_identity_provider() {
        let ids: Arc<dyn IdentityProvider> = Arc::new(SequenceIdentity::starting_at(10));
        let config = GraphConfig::default();
        let mut g = GraphStore::with_identity(GraphKind::Undirected, &config, ids.clone());
        let mut h = GraphStore::with_identity(GraphKind::Directed, &config, ids);

        let a = g.add_vertex("a");
        let b = h.add_vertex("b");
        assert_eq!(a.as_u64(), 10);
        assert_eq!(b.as_u64(), 11);
    }
}
