//! 图核心模块
//!
//! 定义顶点、边和三种图（无向、有向、带权）的核心数据结构

mod directed;
mod edge;
mod graph;
mod index;
mod store;
mod vertex;
mod weighted;

pub use directed::DirectedGraph;
pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use store::{Edges, GraphStore, Pairs};
pub use vertex::{Vertex, VertexId};
pub use weighted::WeightedGraph;

use crate::config::GraphConfig;
use crate::error::Result;
use crate::identity::GraphId;
use crate::types::GraphKind;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// 可作为顶点名的类型
pub trait VertexKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> VertexKey for T {}

mod sealed {
    /// 只有本 crate 的三种图实现 `GraphOps`
    pub trait Sealed {}
}

/// 三种图共有的操作
///
/// 存储只读暴露；写入只能经由 `append` 和 `add_vertex`，边的规范化规则因此由图类型决定。
pub trait GraphOps: sealed::Sealed + Sized {
    /// 顶点名类型
    type Name: VertexKey;

    /// `append` 接受的边元组
    type EdgeInput;

    /// 类型标签
    const KIND: GraphKind;

    /// 按配置创建空图
    fn with_config(config: &GraphConfig) -> Self;

    /// 底层存储（只读）
    fn store(&self) -> &GraphStore<Self::Name>;

    /// 添加边，缺失的端点自动创建
    fn append(&mut self, edge: Self::EdgeInput);

    /// 添加顶点，已存在时无操作
    fn add_vertex(&mut self, name: Self::Name);

    /// 从边序列构造
    fn from_edges<I: IntoIterator<Item = Self::EdgeInput>>(edges: I) -> Self {
        let mut graph = Self::with_config(&GraphConfig::default());
        graph.extend(edges);
        graph
    }

    /// 依次添加多条边
    fn extend<I: IntoIterator<Item = Self::EdgeInput>>(&mut self, edges: I) {
        for edge in edges {
            self.append(edge);
        }
    }

    fn kind(&self) -> GraphKind {
        Self::KIND
    }

    /// 图实例 ID
    fn id(&self) -> GraphId {
        self.store().id()
    }

    /// 按注册顺序遍历顶点名
    fn vertices(&self) -> indexmap::map::Keys<'_, Self::Name, Vertex<Self::Name>> {
        self.store().name_to_vertex().keys()
    }

    /// 图的阶（顶点数）
    fn order(&self) -> usize {
        self.store().vertex_count()
    }

    /// 所有边的端点名，按报告顺序
    fn edges(&self) -> Vec<(Self::Name, Self::Name)> {
        self.iter().map(|(a, b)| (a.clone(), b.clone())).collect()
    }

    /// 图的规模（边数）
    fn size(&self) -> usize {
        self.store().edge_count()
    }

    /// 借用端点名遍历边，顺序与 `edges()` 相同
    fn iter(&self) -> Pairs<'_, Self::Name> {
        Pairs(self.store().edges())
    }

    /// 边是否存在；有向图只匹配给定方向
    fn contains_edge(&self, from: &Self::Name, to: &Self::Name) -> bool {
        self.store().find_edge(from, to).is_some()
    }

    /// 通过名字获取顶点
    fn vertex(&self, name: &Self::Name) -> Result<&Vertex<Self::Name>> {
        self.store().vertex(name)
    }

    fn vertex_id(&self, name: &Self::Name) -> Result<VertexId> {
        self.store().vertex_id(name)
    }

    /// 名字到顶点的映射
    fn name_to_vertex(&self) -> &IndexMap<Self::Name, Vertex<Self::Name>> {
        self.store().name_to_vertex()
    }
}

/// 无向图和有向图的并：先左后右逐条添加，重复边折叠
pub(crate) fn pairwise_union<N, G>(left: &G, right: &G) -> G
where
    N: VertexKey,
    G: GraphOps<Name = N, EdgeInput = (N, N)>,
{
    let mut result = G::with_config(left.store().config());
    result.extend(left.edges());
    result.extend(right.edges());
    tracing::debug!(
        kind = %G::KIND,
        left = left.size(),
        right = right.size(),
        result = result.size(),
        "graph union"
    );
    result
}
