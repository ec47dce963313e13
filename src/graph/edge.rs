//! 边定义
//!
//! 无向边和带权边的端点按顶点 ID 升序规范排序，`(u, v)` 与 `(v, u)` 落在同一条记录上；
//! 有向边按给定顺序保存。

use crate::graph::vertex::VertexId;
use crate::types::{GraphKind, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 边类型
    kind: GraphKind,
    /// 较低端点（有向边为源顶点）
    lower: VertexId,
    /// 较高端点（有向边为目标顶点）
    higher: VertexId,
    /// 权重（仅带权边）
    weight: Option<Weight>,
}

impl Edge {
    /// 创建无向边
    pub fn undirected(id: EdgeId, a: VertexId, b: VertexId) -> Self {
        let (lower, higher) = Self::canonical(a, b);
        Self {
            id,
            kind: GraphKind::Undirected,
            lower,
            higher,
            weight: None,
        }
    }

    /// 创建有向边
    pub fn directed(id: EdgeId, src: VertexId, dst: VertexId) -> Self {
        Self {
            id,
            kind: GraphKind::Directed,
            lower: src,
            higher: dst,
            weight: None,
        }
    }

    /// 创建带权边
    pub fn weighted(id: EdgeId, a: VertexId, b: VertexId, weight: Weight) -> Self {
        let (lower, higher) = Self::canonical(a, b);
        Self {
            id,
            kind: GraphKind::Weighted,
            lower,
            higher,
            weight: Some(weight),
        }
    }

    /// 规范排序：ID 较小者在前
    pub fn canonical(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// 边在点对索引中的键
    pub fn pair_key(&self) -> (VertexId, VertexId) {
        (self.lower, self.higher)
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取边类型
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn lower(&self) -> VertexId {
        self.lower
    }

    pub fn higher(&self) -> VertexId {
        self.higher
    }

    /// 获取权重
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }
}
