//! 顶点定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（由身份提供者分配，图内唯一且递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<N> {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名（图内唯一）
    name: N,
}

impl<N> Vertex<N> {
    /// 创建新顶点
    pub fn new(id: VertexId, name: N) -> Self {
        Self { id, name }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点名
    pub fn name(&self) -> &N {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex() {
        let v = Vertex::new(VertexId::new(1), "a");

        assert_eq!(v.id().as_u64(), 1);
        assert_eq!(v.name(), &"a");
        assert_eq!(VertexId::from(7).to_string(), "VertexId(7)");
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
    }
}
