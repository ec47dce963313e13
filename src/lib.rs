//! unigraph - 内存图容器库
//!
//! 三种简单图，共享同一套顶点注册和边存储：
//! - 无向图 `Graph`
//! - 有向图 `DirectedGraph`
//! - 带权无向图 `WeightedGraph`，并集时共同边权重相加
//!
//! 图之间可以用 `+` 求并集，结果是新图，两个操作数保持不变。

pub mod config;
pub mod error;
pub mod graph;
pub mod identity;
pub mod sync;
pub mod types;

// 重导出常用类型
pub use config::{GraphConfig, IdentityMode};
pub use error::{Error, Result};
pub use graph::{
    DirectedGraph, Edge, EdgeId, Graph, GraphOps, Vertex, VertexId, VertexKey, WeightedGraph,
};
pub use identity::{GraphId, IdentityProvider, ProcessIdentity, SequenceIdentity};
pub use sync::SharedGraph;
pub use types::{GraphKind, VertexName, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
