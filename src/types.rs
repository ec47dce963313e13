//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = f64;

/// 图（及其边）的类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// 无向图
    #[serde(rename = "nondirected")]
    Undirected,
    /// 有向图
    Directed,
    /// 带权无向图
    Weighted,
}

impl GraphKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::Undirected => "nondirected",
            GraphKind::Directed => "directed",
            GraphKind::Weighted => "weighted",
        }
    }

    /// 端点是否按给定顺序保存（不做规范化排序）
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 顶点名
///
/// 可比较的不透明值，整数或字符串。同一个图中可以混用两种名字。
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexName {
    Int(i64),
    Str(String),
}

impl VertexName {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VertexName::Str(s) => Some(s.as_str()),
            VertexName::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            VertexName::Int(n) => Some(*n),
            VertexName::Str(_) => None,
        }
    }
}

impl fmt::Debug for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexName::Int(n) => write!(f, "{}", n),
            VertexName::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexName::Int(n) => write!(f, "{}", n),
            VertexName::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for VertexName {
    fn from(s: &str) -> Self {
        VertexName::Str(s.to_string())
    }
}

impl From<String> for VertexName {
    fn from(s: String) -> Self {
        VertexName::Str(s)
    }
}

impl From<i64> for VertexName {
    fn from(n: i64) -> Self {
        VertexName::Int(n)
    }
}

impl From<i32> for VertexName {
    fn from(n: i32) -> Self {
        VertexName::Int(n as i64)
    }
}

impl From<u32> for VertexName {
    fn from(n: u32) -> Self {
        VertexName::Int(n as i64)
    }
}

/// 超出 `i64` 范围的值以十进制字符串保存
impl From<usize> for VertexName {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => VertexName::Int(n),
            Err(_) => VertexName::Str(n.to_string()),
        }
    }
}

impl PartialEq<&str> for VertexName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for VertexName {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}
