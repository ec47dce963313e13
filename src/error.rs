//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 由顶点名构造 `VertexNotFound`
    pub(crate) fn vertex_not_found<N: std::fmt::Debug>(name: &N) -> Self {
        Error::VertexNotFound(format!("{:?}", name))
    }

    /// 由端点名构造 `EdgeNotFound`
    pub(crate) fn edge_not_found<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        Error::EdgeNotFound(format!("({:?}, {:?})", from, to))
    }
}
