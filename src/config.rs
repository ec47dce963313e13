//! 图配置
//!
//! 控制新建图的初始容量和身份提供者，可从 JSON 加载

use crate::error::{Error, Result};
use crate::identity::{IdentityProvider, ProcessIdentity, SequenceIdentity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// 身份分配模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// 每个图一个独立计数器
    #[default]
    PerGraph,
    /// 进程级共享计数器
    Process,
}

/// 图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 顶点注册表初始容量
    pub vertex_capacity: usize,
    /// 边存储初始容量
    pub edge_capacity: usize,
    /// 身份分配模式
    pub identity: IdentityMode,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 16,
            edge_capacity: 32,
            identity: IdentityMode::PerGraph,
        }
    }
}

impl GraphConfig {
    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::ConfigError(format!("解析配置失败: {}", e)))
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::SerializationError(format!("序列化配置失败: {}", e)))
    }

    /// 按配置创建身份提供者
    pub(crate) fn identity_provider(&self) -> Arc<dyn IdentityProvider> {
        match self.identity {
            IdentityMode::PerGraph => Arc::new(SequenceIdentity::new()),
            IdentityMode::Process => Arc::new(ProcessIdentity),
        }
    }
}
