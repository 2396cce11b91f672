// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResponse;
use crate::domain::search::query::SearchQuery;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Index store returned status {status}: {message}")]
    Store { status: u16, message: String },
    #[error("Failed to parse index store response: {0}")]
    Parse(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    /// 错误类别，用于日志和指标标签
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Timeout => "timeout",
            Self::Store { .. } => "store",
            Self::Parse(_) => "parse",
            Self::InvalidQuery(_) => "invalid_query",
            Self::Config(_) => "config",
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// 搜索实体类型
///
/// 每种类型对应一个搜索策略以及聚合结果中的一个列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// 标签
    Tag,
    /// 分类
    Category,
    /// 文章
    Article,
}

impl SearchType {
    /// 获取类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Category => "category",
            Self::Article => "article",
        }
    }

    /// 所有支持的类型
    pub fn all() -> [SearchType; 3] {
        [Self::Tag, Self::Category, Self::Article]
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tag" => Ok(Self::Tag),
            "category" => Ok(Self::Category),
            "article" => Ok(Self::Article),
            other => Err(SearchError::InvalidQuery(format!(
                "unknown search type: {}",
                other
            ))),
        }
    }
}

/// 索引库返回的单条命中记录
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hit {
    /// 文档ID
    pub id: Option<String>,
    /// 原始文档
    pub source: serde_json::Value,
    /// 字段名 -> 高亮片段列表
    pub highlight: HashMap<String, Vec<String>>,
}

impl Hit {
    pub fn new(id: Option<String>, source: serde_json::Value) -> Self {
        Self {
            id,
            source,
            highlight: HashMap::new(),
        }
    }

    pub fn with_highlight(mut self, field: &str, fragments: Vec<String>) -> Self {
        self.highlight.insert(field.to_string(), fragments);
        self
    }
}

/// 索引库能力接口
///
/// 执行精确词条查询并返回带高亮元数据的命中结果。
/// 实现必须可被多个请求并发使用。
#[async_trait]
pub trait IndexStore: Send + Sync {
    /// 在指定索引上执行查询
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Hit>, SearchError>;

    /// Get the name of the index store
    fn name(&self) -> &'static str;
}

/// 搜索策略
///
/// 每种实体类型一个实现，结果只填充聚合结果中属于自己的列表。
/// 该方法从不返回错误：失败被记录并降级为空结果。
#[async_trait]
pub trait SearchStrategy: Send + Sync {
    /// 策略负责的实体类型
    fn kind(&self) -> SearchType;

    /// Perform a search query
    async fn search(&self, keyword: &str) -> SearchResponse;
}
