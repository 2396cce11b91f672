// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::search::engine::SearchType;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、索引库、搜索策略和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Elasticsearch 配置
    pub elasticsearch: ElasticsearchSettings,
    /// 搜索配置
    pub search: SearchSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Elasticsearch 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ElasticsearchSettings {
    /// 集群地址
    pub url: String,
    /// 用户名
    pub username: Option<String>,
    /// 密码
    pub password: Option<String>,
    /// 请求超时时间（毫秒）
    pub timeout_ms: u64,
    /// 每次查询返回的最大命中数
    pub max_results: usize,
}

/// 索引库后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBackend {
    /// Elasticsearch
    Elasticsearch,
    /// 内存索引（开发和测试用）
    Memory,
}

/// 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 索引库后端
    pub backend: SearchBackend,
    /// 高亮前缀
    pub pre_tag: String,
    /// 高亮后缀
    pub post_tag: String,
    /// 启用的搜索类型
    pub enabled: Vec<String>,
    /// 每种实体对应的索引名
    pub indices: IndexSettings,
}

/// 索引名配置
#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    pub tag: String,
    pub category: String,
    pub article: String,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Self::environment());

        builder.build()?.try_deserialize()
    }

    /// `SITESEARCH__*` 环境变量源
    ///
    /// `SITESEARCH__SEARCH__ENABLED=tag,category` 按逗号拆分为列表
    fn environment() -> Environment {
        Environment::with_prefix("SITESEARCH")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("search.enabled")
            .try_parsing(true)
    }

    /// 仅使用内置默认值构建配置
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Default server settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            // Default Elasticsearch settings
            .set_default("elasticsearch.url", "http://localhost:9200")?
            .set_default("elasticsearch.timeout_ms", 5000)?
            .set_default("elasticsearch.max_results", 10)?
            // Default search settings
            .set_default("search.backend", "elasticsearch")?
            .set_default("search.pre_tag", r#"<span style="color:red">"#)?
            .set_default("search.post_tag", "</span>")?
            .set_default("search.enabled", vec!["tag", "category", "article"])?
            .set_default("search.indices.tag", "tag")?
            .set_default("search.indices.category", "category")?
            .set_default("search.indices.article", "article")?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}

impl SearchSettings {
    /// 根据实体类型获取索引名
    pub fn index_for(&self, kind: SearchType) -> &str {
        match kind {
            SearchType::Tag => &self.indices.tag,
            SearchType::Category => &self.indices.category,
            SearchType::Article => &self.indices.article,
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
