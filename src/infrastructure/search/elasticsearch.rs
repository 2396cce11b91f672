// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ElasticsearchSettings;
use crate::domain::search::engine::{Hit, IndexStore, SearchError};
use crate::domain::search::query::SearchQuery;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Elasticsearch `_search` 响应中用到的部分
#[derive(Debug, Deserialize)]
struct EsSearchResponse {
    hits: EsHits,
}

#[derive(Debug, Deserialize)]
struct EsHits {
    #[serde(default)]
    hits: Vec<EsHit>,
}

#[derive(Debug, Deserialize)]
struct EsHit {
    #[serde(rename = "_id")]
    id: Option<String>,
    #[serde(rename = "_source", default)]
    source: Value,
    #[serde(default)]
    highlight: HashMap<String, Vec<String>>,
}

impl From<EsHit> for Hit {
    fn from(hit: EsHit) -> Self {
        Hit {
            id: hit.id,
            source: hit.source,
            highlight: hit.highlight,
        }
    }
}

/// Elasticsearch 索引库客户端
///
/// 内部的 `reqwest::Client` 自带连接池，可在多个请求间共享
pub struct ElasticsearchStore {
    client: reqwest::Client,
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
    max_results: usize,
}

impl ElasticsearchStore {
    pub fn new(settings: &ElasticsearchSettings) -> Result<Self, SearchError> {
        let mut base_url = Url::parse(&settings.url)
            .map_err(|e| SearchError::Config(format!("invalid elasticsearch url: {}", e)))?;
        // Url::join drops the last path segment unless the base ends with '/'
        let path = format!("{}/", base_url.path().trim_end_matches('/'));
        base_url.set_path(&path);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            username: settings.username.clone(),
            password: settings.password.clone(),
            max_results: settings.max_results,
        })
    }

    /// 构造 `_search` 请求体
    ///
    /// bool 查询中只有一个 term 子句，字段按 keyword 整体匹配；
    /// 对每个高亮字段设置前后缀
    pub fn build_request_body(&self, query: &SearchQuery) -> Value {
        let mut fields = Map::new();
        for field in query.highlight_fields() {
            fields.insert(
                field.clone(),
                json!({
                    "pre_tags": [query.pre_tag()],
                    "post_tags": [query.post_tag()],
                }),
            );
        }

        let mut term = Map::new();
        term.insert(query.field().to_string(), Value::from(query.term()));

        json!({
            "size": self.max_results,
            "query": {
                "bool": {
                    "must": [
                        { "term": term }
                    ]
                }
            },
            "highlight": {
                "fields": fields
            }
        })
    }

    fn search_url(&self, index: &str) -> Result<Url, SearchError> {
        self.base_url
            .join(&format!("{}/_search", index))
            .map_err(|e| SearchError::InvalidQuery(format!("invalid index name {}: {}", index, e)))
    }
}

fn transport_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(err.to_string())
    }
}

#[async_trait]
impl IndexStore for ElasticsearchStore {
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Hit>, SearchError> {
        let url = self.search_url(index)?;
        let body = self.build_request_body(query);
        debug!("POST {} {}", url, body);

        let mut request = self.client.post(url).json(&body);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(SearchError::Store {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: EsSearchResponse = serde_json::from_str(&text)?;
        Ok(parsed.hits.hits.into_iter().map(Hit::from).collect())
    }

    fn name(&self) -> &'static str {
        "elasticsearch"
    }
}
