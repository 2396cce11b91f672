// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResponse;
use crate::domain::search::engine::{Hit, IndexStore, SearchError, SearchType};
use crate::domain::search::query::SearchQuery;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// 可被搜索的文档
///
/// 描述一种实体的搜索配置：查询字段、结果类型以及聚合结果中的位置
pub trait SearchDocument: DeserializeOwned + Serialize + Send + Sync + 'static {
    /// 实体类型
    const KIND: SearchType;

    /// 精确匹配并高亮的字段名
    const FIELD: &'static str;

    /// 用高亮片段替换查询字段的值
    fn apply_highlight(&mut self, fragment: String);

    /// 放入聚合结果对应的列表
    fn into_response(items: Vec<Self>) -> SearchResponse;
}

/// 结果映射器
pub struct ResultMapper<'a> {
    store: &'a dyn IndexStore,
}

impl<'a> ResultMapper<'a> {
    pub fn new(store: &'a dyn IndexStore) -> Self {
        Self { store }
    }

    /// 执行查询并映射命中结果，保持索引库返回顺序
    pub async fn execute<D: SearchDocument>(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> Result<Vec<D>, SearchError> {
        let hits = self.store.search(index, query).await?;
        debug!(
            "Index store {} returned {} hits for {}={}",
            self.store.name(),
            hits.len(),
            query.field(),
            query.term()
        );

        hits.into_iter()
            .map(|hit| map_hit(hit, query.field()))
            .collect()
    }
}

/// 将单条命中反序列化为文档，并用第一个高亮片段替换查询字段
///
/// 没有高亮片段时保留原值。`_source` 不含 `id` 时使用命中的 `_id`
pub fn map_hit<D: SearchDocument>(mut hit: Hit, field: &str) -> Result<D, SearchError> {
    if let (Some(id), Some(source)) = (hit.id.as_deref(), hit.source.as_object_mut()) {
        if !source.contains_key("id") {
            let value = id
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(id));
            source.insert("id".to_string(), value);
        }
    }

    let mut document: D = serde_json::from_value(hit.source)?;

    if let Some(fragment) = hit
        .highlight
        .remove(field)
        .and_then(|fragments| fragments.into_iter().next())
    {
        document.apply_highlight(fragment);
    }

    Ok(document)
}
