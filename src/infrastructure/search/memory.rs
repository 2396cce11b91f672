// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{Hit, IndexStore, SearchError};
use crate::domain::search::highlight::HighlightTags;
use crate::domain::search::query::SearchQuery;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

/// 内存索引库
///
/// 对 keyword 字段做整体精确匹配，并把整个字段值包裹为高亮片段。
/// 按写入顺序返回命中结果。
#[derive(Default)]
pub struct InMemoryIndexStore {
    indices: DashMap<String, Vec<(String, Value)>>,
}

impl InMemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一条文档
    pub fn index_document(&self, index: &str, id: impl Into<String>, document: Value) {
        self.indices
            .entry(index.to_string())
            .or_default()
            .push((id.into(), document));
    }

    pub fn document_count(&self, index: &str) -> usize {
        self.indices.get(index).map(|docs| docs.len()).unwrap_or(0)
    }
}

fn keyword_value<'a>(document: &'a Value, field: &str) -> Option<&'a str> {
    document.get(field).and_then(Value::as_str)
}

#[async_trait]
impl IndexStore for InMemoryIndexStore {
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Hit>, SearchError> {
        let Some(documents) = self.indices.get(index) else {
            return Ok(Vec::new());
        };

        let tags = HighlightTags::new(query.pre_tag(), query.post_tag());
        let hits = documents
            .iter()
            .filter(|(_, document)| keyword_value(document, query.field()) == Some(query.term()))
            .map(|(id, document)| {
                let mut hit = Hit::new(Some(id.clone()), document.clone());
                for field in query.highlight_fields() {
                    if keyword_value(document, field) == Some(query.term()) {
                        hit = hit.with_highlight(field, vec![tags.wrap(query.term())]);
                    }
                }
                hit
            })
            .collect();

        Ok(hits)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
