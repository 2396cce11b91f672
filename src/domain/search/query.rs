// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::highlight::HighlightTags;
use std::collections::BTreeSet;

/// 精确词条查询
///
/// 构建后不可变，每次搜索重新构建
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    field: String,
    term: String,
    highlight_fields: BTreeSet<String>,
    pre_tag: String,
    post_tag: String,
}

impl SearchQuery {
    /// 查询字段（keyword 类型，不分词）
    pub fn field(&self) -> &str {
        &self.field
    }

    /// 需要整体匹配的词条
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn highlight_fields(&self) -> &BTreeSet<String> {
        &self.highlight_fields
    }

    pub fn pre_tag(&self) -> &str {
        &self.pre_tag
    }

    pub fn post_tag(&self) -> &str {
        &self.post_tag
    }
}

/// 查询构建器
///
/// 针对固定字段生成单子句精确匹配查询，并对同一字段请求高亮
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    field: &'static str,
    tags: HighlightTags,
}

impl QueryBuilder {
    pub fn new(field: &'static str, tags: HighlightTags) -> Self {
        Self { field, tags }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// 构造查询
    ///
    /// 关键字原样传入，不做长度或字符校验；空关键字应由调用方提前拦截
    pub fn build_query(&self, keyword: &str) -> SearchQuery {
        let mut highlight_fields = BTreeSet::new();
        highlight_fields.insert(self.field.to_string());

        SearchQuery {
            field: self.field.to_string(),
            term: keyword.to_string(),
            highlight_fields,
            pre_tag: self.tags.pre_tag().to_string(),
            post_tag: self.tags.post_tag().to_string(),
        }
    }
}
