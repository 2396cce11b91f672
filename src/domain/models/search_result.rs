// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::SearchType;
use crate::domain::search::mapper::SearchDocument;
use serde::{Deserialize, Serialize};

/// 标签搜索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagSearchResult {
    pub id: i64,
    pub tag_name: String,
}

/// 分类搜索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySearchResult {
    pub id: i64,
    pub category_name: String,
}

/// 文章搜索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSearchResult {
    pub id: i64,
    pub article_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_content: Option<String>,
}

/// 聚合搜索结果
///
/// 每种实体一个列表，缺失的列表为空而不是 null
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub tag_list: Vec<TagSearchResult>,
    #[serde(default)]
    pub category_list: Vec<CategorySearchResult>,
    #[serde(default)]
    pub article_list: Vec<ArticleSearchResult>,
}

impl SearchResponse {
    /// 合并另一个策略的结果
    pub fn merge(&mut self, other: SearchResponse) {
        self.tag_list.extend(other.tag_list);
        self.category_list.extend(other.category_list);
        self.article_list.extend(other.article_list);
    }

    pub fn is_empty(&self) -> bool {
        self.tag_list.is_empty() && self.category_list.is_empty() && self.article_list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tag_list.len() + self.category_list.len() + self.article_list.len()
    }
}

impl SearchDocument for TagSearchResult {
    const KIND: SearchType = SearchType::Tag;
    const FIELD: &'static str = "tagName";

    fn apply_highlight(&mut self, fragment: String) {
        self.tag_name = fragment;
    }

    fn into_response(items: Vec<Self>) -> SearchResponse {
        SearchResponse {
            tag_list: items,
            ..Default::default()
        }
    }
}

impl SearchDocument for CategorySearchResult {
    const KIND: SearchType = SearchType::Category;
    const FIELD: &'static str = "categoryName";

    fn apply_highlight(&mut self, fragment: String) {
        self.category_name = fragment;
    }

    fn into_response(items: Vec<Self>) -> SearchResponse {
        SearchResponse {
            category_list: items,
            ..Default::default()
        }
    }
}

impl SearchDocument for ArticleSearchResult {
    const KIND: SearchType = SearchType::Article;
    const FIELD: &'static str = "articleTitle";

    fn apply_highlight(&mut self, fragment: String) {
        self.article_title = fragment;
    }

    fn into_response(items: Vec<Self>) -> SearchResponse {
        SearchResponse {
            article_list: items,
            ..Default::default()
        }
    }
}
