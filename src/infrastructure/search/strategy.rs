// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{
    ArticleSearchResult, CategorySearchResult, SearchResponse, TagSearchResult,
};
use crate::domain::search::engine::{IndexStore, SearchError, SearchStrategy, SearchType};
use crate::domain::search::highlight::HighlightTags;
use crate::domain::search::mapper::{ResultMapper, SearchDocument};
use crate::domain::search::query::QueryBuilder;
use crate::infrastructure::metrics;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

/// 精确匹配搜索策略
///
/// 各实体的策略只在 `D` 上不同：查询字段、结果类型、聚合位置都由
/// [`SearchDocument`] 提供。
pub struct ExactMatchSearch<D> {
    store: Arc<dyn IndexStore>,
    index: String,
    builder: QueryBuilder,
    _document: PhantomData<fn() -> D>,
}

/// es搜索标签
pub type TagSearch = ExactMatchSearch<TagSearchResult>;
/// es搜索分类
pub type CategorySearch = ExactMatchSearch<CategorySearchResult>;
/// es搜索文章标题
pub type ArticleSearch = ExactMatchSearch<ArticleSearchResult>;

impl<D: SearchDocument> ExactMatchSearch<D> {
    pub fn new(store: Arc<dyn IndexStore>, index: impl Into<String>, tags: HighlightTags) -> Self {
        Self {
            store,
            index: index.into(),
            builder: QueryBuilder::new(D::FIELD, tags),
            _document: PhantomData,
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// 执行搜索，保留错误
    ///
    /// 空白关键字直接返回空列表，不构造查询也不访问索引库
    pub async fn try_search(&self, keyword: &str) -> Result<Vec<D>, SearchError> {
        if keyword.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query = self.builder.build_query(keyword);
        let start = Instant::now();
        let result = ResultMapper::new(self.store.as_ref())
            .execute::<D>(&self.index, &query)
            .await;
        metrics::record_search(D::KIND, start.elapsed());

        result
    }
}

#[async_trait]
impl<D: SearchDocument> SearchStrategy for ExactMatchSearch<D> {
    fn kind(&self) -> SearchType {
        D::KIND
    }

    async fn search(&self, keyword: &str) -> SearchResponse {
        match self.try_search(keyword).await {
            Ok(items) => {
                debug!("Strategy {} returned {} results", D::KIND, items.len());
                D::into_response(items)
            }
            Err(e) => {
                error!(
                    strategy = D::KIND.name(),
                    kind = e.kind(),
                    error = %e,
                    "Search failed, returning empty result"
                );
                metrics::record_failure(D::KIND, &e);
                SearchResponse::default()
            }
        }
    }
}
