// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResponse;
use crate::domain::search::engine::{SearchStrategy, SearchType};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 搜索策略分发器
///
/// 按实体类型注册策略；可以只执行一种类型，也可以并发执行全部策略
/// 并把各自的结果合并为一个聚合结果。策略之间互不依赖，写入的列表互不相交。
#[derive(Clone, Default)]
pub struct SearchDispatcher {
    strategies: HashMap<SearchType, Arc<dyn SearchStrategy>>,
}

impl SearchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册策略，同类型的旧策略被替换
    pub fn register(&mut self, strategy: Arc<dyn SearchStrategy>) {
        let kind = strategy.kind();
        if self.strategies.insert(kind, strategy).is_some() {
            warn!("Search strategy {} replaced", kind);
        } else {
            info!("Search strategy {} registered", kind);
        }
    }

    /// 根据类型获取策略
    pub fn get(&self, kind: SearchType) -> Option<Arc<dyn SearchStrategy>> {
        self.strategies.get(&kind).cloned()
    }

    /// 所有已注册的类型，按固定顺序排列
    pub fn registered(&self) -> Vec<SearchType> {
        let mut kinds: Vec<SearchType> = self.strategies.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// 只执行指定类型的策略
    pub async fn search_by(&self, kind: SearchType, keyword: &str) -> SearchResponse {
        match self.strategies.get(&kind) {
            Some(strategy) => strategy.search(keyword).await,
            None => {
                warn!("No search strategy registered for {}", kind);
                SearchResponse::default()
            }
        }
    }

    /// 并发执行所有策略并合并结果
    pub async fn search(&self, keyword: &str) -> SearchResponse {
        if keyword.trim().is_empty() {
            debug!("Blank keyword, skipping search");
            return SearchResponse::default();
        }

        let futures = self
            .strategies
            .values()
            .map(|strategy| strategy.search(keyword));

        let mut response = SearchResponse::default();
        for partial in join_all(futures).await {
            response.merge(partial);
        }

        debug!(
            "Keyword {:?} matched {} items across {} strategies",
            keyword,
            response.len(),
            self.strategies.len()
        );
        response
    }
}
