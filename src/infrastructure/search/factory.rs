// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{SearchBackend, SearchSettings, Settings};
use crate::domain::search::engine::{IndexStore, SearchError, SearchStrategy, SearchType};
use crate::domain::search::highlight::HighlightTags;
use crate::infrastructure::search::dispatcher::SearchDispatcher;
use crate::infrastructure::search::elasticsearch::ElasticsearchStore;
use crate::infrastructure::search::memory::InMemoryIndexStore;
use crate::infrastructure::search::strategy::{ArticleSearch, CategorySearch, TagSearch};
use std::sync::Arc;
use tracing::info;

/// 根据配置创建索引库客户端
pub fn create_index_store(settings: &Settings) -> Result<Arc<dyn IndexStore>, SearchError> {
    match settings.search.backend {
        SearchBackend::Elasticsearch => {
            info!("Using Elasticsearch index store at {}", settings.elasticsearch.url);
            Ok(Arc::new(ElasticsearchStore::new(&settings.elasticsearch)?))
        }
        SearchBackend::Memory => {
            info!("Using in-memory index store");
            Ok(Arc::new(InMemoryIndexStore::new()))
        }
    }
}

/// 创建指定类型的搜索策略
pub fn create_strategy(
    kind: SearchType,
    store: Arc<dyn IndexStore>,
    settings: &SearchSettings,
) -> Arc<dyn SearchStrategy> {
    let index = settings.index_for(kind).to_string();
    let tags = HighlightTags::from(settings);
    match kind {
        SearchType::Tag => Arc::new(TagSearch::new(store, index, tags)),
        SearchType::Category => Arc::new(CategorySearch::new(store, index, tags)),
        SearchType::Article => Arc::new(ArticleSearch::new(store, index, tags)),
    }
}

/// 创建包含所有已启用策略的分发器
///
/// 所有策略共享同一个索引库客户端
pub fn create_dispatcher(
    store: Arc<dyn IndexStore>,
    settings: &SearchSettings,
) -> Result<SearchDispatcher, SearchError> {
    let mut dispatcher = SearchDispatcher::new();
    for name in &settings.enabled {
        let kind: SearchType = name
            .parse()
            .map_err(|_| SearchError::Config(format!("unknown search type in search.enabled: {}", name)))?;
        dispatcher.register(create_strategy(kind, store.clone(), settings));
    }

    info!("Search dispatcher ready, registered: {:?}", dispatcher.registered());
    Ok(dispatcher)
}
