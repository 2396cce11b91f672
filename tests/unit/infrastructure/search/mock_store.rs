// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;
use sitesearch::domain::search::engine::{Hit, IndexStore, SearchError};
use sitesearch::domain::search::query::SearchQuery;

mock! {
    pub Store {}

    #[async_trait]
    impl IndexStore for Store {
        async fn search(&self, index: &str, query: &SearchQuery) -> Result<Vec<Hit>, SearchError>;
        fn name(&self) -> &'static str;
    }
}

/// 创建带名称的 mock 索引库
pub fn mock_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_name().return_const("mock");
    store
}

pub fn hit(source: Value, field: &str, fragments: &[&str]) -> Hit {
    Hit::new(None, source).with_highlight(field, fragments.iter().map(|f| f.to_string()).collect())
}
