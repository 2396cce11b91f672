// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;

use crate::{
    application::dto::search_request::SearchParams,
    domain::{models::search_result::SearchResponse, search::engine::SearchType},
    infrastructure::search::SearchDispatcher,
    presentation::errors::ApiError,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `dispatcher` - 搜索策略分发器
/// * `params` - 查询参数，`type` 缺省时搜索全部已注册类型
///
/// # 返回值
///
/// 聚合搜索结果；索引库故障不会导致错误响应，只会得到空列表
///
/// # 错误
///
/// `type` 不是已知实体类型时返回 400
pub async fn search(
    Extension(dispatcher): Extension<Arc<SearchDispatcher>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = match params.search_type.as_deref() {
        Some(raw) => {
            let kind: SearchType = raw
                .parse()
                .map_err(|_| ApiError::InvalidSearchType(raw.to_string()))?;
            dispatcher.search_by(kind, params.keyword()).await
        }
        None => dispatcher.search(params.keyword()).await,
    };

    Ok(Json(response))
}
