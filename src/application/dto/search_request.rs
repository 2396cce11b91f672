// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// 搜索请求参数
///
/// 对应查询串 `?keyword=..&type=..`，两者都可缺省
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: Option<String>,
    /// 实体类型，缺省时搜索全部类型
    #[serde(default, rename = "type")]
    pub search_type: Option<String>,
}

impl SearchParams {
    pub fn keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or("")
    }
}
