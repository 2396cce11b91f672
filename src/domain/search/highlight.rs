// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;

/// 默认高亮前缀
pub const DEFAULT_PRE_TAG: &str = r#"<span style="color:red">"#;

/// 默认高亮后缀
pub const DEFAULT_POST_TAG: &str = "</span>";

/// 高亮标签
///
/// 进程级只读配置，由查询构建器和内存索引库读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTags {
    pre_tag: String,
    post_tag: String,
}

impl HighlightTags {
    pub fn new(pre_tag: impl Into<String>, post_tag: impl Into<String>) -> Self {
        Self {
            pre_tag: pre_tag.into(),
            post_tag: post_tag.into(),
        }
    }

    pub fn pre_tag(&self) -> &str {
        &self.pre_tag
    }

    pub fn post_tag(&self) -> &str {
        &self.post_tag
    }

    /// 用前后缀包裹匹配文本
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.pre_tag, text, self.post_tag)
    }
}

impl Default for HighlightTags {
    fn default() -> Self {
        Self::new(DEFAULT_PRE_TAG, DEFAULT_POST_TAG)
    }
}

impl From<&SearchSettings> for HighlightTags {
    fn from(settings: &SearchSettings) -> Self {
        Self::new(settings.pre_tag.clone(), settings.post_tag.clone())
    }
}
