// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义标签、分类、文章的搜索结果以及聚合搜索结果
pub mod search_result;
