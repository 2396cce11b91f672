// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含站内搜索的核心逻辑，包括：
/// - 领域模型（models）：各实体的搜索结果和聚合结果
/// - 搜索（search）：搜索策略与索引库接口、高亮、查询构建和结果映射
///
/// 领域层不依赖任何具体的索引库实现。
pub mod models;
pub mod search;
