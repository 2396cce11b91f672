// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索策略和索引库接口、高亮配置、查询构建以及结果映射
pub mod engine;
pub mod highlight;
pub mod mapper;
pub mod query;
